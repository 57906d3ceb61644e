use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// Product category (fixed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Electronics,
    Accessories,
    Software,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Electronics,
        Category::Accessories,
        Category::Software,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::Software => "Software",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "category must be one of: Electronics, Accessories, Software (got {wanted:?})"
                ))
            })
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fields of a product as entered in a form (no id, no timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
}

impl ProductDraft {
    /// Input-boundary checks. Negative price/quantity are not representable,
    /// so only the free-text fields need looking at.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

/// A single inventory record.
///
/// Immutable value: every change produces a new `Product` through one of the
/// `with_*` / `touched` builders. `in_stock` is always derived from
/// `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Money,
    quantity: u32,
    description: String,
    last_updated: DateTime<Utc>,
}

impl Product {
    pub fn new(id: ProductId, draft: ProductDraft, last_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            quantity: draft.quantity,
            description: draft.description,
            last_updated,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// `price × quantity`.
    pub fn stock_value(&self) -> Money {
        self.price.times(self.quantity)
    }

    /// The editable fields, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            description: self.description.clone(),
        }
    }

    pub fn with_quantity(&self, quantity: u32, at: DateTime<Utc>) -> Self {
        Self {
            quantity,
            last_updated: at,
            ..self.clone()
        }
    }

    pub fn touched(self, at: DateTime<Utc>) -> Self {
        Self {
            last_updated: at,
            ..self
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wire shape of a product: flat camelCase fields plus the derived `inStock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: Money,
    quantity: u32,
    #[serde(default)]
    description: String,
    // Ignored on input; recomputed from quantity.
    #[serde(default)]
    in_stock: bool,
    last_updated: DateTime<Utc>,
}

impl From<Product> for ProductRecord {
    fn from(p: Product) -> Self {
        let in_stock = p.in_stock();
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            price: p.price,
            quantity: p.quantity,
            description: p.description,
            in_stock,
            last_updated: p.last_updated,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            category: r.category,
            price: r.price,
            quantity: r.quantity,
            description: r.description,
            last_updated: r.last_updated,
        }
    }
}
