//! Derived view: the filtered and sorted projection shown to the user.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::DomainError;
use stockroom_products::Product;

use crate::collate::locale_cmp;

/// Sort order selectable by the user. Always ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Quantity,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Quantity => "quantity",
        }
    }

    /// Comparator for this key.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => locale_cmp(a.name(), b.name()),
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::Quantity => a.quantity().cmp(&b.quantity()),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "quantity" => Ok(SortKey::Quantity),
            other => Err(DomainError::validation(format!(
                "sort key must be one of: name, price, quantity (got {other:?})"
            ))),
        }
    }
}

/// Current search term and sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    pub search_term: String,
    pub sort_key: SortKey,
}

impl ViewParams {
    pub fn new(search_term: impl Into<String>, sort_key: SortKey) -> Self {
        Self {
            search_term: search_term.into(),
            sort_key,
        }
    }
}

/// Case-insensitive substring match on name, category or description.
///
/// `needle` must already be lowercase. An empty needle matches everything.
pub fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name().to_lowercase().contains(needle)
        || product.category().as_str().to_lowercase().contains(needle)
        || product.description().to_lowercase().contains(needle)
}

/// Filter then stable-sort `products` according to `params`.
///
/// Returns fresh clones; the input slice is never reordered.
pub fn derive_view(products: &[Product], params: &ViewParams) -> Vec<Product> {
    let needle = params.search_term.to_lowercase();

    let mut view: Vec<Product> = products
        .iter()
        .filter(|p| matches_search(p, &needle))
        .cloned()
        .collect();

    // `sort_by` is stable: ties keep collection order.
    view.sort_by(|a, b| params.sort_key.compare(a, b));
    view
}
