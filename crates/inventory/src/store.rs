use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, AggregateRoot, DomainError, DomainResult, Money, ProductId};
use stockroom_events::{Event, EventEnvelope};
use stockroom_products::{Product, ProductDraft};

use crate::stats::{self, InventorySummary};
use crate::view::{self, SortKey, ViewParams};

/// Aggregate root: the in-memory inventory.
///
/// Owns the product collection and the view parameters. All state changes go
/// through a command: `handle` decides which events follow, `apply` mutates.
/// A command aimed at an id that is not in the collection yields no events,
/// which makes it a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    products: Vec<Product>,
    view: ViewParams,
    version: u64,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store. A later product with an already-seen id replaces the
    /// earlier one in place.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut seeded: Vec<Product> = Vec::new();
        for product in products {
            match seeded.iter().position(|p| p.id_typed() == product.id_typed()) {
                Some(index) => seeded[index] = product,
                None => seeded.push(product),
            }
        }
        Self {
            products: seeded,
            ..Self::default()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn view_params(&self) -> &ViewParams {
        &self.view
    }

    pub fn search_term(&self) -> &str {
        &self.view.search_term
    }

    pub fn sort_key(&self) -> SortKey {
        self.view.sort_key
    }

    /// Id the next `add_product` will assign: `max(existing, 0) + 1`.
    pub fn next_id(&self) -> DomainResult<ProductId> {
        match self.products.iter().map(Product::id_typed).max() {
            Some(max) => max.next(),
            None => Ok(ProductId::FIRST),
        }
    }

    // --- read side -------------------------------------------------------

    /// Filtered + sorted projection for display, recomputed on every call.
    pub fn filtered_products(&self) -> Vec<Product> {
        view::derive_view(&self.products, &self.view)
    }

    /// Value of the whole collection, independent of the current search.
    pub fn total_inventory_value(&self) -> Money {
        stats::total_inventory_value(&self.products)
    }

    pub fn low_stock_products(&self) -> Vec<Product> {
        stats::low_stock_products(&self.products)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::compute(&self.products)
    }

    // --- write side ------------------------------------------------------

    /// Handle a command and apply the resulting events.
    ///
    /// Returns the applied events, each with its sequence number. An empty
    /// list means the command was a no-op.
    pub fn execute(
        &mut self,
        command: InventoryCommand,
    ) -> DomainResult<Vec<EventEnvelope<InventoryEvent>>> {
        let events = self.handle(&command)?;
        Ok(self.commit(events))
    }

    /// Create a product from a form draft. Returns the assigned id.
    pub fn add_product(&mut self, draft: ProductDraft) -> DomainResult<ProductId> {
        let id = self.next_id()?;
        self.execute(InventoryCommand::AddProduct(AddProduct {
            draft,
            occurred_at: Utc::now(),
        }))?;
        Ok(id)
    }

    /// Replace the product with the same id. No-op if it does not exist.
    pub fn update_product(&mut self, product: Product) {
        let events = self.decide_update(&UpdateProduct {
            product,
            occurred_at: Utc::now(),
        });
        self.commit(events);
    }

    /// Delete a product. No-op if it does not exist.
    pub fn remove_product(&mut self, product_id: ProductId) {
        let events = self.decide_remove(&RemoveProduct {
            product_id,
            occurred_at: Utc::now(),
        });
        self.commit(events);
    }

    /// Add `delta` to the quantity, clamping at zero. No-op if the product
    /// does not exist.
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i64) {
        let events = self.decide_adjust(&AdjustQuantity {
            product_id,
            delta,
            occurred_at: Utc::now(),
        });
        self.commit(events);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let events = self.decide_search(&SetSearchTerm {
            term: term.into(),
            occurred_at: Utc::now(),
        });
        self.commit(events);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        let events = self.decide_sort(&SetSortKey {
            sort_key,
            occurred_at: Utc::now(),
        });
        self.commit(events);
    }

    fn commit(&mut self, events: Vec<InventoryEvent>) -> Vec<EventEnvelope<InventoryEvent>> {
        events
            .into_iter()
            .map(|event| {
                self.apply(&event);
                tracing::debug!(
                    event_type = event.event_type(),
                    event_version = event.version(),
                    sequence = self.version,
                    "inventory event applied"
                );
                EventEnvelope::wrap(self.version, event)
            })
            .collect()
    }
}

impl AggregateRoot for InventoryStore {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub draft: ProductDraft,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdjustQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustQuantity {
    pub product_id: ProductId,
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetSearchTerm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSearchTerm {
    pub term: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetSortKey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSortKey {
    pub sort_key: SortKey,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddProduct(AddProduct),
    UpdateProduct(UpdateProduct),
    RemoveProduct(RemoveProduct),
    AdjustQuantity(AdjustQuantity),
    SetSearchTerm(SetSearchTerm),
    SetSortKey(SetSortKey),
}

/// Event: ProductAdded. Carries the product as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product: Product,
}

/// Event: ProductUpdated. Carries the replacement, `last_updated` already set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product: Product,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityAdjusted. `quantity` is the clamped result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityAdjusted {
    pub product_id: ProductId,
    pub delta: i64,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SearchTermChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTermChanged {
    pub term: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SortKeyChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKeyChanged {
    pub sort_key: SortKey,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductAdded(ProductAdded),
    ProductUpdated(ProductUpdated),
    ProductRemoved(ProductRemoved),
    QuantityAdjusted(QuantityAdjusted),
    SearchTermChanged(SearchTermChanged),
    SortKeyChanged(SortKeyChanged),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::ProductUpdated(_) => "inventory.product.updated",
            InventoryEvent::ProductRemoved(_) => "inventory.product.removed",
            InventoryEvent::QuantityAdjusted(_) => "inventory.product.quantity_adjusted",
            InventoryEvent::SearchTermChanged(_) => "inventory.view.search_changed",
            InventoryEvent::SortKeyChanged(_) => "inventory.view.sort_changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductAdded(e) => e.product.last_updated(),
            InventoryEvent::ProductUpdated(e) => e.product.last_updated(),
            InventoryEvent::ProductRemoved(e) => e.occurred_at,
            InventoryEvent::QuantityAdjusted(e) => e.occurred_at,
            InventoryEvent::SearchTermChanged(e) => e.occurred_at,
            InventoryEvent::SortKeyChanged(e) => e.occurred_at,
        }
    }
}

impl Aggregate for InventoryStore {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ProductAdded(e) => {
                self.products.push(e.product.clone());
            }
            InventoryEvent::ProductUpdated(e) => {
                if let Some(slot) = self.slot_mut(e.product.id_typed()) {
                    *slot = e.product.clone();
                }
            }
            InventoryEvent::ProductRemoved(e) => {
                self.products.retain(|p| p.id_typed() != e.product_id);
            }
            InventoryEvent::QuantityAdjusted(e) => {
                if let Some(slot) = self.slot_mut(e.product_id) {
                    *slot = slot.with_quantity(e.quantity, e.occurred_at);
                }
            }
            InventoryEvent::SearchTermChanged(e) => {
                self.view.search_term = e.term.clone();
            }
            InventoryEvent::SortKeyChanged(e) => {
                self.view.sort_key = e.sort_key;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddProduct(cmd) => self.decide_add(cmd),
            InventoryCommand::UpdateProduct(cmd) => Ok(self.decide_update(cmd)),
            InventoryCommand::RemoveProduct(cmd) => Ok(self.decide_remove(cmd)),
            InventoryCommand::AdjustQuantity(cmd) => Ok(self.decide_adjust(cmd)),
            InventoryCommand::SetSearchTerm(cmd) => Ok(self.decide_search(cmd)),
            InventoryCommand::SetSortKey(cmd) => Ok(self.decide_sort(cmd)),
        }
    }
}

impl InventoryStore {
    fn slot_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id_typed() == id)
    }

    fn decide_add(&self, cmd: &AddProduct) -> DomainResult<Vec<InventoryEvent>> {
        let id = self.next_id()?;
        Ok(vec![InventoryEvent::ProductAdded(ProductAdded {
            product: Product::new(id, cmd.draft.clone(), cmd.occurred_at),
        })])
    }

    fn decide_update(&self, cmd: &UpdateProduct) -> Vec<InventoryEvent> {
        let id = cmd.product.id_typed();
        if self.get(id).is_none() {
            tracing::debug!(product_id = %id, "update ignored: no such product");
            return vec![];
        }
        vec![InventoryEvent::ProductUpdated(ProductUpdated {
            product: cmd.product.clone().touched(cmd.occurred_at),
        })]
    }

    fn decide_remove(&self, cmd: &RemoveProduct) -> Vec<InventoryEvent> {
        if self.get(cmd.product_id).is_none() {
            tracing::debug!(product_id = %cmd.product_id, "remove ignored: no such product");
            return vec![];
        }
        vec![InventoryEvent::ProductRemoved(ProductRemoved {
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn decide_adjust(&self, cmd: &AdjustQuantity) -> Vec<InventoryEvent> {
        let Some(product) = self.get(cmd.product_id) else {
            tracing::debug!(product_id = %cmd.product_id, "adjust ignored: no such product");
            return vec![];
        };

        let quantity = i64::from(product.quantity())
            .saturating_add(cmd.delta)
            .clamp(0, i64::from(u32::MAX));

        vec![InventoryEvent::QuantityAdjusted(QuantityAdjusted {
            product_id: cmd.product_id,
            delta: cmd.delta,
            // In range after the clamp above.
            quantity: u32::try_from(quantity).unwrap_or(u32::MAX),
            occurred_at: cmd.occurred_at,
        })]
    }

    fn decide_search(&self, cmd: &SetSearchTerm) -> Vec<InventoryEvent> {
        if self.view.search_term == cmd.term {
            return vec![];
        }
        vec![InventoryEvent::SearchTermChanged(SearchTermChanged {
            term: cmd.term.clone(),
            occurred_at: cmd.occurred_at,
        })]
    }

    fn decide_sort(&self, cmd: &SetSortKey) -> Vec<InventoryEvent> {
        if self.view.sort_key == cmd.sort_key {
            return vec![];
        }
        vec![InventoryEvent::SortKeyChanged(SortKeyChanged {
            sort_key: cmd.sort_key,
            occurred_at: cmd.occurred_at,
        })]
    }
}
