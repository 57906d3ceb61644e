//! Inventory domain module.
//!
//! The in-memory inventory store (commands, events, state) and the read side
//! computed from it: the filtered/sorted derived view and the aggregate
//! statistics. Deterministic domain logic only (no IO, no storage).

pub mod collate;
pub mod form;
pub mod stats;
pub mod store;
pub mod view;

pub use form::{FormMode, ProductForm};
pub use stats::{InventorySummary, LOW_STOCK_THRESHOLD};
pub use store::{
    AddProduct, AdjustQuantity, InventoryCommand, InventoryEvent, InventoryStore, ProductAdded,
    ProductRemoved, ProductUpdated, QuantityAdjusted, RemoveProduct, SearchTermChanged,
    SetSearchTerm, SetSortKey, SortKeyChanged, UpdateProduct,
};
pub use view::{SortKey, ViewParams};
