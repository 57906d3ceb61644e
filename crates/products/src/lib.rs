//! Products domain module.
//!
//! The product record, its category and the draft submitted by a create form.
//! Pure data + validation (no IO, no storage).

pub mod catalog;
pub mod product;

pub use catalog::sample_catalog;
pub use product::{Category, Product, ProductDraft};
