//! Product form session: decides whether a submission creates or edits.

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_products::{Product, ProductDraft};

use crate::store::InventoryStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    /// Editing a copy of the product as it was when the form opened.
    Editing(Product),
}

/// State of the add/edit product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    mode: FormMode,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Values to prefill the form with: the edited product's fields, if any.
    pub fn prefill(&self) -> Option<ProductDraft> {
        match &self.mode {
            FormMode::Editing(product) => Some(product.to_draft()),
            FormMode::Closed | FormMode::Creating => None,
        }
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
    }

    pub fn open_edit(&mut self, store: &InventoryStore, id: ProductId) -> DomainResult<()> {
        let product = store.get(id).ok_or_else(DomainError::not_found)?;
        self.mode = FormMode::Editing(product.clone());
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Closed;
    }

    /// Validate `fields` and hand them to the store.
    ///
    /// Creating adds a new product; editing replaces the product the form was
    /// opened for (silently ignored by the store if it was deleted meanwhile).
    /// The form closes on success and stays open on a validation error.
    pub fn submit(
        &mut self,
        store: &mut InventoryStore,
        fields: ProductDraft,
    ) -> DomainResult<ProductId> {
        fields.validate()?;

        let id = match &self.mode {
            FormMode::Closed => return Err(DomainError::validation("no product form is open")),
            FormMode::Creating => store.add_product(fields)?,
            FormMode::Editing(original) => {
                let id = original.id_typed();
                store.update_product(Product::new(id, fields, Utc::now()));
                id
            }
        };

        tracing::debug!(product_id = %id, "product form submitted");
        self.mode = FormMode::Closed;
        Ok(id)
    }
}
