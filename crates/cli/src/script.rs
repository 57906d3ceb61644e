//! JSON-lines action scripts and the session that replays them.

use serde::Deserialize;
use thiserror::Error;

use stockroom_core::{AggregateRoot, DomainError, ProductId};
use stockroom_inventory::{InventoryStore, ProductForm, SortKey};
use stockroom_products::ProductDraft;

/// One UI action, as written in a script line.
///
/// ```text
/// {"action": "search", "term": "usb"}
/// {"action": "sort", "key": "price"}
/// {"action": "add", "name": "HDMI Cable", "category": "Accessories", "price": "12.50", "quantity": 30}
/// {"action": "update", "id": 2, "name": "Mouse", "category": "Accessories", "price": 25, "quantity": 4}
/// {"action": "remove", "id": 3}
/// {"action": "adjust", "id": 4, "delta": -1}
/// ```
///
/// Ids may also be written as numeric strings (`"id": "3"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScriptAction {
    Search {
        term: String,
    },
    Sort {
        key: SortKey,
    },
    Add(ProductDraft),
    Update {
        id: ProductId,
        #[serde(flatten)]
        fields: ProductDraft,
    },
    Remove {
        id: ProductId,
    },
    Adjust {
        id: ProductId,
        delta: i64,
    },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: invalid action: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Rejected { line: usize, source: DomainError },
}

/// Parse a script into `(line number, action)` pairs.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers are
/// 1-based.
pub fn parse_script(source: &str) -> Result<Vec<(usize, ScriptAction)>, ScriptError> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str(text)
                .map(|action| (line, action))
                .map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}

/// A store plus the product form the actions are routed through.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: InventoryStore,
    form: ProductForm,
}

impl Session {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store,
            form: ProductForm::new(),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// Parse and apply a whole script. Nothing is applied if any line fails
    /// to parse; a rejected action stops the replay at that line.
    ///
    /// Returns the number of actions applied.
    pub fn run(&mut self, source: &str) -> Result<usize, ScriptError> {
        let actions = parse_script(source)?;
        let count = actions.len();
        for (line, action) in actions {
            self.apply(action)
                .map_err(|source| ScriptError::Rejected { line, source })?;
        }
        Ok(count)
    }

    pub fn apply(&mut self, action: ScriptAction) -> Result<(), DomainError> {
        match action {
            ScriptAction::Search { term } => self.store.set_search_term(term),
            ScriptAction::Sort { key } => self.store.set_sort_key(key),
            ScriptAction::Add(fields) => {
                self.form.open_create();
                self.submit(fields)?;
            }
            ScriptAction::Update { id, fields } => match self.form.open_edit(&self.store, id) {
                Ok(()) => self.submit(fields)?,
                Err(DomainError::NotFound) => {
                    tracing::debug!(product_id = %id, "update ignored: no such product");
                }
                Err(e) => return Err(e),
            },
            ScriptAction::Remove { id } => self.store.remove_product(id),
            ScriptAction::Adjust { id, delta } => self.store.adjust_quantity(id, delta),
        }
        Ok(())
    }

    fn submit(&mut self, fields: ProductDraft) -> Result<(), DomainError> {
        match self.form.submit(&mut self.store, fields) {
            Ok(id) => {
                tracing::info!(product_id = %id, "product saved");
                Ok(())
            }
            Err(e) => {
                self.form.cancel();
                Err(e)
            }
        }
    }
}
