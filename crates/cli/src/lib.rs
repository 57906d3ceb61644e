//! `stockroom-cli`
//!
//! Replays a script of UI actions (search, sort, add, update, remove,
//! adjust) against an in-memory inventory and renders the resulting view.

pub mod config;
pub mod render;
pub mod script;

pub use config::{CliConfig, OutputFormat};
pub use script::{ScriptAction, ScriptError, Session};
