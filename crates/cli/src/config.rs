use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use stockroom_observability::LogFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Replay inventory UI actions and print the resulting product view.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about, long_about = None)]
pub struct CliConfig {
    /// Script of JSON-lines actions. Reads stdin when omitted or "-".
    pub script: Option<PathBuf>,

    /// Start from an empty inventory instead of the demo catalog.
    #[arg(long, default_value_t = false)]
    pub empty: bool,

    /// Output format.
    #[arg(long, value_enum, env = "STOCKROOM_FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Emit logs as JSON lines on stderr. Filtering follows RUST_LOG.
    #[arg(long, env = "STOCKROOM_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }

    /// Script path, `None` meaning stdin.
    pub fn script_path(&self) -> Option<&PathBuf> {
        self.script.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
