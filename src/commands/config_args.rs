//! Run configuration flags shared by `export` and `validate`.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use order_export::config::{self, ConfigFile, Overrides, RunConfig};

/// Where to fetch from, what to fetch, and where to write.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML configuration file; flags and environment variables take precedence
    #[arg(short, long, value_name = "FILE", env = "ORDER_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the entity store (e.g. https://store.example/api)
    #[arg(long, value_name = "URL", env = "ORDER_EXPORT_BASE_URL")]
    pub base_url: Option<String>,

    /// Comma-separated order ids to export
    #[arg(long, value_name = "IDS", env = "ORDER_EXPORT_IDS", value_delimiter = ',')]
    pub ids: Option<Vec<u64>>,

    /// Number of concurrent fetch workers [default: 8]
    #[arg(short, long, value_name = "N", env = "ORDER_EXPORT_WORKERS")]
    pub workers: Option<usize>,

    /// Output file; must not exist yet [default: condiciones_negocio_orders.csv]
    #[arg(short, long, value_name = "PATH", env = "ORDER_EXPORT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Field delimiter: a single character, or "tab" [default: ,]
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Text placed between "name: value" pairs in product descriptions [default: none]
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub description_separator: Option<String>,
}

impl ConfigArgs {
    /// Loads the configuration file, if any, and applies the flags on top.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => config::from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => ConfigFile::default(),
        };

        let overrides = Overrides {
            base_url: self.base_url.clone(),
            order_ids: self.ids.clone(),
            workers: self.workers,
            output: self.output.clone(),
            delimiter: self.delimiter.clone(),
            description_separator: self.description_separator.clone(),
        };

        Ok(RunConfig::resolve(file, overrides)?)
    }
}
