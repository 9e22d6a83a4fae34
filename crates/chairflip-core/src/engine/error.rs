use thiserror::Error;

use super::config::ConfigError;
use crate::core::strain::table::StrainTableLoadError;
use crate::core::sugars::resolver::TemplateError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid analysis configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load strain table: {source}")]
    StrainTable {
        #[from]
        source: StrainTableLoadError,
    },

    #[error("Sugar template error: {source}")]
    Template {
        #[from]
        source: TemplateError,
    },
}
