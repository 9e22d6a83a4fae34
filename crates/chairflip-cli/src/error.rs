use chairflip::core::strain::table::StrainTableLoadError;
use chairflip::core::sugars::resolver::TemplateError;
use chairflip::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    ChairflipCore(#[from] EngineError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    StrainTable(#[from] StrainTableLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
