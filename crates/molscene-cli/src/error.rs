use molscene::core::export::csv::ExportError;
use molscene::core::io::toml_format::TomlFileError;
use molscene::core::models::error::ModelError;
use molscene::engine::error::SceneError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Failed to process model file '{path}': {source}", path = path.display())]
    ModelFile {
        path: PathBuf,
        #[source]
        source: TomlFileError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
