use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::error::ModelError;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("Bond {bond} references atom {index}, but the scene holds {atom_count} atoms")]
    DanglingBond {
        bond: usize,
        index: i32,
        atom_count: usize,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid scene configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid model: {source}")]
    Model {
        #[from]
        source: ModelError,
    },
}
