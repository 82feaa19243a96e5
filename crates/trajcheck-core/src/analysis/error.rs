use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("system has no bond topology; disable bond checking or supply bond information")]
    MissingTopology,

    #[error("configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("internal logic error: {0}")]
    Internal(String),
}
