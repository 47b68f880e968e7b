use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to start async runtime")]
    Runtime(#[source] std::io::Error),

    #[error("failed to connect to database")]
    Connect(#[source] sqlx::Error),

    #[error("failed to query schema '{schema}'")]
    Query {
        schema: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema snapshot '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
