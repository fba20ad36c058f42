use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateMapError {
    #[error("Warehouse Connection Error: {0}")]
    Connection(String),

    #[error("Warehouse Query Error: {0}")]
    Query(String),

    #[error("Unexpected Result Shape: {0}")]
    Shape(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Selection Error: {0}")]
    Selection(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template Error: {0}")]
    Template(#[from] minijinja::Error),
}

impl From<sqlx::Error> for RateMapError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => RateMapError::Connection(e.to_string()),
            // Rejections (syntax, permissions, missing relations) and decode failures.
            other => RateMapError::Query(other.to_string()),
        }
    }
}

pub type RmResult<T> = Result<T, RateMapError>;
