use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid tables: {0}")]
    InvalidTables(String),
    #[error("Missing fixture: {0}")]
    MissingFixture(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

/// Rejects NaN, infinities and negative values before they reach the arithmetic.
pub fn ensure_metric(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(DashError::InvalidInput(format!("{name} is not finite")));
    }
    if value < 0.0 {
        return Err(DashError::InvalidInput(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}
