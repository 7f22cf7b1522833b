use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("expiry date {expiry} is not after issue date {issue}")]
    InvertedDateRange {
        issue: jiff::civil::Date,
        expiry: jiff::civil::Date,
    },

    #[error("date arithmetic error: {0}")]
    DateArithmetic(#[from] jiff::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
