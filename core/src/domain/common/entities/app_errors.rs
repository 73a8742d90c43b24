use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid range: low {low} is not below or equal to high {high}")]
    InvalidRange { low: f64, high: f64 },

    #[error("Dataset error: {0}")]
    DatasetError(String),

    #[error("Invalid input")]
    Invalid,

    #[error("Missing API credential")]
    MissingCredential,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed JSON completion ({message}): {raw}")]
    MalformedCompletion { raw: String, message: String },

    #[error("Internal server error")]
    InternalServerError,
}
