use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Duplicated keys ({key}) are provided for {field}.")]
    DuplicateKey { field: &'static str, key: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown record type: {name}")]
    UnknownRecordType { name: String },

    #[error("{count} enumeration value(s) outside the documented sets: {details}")]
    UnknownEnumValues { count: usize, details: String },

    #[error("Transport error in {operation}: {message}")]
    TransportError { operation: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ModelError {
    /// Errors raised locally while building a record, as opposed to wire or tooling failures.
    pub fn is_construction_error(&self) -> bool {
        matches!(self, ModelError::DuplicateKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
