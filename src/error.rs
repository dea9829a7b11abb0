//! Error types for igcop

use thiserror::Error;

/// Result type alias for igcop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while decoding or describing catalog asset records
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Payload has no `_type` discriminator. Pass --type to pick an asset type.")]
    MissingTypeTag,

    #[error("Type mismatch: expected `{expected}`, payload is `{found}`")]
    TypeMismatch { expected: String, found: String },

    #[error("Unknown asset type: {0}. Run `igcop types` to list known types.")]
    UnknownType(String),

    #[error("Type `{type_id}` has no property `{property}`")]
    UnknownProperty { type_id: String, property: String },

    #[error("Property `{property}` of `{type_id}` is not a paged relationship")]
    NotPaged { type_id: String, property: String },

    #[error("Unrecognized fields: {}", .0.join(", "))]
    UnrecognizedFields(Vec<String>),

    #[error("Invalid asset payload: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Decode(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
