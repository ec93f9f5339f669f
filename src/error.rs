//! Error types for catalog construction and backend resolution.
//!
//! Only build-time problems are errors. A request for a direction that no
//! chain of models covers is a normal outcome and is signalled with an empty
//! chain, never with a `RoutingError`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Model names should be unique: '{0}' is declared more than once")]
    DuplicateModel(String),

    #[error("Models '{existing}' and '{duplicate}' both translate {source_lang}->{target_lang}")]
    DuplicateDirection {
        existing: String,
        duplicate: String,
        source_lang: String,
        target_lang: String,
    },

    #[error("No models configured")]
    EmptyCatalog,

    #[error("Invalid model descriptor '{model}': {reason}")]
    InvalidModel { model: String, reason: String },

    #[error("Backend template for model '{model}' references unknown setting '{key}'")]
    UnresolvedPlaceholder { model: String, key: String },
}

pub type Result<T> = std::result::Result<T, RoutingError>;
