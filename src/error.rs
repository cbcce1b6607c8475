//! Error types for the typegen core

use thiserror::Error;

use crate::schema::Identifier;

/// Result type for typegen operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Typegen core errors
///
/// All variants are deterministic and non-retryable: each one is fixed only
/// by correcting the input schema set.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid identifier: {0:?} has no leading code point")]
    InvalidIdentifier(String),

    #[error("Duplicate declaration of {identifier}: first declared in {existing_file}, redeclared in {duplicate_file}")]
    DuplicateType {
        identifier: Identifier,
        existing_file: String,
        duplicate_file: String,
    },

    #[error("Unresolved type reference: {identifier}")]
    UnresolvedReference { identifier: Identifier },
}
