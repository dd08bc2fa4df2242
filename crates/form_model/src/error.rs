//! Error types for the form model.

use thiserror::Error;

/// An unrecognized field key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field key '{0}' (expected one of the nine camelCase field names, e.g. courseCode)")]
pub struct FieldKeyParseError(pub String);
