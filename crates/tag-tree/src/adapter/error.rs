use thiserror::Error;

use crate::error::ConvertError;

/// Conditions raised at the host boundary. Conversion failures pass through
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("missing object serializer for type {type_name}")]
    MissingSerializer { type_name: String },
    #[error("missing object store for type {type_name}")]
    MissingStore { type_name: String },
    #[error("{registry}: no entry for internal id {id}")]
    UnknownId { registry: String, id: i32 },
    #[error("{registry}: {value} is not registered")]
    Unregistered { registry: String, value: String },
}
