use thiserror::Error;

use crate::tag::TagKind;

/// Failure of an encode or decode pass. No partial tree is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("unsupported value type: {type_name}")]
    UnsupportedValue { type_name: String },
    #[error("heterogeneous list: element {index} is {found}, list declares {expected}")]
    HeterogeneousList {
        index: usize,
        expected: TagKind,
        found: TagKind,
    },
    #[error("nesting exceeds depth limit of {limit}")]
    DepthExceeded { limit: usize },
    #[error("expected a compound tag, found {found}")]
    NotACompound { found: TagKind },
}

impl ConvertError {
    pub(crate) fn unsupported(type_name: &str) -> Self {
        ConvertError::UnsupportedValue {
            type_name: type_name.to_owned(),
        }
    }
}
