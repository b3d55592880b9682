//! Converter configuration.

use serde::{Deserialize, Serialize};

/// Default nesting limit for both directions.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How the encoder treats a sequence whose elements convert to different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKindPolicy {
    /// Fail with `HeterogeneousList`.
    #[default]
    Strict,
    /// Declare the first element's kind and keep going.
    Permissive,
}

/// Which subtree the decoder descends into for a nested compound entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedCompoundMode {
    /// Decode the entry's own compound into the new sub-view.
    #[default]
    EntryValue,
    /// Re-walk the enclosing compound into the new sub-view. Any nested
    /// compound makes this recurse until the depth limit is hit.
    OuterTag,
}

/// Options shared by the encoder and decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    pub list_kinds: ListKindPolicy,
    pub nested_compounds: NestedCompoundMode,
    pub max_depth: usize,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            list_kinds: ListKindPolicy::default(),
            nested_compounds: NestedCompoundMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConverterOptions {
    /// Reads options from a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
