//! Type-preserving conversion between attribute views and named-tag trees.
//!
//! [`encode`] turns a [`Value`] (typically a [`Value::View`]) into a [`Tag`];
//! [`decode`] turns a [`Tag`] back into a value, with compounds becoming
//! [`AttributeView`]s. Both are pure recursive walks. [`Converter`] carries
//! the [`ConverterOptions`] that pick list validation and the nested-compound
//! traversal.
//!
//! The [`adapter`] module holds the seams to host registries and object
//! serializers/stores that feed views into and out of the converter.

mod convert;
mod decode;
mod encode;
mod error;
mod options;
mod tag;

pub mod adapter;
pub mod view;

pub use convert::{decode, decode_view, encode, encode_view, Converter};
pub use decode::Decoder;
pub use encode::Encoder;
pub use error::ConvertError;
pub use options::{ConverterOptions, ListKindPolicy, NestedCompoundMode, DEFAULT_MAX_DEPTH};
pub use tag::{CompoundMap, Tag, TagKind};
pub use view::{AttributeView, DataPath, ToView, Value};
