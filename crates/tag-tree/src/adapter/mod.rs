//! Host boundary: registries, object serializers/stores and the glue that
//! moves object state through the converter.
//!
//! The converter itself never sees a registry or a store. Errors raised here
//! (missing serializer, unknown id) belong to the collaborators; conversion
//! errors pass through as [`AdapterError::Convert`].

mod error;
mod registry;
mod store;

pub use error::AdapterError;
pub use registry::{
    resolve_id, resolve_pairs, resolve_value, BlockStateId, IdRegistry, RegistryResolver,
};
pub use store::{ObjectSerializer, ObjectStore, StoreRegistry};

use crate::convert::Converter;
use crate::tag::Tag;
use crate::view::{AttributeView, Value};

/// Key under which [`apply_data_value`] callers conventionally store a legacy
/// data value.
pub const DATA_VALUE_KEY: &str = "dataVal007";

/// Entity fields that identify one particular entity and must not be copied
/// onto another.
pub const NO_COPY_ENTITY_FIELDS: &[&str] = &[
    "UUIDMost",
    "UUIDLeast",
    "WorldUUIDMost",
    "WorldUUIDLeast",
    "PersistentIDMSB",
    "PersistentIDLSB",
];

/// Serializes `object` with its registered serializer and encodes the view.
pub fn snapshot<T: 'static>(
    stores: &StoreRegistry,
    converter: &Converter,
    object: &T,
) -> Result<Tag, AdapterError> {
    let view = stores.serializer::<T>()?.serialize(object);
    log::debug!(
        "snapshot of {} with {} top-level entries",
        std::any::type_name::<T>(),
        view.len()
    );
    Ok(converter.encode_view(&view)?)
}

/// Decodes `tag` (or starts from an empty view when there is none), drops the
/// `strip` fields and hands the view to the object's store.
pub fn apply<T: 'static>(
    stores: &StoreRegistry,
    converter: &Converter,
    object: &mut T,
    tag: Option<&Tag>,
    strip: &[&str],
) -> Result<(), AdapterError> {
    let store = stores.store::<T>()?;
    let mut view = match tag {
        Some(tag) => converter.decode_view(tag)?,
        None => AttributeView::new(),
    };
    for field in strip {
        view.remove(field);
    }
    log::debug!(
        "applying {} entries to {}",
        view.len(),
        std::any::type_name::<T>()
    );
    store.deserialize(object, &view);
    Ok(())
}

/// Hands the object's store a view holding only `data` at `key`.
pub fn apply_data_value<T: 'static>(
    stores: &StoreRegistry,
    object: &mut T,
    key: &str,
    data: impl Into<Value>,
) -> Result<(), AdapterError> {
    let store = stores.store::<T>()?;
    let mut view = AttributeView::new();
    view.set(key, data);
    store.deserialize(object, &view);
    Ok(())
}
