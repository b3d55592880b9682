//! Object serializers and stores, looked up by exact type.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use super::AdapterError;
use crate::view::AttributeView;

/// Produces the canonical view of an object.
pub trait ObjectSerializer<T> {
    fn serialize(&self, object: &T) -> AttributeView;
}

/// Populates or mutates an existing object from a view.
pub trait ObjectStore<T> {
    fn deserialize(&self, object: &mut T, view: &AttributeView);
}

impl<T, F> ObjectSerializer<T> for F
where
    F: Fn(&T) -> AttributeView,
{
    fn serialize(&self, object: &T) -> AttributeView {
        self(object)
    }
}

impl<T, F> ObjectStore<T> for F
where
    F: Fn(&mut T, &AttributeView),
{
    fn deserialize(&self, object: &mut T, view: &AttributeView) {
        self(object, view)
    }
}

/// Serializers and stores keyed by the [`TypeId`] of the object they handle.
#[derive(Default)]
pub struct StoreRegistry {
    serializers: HashMap<TypeId, Box<dyn Any>>,
    stores: HashMap<TypeId, Box<dyn Any>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_serializer<T: 'static>(
        &mut self,
        serializer: impl ObjectSerializer<T> + 'static,
    ) {
        let boxed: Box<dyn ObjectSerializer<T>> = Box::new(serializer);
        self.serializers.insert(TypeId::of::<T>(), Box::new(boxed));
    }

    pub fn register_store<T: 'static>(&mut self, store: impl ObjectStore<T> + 'static) {
        let boxed: Box<dyn ObjectStore<T>> = Box::new(store);
        self.stores.insert(TypeId::of::<T>(), Box::new(boxed));
    }

    pub fn serializer<T: 'static>(&self) -> Result<&dyn ObjectSerializer<T>, AdapterError> {
        self.serializers
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Box<dyn ObjectSerializer<T>>>())
            .map(|boxed| boxed.as_ref())
            .ok_or_else(|| AdapterError::MissingSerializer {
                type_name: type_name::<T>().to_owned(),
            })
    }

    pub fn store<T: 'static>(&self) -> Result<&dyn ObjectStore<T>, AdapterError> {
        self.stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Box<dyn ObjectStore<T>>>())
            .map(|boxed| boxed.as_ref())
            .ok_or_else(|| AdapterError::MissingStore {
                type_name: type_name::<T>().to_owned(),
            })
    }
}
