//! Registry resolvers: domain identifiers to persisted integer ids and back.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;

use super::AdapterError;

pub trait RegistryResolver<T> {
    /// Name used in diagnostics, e.g. `"item"` or `"biome"`.
    fn registry_name(&self) -> &str;

    fn internal_id(&self, value: &T) -> Option<i32>;

    fn by_internal_id(&self, id: i32) -> Option<T>;
}

/// Resolves `value` to its id, failing if it was never registered.
pub fn resolve_id<T, R>(registry: &R, value: &T) -> Result<i32, AdapterError>
where
    T: Debug,
    R: RegistryResolver<T> + ?Sized,
{
    registry
        .internal_id(value)
        .ok_or_else(|| AdapterError::Unregistered {
            registry: registry.registry_name().to_owned(),
            value: format!("{value:?}"),
        })
}

/// Resolves an id back to its value, failing on unknown ids.
pub fn resolve_value<T, R>(registry: &R, id: i32) -> Result<T, AdapterError>
where
    R: RegistryResolver<T> + ?Sized,
{
    registry
        .by_internal_id(id)
        .ok_or_else(|| AdapterError::UnknownId {
            registry: registry.registry_name().to_owned(),
            id,
        })
}

/// Resolves `(id, payload)` pairs, e.g. enchantment id and level. The first
/// unknown id fails the whole batch.
pub fn resolve_pairs<T, P, R>(
    registry: &R,
    pairs: &[(i32, P)],
) -> Result<Vec<(T, P)>, AdapterError>
where
    P: Clone,
    R: RegistryResolver<T> + ?Sized,
{
    pairs
        .iter()
        .map(|(id, payload)| Ok((resolve_value(registry, *id)?, payload.clone())))
        .collect()
}

/// In-memory bidirectional registry.
#[derive(Debug, Clone)]
pub struct IdRegistry<T> {
    name: String,
    ids: IndexMap<T, i32>,
    values: HashMap<i32, T>,
}

impl<T: Eq + Hash + Clone> IdRegistry<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ids: IndexMap::new(),
            values: HashMap::new(),
        }
    }

    /// Maps `value` to `id`, dropping any earlier mapping of either side.
    pub fn register(&mut self, value: T, id: i32) {
        if let Some(old_id) = self.ids.shift_remove(&value) {
            self.values.remove(&old_id);
        }
        if let Some(old_value) = self.values.remove(&id) {
            self.ids.shift_remove(&old_value);
        }
        self.ids.insert(value.clone(), id);
        self.values.insert(id, value);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<(T, i32)> for IdRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (T, i32)>>(iter: I) -> Self {
        let mut registry = IdRegistry::new("registry");
        for (value, id) in iter {
            registry.register(value, id);
        }
        registry
    }
}

impl<T: Eq + Hash + Clone> RegistryResolver<T> for IdRegistry<T> {
    fn registry_name(&self) -> &str {
        &self.name
    }

    fn internal_id(&self, value: &T) -> Option<i32> {
        self.ids.get(value).copied()
    }

    fn by_internal_id(&self, id: i32) -> Option<T> {
        self.values.get(&id).cloned()
    }
}

/// A block state id packed as `id << 4 | data`, with 4 bits of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockStateId {
    pub id: i32,
    pub data: u8,
}

impl BlockStateId {
    pub fn new(id: i32, data: u8) -> Self {
        Self {
            id,
            data: data & 0xf,
        }
    }

    pub fn pack(self) -> i32 {
        (self.id << 4) | i32::from(self.data & 0xf)
    }

    pub fn unpack(state: i32) -> Self {
        Self {
            id: state >> 4,
            data: (state & 0xf) as u8,
        }
    }
}
