//! Path-addressable attribute views.
//!
//! An [`AttributeView`] maps flat key segments to [`Value`]s. Nested views are
//! reached through dotted [`DataPath`]s and are created on demand when a path
//! is first written.

mod path;
mod value;

use std::fmt;

use indexmap::IndexMap;

pub use path::{DataPath, SEPARATOR};
pub use value::{AnyValue, SerializableValue, ToView, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeView {
    entries: IndexMap<String, Value>,
}

impl AttributeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Direct entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    // ── Flat keys ─────────────────────────────────────────────────────────

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets `value` at a single key segment. Dots in `key` are kept verbatim.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn get_view(&self, key: &str) -> Option<&AttributeView> {
        self.get(key).and_then(Value::as_view)
    }

    /// Returns the sub-view at `key`, creating it if absent. A non-view value
    /// already stored at `key` is replaced.
    pub fn create_view(&mut self, key: impl Into<String>) -> &mut AttributeView {
        let slot = self
            .entries
            .entry(key.into())
            .or_insert_with(|| Value::View(AttributeView::new()));
        if !matches!(slot, Value::View(_)) {
            *slot = Value::View(AttributeView::new());
        }
        match slot {
            Value::View(view) => view,
            _ => unreachable!("slot holds a view"),
        }
    }

    // ── Composite paths ───────────────────────────────────────────────────

    pub fn get_at(&self, path: &DataPath) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut view = self;
        for segment in parents {
            view = view.get_view(segment)?;
        }
        view.get(last)
    }

    /// Reads a dotted path such as `"b.c"`.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        self.get_at(&DataPath::parse(path))
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.get_path(path).is_some()
    }

    /// Sets `value` at `path`, creating intermediate views as needed.
    /// An empty path leaves the view unchanged.
    pub fn set_at(&mut self, path: &DataPath, value: impl Into<Value>) -> Option<Value> {
        let (last, parents) = path.split_last()?;
        let mut view = self;
        for segment in parents {
            view = view.create_view(segment.as_str());
        }
        view.set(last, value)
    }

    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Option<Value> {
        self.set_at(&DataPath::parse(path), value)
    }

    pub fn remove_at(&mut self, path: &DataPath) -> Option<Value> {
        let (last, parents) = path.split_last()?;
        let mut view = self;
        for segment in parents {
            view = view.get_mut(segment)?.as_view_mut()?;
        }
        view.remove(last)
    }

    pub fn remove_path(&mut self, path: &str) -> Option<Value> {
        self.remove_at(&DataPath::parse(path))
    }

    /// Sub-view at `path`, creating every missing view along the way.
    /// The empty path is the view itself.
    pub fn create_view_at(&mut self, path: &DataPath) -> &mut AttributeView {
        let mut view = self;
        for segment in path.segments() {
            view = view.create_view(segment.as_str());
        }
        view
    }

    /// The flat entry set.
    ///
    /// Shallow: one entry per direct key. Deep: additionally every entry of
    /// every nested view, keyed by its full path.
    pub fn values(&self, deep: bool) -> Vec<(DataPath, &Value)> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_values(&DataPath::default(), deep, &mut out);
        out
    }

    fn collect_values<'a>(
        &'a self,
        prefix: &DataPath,
        deep: bool,
        out: &mut Vec<(DataPath, &'a Value)>,
    ) {
        for (key, value) in &self.entries {
            let path = prefix.then(key.as_str());
            if deep {
                if let Value::View(view) = value {
                    out.push((path.clone(), value));
                    view.collect_values(&path, deep, out);
                    continue;
                }
            }
            out.push((path, value));
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeView {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeView {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for AttributeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}
