//! Values stored in an [`AttributeView`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::AttributeView;

/// Capability of a type that can describe itself as an [`AttributeView`].
///
/// Implementors are encodable through [`Value::Serializable`] without any
/// change to the encoder.
pub trait ToView {
    fn to_view(&self) -> AttributeView;

    /// Runtime type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl ToView for AttributeView {
    fn to_view(&self) -> AttributeView {
        self.clone()
    }
}

/// A shared handle to a self-describing host object.
#[derive(Clone)]
pub struct SerializableValue(Rc<dyn ToView>);

impl SerializableValue {
    pub fn new<T: ToView + 'static>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn from_rc(value: Rc<dyn ToView>) -> Self {
        Self(value)
    }

    pub fn to_view(&self) -> AttributeView {
        self.0.to_view()
    }

    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl fmt::Debug for SerializableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Serializable")
            .field(&self.type_name())
            .finish()
    }
}

impl PartialEq for SerializableValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.to_view() == other.to_view()
    }
}

/// An opaque host value with no tag mapping. Carries its runtime type name.
#[derive(Clone)]
pub struct AnyValue {
    type_name: &'static str,
    inner: Rc<dyn Any>,
}

impl AnyValue {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Rc::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Any").field(&self.type_name).finish()
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A value held at a key of an [`AttributeView`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw value of an `End` tag.
    Nil,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    View(AttributeView),
    List(Vec<Value>),
    /// Generic keyed mapping; keys are stringified when encoded.
    Map(Vec<(Value, Value)>),
    Serializable(SerializableValue),
    Bool(bool),
    Char(char),
    Any(AnyValue),
}

impl Value {
    pub fn serializable<T: ToView + 'static>(value: T) -> Self {
        Value::Serializable(SerializableValue::new(value))
    }

    pub fn any<T: Any>(value: T) -> Self {
        Value::Any(AnyValue::new(value))
    }

    /// Name of the runtime kind, as reported in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Byte(_) => "i8",
            Value::Short(_) => "i16",
            Value::Int(_) => "i32",
            Value::Long(_) => "i64",
            Value::Float(_) => "f32",
            Value::Double(_) => "f64",
            Value::String(_) => "string",
            Value::ByteArray(_) => "byte array",
            Value::IntArray(_) => "int array",
            Value::View(_) => "view",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Serializable(s) => s.type_name(),
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Any(a) => a.type_name(),
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Value::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&AttributeView> {
        match self {
            Value::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_view_mut(&mut self) -> Option<&mut AttributeView> {
        match self {
            Value::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn seq<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str("]")
        }

        match self {
            Value::Nil => f.write_str("nil"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(s) => f.write_str(s),
            Value::ByteArray(items) => seq(f, items),
            Value::IntArray(items) => seq(f, items),
            Value::List(items) => seq(f, items),
            Value::View(view) => write!(f, "{view}"),
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
            Value::Serializable(s) => write!(f, "{}", s.to_view()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Any(a) => write!(f, "<{}>", a.type_name()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Vec<i8> => ByteArray,
    Vec<i32> => IntArray,
    Vec<Value> => List,
    AttributeView => View,
    bool => Bool,
    char => Char,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}
