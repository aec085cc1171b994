//! Argument values bound to template placeholders.
//!
//! A template argument is a [`Value`]. Scalars cover the SQL literal types,
//! [`Value::List`] carries identifier lists (`?#`) and plain arrays (`?a`),
//! [`Value::Array`] carries mixed plain/keyed entries (`?a`), and
//! [`Value::Skip`] is the marker that drops a conditional block.
//!
//! # Example
//! ```
//! use sqltmpl::{Entry, Value, skip};
//!
//! let id: Value = 5.into();
//! let name: Value = "alice".into();
//! let columns: Value = vec!["name", "age"].into();
//! let set = Value::array([Entry::from(("name", "alice")), Entry::from(("age", 30))]);
//! let dropped: Value = skip().into();
//!
//! assert!(dropped.is_skip());
//! assert_ne!(Value::from("skip"), dropped);
//! # let _ = (id, name, columns, set);
//! ```

use std::num::TryFromIntError;

/// A single template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean, rendered as `1` / `0`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text, rendered single-quoted.
    Text(String),
    /// Ordered list of values (identifier list or plain array).
    List(Vec<Value>),
    /// Ordered list of plain and/or keyed entries.
    Array(Vec<Entry>),
    /// The conditional-block skip marker, see [`skip`].
    Skip,
}

impl Value {
    /// Build an array argument from plain and/or keyed entries.
    pub fn array<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Value::Array(entries.into_iter().map(Into::into).collect())
    }

    /// Check if this is the skip marker.
    pub fn is_skip(&self) -> bool {
        matches!(self, Value::Skip)
    }

    /// Check if this is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Semantic type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Array(_) => "array",
            Value::Skip => "skip marker",
        }
    }
}

/// One element of an array argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Rendered as the formatted value.
    Plain(Value),
    /// Rendered as `` `key` = value ``.
    Keyed(String, Value),
}

impl Entry {
    /// Create a plain entry.
    pub fn plain(value: impl Into<Value>) -> Self {
        Entry::Plain(value.into())
    }

    /// Create a keyed entry.
    pub fn keyed(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Entry::Keyed(key.into(), value.into())
    }

    /// The entry value, keyed or not.
    pub fn value(&self) -> &Value {
        match self {
            Entry::Plain(v) | Entry::Keyed(_, v) => v,
        }
    }
}

impl<K, V> From<(K, V)> for Entry
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Entry::Keyed(key.into(), value.into())
    }
}

impl FromIterator<Entry> for Value {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

/// The marker returned by [`skip`].
///
/// Converts into [`Value::Skip`]; no other value compares equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Skip;

/// The skip marker: pass it as the argument of a `{...}` block to drop the block.
///
/// ```
/// use sqltmpl::{args, build, skip};
///
/// let sql = build("SELECT * FROM t WHERE id = ?d{ AND del = ?d}", args![1, skip()]).unwrap();
/// assert_eq!(sql, "SELECT * FROM t WHERE id = 1");
/// ```
pub const fn skip() -> Skip {
    Skip
}

impl From<Skip> for Value {
    fn from(_: Skip) -> Self {
        Value::Skip
    }
}

impl PartialEq<Skip> for Value {
    fn eq(&self, _: &Skip) -> bool {
        self.is_skip()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Integers that do not always fit in `i64` convert fallibly.
macro_rules! impl_try_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Value {
                type Error = TryFromIntError;

                fn try_from(v: $t) -> Result<Self, Self::Error> {
                    i64::try_from(v).map(Value::Int)
                }
            }
        )*
    };
}

impl_try_from_int!(u64, usize, isize, i128, u128);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// Each expression goes through `Value::from`. `u64`, `usize`, `isize`,
/// `i128` and `u128` only have `TryFrom`, so convert them first:
/// `args![Value::try_from(v.len())?]`.
///
/// ```
/// use sqltmpl::{args, skip, Value};
///
/// let a = args![1, "x", None::<i32>, vec!["a", "b"], skip()];
/// assert_eq!(a.len(), 5);
/// assert_eq!(a[2], Value::Null);
/// assert!(a[4].is_skip());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
