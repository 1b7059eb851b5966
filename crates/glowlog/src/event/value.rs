//! Property values bound to log events.
//!
//! A [`PropertyValue`] is a snapshot taken when the event is created. It is
//! a closed tree of scalars, sequences, structures and dictionaries, so the
//! formatters can match on it exhaustively.
//!
//! Values can be built explicitly, through `From` conversions, or captured
//! from any `Serialize` type:
//!
//! ```rust
//! use glowlog::{PropertyValue, Scalar};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Order { id: u32, tags: Vec<&'static str> }
//!
//! let order = PropertyValue::capture(&Order { id: 7, tags: vec!["rush"] });
//! assert!(matches!(order, PropertyValue::Dictionary(_)));
//!
//! let count: PropertyValue = 42.into();
//! assert_eq!(count, PropertyValue::Scalar(Scalar::I64(42)));
//! ```

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::Serialize;

/// A primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Char(char),
    Str(String),
    /// Date and time without an offset.
    DateTime(NaiveDateTime),
    /// Date and time with a UTC offset.
    DateTimeOffset(DateTime<FixedOffset>),
    /// Any other value, kept as its display text.
    Other(String),
}

/// A named-field value with an optional type tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    type_tag: Option<String>,
    fields: Vec<(String, PropertyValue)>,
}

impl Structure {
    pub fn new(type_tag: Option<String>) -> Self {
        Self {
            type_tag,
            fields: Vec::new(),
        }
    }

    /// Adds a field, returning `self` for chaining.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub fn fields(&self) -> &[(String, PropertyValue)] {
        &self.fields
    }
}

/// The value of an event property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(Scalar),
    Sequence(Vec<PropertyValue>),
    Structure(Structure),
    /// Ordered key/value pairs. Keys are usually string scalars.
    Dictionary(Vec<(PropertyValue, PropertyValue)>),
    /// A value that could not be captured. Renders as a placeholder.
    Unrepresentable,
}

impl PropertyValue {
    pub fn null() -> Self {
        PropertyValue::Scalar(Scalar::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Scalar(Scalar::Null))
    }

    /// Builds a dictionary from string-keyed pairs, keeping their order.
    pub fn dictionary<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        PropertyValue::Dictionary(
            entries
                .into_iter()
                .map(|(k, v)| {
                    let key: String = k.into();
                    (PropertyValue::from(key), v.into())
                })
                .collect(),
        )
    }

    /// Captures any serializable value.
    ///
    /// Maps become dictionaries in serialization order, sequences become
    /// sequences, and primitives become scalars. A value that fails to
    /// serialize becomes [`PropertyValue::Unrepresentable`].
    pub fn capture<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => json.into(),
            Err(err) => {
                tracing::debug!(error = %err, "property value could not be captured");
                PropertyValue::Unrepresentable
            }
        }
    }

    /// Captures the display text of a value, like a `$` hint.
    pub fn stringify<T: std::fmt::Display + ?Sized>(value: &T) -> Self {
        PropertyValue::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => PropertyValue::null(),
            Value::Bool(b) => b.into(),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.into()
                } else if let Some(u) = n.as_u64() {
                    u.into()
                } else {
                    n.as_f64().map_or(PropertyValue::Unrepresentable, Into::into)
                }
            }
            Value::String(s) => s.into(),
            Value::Array(items) => {
                PropertyValue::Sequence(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => PropertyValue::dictionary(map),
        }
    }
}

impl From<Scalar> for PropertyValue {
    fn from(scalar: Scalar) -> Self {
        PropertyValue::Scalar(scalar)
    }
}

impl From<Structure> for PropertyValue {
    fn from(structure: Structure) -> Self {
        PropertyValue::Structure(structure)
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::Scalar(Scalar::$variant(value as $target))
                }
            }
        )*
    };
}

scalar_from! {
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    isize => I64 as i64,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    usize => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Scalar(Scalar::Bool(value))
    }
}

impl From<char> for PropertyValue {
    fn from(value: char) -> Self {
        PropertyValue::Scalar(Scalar::Char(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Scalar(Scalar::Str(value.to_string()))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Scalar(Scalar::Str(value))
    }
}

impl From<NaiveDateTime> for PropertyValue {
    fn from(value: NaiveDateTime) -> Self {
        PropertyValue::Scalar(Scalar::DateTime(value))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for PropertyValue {
    fn from(value: DateTime<Tz>) -> Self {
        PropertyValue::Scalar(Scalar::DateTimeOffset(value.fixed_offset()))
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(PropertyValue::null, Into::into)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capture_keeps_map_order() {
        let value = PropertyValue::capture(&json!({"b": 1, "a": null, "c": "x"}));
        let PropertyValue::Dictionary(entries) = value else {
            panic!("expected dictionary");
        };
        let keys: Vec<_> = entries
            .iter()
            .map(|(k, _)| match k {
                PropertyValue::Scalar(Scalar::Str(s)) => s.as_str(),
                other => panic!("unexpected key {:?}", other),
            })
            .collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert!(entries[1].1.is_null());
    }

    #[test]
    fn capture_numbers_keep_their_kind() {
        assert_eq!(
            PropertyValue::capture(&-3i32),
            PropertyValue::Scalar(Scalar::I64(-3))
        );
        assert_eq!(
            PropertyValue::capture(&u64::MAX),
            PropertyValue::Scalar(Scalar::U64(u64::MAX))
        );
        assert_eq!(
            PropertyValue::capture(&1.5f64),
            PropertyValue::Scalar(Scalar::F64(1.5))
        );
    }

    #[test]
    fn capture_failure_is_unrepresentable() {
        use std::collections::HashMap;
        // Non-string map keys cannot be represented
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        assert_eq!(PropertyValue::capture(&map), PropertyValue::Unrepresentable);
    }

    #[test]
    fn option_none_is_null() {
        let value: PropertyValue = Option::<i32>::None.into();
        assert!(value.is_null());
    }

    #[test]
    fn structure_builder() {
        let s = Structure::new(Some("Point".into()))
            .field("X", 1)
            .field("Y", 2);
        assert_eq!(s.type_tag(), Some("Point"));
        assert_eq!(s.fields().len(), 2);
    }

    #[test]
    fn stringify_uses_display() {
        assert_eq!(
            PropertyValue::stringify(&std::net::Ipv4Addr::LOCALHOST),
            PropertyValue::Scalar(Scalar::Str("127.0.0.1".into()))
        );
    }
}
