//! Core value types for logical evaluation

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{LogicalError, Result};

/// A boolean-coercible condition value
///
/// Every variant coerces to a boolean under [`Condition::to_boolean`]:
/// empty and zero-like values are false, everything else is true. The
/// aggregate operations in this crate accept only the [`Condition::Sequence`]
/// variant; any other variant is rejected with
/// [`LogicalError::InvalidInput`] before evaluation begins.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Boolean value
    Boolean(bool),

    /// Integer value (64-bit signed)
    Integer(i64),

    /// Decimal value with arbitrary precision
    Decimal(Decimal),

    /// String value
    String(Arc<str>),

    /// Ordered sequence of conditions (the input type of every operation)
    Sequence(Vec<Condition>),

    /// Plain JSON object; never a sequence
    Object(serde_json::Map<String, serde_json::Value>),

    /// Absent value (null)
    Empty,
}

impl Condition {
    /// Coerce to a boolean
    ///
    /// Booleans are themselves; integers and decimals are true when
    /// non-zero; strings when non-empty; sequences and objects when they
    /// contain at least one element; `Empty` is always false.
    pub fn to_boolean(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Decimal(d) => !d.is_zero(),
            Self::String(s) => !s.is_empty(),
            Self::Sequence(items) => !items.is_empty(),
            Self::Object(map) => !map.is_empty(),
            Self::Empty => false,
        }
    }

    /// Human-readable type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Decimal(_) => "Decimal",
            Self::String(_) => "String",
            Self::Sequence(_) => "Sequence",
            Self::Object(_) => "Object",
            Self::Empty => "Empty",
        }
    }

    /// Borrow the underlying condition sequence
    ///
    /// Every operation validates its input through this method before any
    /// evaluation starts, so a non-sequence value never produces a partial
    /// result.
    pub fn as_sequence(&self) -> Result<&[Condition]> {
        match self {
            Self::Sequence(items) => Ok(items),
            other => Err(LogicalError::invalid_input(other.type_name())),
        }
    }

    /// Mutably borrow the underlying condition sequence
    pub fn as_sequence_mut(&mut self) -> Result<&mut Vec<Condition>> {
        match self {
            Self::Sequence(items) => Ok(items),
            other => Err(LogicalError::invalid_input(other.type_name())),
        }
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Condition {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Condition {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::String(Arc::from(value))
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self::String(Arc::from(value.as_str()))
    }
}

impl From<Arc<str>> for Condition {
    fn from(value: Arc<str>) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Condition>> for Condition {
    fn from(values: Vec<Condition>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Vec<bool>> for Condition {
    fn from(values: Vec<bool>) -> Self {
        Self::Sequence(values.into_iter().map(Self::Boolean).collect())
    }
}

impl FromIterator<Condition> for Condition {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

impl From<serde_json::Value> for Condition {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    match Decimal::try_from(f) {
                        Ok(d) => Self::Decimal(d),
                        Err(_) => Self::String(Arc::from(n.to_string().as_str())),
                    }
                } else {
                    Self::String(Arc::from(n.to_string().as_str()))
                }
            }
            Value::String(s) => Self::String(Arc::from(s.as_str())),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(map),
        }
    }
}

impl Serialize for Condition {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Decimal(d) => Serialize::serialize(d, serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => map.serialize(serializer),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

/// Custom deserialization mapping JSON shapes onto `Condition` variants
impl<'de> serde::Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ConditionVisitor;

        impl<'de> Visitor<'de> for ConditionVisitor {
            type Value = Condition;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a condition value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Condition::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Condition::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                match i64::try_from(value) {
                    Ok(i) => Ok(Condition::Integer(i)),
                    Err(_) => Ok(Condition::Decimal(Decimal::from(value))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                if let Ok(d) = Decimal::try_from(value) {
                    Ok(Condition::Decimal(d))
                } else {
                    Ok(Condition::String(Arc::from(value.to_string().as_str())))
                }
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Condition::String(Arc::from(value)))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Condition::String(Arc::from(value.as_str())))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Condition::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut object = serde_json::Map::new();
                while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                    object.insert(key, value);
                }
                Ok(Condition::Object(object))
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Condition::Empty)
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Condition::Empty)
            }
        }

        deserializer.deserialize_any(ConditionVisitor)
    }
}
