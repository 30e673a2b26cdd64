use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, IgnoredAny, SeqAccess},
};
use std::fmt;

///
/// Value
///
/// Field value as stored on a record.
///
/// Null   → the field is unset; renders as a blank cell and is skipped
///          by the search filter.
/// Text   → single-line, multi-line, radio, and select fields.
/// List   → the selected options of a checkbox group.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Text(String),
    List(Vec<String>),
}

impl Value {
    /// Build a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build a list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when the value carries nothing worth submitting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Display form used by the search filter; None for unset values.
    /// Lists collapse with a bare comma, matching how a browser renders
    /// an array in a table cell.
    #[must_use]
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(s.clone()),
            Self::List(items) => Some(items.join(",")),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

/// Imported files are taken as-is, so deserialization is deliberately
/// tolerant: foreign scalars coerce to their display text, and shapes the
/// table cannot render (objects, nested arrays) become Null.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a scalar, or an array of scalars")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::new();
        while let Some(element) = seq.next_element::<Value>()? {
            match element {
                Value::Text(s) => items.push(s),
                // unset and nested shapes have no cell rendering
                Value::Null | Value::List(_) => {}
            }
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: &Value) -> Value {
        let json = serde_json::to_string(value).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn text_and_list_roundtrip() {
        let text = Value::text("Vedang");
        let list = Value::list(["S", "M", "L"]);

        assert_eq!(roundtrip(&text), text);
        assert_eq!(roundtrip(&list), list);
    }

    #[test]
    fn null_roundtrips_through_json_null() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(roundtrip(&Value::Null), Value::Null);
    }

    #[test]
    fn foreign_scalars_coerce_to_text() {
        let number: Value = serde_json::from_str("42").unwrap();
        let boolean: Value = serde_json::from_str("true").unwrap();

        assert_eq!(number, Value::text("42"));
        assert_eq!(boolean, Value::text("true"));
    }

    #[test]
    fn unrenderable_shapes_become_null() {
        let object: Value = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert_eq!(object, Value::Null);
    }

    #[test]
    fn array_elements_coerce_and_drop_nested() {
        let value: Value = serde_json::from_str(r#"["a", 2, null, ["x"], "b"]"#).unwrap();
        assert_eq!(value, Value::list(["a", "2", "b"]));
    }

    #[test]
    fn search_text_joins_lists_like_a_cell() {
        assert_eq!(Value::Null.search_text(), None);
        assert_eq!(Value::text("x").search_text().as_deref(), Some("x"));
        assert_eq!(
            Value::list(["a", "b"]).search_text().as_deref(),
            Some("a,b")
        );
    }

    #[test]
    fn emptiness_tracks_shape() {
        assert!(Value::Null.is_empty());
        assert!(Value::text("").is_empty());
        assert!(Value::List(Vec::new()).is_empty());
        assert!(!Value::text("x").is_empty());
    }
}
