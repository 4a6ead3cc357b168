//! The contract every generated record type implements.
//!
//! A record is a bag of independently optional fields. Fields are walked in
//! declaration order through [`FieldVisitor`], which drives the textual
//! rendering, the populated-field listing and the unknown-enumeration report.

use chrono::{DateTime, SecondsFormat, Utc};
use crate::utils::error::{ModelError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A value that can sit in a record field.
pub trait FieldValue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Reports enumeration values outside their documented set, `path` names this value.
    fn collect_unknown(&self, _path: &str, _out: &mut Vec<UnknownEnumValue>) {}
}

pub trait FieldVisitor {
    fn field<V: FieldValue + ?Sized>(&mut self, name: &'static str, value: Option<&V>);
}

pub trait Record:
    Default
    + Clone
    + PartialEq
    + fmt::Display
    + fmt::Debug
    + FieldValue
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    const TYPE_NAME: &'static str;

    /// Visits every declared field in declaration order, populated or not.
    fn visit_fields<V: FieldVisitor>(&self, visitor: &mut V);

    /// Wire names of the populated fields, in declaration order.
    fn populated_fields(&self) -> Vec<&'static str> {
        let mut collector = PopulatedFields(Vec::new());
        self.visit_fields(&mut collector);
        collector.0
    }

    fn is_empty(&self) -> bool {
        self.populated_fields().is_empty()
    }
}

/// An enumeration value that is not one of its type's documented literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnumValue {
    pub path: String,
    pub type_name: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?} ({})", self.path, self.value, self.type_name)
    }
}

struct PopulatedFields(Vec<&'static str>);

impl FieldVisitor for PopulatedFields {
    fn field<V: FieldValue + ?Sized>(&mut self, name: &'static str, value: Option<&V>) {
        if value.is_some() {
            self.0.push(name);
        }
    }
}

/// Writes `Name: value` pairs for populated fields, comma separated.
pub struct FieldRenderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
    result: fmt::Result,
}

impl<'a, 'b> FieldRenderer<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self {
            f,
            first: true,
            result: Ok(()),
        }
    }

    pub fn finish(self) -> fmt::Result {
        self.result
    }
}

impl FieldVisitor for FieldRenderer<'_, '_> {
    fn field<V: FieldValue + ?Sized>(&mut self, name: &'static str, value: Option<&V>) {
        let Some(value) = value else {
            return;
        };
        if self.result.is_err() {
            return;
        }
        if !self.first {
            self.result = self.f.write_str(",");
        }
        self.first = false;
        if self.result.is_ok() {
            self.result = write!(self.f, "{}: ", name);
        }
        if self.result.is_ok() {
            self.result = value.render(self.f);
        }
    }
}

/// Renders `{Name: value,Name: value}`; unset fields are left out entirely.
pub fn render_record<R: Record>(record: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    let mut renderer = FieldRenderer::new(f);
    record.visit_fields(&mut renderer);
    renderer.finish()?;
    f.write_str("}")
}

struct UnknownCollector<'a> {
    prefix: &'a str,
    out: &'a mut Vec<UnknownEnumValue>,
}

impl FieldVisitor for UnknownCollector<'_> {
    fn field<V: FieldValue + ?Sized>(&mut self, name: &'static str, value: Option<&V>) {
        if let Some(value) = value {
            value.collect_unknown(&join_path(self.prefix, name), self.out);
        }
    }
}

pub fn collect_record_unknown<R: Record>(record: &R, path: &str, out: &mut Vec<UnknownEnumValue>) {
    let mut collector = UnknownCollector { prefix: path, out };
    record.visit_fields(&mut collector);
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Inserts into a lazily created map, rejecting a key that is already present.
pub fn insert_unique<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<()> {
    let entries = map.get_or_insert_with(BTreeMap::new);
    if entries.contains_key(&key) {
        return Err(ModelError::DuplicateKey { field, key });
    }
    entries.insert(key, value);
    Ok(())
}

/// Implements `Display` and `FieldValue` for a record in terms of its `Record` impl.
macro_rules! record_impls {
    ($($name:ident),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::domain::record::render_record(self, f)
                }
            }

            impl $crate::domain::record::FieldValue for $name {
                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::domain::record::render_record(self, f)
                }

                fn collect_unknown(
                    &self,
                    path: &str,
                    out: &mut ::std::vec::Vec<$crate::domain::record::UnknownEnumValue>,
                ) {
                    $crate::domain::record::collect_record_unknown(self, path, out)
                }
            }
        )+
    };
}

pub(crate) use record_impls;

macro_rules! display_field_value {
    ($($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_field_value!(String, str, bool, i32, i64);

/// Whole doubles keep their fraction: `80.0`, not `80`.
impl FieldValue for f64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FieldValue for DateTime<Utc> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }

    fn collect_unknown(&self, path: &str, out: &mut Vec<UnknownEnumValue>) {
        for (i, item) in self.iter().enumerate() {
            item.collect_unknown(&format!("{}[{}]", path, i), out);
        }
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.render(f)?;
        }
        f.write_str("}")
    }

    fn collect_unknown(&self, path: &str, out: &mut Vec<UnknownEnumValue>) {
        for (key, value) in self {
            value.collect_unknown(&join_path(path, key), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rendered<'a, T: ?Sized>(&'a T);

    impl<T: FieldValue + ?Sized> fmt::Display for Rendered<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f)
        }
    }

    #[test]
    fn test_render_collections() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert_eq!(Rendered(&list).to_string(), "[a, b]");

        let mut map = BTreeMap::new();
        map.insert("team".to_string(), "support".to_string());
        map.insert("env".to_string(), "prod".to_string());
        assert_eq!(Rendered(&map).to_string(), "{env=prod, team=support}");

        let empty: Vec<String> = Vec::new();
        assert_eq!(Rendered(&empty).to_string(), "[]");
    }

    #[test]
    fn test_render_doubles() {
        assert_eq!(Rendered(&80.0_f64).to_string(), "80.0");
        assert_eq!(Rendered(&0.25_f64).to_string(), "0.25");
        assert_eq!(Rendered(&-3.0_f64).to_string(), "-3.0");
    }

    #[test]
    fn test_render_timestamp() {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(Rendered(&ts).to_string(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_insert_unique() {
        let mut map: Option<BTreeMap<String, String>> = None;
        insert_unique(&mut map, "Tags", "a".to_string(), "1".to_string()).unwrap();
        insert_unique(&mut map, "Tags", "b".to_string(), "2".to_string()).unwrap();
        assert_eq!(map.as_ref().map(|m| m.len()), Some(2));

        let err = insert_unique(&mut map, "Tags", "a".to_string(), "3".to_string()).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { field: "Tags", ref key } if key == "a"));
        assert_eq!(map.unwrap().get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "Status"), "Status");
        assert_eq!(join_path("PhoneNumberStatus", "Status"), "PhoneNumberStatus.Status");
    }
}
