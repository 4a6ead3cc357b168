//! Closed string enumerations.
//!
//! Each enumeration lists its documented literals. Any other string converts
//! to `Unknown`, which keeps the text verbatim so nothing read off the wire is
//! lost. Since `Unknown` can only be reached through that conversion, a
//! documented literal always maps to its named variant and the raw-string and
//! typed forms of a value are indistinguishable.

use std::fmt;

/// Text of an enumeration value outside its documented set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownValue(String);

impl UnknownValue {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            Unknown($crate::domain::string_enum::UnknownValue),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// The documented literals, in declaration order.
            pub const fn values() -> &'static [&'static str] {
                &[ $( $value ),+ ]
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown($crate::domain::string_enum::UnknownValue::new(other)),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match value.as_str() {
                    $( $value => $name::$variant, )+
                    _ => $name::Unknown($crate::domain::string_enum::UnknownValue::new(value)),
                }
            }
        }

        impl ::std::convert::From<&$name> for $name {
            fn from(value: &$name) -> Self {
                value.clone()
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok($name::from(value))
            }
        }

        impl $crate::domain::record::FieldValue for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }

            fn collect_unknown(
                &self,
                path: &str,
                out: &mut ::std::vec::Vec<$crate::domain::record::UnknownEnumValue>,
            ) {
                if let $name::Unknown(value) = self {
                    out.push($crate::domain::record::UnknownEnumValue {
                        path: path.to_string(),
                        type_name: stringify!($name),
                        value: value.as_str().to_string(),
                    });
                }
            }
        }
    };
}

pub(crate) use string_enum;

#[cfg(test)]
mod tests {
    use crate::domain::record::FieldValue;
    use std::str::FromStr;

    string_enum! {
        Color {
            Red => "RED",
            DarkBlue => "DARK_BLUE",
        }
    }

    #[test]
    fn test_known_literals_map_to_variants() {
        assert_eq!(Color::from("RED"), Color::Red);
        assert_eq!(Color::from("DARK_BLUE".to_string()), Color::DarkBlue);
        assert_eq!(Color::DarkBlue.as_str(), "DARK_BLUE");
        assert!(Color::Red.is_known());
        assert_eq!(Color::values(), &["RED", "DARK_BLUE"]);
    }

    #[test]
    fn test_unknown_text_is_preserved() {
        let color = Color::from("red");
        assert!(!color.is_known());
        assert_eq!(color.as_str(), "red");
        assert_eq!(color, Color::from_str("red").unwrap());
        assert_ne!(color, Color::Red);
    }

    #[test]
    fn test_serde_uses_literal() {
        let json = serde_json::to_string(&Color::DarkBlue).unwrap();
        assert_eq!(json, "\"DARK_BLUE\"");

        let parsed: Color = serde_json::from_str("\"PURPLE\"").unwrap();
        assert_eq!(parsed.as_str(), "PURPLE");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"PURPLE\"");
    }

    #[test]
    fn test_unknown_values_are_reported() {
        let mut out = Vec::new();
        Color::Red.collect_unknown("Paint", &mut out);
        assert!(out.is_empty());

        Color::from("TEAL").collect_unknown("Paint", &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "Paint");
        assert_eq!(out[0].type_name, "Color");
        assert_eq!(out[0].value, "TEAL");
    }
}
