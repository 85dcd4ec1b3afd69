//! Serde-backed decoding of query mappings into typed parameter objects.
//!
//! A flat query string maps naturally onto a struct of scalar fields. The
//! deserializer here feeds each raw value to serde with string, numeric,
//! boolean, char, `Option`, newtype, and unit-enum targets supported; nested
//! shapes (sequences, maps) are not expressible in a query string and fail
//! the decode.

use super::{QueryMap, RouteParams};
use anyhow::Context as _;
use serde::de::value::MapDeserializer;
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;
use std::any::Any;
use std::ops::{Deref, DerefMut};
use tracing::warn;

/// Decode a query mapping into any `Deserialize` type.
///
/// Duplicate keys collapse to their last value before the decode, matching
/// keyed access on [`QueryMap`]. Unknown keys are ignored unless the target
/// type denies them.
pub fn decode<T: DeserializeOwned>(query: &QueryMap) -> anyhow::Result<T> {
    let mut fields: Vec<(&str, &str)> = Vec::with_capacity(query.len());
    for (name, value) in query.iter() {
        if let Some(slot) = fields.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = value;
        } else {
            fields.push((name, value));
        }
    }
    let deserializer =
        MapDeserializer::new(fields.into_iter().map(|(name, value)| (name, Scalar(value))));
    T::deserialize(deserializer)
        .with_context(|| format!("failed to decode query into {}", std::any::type_name::<T>()))
}

/// Deserializer for a single query value.
///
/// Strings pass through borrowed; numeric, boolean, and char targets parse
/// the raw text and report an invalid-value error when parsing fails.
struct Scalar<'de>(&'de str);

impl<'de> IntoDeserializer<'de, serde_json::Error> for Scalar<'de> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

macro_rules! deserialize_parsed {
    ($($method:ident => $visit:ident as $ty:ty,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                match self.0.parse::<$ty>() {
                    Ok(value) => visitor.$visit(value),
                    Err(_) => Err(de::Error::invalid_value(
                        de::Unexpected::Str(self.0),
                        &visitor,
                    )),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for Scalar<'de> {
    type Error = serde_json::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.0)
    }

    deserialize_parsed! {
        deserialize_bool => visit_bool as bool,
        deserialize_i8 => visit_i8 as i8,
        deserialize_i16 => visit_i16 as i16,
        deserialize_i32 => visit_i32 as i32,
        deserialize_i64 => visit_i64 as i64,
        deserialize_u8 => visit_u8 as u8,
        deserialize_u16 => visit_u16 as u16,
        deserialize_u32 => visit_u32 as u32,
        deserialize_u64 => visit_u64 as u64,
        deserialize_f32 => visit_f32 as f32,
        deserialize_f64 => visit_f64 as f64,
        deserialize_char => visit_char as char,
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.0
            .into_deserializer()
            .deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf unit unit_struct seq tuple tuple_struct map
        struct identifier ignored_any
    }
}

/// Adapter that lets any `Deserialize` type act as a parameter object.
///
/// Register a route with `TypedParams<MyFilter>` and screens receive a fully
/// decoded `MyFilter` instead of raw strings. A decode that does not fit the
/// incoming query logs a warning and yields no parameter object, so the
/// resolution continues with the parameter absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedParams<T>(pub T);

impl<T> TypedParams<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for TypedParams<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for TypedParams<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> RouteParams for TypedParams<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn from_query(query: &QueryMap) -> Option<Self> {
        match decode::<T>(query) {
            Ok(value) => Some(TypedParams(value)),
            Err(error) => {
                warn!(
                    params_type = std::any::type_name::<T>(),
                    error = %error,
                    "Query decode failed, parameter treated as absent"
                );
                None
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Mode {
        View,
        Edit,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Filter {
        id: String,
        limit: u32,
        active: Option<bool>,
    }

    #[test]
    fn decodes_mixed_scalar_fields() {
        let q = QueryMap::parse("id=42&limit=10&active=true");
        let filter: Filter = decode(&q).unwrap();
        assert_eq!(
            filter,
            Filter {
                id: "42".to_string(),
                limit: 10,
                active: Some(true),
            }
        );
    }

    #[test]
    fn missing_optional_field_is_none() {
        let q = QueryMap::parse("id=a&limit=3");
        let filter: Filter = decode(&q).unwrap();
        assert_eq!(filter.active, None);
    }

    #[test]
    fn duplicate_keys_use_last_value() {
        let q = QueryMap::parse("id=1&limit=2&id=9");
        let filter: Filter = decode(&q).unwrap();
        assert_eq!(filter.id, "9");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let q = QueryMap::parse("id=1&limit=2&extra=whatever");
        let filter: Filter = decode(&q).unwrap();
        assert_eq!(filter.limit, 2);
    }

    #[test]
    fn unit_enum_decodes_from_string() {
        #[derive(Debug, Deserialize)]
        struct WithMode {
            mode: Mode,
        }

        let q = QueryMap::parse("mode=edit");
        let with_mode: WithMode = decode(&q).unwrap();
        assert_eq!(with_mode.mode, Mode::Edit);
    }

    #[test]
    fn wrong_scalar_type_fails() {
        let q = QueryMap::parse("id=a&limit=notanumber");
        assert!(decode::<Filter>(&q).is_err());
    }

    #[test]
    fn missing_required_field_fails() {
        let q = QueryMap::parse("limit=3");
        assert!(decode::<Filter>(&q).is_err());
    }

    #[test]
    fn typed_params_decode_failure_is_none() {
        let q = QueryMap::parse("id=x&limit=nope");
        assert!(TypedParams::<Filter>::from_query(&q).is_none());
    }
}
