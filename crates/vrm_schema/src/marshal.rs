use std::collections::BTreeMap;

use glam::{Vec2, Vec3, Vec4};
use serde_json::Value;

use crate::error::SchemaError;

pub type JsonObject = serde_json::Map<String, Value>;

/// Conversion between a field's semantic type and its JSON value.
///
/// `field` is only used to name the member in errors.
pub trait Marshal: Sized {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError>;

    /// Decodes `value` into an existing slot.
    ///
    /// Enumerations override this so an unknown token leaves `out` untouched.
    fn read_into(value: &Value, field: &str, out: &mut Self) -> Result<(), SchemaError> {
        *out = Self::from_json(value, field)?;
        Ok(())
    }

    fn to_json(&self) -> Result<Value, SchemaError>;
}

pub fn read_required<T: Marshal>(
    key: &str,
    source: &JsonObject,
    out: &mut T,
) -> Result<(), SchemaError> {
    let value = source
        .get(key)
        .ok_or_else(|| SchemaError::MissingRequiredField(key.to_owned()))?;
    T::read_into(value, key, out)
}

pub fn read_optional<T: Marshal>(
    key: &str,
    source: &JsonObject,
    out: &mut T,
) -> Result<(), SchemaError> {
    match source.get(key) {
        Some(value) => T::read_into(value, key, out),
        None => Ok(()),
    }
}

pub fn write_always<T: Marshal>(
    key: &str,
    target: &mut JsonObject,
    value: &T,
) -> Result<(), SchemaError> {
    let value = value.to_json().map_err(|err| err.in_field(key))?;
    target.insert(key.to_owned(), value);
    Ok(())
}

/// Writes `value` unless it compares equal to `default`.
///
/// Floats are compared exactly.
pub fn write_if_not_default<T: Marshal + PartialEq>(
    key: &str,
    target: &mut JsonObject,
    value: &T,
    default: &T,
) -> Result<(), SchemaError> {
    if value != default {
        write_always(key, target, value)?;
    }
    Ok(())
}

pub fn expect_object<'a>(value: &'a Value, field: &str) -> Result<&'a JsonObject, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::mismatch(field, "object"))
}

// Integral floats such as `3.0` count as integers.
fn integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|v| v.fract() == 0.0 && v.abs() <= i64::MAX as f64)
            .map(|v| v as i64)
    })
}

impl Marshal for u32 {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        integer(value)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| SchemaError::mismatch(field, "unsigned integer"))
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        Ok(Value::from(*self))
    }
}

impl Marshal for i32 {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        integer(value)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| SchemaError::mismatch(field, "integer"))
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        Ok(Value::from(*self))
    }
}

impl Marshal for f32 {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        value
            .as_f64()
            .map(|v| v as f32)
            .ok_or_else(|| SchemaError::mismatch(field, "number"))
    }

    /// JSON has no NaN or infinity, so those fail rather than becoming `null`.
    fn to_json(&self) -> Result<Value, SchemaError> {
        if !self.is_finite() {
            return Err(SchemaError::mismatch("", "finite number"));
        }
        Ok(Value::from(*self))
    }
}

impl Marshal for bool {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        value
            .as_bool()
            .ok_or_else(|| SchemaError::mismatch(field, "boolean"))
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        Ok(Value::Bool(*self))
    }
}

impl Marshal for String {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| SchemaError::mismatch(field, "string"))
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        Ok(Value::String(self.clone()))
    }
}

impl<T: Marshal> Marshal for Vec<T> {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        let items = value
            .as_array()
            .ok_or_else(|| SchemaError::mismatch(field, "array"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_json(item, &format!("{field}[{i}]")))
            .collect()
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        self.iter()
            .map(Marshal::to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: Marshal> Marshal for BTreeMap<String, T> {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        expect_object(value, field)?
            .iter()
            .map(|(key, item)| Ok((key.clone(), T::from_json(item, &format!("{field}.{key}"))?)))
            .collect()
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        let mut object = JsonObject::new();
        for (key, item) in self {
            object.insert(key.clone(), item.to_json()?);
        }
        Ok(Value::Object(object))
    }
}

/// `null` and absence both read as `None`; `None` is never written by the
/// record codecs since it equals the default.
impl<T: Marshal> Marshal for Option<T> {
    fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
        match value {
            Value::Null => Ok(None),
            value => T::from_json(value, field).map(Some),
        }
    }

    fn to_json(&self) -> Result<Value, SchemaError> {
        match self {
            Some(value) => value.to_json(),
            None => Ok(Value::Null),
        }
    }
}

fn components<const N: usize>(
    value: &Value,
    field: &str,
    expected: &'static str,
) -> Result<[f32; N], SchemaError> {
    let items = value
        .as_array()
        .filter(|items| items.len() == N)
        .ok_or_else(|| SchemaError::mismatch(field, expected))?;
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item
            .as_f64()
            .ok_or_else(|| SchemaError::mismatch(field, expected))? as f32;
    }
    Ok(out)
}

macro_rules! impl_marshal_vector {
    ($ty:ty, $n:literal, $expected:literal) => {
        impl Marshal for $ty {
            fn from_json(value: &Value, field: &str) -> Result<Self, SchemaError> {
                components::<$n>(value, field, $expected).map(<$ty>::from_array)
            }

            fn to_json(&self) -> Result<Value, SchemaError> {
                if !self.is_finite() {
                    return Err(SchemaError::mismatch("", $expected));
                }
                Ok(self.to_array().into_iter().collect())
            }
        }
    };
}

impl_marshal_vector!(Vec2, 2, "2-component vector");
impl_marshal_vector!(Vec3, 3, "3-component vector");
impl_marshal_vector!(Vec4, 4, "4-component vector");

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(object) => object,
            _ => panic!("fixture is not an object"),
        }
    }

    #[test]
    fn required_field_reports_its_key() {
        let source = object(json!({ "index": 3 }));
        let mut node = 0u32;
        let err = read_required("node", &source, &mut node).unwrap_err();
        assert_eq!(err, SchemaError::MissingRequiredField("node".into()));

        let mut index = 0u32;
        read_required("index", &source, &mut index).unwrap();
        assert_eq!(index, 3);
    }

    #[test]
    fn optional_field_keeps_prior_value_when_absent() {
        let source = object(json!({}));
        let mut stiffness = 1.0f32;
        read_optional("stiffness", &source, &mut stiffness).unwrap();
        assert_eq!(stiffness, 1.0);
    }

    #[test]
    fn malformed_optional_field_fails() {
        let source = object(json!({ "stiffness": "stiff" }));
        let mut stiffness = 1.0f32;
        let err = read_optional("stiffness", &source, &mut stiffness).unwrap_err();
        assert_eq!(err, SchemaError::mismatch("stiffness", "number"));
    }

    #[test]
    fn default_values_are_omitted() {
        let mut target = JsonObject::new();
        write_if_not_default("dragForce", &mut target, &0.5f32, &0.5).unwrap();
        write_if_not_default("hitRadius", &mut target, &0.25f32, &0.0).unwrap();
        write_always("name", &mut target, &String::new()).unwrap();
        assert_eq!(Value::Object(target), json!({ "hitRadius": 0.25, "name": "" }));
    }

    #[test]
    fn float_defaults_compare_exactly() {
        let mut target = JsonObject::new();
        write_if_not_default("weight", &mut target, &(1.0f32 - f32::EPSILON), &1.0).unwrap();
        assert!(target.contains_key("weight"));
    }

    #[test]
    fn integers_reject_fractions_and_negatives() {
        assert_eq!(u32::from_json(&json!(4.0), "node").unwrap(), 4);
        assert!(u32::from_json(&json!(4.5), "node").is_err());
        assert!(u32::from_json(&json!(-1), "node").is_err());
        assert_eq!(i32::from_json(&json!(-1), "texture").unwrap(), -1);
    }

    #[test]
    fn sequence_errors_name_the_element() {
        let err = Vec::<u32>::from_json(&json!([1, "two", 3]), "bones").unwrap_err();
        assert_eq!(err.field(), Some("bones[1]"));

        let err = BTreeMap::<String, f32>::from_json(&json!({ "_Cutoff": true }), "floatProperties")
            .unwrap_err();
        assert_eq!(err.field(), Some("floatProperties._Cutoff"));
    }

    #[test]
    fn fixed_vectors_require_exact_length() {
        assert_eq!(
            Vec3::from_json(&json!([0, -1, 0]), "gravityDir").unwrap(),
            Vec3::new(0.0, -1.0, 0.0)
        );
        assert!(Vec3::from_json(&json!([0, -1]), "gravityDir").is_err());
        assert_eq!(Vec2::ONE.to_json().unwrap(), json!([1.0, 1.0]));
    }

    #[test]
    fn non_finite_numbers_fail_to_encode() {
        assert!(f32::NAN.to_json().is_err());
        assert_eq!(1.5f32.to_json().unwrap(), json!(1.5));

        let mut target = JsonObject::new();
        let err = write_if_not_default("hitRadius", &mut target, &f32::NAN, &0.0).unwrap_err();
        assert_eq!(err, SchemaError::mismatch("hitRadius", "finite number"));
        assert!(target.is_empty());

        let err = write_always("curve", &mut target, &vec![0.0, f32::INFINITY]).unwrap_err();
        assert_eq!(err.field(), Some("curve"));

        let err = write_always("gravityDir", &mut target, &Vec3::new(0.0, f32::NEG_INFINITY, 0.0))
            .unwrap_err();
        assert_eq!(err, SchemaError::mismatch("gravityDir", "3-component vector"));
    }

    #[test]
    fn null_reads_as_none() {
        assert_eq!(Option::<u32>::from_json(&Value::Null, "thumbnailImage").unwrap(), None);
        assert_eq!(Option::<u32>::from_json(&json!(2), "thumbnailImage").unwrap(), Some(2));
    }
}
