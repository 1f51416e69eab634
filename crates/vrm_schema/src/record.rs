use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::SchemaError;
use crate::marshal::{expect_object, JsonObject};

/// JSON members of a record that have no named field, kept in document order.
pub type Extras = serde_json::Map<String, Value>;

/// A JSON object with a fixed set of named fields.
pub trait Record: Sized + Default {
    const NAME: &'static str;
    /// Wire keys of the named fields, in declaration order.
    const KEYS: &'static [&'static str];

    fn decode(source: &JsonObject) -> Result<Self, SchemaError>;

    fn encode(&self) -> Result<JsonObject, SchemaError>;

    fn from_value(value: &Value) -> Result<Self, SchemaError> {
        Self::decode(expect_object(value, Self::NAME)?)
    }

    fn to_value(&self) -> Result<Value, SchemaError> {
        self.encode().map(Value::Object)
    }
}

pub fn collect_extras(source: &JsonObject, keys: &[&str]) -> Extras {
    source
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Appends `extras` after the named fields, skipping any member whose key
/// belongs to a named field, written or not.
pub fn append_extras(target: &mut JsonObject, extras: &Extras, keys: &[&str]) {
    for (key, value) in extras {
        if !keys.contains(&key.as_str()) && !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}

pub fn serialize<R: Record, S: Serializer>(record: &R, serializer: S) -> Result<S::Ok, S::Error> {
    record
        .encode()
        .map_err(serde::ser::Error::custom)?
        .serialize(serializer)
}

pub fn deserialize<'de, R: Record, D: Deserializer<'de>>(deserializer: D) -> Result<R, D::Error> {
    let value = Value::deserialize(deserializer)?;
    R::from_value(&value).map_err(serde::de::Error::custom)
}

/// Declares a record from its field table.
///
/// Each field reads `name: Type => "wireKey", policy;` where the policy is
/// one of
///
/// * `required` or `required(init)`: must be present; always written.
/// * `optional`: may be absent; always written.
/// * `omit_default`: may be absent; omitted when equal to `Default::default()`.
/// * `default(value)`: starts at `value` and is omitted when equal to it.
///
/// Writing `[extras]` after the struct name adds an `extras` member that
/// carries unmapped JSON members through a decode/encode cycle.
macro_rules! record {
    (@init required) => { ::core::default::Default::default() };
    (@init required ($init:expr)) => { $init };
    (@init optional) => { ::core::default::Default::default() };
    (@init omit_default) => { ::core::default::Default::default() };
    (@init default ($default:expr)) => { $default };

    (@read required $(($init:expr))?, $key:literal, $source:ident, $out:ident . $field:ident) => {
        $crate::marshal::read_required($key, $source, &mut $out.$field)?
    };
    (@read $policy:ident $(($default:expr))?, $key:literal, $source:ident, $out:ident . $field:ident) => {
        $crate::marshal::read_optional($key, $source, &mut $out.$field)?
    };

    (@write omit_default, $key:literal, $target:ident, $value:expr) => {
        $crate::marshal::write_if_not_default(
            $key,
            &mut $target,
            $value,
            &::core::default::Default::default(),
        )?
    };
    (@write default ($default:expr), $key:literal, $target:ident, $value:expr) => {
        $crate::marshal::write_if_not_default($key, &mut $target, $value, &$default)?
    };
    (@write $policy:ident $(($init:expr))?, $key:literal, $target:ident, $value:expr) => {
        $crate::marshal::write_always($key, &mut $target, $value)?
    };

    (@decode_extras extras, $out:ident, $source:ident) => {
        $out.extras = $crate::record::collect_extras($source, <Self as $crate::record::Record>::KEYS)
    };
    (@decode_extras closed, $out:ident, $source:ident) => {};
    (@encode_extras extras, $this:expr, $target:ident) => {
        $crate::record::append_extras(
            &mut $target,
            &$this.extras,
            <Self as $crate::record::Record>::KEYS,
        )
    };
    (@encode_extras closed, $this:expr, $target:ident) => {};

    (
        @struct ($($attrs:tt)*) $vis:vis $name:ident $mode:ident
        { $($extra_field:tt)* } { $($extra_init:tt)* }
        {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty => $key:literal, $policy:ident $(($default:expr))?;
            )*
        }
    ) => {
        $($attrs)*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
            $($extra_field)*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $crate::record::record!(@init $policy $(($default))?),)*
                    $($extra_init)*
                }
            }
        }

        impl $crate::record::Record for $name {
            const NAME: &'static str = stringify!($name);
            const KEYS: &'static [&'static str] = &[$($key),*];

            fn decode(
                source: &$crate::marshal::JsonObject,
            ) -> Result<Self, $crate::error::SchemaError> {
                let mut out = Self::default();
                $($crate::record::record!(@read $policy $(($default))?, $key, source, out.$field);)*
                $crate::record::record!(@decode_extras $mode, out, source);
                Ok(out)
            }

            fn encode(&self) -> Result<$crate::marshal::JsonObject, $crate::error::SchemaError> {
                let mut target = $crate::marshal::JsonObject::new();
                $($crate::record::record!(@write $policy $(($default))?, $key, target, &self.$field);)*
                $crate::record::record!(@encode_extras $mode, self, target);
                Ok(target)
            }
        }

        impl $crate::marshal::Marshal for $name {
            fn from_json(
                value: &::serde_json::Value,
                field: &str,
            ) -> Result<Self, $crate::error::SchemaError> {
                <Self as $crate::record::Record>::decode($crate::marshal::expect_object(value, field)?)
            }

            fn to_json(&self) -> Result<::serde_json::Value, $crate::error::SchemaError> {
                <Self as $crate::record::Record>::to_value(self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::record::serialize(self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::record::deserialize(deserializer)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident [extras] { $($body:tt)* }
    ) => {
        $crate::record::record!(
            @struct ($(#[$meta])*) $vis $name extras
            {
                /// Members not mapped to a named field.
                pub extras: $crate::record::Extras,
            }
            { extras: ::core::default::Default::default(), }
            { $($body)* }
        );
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident { $($body:tt)* }
    ) => {
        $crate::record::record!(@struct ($(#[$meta])*) $vis $name closed {} {} { $($body)* });
    };
}

pub(crate) use record;
