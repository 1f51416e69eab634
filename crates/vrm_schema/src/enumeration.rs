use serde_json::Value;

use crate::error::SchemaError;

/// A closed set of codes, each spelled on the wire by one fixed token.
///
/// Implemented by [`wire_enum!`]; a variant's code is its position in
/// `TOKENS`.
pub trait WireEnum: Copy + Default + 'static {
    const NAME: &'static str;
    const TOKENS: &'static [&'static str];
    const VARIANTS: &'static [Self];

    fn code(self) -> u8;

    fn from_code(code: u8) -> Option<Self> {
        Self::VARIANTS.get(usize::from(code)).copied()
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::TOKENS
            .iter()
            .position(|candidate| *candidate == token)
            .and_then(|i| Self::VARIANTS.get(i).copied())
    }

    fn token(self) -> Result<&'static str, SchemaError> {
        token_for_code::<Self>(self.code())
    }
}

/// Looks up the wire token for a raw code.
pub fn token_for_code<E: WireEnum>(code: u8) -> Result<&'static str, SchemaError> {
    E::TOKENS
        .get(usize::from(code))
        .copied()
        .ok_or(SchemaError::InvalidEnumerator {
            enum_type: E::NAME,
            code,
        })
}

/// Decodes a token, yielding `None` for tokens outside the table.
///
/// A non-string value is still a type mismatch.
pub fn decode<E: WireEnum>(value: &Value, field: &str) -> Result<Option<E>, SchemaError> {
    let token = value
        .as_str()
        .ok_or_else(|| SchemaError::mismatch(field, "string"))?;
    let decoded = E::from_token(token);
    if decoded.is_none() {
        tracing::debug!(field, token, enum_type = E::NAME, "ignoring unknown token");
    }
    Ok(decoded)
}

pub fn encode<E: WireEnum>(value: E) -> Result<Value, SchemaError> {
    value.token().map(Value::from)
}

/// Declares an enumeration with its wire tokens.
///
/// The first variant is the default.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $first:ident = $first_token:literal
            $(, $variant:ident = $token:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        $vis enum $name {
            #[default]
            $first,
            $($variant,)*
        }

        impl $crate::enumeration::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const TOKENS: &'static [&'static str] = &[$first_token $(, $token)*];
            const VARIANTS: &'static [Self] = &[Self::$first $(, Self::$variant)*];

            fn code(self) -> u8 {
                self as u8
            }
        }

        impl $crate::marshal::Marshal for $name {
            fn from_json(
                value: &::serde_json::Value,
                field: &str,
            ) -> Result<Self, $crate::error::SchemaError> {
                Ok($crate::enumeration::decode(value, field)?.unwrap_or_default())
            }

            fn read_into(
                value: &::serde_json::Value,
                field: &str,
                out: &mut Self,
            ) -> Result<(), $crate::error::SchemaError> {
                if let Some(decoded) = $crate::enumeration::decode(value, field)? {
                    *out = decoded;
                }
                Ok(())
            }

            fn to_json(&self) -> Result<::serde_json::Value, $crate::error::SchemaError> {
                $crate::enumeration::encode(*self)
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::marshal::{read_optional, JsonObject, Marshal};

    wire_enum! {
        enum Axis {
            PositiveX = "PositiveX",
            NegativeX = "NegativeX",
            PositiveY = "PositiveY",
        }
    }

    #[test]
    fn tokens_map_to_codes() {
        assert_eq!(Axis::from_token("NegativeX"), Some(Axis::NegativeX));
        assert_eq!(Axis::NegativeX.code(), 1);
        assert_eq!(Axis::PositiveY.token().unwrap(), "PositiveY");
        assert_eq!(Axis::from_token("negativeX"), None);
    }

    #[test]
    fn unknown_token_keeps_previous_value() {
        let mut source = JsonObject::new();
        source.insert("aimAxis".into(), json!("Sideways"));
        let mut axis = Axis::PositiveY;
        read_optional("aimAxis", &source, &mut axis).unwrap();
        assert_eq!(axis, Axis::PositiveY);

        assert_eq!(Axis::from_json(&json!("Sideways"), "aimAxis").unwrap(), Axis::PositiveX);
    }

    #[test]
    fn non_string_token_is_a_mismatch() {
        let err = Axis::from_json(&json!(1), "aimAxis").unwrap_err();
        assert_eq!(err.field(), Some("aimAxis"));
    }

    #[test]
    fn unmapped_code_fails_to_encode() {
        assert_eq!(token_for_code::<Axis>(2).unwrap(), "PositiveY");
        assert_eq!(
            token_for_code::<Axis>(3),
            Err(SchemaError::InvalidEnumerator { enum_type: "Axis", code: 3 })
        );
        assert_eq!(Axis::from_code(7), None);
    }
}
