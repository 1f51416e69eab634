use thiserror::Error;

/// An error raised while mapping a record to or from JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required field not found: {0}")]
    MissingRequiredField(String),
    #[error("field {field} is not a valid {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
    #[error("unknown {enum_type} value: {code}")]
    InvalidEnumerator {
        enum_type: &'static str,
        code: u8,
    },
}

impl SchemaError {
    pub(crate) fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        SchemaError::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Names `key` as the failing member when the error was raised by a
    /// value that does not know its own key.
    pub(crate) fn in_field(self, key: &str) -> Self {
        match self {
            SchemaError::TypeMismatch { field, expected } if field.is_empty() => {
                SchemaError::mismatch(key, expected)
            }
            other => other,
        }
    }

    /// The JSON member the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::MissingRequiredField(field) => Some(field),
            SchemaError::TypeMismatch { field, .. } => Some(field),
            SchemaError::InvalidEnumerator { .. } => None,
        }
    }
}
