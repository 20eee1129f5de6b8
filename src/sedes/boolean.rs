use super::value::Value;
use crate::error::{DeserializationError, SedesKind, SerializationError};

/// Descriptor for single-bit values stored as one byte.
///
/// `true` encodes to `0x01`, `false` to `0x00`; every other byte is rejected
/// when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean;

impl Boolean {
    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        match value {
            Value::Boolean(flag) => Ok(vec![*flag as u8]),
            _ => Err(SerializationError::TypeMismatch {
                kind: SedesKind::Boolean,
            }),
        }
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        if bytes.len() != 1 {
            return Err(DeserializationError::WrongLength {
                kind: SedesKind::Boolean,
                expected: 1,
                actual: bytes.len(),
            });
        }
        match bytes[0] {
            0 => Ok(Value::Boolean(false)),
            1 => Ok(Value::Boolean(true)),
            byte => Err(DeserializationError::InvalidByte {
                kind: SedesKind::Boolean,
                byte,
            }),
        }
    }
}
