use super::value::Value;
use crate::error::{DeserializationError, SedesKind, SerializationError};

/// Descriptor for single-byte strings.
///
/// A `Byte` value is a byte string of length one and round-trips as the raw
/// byte itself. Sequences of `Byte` elements encode identically to the
/// equivalent [`ByteList`](super::ByteList)/[`ByteVector`](super::ByteVector)
/// byte string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte;

impl Byte {
    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        match value {
            Value::Bytes(bytes) if bytes.len() == 1 => Ok(bytes.clone()),
            Value::Bytes(bytes) => Err(SerializationError::WrongLength {
                kind: SedesKind::Byte,
                expected: 1,
                actual: bytes.len(),
            }),
            _ => Err(SerializationError::TypeMismatch {
                kind: SedesKind::Byte,
            }),
        }
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        if bytes.len() != 1 {
            return Err(DeserializationError::WrongLength {
                kind: SedesKind::Byte,
                expected: 1,
                actual: bytes.len(),
            });
        }
        Ok(Value::Bytes(bytes.to_vec()))
    }
}
