use super::value::Value;
use crate::error::{DeserializationError, SedesKind, SerializationError};

/// Descriptor for byte strings of one exact length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteVector {
    length: usize,
}

impl ByteVector {
    /// Builds a descriptor for byte strings of exactly `length` bytes.
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    /// Exact byte length of every represented string.
    pub const fn length(&self) -> usize {
        self.length
    }

    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        match value {
            Value::Bytes(bytes) if bytes.len() == self.length => Ok(bytes.clone()),
            Value::Bytes(bytes) => Err(SerializationError::WrongLength {
                kind: SedesKind::ByteVector,
                expected: self.length,
                actual: bytes.len(),
            }),
            _ => Err(SerializationError::TypeMismatch {
                kind: SedesKind::ByteVector,
            }),
        }
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        if bytes.len() != self.length {
            return Err(DeserializationError::WrongLength {
                kind: SedesKind::ByteVector,
                expected: self.length,
                actual: bytes.len(),
            });
        }
        Ok(Value::Bytes(bytes.to_vec()))
    }

    pub(crate) fn id(&self) -> String {
        format!("ByteVector{}", self.length)
    }
}

/// Descriptor for byte strings up to a maximum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteList {
    max_length: usize,
}

impl ByteList {
    /// Builds a descriptor for byte strings of at most `max_length` bytes.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Maximum byte length of the represented strings.
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        match value {
            Value::Bytes(bytes) if bytes.len() <= self.max_length => Ok(bytes.clone()),
            Value::Bytes(bytes) => Err(SerializationError::MaxLengthExceeded {
                kind: SedesKind::ByteList,
                max: self.max_length,
                actual: bytes.len(),
            }),
            _ => Err(SerializationError::TypeMismatch {
                kind: SedesKind::ByteList,
            }),
        }
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        if bytes.len() > self.max_length {
            return Err(DeserializationError::MaxLengthExceeded {
                kind: SedesKind::ByteList,
                max: self.max_length,
                actual: bytes.len(),
            });
        }
        Ok(Value::Bytes(bytes.to_vec()))
    }

    pub(crate) fn id(&self) -> String {
        format!("ByteList{}", self.max_length)
    }
}
