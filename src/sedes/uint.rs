use super::value::Value;
use crate::error::{DeserializationError, SedesKind, SerializationError};
use primitive_types::U256;

/// Descriptor for fixed-width little-endian unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UInt {
    bits: usize,
}

impl UInt {
    /// Builds a descriptor for `bits`-wide integers.
    ///
    /// # Panics
    ///
    /// Panics when `bits` is not one of 8, 16, 32, 64, 128 or 256.
    pub const fn new(bits: usize) -> Self {
        assert!(
            matches!(bits, 8 | 16 | 32 | 64 | 128 | 256),
            "unsupported integer bit width"
        );
        Self { bits }
    }

    /// Bit width of the represented integers.
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Byte width of one encoded integer.
    pub const fn size(&self) -> usize {
        self.bits / 8
    }

    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        let uint = match value {
            Value::UInt(uint) => *uint,
            _ => {
                return Err(SerializationError::TypeMismatch {
                    kind: SedesKind::UInt,
                })
            }
        };
        if uint.bits() > self.bits {
            return Err(SerializationError::ValueOutOfRange {
                kind: SedesKind::UInt,
                bits: self.bits,
            });
        }
        let mut buffer = [0u8; 32];
        uint.to_little_endian(&mut buffer);
        Ok(buffer[..self.size()].to_vec())
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        if bytes.len() != self.size() {
            return Err(DeserializationError::WrongLength {
                kind: SedesKind::UInt,
                expected: self.size(),
                actual: bytes.len(),
            });
        }
        Ok(Value::UInt(U256::from_little_endian(bytes)))
    }

    pub(crate) fn id(&self) -> String {
        format!("UInt{}", self.bits)
    }
}
