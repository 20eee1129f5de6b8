use super::value::Value;
use super::Sedes;
use crate::codec;
use crate::error::{DeserializationError, SedesKind, SerializationError};

/// Descriptor for homogeneous sequences of one exact element count.
///
/// A vector is fixed-size exactly when its element type is; variable-size
/// elements go through the offset-table layout with a statically known
/// offset count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector {
    elem: Sedes,
    length: usize,
}

impl Vector {
    /// Builds a descriptor for sequences of exactly `length` elements.
    pub fn new(elem: Sedes, length: usize) -> Self {
        Self { elem, length }
    }

    /// Element descriptor.
    pub fn elem(&self) -> &Sedes {
        &self.elem
    }

    /// Exact element count of the represented sequences.
    pub fn length(&self) -> usize {
        self.length
    }

    pub(crate) fn fixed_size(&self) -> Option<usize> {
        self.elem.fixed_size().map(|size| size * self.length)
    }

    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        let elements = match value {
            Value::Sequence(elements) => elements,
            _ => {
                return Err(SerializationError::TypeMismatch {
                    kind: SedesKind::Vector,
                })
            }
        };
        if elements.len() != self.length {
            return Err(SerializationError::WrongLength {
                kind: SedesKind::Vector,
                expected: self.length,
                actual: elements.len(),
            });
        }
        codec::join_homogeneous(SedesKind::Vector, &self.elem, elements)
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        let segments: Vec<&[u8]> = match self.elem.fixed_size() {
            Some(0) => {
                // Zero-width elements leave nothing on the wire; the static
                // count alone reconstructs the sequence.
                if !bytes.is_empty() {
                    return Err(DeserializationError::WrongLength {
                        kind: SedesKind::Vector,
                        expected: 0,
                        actual: bytes.len(),
                    });
                }
                vec![&[][..]; self.length]
            }
            Some(element_size) => {
                let expected = element_size * self.length;
                if bytes.len() != expected {
                    return Err(DeserializationError::WrongLength {
                        kind: SedesKind::Vector,
                        expected,
                        actual: bytes.len(),
                    });
                }
                bytes.chunks(element_size).collect()
            }
            None => codec::split_parts(SedesKind::Vector, bytes, &vec![None; self.length])?,
        };
        let elements = segments
            .into_iter()
            .map(|segment| self.elem.deserialize(segment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Sequence(elements))
    }

    pub(crate) fn id(&self) -> String {
        format!("Vector({},{})", self.elem.sedes_id(), self.length)
    }
}
