use super::value::Value;
use super::Sedes;
use crate::codec;
use crate::error::{DeserializationError, SedesKind, SerializationError};

/// Descriptor for bounded variable-length homogeneous sequences.
///
/// Fixed-size elements are concatenated directly (boundaries are implicit
/// multiples of the element width); variable-size elements go through the
/// offset-table layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    elem: Sedes,
    max_length: usize,
}

impl List {
    /// Builds a descriptor for sequences of at most `max_length` elements.
    pub fn new(elem: Sedes, max_length: usize) -> Self {
        Self { elem, max_length }
    }

    /// Element descriptor.
    pub fn elem(&self) -> &Sedes {
        &self.elem
    }

    /// Maximum element count of the represented sequences.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        let elements = match value {
            Value::Sequence(elements) => elements,
            _ => {
                return Err(SerializationError::TypeMismatch {
                    kind: SedesKind::List,
                })
            }
        };
        if elements.len() > self.max_length {
            return Err(SerializationError::MaxLengthExceeded {
                kind: SedesKind::List,
                max: self.max_length,
                actual: elements.len(),
            });
        }
        codec::join_homogeneous(SedesKind::List, &self.elem, elements)
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        let segments = match self.elem.fixed_size() {
            Some(element_size) => codec::split_fixed(SedesKind::List, bytes, element_size)?,
            None => codec::split_uniform(SedesKind::List, bytes)?,
        };
        if segments.len() > self.max_length {
            return Err(DeserializationError::MaxLengthExceeded {
                kind: SedesKind::List,
                max: self.max_length,
                actual: segments.len(),
            });
        }
        let elements = segments
            .into_iter()
            .map(|segment| self.elem.deserialize(segment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Sequence(elements))
    }

    pub(crate) fn id(&self) -> String {
        format!("List({},{})", self.elem.sedes_id(), self.max_length)
    }
}
