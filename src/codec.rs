//! Encode/decode entry points and the shared fixed/variable union layout.
//!
//! Variable-size descriptors store their payloads behind an offset table.
//! The *fixed part* carries inline fixed-size data and one 4-byte
//! little-endian offset per variable-size element or field, in declared
//! order; the *variable part* carries the variable payloads back to back.
//! Offsets are measured from the start of the encoded buffer, so the first
//! offset always equals the fixed-part length.
//!
//! One encoder (`join_parts`) and one decoder (`split_parts`) implement the
//! layout for every composite descriptor; lists of variable-size elements
//! additionally derive their element count from the first offset
//! (`split_uniform`).

use crate::error::{DeserializationError, SedesKind, SerializationError};
use crate::sedes::{Sedes, Value};

/// Number of bytes used to represent an offset.
pub const BYTES_PER_OFFSET: usize = 4;

/// Serializes a value with the given descriptor.
///
/// Fails with [`SerializationError`] when the value does not conform to the
/// descriptor; nothing is returned on the error path.
pub fn encode(value: &Value, sedes: &Sedes) -> Result<Vec<u8>, SerializationError> {
    sedes.serialize(value)
}

/// Parses a value of the given descriptor from canonical bytes.
///
/// Fixed-size descriptors consume exactly their declared width; composite
/// descriptors validate the complete offset table before any element is
/// decoded. Any structural violation fails with [`DeserializationError`].
pub fn decode(bytes: &[u8], sedes: &Sedes) -> Result<Value, DeserializationError> {
    sedes.deserialize(bytes)
}

/// Cursor over a byte slice providing structured reads with error context.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Number of bytes remaining in the cursor.
    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Reads exactly `len` bytes from the cursor.
    pub(crate) fn read_exact(
        &mut self,
        len: usize,
        kind: SedesKind,
    ) -> Result<&'a [u8], DeserializationError> {
        if self.remaining() < len {
            return Err(DeserializationError::UnexpectedEnd {
                kind,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Reads one little-endian 4-byte offset.
    pub(crate) fn read_offset(&mut self, kind: SedesKind) -> Result<usize, DeserializationError> {
        let bytes = self.read_exact(BYTES_PER_OFFSET, kind)?;
        let mut raw = [0u8; BYTES_PER_OFFSET];
        raw.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(raw) as usize)
    }
}

/// One serialized element or field together with its size classification.
pub(crate) struct EncodedPart {
    pub bytes: Vec<u8>,
    pub is_fixed: bool,
}

/// Concatenates parts into the canonical fixed-part/variable-part layout.
///
/// With no variable part this degenerates to plain concatenation, which is
/// also the layout of fully fixed-size composites.
pub(crate) fn join_parts(
    kind: SedesKind,
    parts: &[EncodedPart],
) -> Result<Vec<u8>, SerializationError> {
    let fixed_len: usize = parts
        .iter()
        .map(|part| {
            if part.is_fixed {
                part.bytes.len()
            } else {
                BYTES_PER_OFFSET
            }
        })
        .sum();
    let variable_len: usize = parts
        .iter()
        .filter(|part| !part.is_fixed)
        .map(|part| part.bytes.len())
        .sum();

    let mut out = Vec::with_capacity(fixed_len + variable_len);
    let mut offset = fixed_len;
    for part in parts {
        if part.is_fixed {
            out.extend_from_slice(&part.bytes);
        } else {
            let encoded = u32::try_from(offset).map_err(|_| SerializationError::OffsetOverflow {
                kind,
                length: offset,
            })?;
            out.extend_from_slice(&encoded.to_le_bytes());
            offset += part.bytes.len();
        }
    }
    for part in parts.iter().filter(|part| !part.is_fixed) {
        out.extend_from_slice(&part.bytes);
    }
    Ok(out)
}

/// Serializes a homogeneous sequence, with offsets only when the element
/// type is variable-size.
pub(crate) fn join_homogeneous(
    kind: SedesKind,
    elem: &Sedes,
    elements: &[Value],
) -> Result<Vec<u8>, SerializationError> {
    if elem.is_fixed_size() {
        let mut out = Vec::new();
        for element in elements {
            out.extend_from_slice(&elem.serialize(element)?);
        }
        Ok(out)
    } else {
        let parts = elements
            .iter()
            .map(|element| {
                Ok(EncodedPart {
                    bytes: elem.serialize(element)?,
                    is_fixed: false,
                })
            })
            .collect::<Result<Vec<_>, SerializationError>>()?;
        join_parts(kind, &parts)
    }
}

enum Slot<'a> {
    Fixed(&'a [u8]),
    Variable(usize),
}

/// Splits a union-layout buffer into one byte segment per part.
///
/// `shapes` holds `Some(fixed_size)` for fixed-size parts and `None` for
/// variable-size parts, in declared order. The whole offset table is
/// validated (first offset at the fixed-part boundary, non-decreasing,
/// within bounds) before anything is sliced.
pub(crate) fn split_parts<'a>(
    kind: SedesKind,
    bytes: &'a [u8],
    shapes: &[Option<usize>],
) -> Result<Vec<&'a [u8]>, DeserializationError> {
    let fixed_len: usize = shapes
        .iter()
        .map(|shape| shape.unwrap_or(BYTES_PER_OFFSET))
        .sum();
    let variable_count = shapes.iter().filter(|shape| shape.is_none()).count();

    if variable_count == 0 && bytes.len() != fixed_len {
        return Err(DeserializationError::WrongLength {
            kind,
            expected: fixed_len,
            actual: bytes.len(),
        });
    }
    if bytes.len() < fixed_len {
        return Err(DeserializationError::UnexpectedEnd {
            kind,
            needed: fixed_len,
            remaining: bytes.len(),
        });
    }

    let mut cursor = ByteReader::new(bytes);
    let mut slots = Vec::with_capacity(shapes.len());
    let mut offsets = Vec::with_capacity(variable_count);
    for shape in shapes {
        match shape {
            Some(size) => slots.push(Slot::Fixed(cursor.read_exact(*size, kind)?)),
            None => {
                slots.push(Slot::Variable(offsets.len()));
                offsets.push(cursor.read_offset(kind)?);
            }
        }
    }

    let mut previous = fixed_len;
    for (rank, &offset) in offsets.iter().enumerate() {
        if rank == 0 && offset != fixed_len {
            return Err(DeserializationError::InvalidOffset { kind, offset });
        }
        if offset < previous {
            return Err(DeserializationError::OffsetOutOfOrder {
                kind,
                previous,
                offset,
            });
        }
        if offset > bytes.len() {
            return Err(DeserializationError::OffsetOutOfBounds {
                kind,
                offset,
                length: bytes.len(),
            });
        }
        previous = offset;
    }

    let mut spans = Vec::with_capacity(offsets.len());
    for (rank, &start) in offsets.iter().enumerate() {
        let end = match offsets.get(rank + 1) {
            Some(&next) => next,
            None => bytes.len(),
        };
        spans.push(&bytes[start..end]);
    }

    Ok(slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Fixed(segment) => segment,
            Slot::Variable(rank) => spans[rank],
        })
        .collect())
}

/// Splits a buffer of homogeneous variable-size elements.
///
/// The element count is not static, so it is derived from the first offset:
/// the fixed part consists solely of offsets, hence `count = first / 4`.
/// Empty input is the canonical encoding of the empty sequence.
pub(crate) fn split_uniform(
    kind: SedesKind,
    bytes: &[u8],
) -> Result<Vec<&[u8]>, DeserializationError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let mut cursor = ByteReader::new(bytes);
    let first = cursor.read_offset(kind)?;
    if first == 0 || first % BYTES_PER_OFFSET != 0 {
        return Err(DeserializationError::InvalidOffset {
            kind,
            offset: first,
        });
    }
    let count = first / BYTES_PER_OFFSET;
    split_parts(kind, bytes, &vec![None; count])
}

/// Splits a fixed-element body into equally sized segments.
pub(crate) fn split_fixed(
    kind: SedesKind,
    bytes: &[u8],
    element_size: usize,
) -> Result<Vec<&[u8]>, DeserializationError> {
    if element_size == 0 {
        // The count of zero-width elements is unrecoverable from a byte
        // count; only the empty body parses.
        return if bytes.is_empty() {
            Ok(Vec::new())
        } else {
            Err(DeserializationError::NonUniformBody {
                kind,
                element_size,
                length: bytes.len(),
            })
        };
    }
    if bytes.len() % element_size != 0 {
        return Err(DeserializationError::NonUniformBody {
            kind,
            element_size,
            length: bytes.len(),
        });
    }
    Ok(bytes.chunks(element_size).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_fixed_parts_is_concatenation() {
        let parts = [
            EncodedPart {
                bytes: vec![1, 2],
                is_fixed: true,
            },
            EncodedPart {
                bytes: vec![3],
                is_fixed: true,
            },
        ];
        let joined = join_parts(SedesKind::Container, &parts).unwrap();
        assert_eq!(joined, vec![1, 2, 3]);
    }

    #[test]
    fn join_then_split_mixed_parts() {
        let parts = [
            EncodedPart {
                bytes: vec![7; 4],
                is_fixed: true,
            },
            EncodedPart {
                bytes: vec![1, 2, 3],
                is_fixed: false,
            },
            EncodedPart {
                bytes: vec![],
                is_fixed: false,
            },
        ];
        let joined = join_parts(SedesKind::Container, &parts).unwrap();
        // 4 inline bytes + two offsets, then the variable payloads.
        assert_eq!(joined.len(), 4 + 2 * BYTES_PER_OFFSET + 3);

        let shapes = [Some(4), None, None];
        let segments = split_parts(SedesKind::Container, &joined, &shapes).unwrap();
        assert_eq!(segments, vec![&[7u8; 4][..], &[1, 2, 3][..], &[][..]]);
    }

    #[test]
    fn split_uniform_empty_input_is_empty_sequence() {
        let segments = split_uniform(SedesKind::List, &[]).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn split_uniform_rejects_misaligned_first_offset() {
        let bytes = [6, 0, 0, 0, 0, 0];
        let err = split_uniform(SedesKind::List, &bytes).unwrap_err();
        assert!(matches!(
            err,
            DeserializationError::InvalidOffset { offset: 6, .. }
        ));
    }

    #[test]
    fn split_fixed_rejects_ragged_body() {
        let err = split_fixed(SedesKind::List, &[0; 5], 2).unwrap_err();
        assert!(matches!(err, DeserializationError::NonUniformBody { .. }));
    }
}
