//! Merkle tree hashing ("hash tree root") over values and descriptors.
//!
//! Sequences of basic scalars are packed into 32-byte chunks before hashing
//! so one chunk commits to many scalars; composite elements contribute their
//! own roots as chunks. Variable-length collections mix their element count
//! into the root, and the Merkle depth always follows the descriptor's
//! static limit rather than the runtime length, keeping roots of
//! different-length values of one List type comparable under a fixed depth.

use crate::error::{SedesKind, SerializationError};
use crate::hash::{hash_pair, DIGEST_SIZE};
use crate::sedes::{Container, Record, Sedes, Value};

/// Width in bytes of one Merkle chunk.
pub const BYTES_PER_CHUNK: usize = 32;

type Chunk = [u8; BYTES_PER_CHUNK];

const ZERO_CHUNK: Chunk = [0u8; BYTES_PER_CHUNK];

/// Computes the 32-byte Merkle root committing to `value` under `sedes`.
///
/// The only failure path is the serialization of a malformed value; the
/// hashing itself is total.
pub fn hash_tree_root(
    value: &Value,
    sedes: &Sedes,
) -> Result<[u8; DIGEST_SIZE], SerializationError> {
    match sedes {
        Sedes::Boolean(_) | Sedes::UInt(_) | Sedes::Byte(_) => {
            Ok(merkleize(pack_bytes(&sedes.serialize(value)?), Some(1)))
        }
        Sedes::ByteVector(vector) => {
            let serialized = sedes.serialize(value)?;
            let limit = chunk_limit(vector.length(), 1);
            Ok(merkleize(pack_bytes(&serialized), Some(limit)))
        }
        Sedes::ByteList(list) => {
            let bytes = match value {
                Value::Bytes(bytes) => bytes,
                _ => {
                    return Err(SerializationError::TypeMismatch {
                        kind: SedesKind::ByteList,
                    })
                }
            };
            if bytes.len() > list.max_length() {
                return Err(SerializationError::MaxLengthExceeded {
                    kind: SedesKind::ByteList,
                    max: list.max_length(),
                    actual: bytes.len(),
                });
            }
            let limit = chunk_limit(list.max_length(), 1);
            let root = merkleize(pack_bytes(bytes), Some(limit));
            Ok(mix_in_length(root, bytes.len()))
        }
        Sedes::Vector(vector) => {
            let elements = match value {
                Value::Sequence(elements) => elements,
                _ => {
                    return Err(SerializationError::TypeMismatch {
                        kind: SedesKind::Vector,
                    })
                }
            };
            if elements.len() != vector.length() {
                return Err(SerializationError::WrongLength {
                    kind: SedesKind::Vector,
                    expected: vector.length(),
                    actual: elements.len(),
                });
            }
            if vector.elem().is_basic() {
                let size = vector.elem().fixed_size().unwrap_or(1);
                let limit = chunk_limit(vector.length(), size);
                Ok(merkleize(pack(elements, vector.elem())?, Some(limit)))
            } else {
                let roots = element_roots(elements, vector.elem())?;
                Ok(merkleize(roots, Some(vector.length())))
            }
        }
        Sedes::List(list) => {
            let elements = match value {
                Value::Sequence(elements) => elements,
                _ => {
                    return Err(SerializationError::TypeMismatch {
                        kind: SedesKind::List,
                    })
                }
            };
            if elements.len() > list.max_length() {
                return Err(SerializationError::MaxLengthExceeded {
                    kind: SedesKind::List,
                    max: list.max_length(),
                    actual: elements.len(),
                });
            }
            let root = if list.elem().is_basic() {
                let size = list.elem().fixed_size().unwrap_or(1);
                let limit = chunk_limit(list.max_length(), size);
                merkleize(pack(elements, list.elem())?, Some(limit))
            } else {
                let roots = element_roots(elements, list.elem())?;
                merkleize(roots, Some(list.max_length()))
            };
            Ok(mix_in_length(root, elements.len()))
        }
        Sedes::Container(container) => {
            let record = match value {
                Value::Record(record) => record,
                _ => {
                    return Err(SerializationError::TypeMismatch {
                        kind: SedesKind::Container,
                    })
                }
            };
            container_root(container, record)
        }
    }
}

/// Merkle root of a record under its container schema.
///
/// Field roots are merkleized in declared order with the static field count
/// as the limit; no length is mixed in because the count never varies.
pub(crate) fn container_root(
    container: &Container,
    record: &Record,
) -> Result<[u8; DIGEST_SIZE], SerializationError> {
    let values = container.ordered_values(record)?;
    let mut roots = Vec::with_capacity(values.len());
    for ((_, sedes), value) in container.fields().iter().zip(values) {
        roots.push(hash_tree_root(value, sedes)?);
    }
    Ok(merkleize(roots, Some(container.fields().len())))
}

fn element_roots(elements: &[Value], elem: &Sedes) -> Result<Vec<Chunk>, SerializationError> {
    elements
        .iter()
        .map(|element| hash_tree_root(element, elem))
        .collect()
}

/// Chunk capacity of `length` elements of `element_size` bytes each.
fn chunk_limit(length: usize, element_size: usize) -> usize {
    length
        .saturating_mul(element_size)
        .div_ceil(BYTES_PER_CHUNK)
}

/// Serializes basic-type values and splits the padded stream into chunks.
fn pack(elements: &[Value], elem: &Sedes) -> Result<Vec<Chunk>, SerializationError> {
    let mut stream = Vec::new();
    for element in elements {
        stream.extend_from_slice(&elem.serialize(element)?);
    }
    Ok(pack_bytes(&stream))
}

/// Zero-pads a byte stream to a chunk boundary and splits it into chunks.
fn pack_bytes(bytes: &[u8]) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(bytes.len().div_ceil(BYTES_PER_CHUNK));
    for piece in bytes.chunks(BYTES_PER_CHUNK) {
        let mut chunk = ZERO_CHUNK;
        chunk[..piece.len()].copy_from_slice(piece);
        chunks.push(chunk);
    }
    chunks
}

/// Folds chunks into a single root over a tree of the given chunk capacity.
///
/// The capacity (`limit`, defaulting to the chunk count) fixes the tree
/// depth. Missing chunks are implicit zero subtrees: each level appends the
/// zero digest of its own depth when odd, so a large static capacity costs
/// depth, not memory. Callers guarantee `chunks.len()` never exceeds the
/// capacity.
fn merkleize(chunks: Vec<Chunk>, limit: Option<usize>) -> Chunk {
    let bound = limit.unwrap_or(chunks.len()).max(1);
    debug_assert!(chunks.len() <= bound, "chunk count above the declared limit");

    let mut layer = chunks;
    let mut zero = ZERO_CHUNK;
    for _ in 0..tree_depth(bound) {
        if layer.len() % 2 == 1 {
            layer.push(zero);
        }
        layer = layer
            .chunks(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
        zero = hash_pair(&zero, &zero);
    }
    layer.first().copied().unwrap_or(zero)
}

/// Number of pairwise-hash levels needed to cover `bound` chunks.
fn tree_depth(bound: usize) -> u32 {
    if bound <= 1 {
        0
    } else {
        usize::BITS - (bound - 1).leading_zeros()
    }
}

/// Binds a collection's element count into its Merkle root.
fn mix_in_length(root: Chunk, length: usize) -> Chunk {
    let mut chunk = ZERO_CHUNK;
    chunk[..8].copy_from_slice(&(length as u64).to_le_bytes());
    hash_pair(&root, &chunk)
}
