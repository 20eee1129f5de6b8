//! Schema-driven binary serialization and Merkle tree hashing.
//!
//! The crate pairs a canonical little-endian wire codec with a deterministic
//! Merkleization scheme. A [`Sedes`] describes one encodable type,
//! [`encode`] and [`decode`] move values to and from canonical bytes, and
//! [`hash_tree_root`] commits a value to a single 32-byte digest.
//!
//! All operations are pure and synchronous: they read only their inputs and
//! the immutable descriptor they are given, so descriptors can be shared
//! across threads without coordination.
//!
//! ```
//! use ssz_codec::{decode, encode, hash_tree_root, Sedes, SszError, Value, UINT64};
//!
//! let sedes = Sedes::list(UINT64, 1024);
//! let value = Value::sequence([Value::from(3u64), Value::from(9u64)]);
//!
//! let bytes = encode(&value, &sedes)?;
//! assert_eq!(decode(&bytes, &sedes)?, value);
//!
//! let root = hash_tree_root(&value, &sedes)?;
//! assert_eq!(root.len(), 32);
//! # Ok::<(), SszError>(())
//! ```

pub mod codec;
pub mod error;
pub mod hash;
pub mod sedes;
pub mod tree_hash;

pub use primitive_types::U256;

pub use codec::{decode, encode, BYTES_PER_OFFSET};
pub use error::{DeserializationError, SedesKind, SerializationError, SszError, SszResult};
pub use sedes::{
    Boolean, Byte, ByteList, ByteVector, Container, List, Record, Sedes, Serializable, UInt,
    Value, Vector, BOOLEAN, BYTE, BYTES32, BYTES48, BYTES96, EMPTY_BYTE_LIST, UINT128, UINT16,
    UINT256, UINT32, UINT64, UINT8,
};
pub use tree_hash::{hash_tree_root, BYTES_PER_CHUNK};
