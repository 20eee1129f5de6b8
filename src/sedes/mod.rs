//! Type descriptors ("sedes") for the codec.
//!
//! Every descriptor knows, without seeing a value, whether its wire size is
//! fixed and, if so, how many bytes it occupies. Descriptors are immutable
//! once constructed and can be shared freely across any number of encode,
//! decode and tree-hash calls.

mod boolean;
mod byte;
mod bytes;
mod container;
mod list;
mod serializable;
mod uint;
mod value;
mod vector;

pub use boolean::Boolean;
pub use byte::Byte;
pub use bytes::{ByteList, ByteVector};
pub use container::Container;
pub use list::List;
pub use serializable::Serializable;
pub use uint::UInt;
pub use value::{Record, Value};
pub use vector::Vector;

use crate::error::{DeserializationError, SerializationError};

/// Closed union of every supported type descriptor.
///
/// Dispatch is an exhaustive match, so adding a variant is a compile-time
/// event for every consumer inside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sedes {
    /// Single-bit flags stored as one byte.
    Boolean(Boolean),
    /// Fixed-width unsigned integers.
    UInt(UInt),
    /// Single-byte strings.
    Byte(Byte),
    /// Fixed-length byte strings.
    ByteVector(ByteVector),
    /// Bounded variable-length byte strings.
    ByteList(ByteList),
    /// Homogeneous sequences of one exact element count.
    Vector(Box<Vector>),
    /// Bounded variable-length homogeneous sequences.
    List(Box<List>),
    /// Ordered heterogeneous records of named fields.
    Container(Container),
}

/// Boolean singleton.
pub const BOOLEAN: Sedes = Sedes::Boolean(Boolean);
/// Single-byte string singleton.
pub const BYTE: Sedes = Sedes::Byte(Byte);
/// 8-bit unsigned integer singleton.
pub const UINT8: Sedes = Sedes::UInt(UInt::new(8));
/// 16-bit unsigned integer singleton.
pub const UINT16: Sedes = Sedes::UInt(UInt::new(16));
/// 32-bit unsigned integer singleton.
pub const UINT32: Sedes = Sedes::UInt(UInt::new(32));
/// 64-bit unsigned integer singleton.
pub const UINT64: Sedes = Sedes::UInt(UInt::new(64));
/// 128-bit unsigned integer singleton.
pub const UINT128: Sedes = Sedes::UInt(UInt::new(128));
/// 256-bit unsigned integer singleton.
pub const UINT256: Sedes = Sedes::UInt(UInt::new(256));
/// 32-byte string singleton.
pub const BYTES32: Sedes = Sedes::ByteVector(ByteVector::new(32));
/// 48-byte string singleton.
pub const BYTES48: Sedes = Sedes::ByteVector(ByteVector::new(48));
/// 96-byte string singleton.
pub const BYTES96: Sedes = Sedes::ByteVector(ByteVector::new(96));
/// Byte list accepting only the empty string.
pub const EMPTY_BYTE_LIST: Sedes = Sedes::ByteList(ByteList::new(0));

impl Sedes {
    /// Convenience constructor for [`List`] descriptors.
    pub fn list(elem: Sedes, max_length: usize) -> Self {
        Sedes::List(Box::new(List::new(elem, max_length)))
    }

    /// Convenience constructor for [`Vector`] descriptors.
    pub fn vector(elem: Sedes, length: usize) -> Self {
        Sedes::Vector(Box::new(Vector::new(elem, length)))
    }

    /// Convenience constructor for [`Container`] descriptors.
    pub fn container<N>(fields: Vec<(N, Sedes)>) -> Self
    where
        N: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, sedes)| (name.into(), sedes))
            .collect();
        Sedes::Container(Container::new(fields))
    }

    /// Reports whether encodings of this descriptor have a static byte width.
    pub fn is_fixed_size(&self) -> bool {
        self.fixed_size().is_some()
    }

    /// Static byte width of every encoding, or `None` when variable-size.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Sedes::Boolean(_) => Some(1),
            Sedes::UInt(uint) => Some(uint.size()),
            Sedes::Byte(_) => Some(1),
            Sedes::ByteVector(vector) => Some(vector.length()),
            Sedes::ByteList(_) => None,
            Sedes::Vector(vector) => vector.fixed_size(),
            Sedes::List(_) => None,
            Sedes::Container(container) => container.fixed_size(),
        }
    }

    /// Serializes a value into its canonical byte representation.
    pub fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        match self {
            Sedes::Boolean(boolean) => boolean.serialize(value),
            Sedes::UInt(uint) => uint.serialize(value),
            Sedes::Byte(byte) => byte.serialize(value),
            Sedes::ByteVector(vector) => vector.serialize(value),
            Sedes::ByteList(list) => list.serialize(value),
            Sedes::Vector(vector) => vector.serialize(value),
            Sedes::List(list) => list.serialize(value),
            Sedes::Container(container) => container.serialize(value),
        }
    }

    /// Parses a value from its canonical byte representation.
    pub fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        match self {
            Sedes::Boolean(boolean) => boolean.deserialize(bytes),
            Sedes::UInt(uint) => uint.deserialize(bytes),
            Sedes::Byte(byte) => byte.deserialize(bytes),
            Sedes::ByteVector(vector) => vector.deserialize(bytes),
            Sedes::ByteList(list) => list.deserialize(bytes),
            Sedes::Vector(vector) => vector.deserialize(bytes),
            Sedes::List(list) => list.deserialize(bytes),
            Sedes::Container(container) => container.deserialize(bytes),
        }
    }

    /// Canonical short identifier for this descriptor instance.
    ///
    /// Used for structural identification and diagnostics; never part of
    /// the wire format.
    pub fn sedes_id(&self) -> String {
        match self {
            Sedes::Boolean(_) => "Boolean".to_string(),
            Sedes::UInt(uint) => uint.id(),
            Sedes::Byte(_) => "Byte".to_string(),
            Sedes::ByteVector(vector) => vector.id(),
            Sedes::ByteList(list) => list.id(),
            Sedes::Vector(vector) => vector.id(),
            Sedes::List(list) => list.id(),
            Sedes::Container(container) => container.id(),
        }
    }

    /// True for the packable scalar families (Boolean, UInt, Byte).
    pub(crate) fn is_basic(&self) -> bool {
        matches!(self, Sedes::Boolean(_) | Sedes::UInt(_) | Sedes::Byte(_))
    }
}
