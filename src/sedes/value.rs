//! Dynamic value model shared by every descriptor.

use primitive_types::U256;

/// A value encodable, decodable and Merkleizable under a descriptor.
///
/// The enum is closed: each variant maps onto one family of descriptors.
/// Values never retain a reference to the descriptor that produced them;
/// they are plain owned data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean flag ([`Boolean`](super::Boolean) descriptors).
    Boolean(bool),
    /// Unsigned integer up to 256 bits ([`UInt`](super::UInt) descriptors).
    UInt(U256),
    /// Byte string ([`Byte`](super::Byte), [`ByteVector`](super::ByteVector)
    /// and [`ByteList`](super::ByteList) descriptors).
    Bytes(Vec<u8>),
    /// Homogeneous sequence ([`List`](super::List) and
    /// [`Vector`](super::Vector) descriptors).
    Sequence(Vec<Value>),
    /// Ordered named-field record ([`Container`](super::Container)
    /// descriptors).
    Record(Record),
}

impl Value {
    /// Builds a sequence value from element values.
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Sequence(elements.into_iter().collect())
    }

    /// Returns the boolean payload, if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an integer value.
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            Value::UInt(uint) => Some(*uint),
            _ => None,
        }
    }

    /// Returns the byte payload, if this is a byte-string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the element slice, if this is a sequence value.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the record payload, if this is a record value.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Boolean(flag)
    }
}

impl From<U256> for Value {
    fn from(uint: U256) -> Self {
        Value::UInt(uint)
    }
}

macro_rules! impl_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(uint: $ty) -> Self {
                    Value::UInt(U256::from(uint))
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

/// Ordered named-field value produced by container descriptors.
///
/// Field order is data: two records are equal iff they carry the same fields
/// with the same values in the same order, matching the declared order of the
/// schema that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Builds a record from ordered `(name, value)` pairs.
    pub fn new(fields: Vec<(String, Value)>) -> Self {
        Self { fields }
    }

    /// Returns the value of the named field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Returns the ordered `(name, value)` pairs.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Number of fields carried by the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
