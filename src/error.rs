//! Error taxonomy for the codec.
//!
//! Failures split into exactly two leaf kinds: [`SerializationError`] for
//! values that do not conform to their descriptor, and
//! [`DeserializationError`] for input bytes that are structurally invalid for
//! the target descriptor. [`SszError`] is the common ancestor for callers
//! that do not need to distinguish the two; the library never raises it
//! directly. Every failure is synchronous and atomic: no partial output is
//! observable on the error path.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Context markers identifying the descriptor family that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SedesKind {
    /// Single-bit flags stored as one byte.
    Boolean,
    /// Fixed-width unsigned integers.
    UInt,
    /// Single-byte strings.
    Byte,
    /// Fixed-length byte strings.
    ByteVector,
    /// Bounded variable-length byte strings.
    ByteList,
    /// Bounded variable-length homogeneous sequences.
    List,
    /// Fixed-length homogeneous sequences.
    Vector,
    /// Ordered heterogeneous records of named fields.
    Container,
}

impl fmt::Display for SedesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SedesKind::Boolean => write!(f, "boolean"),
            SedesKind::UInt => write!(f, "uint"),
            SedesKind::Byte => write!(f, "byte"),
            SedesKind::ByteVector => write!(f, "byte vector"),
            SedesKind::ByteList => write!(f, "byte list"),
            SedesKind::List => write!(f, "list"),
            SedesKind::Vector => write!(f, "vector"),
            SedesKind::Container => write!(f, "container"),
        }
    }
}

/// Raised when a value does not conform to the descriptor it is encoded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SerializationError {
    /// The value's shape does not match the descriptor family.
    TypeMismatch {
        /// Descriptor family the value was encoded with.
        kind: SedesKind,
    },
    /// A fixed-length value had the wrong length.
    WrongLength {
        /// Descriptor family the value was encoded with.
        kind: SedesKind,
        /// Length declared by the descriptor.
        expected: usize,
        /// Length carried by the value.
        actual: usize,
    },
    /// A bounded collection exceeded its maximum length.
    MaxLengthExceeded {
        /// Descriptor family the value was encoded with.
        kind: SedesKind,
        /// Maximum length declared by the descriptor.
        max: usize,
        /// Length carried by the value.
        actual: usize,
    },
    /// An integer does not fit the descriptor's bit width.
    ValueOutOfRange {
        /// Descriptor family the value was encoded with.
        kind: SedesKind,
        /// Bit width declared by the descriptor.
        bits: usize,
    },
    /// A record value is missing a declared field.
    MissingField {
        /// Name of the missing field.
        field: String,
    },
    /// A record value carries a field the schema does not declare.
    UnexpectedField {
        /// Name of the undeclared (or repeated) field.
        field: String,
    },
    /// The encoded payload grew past the 4-byte offset range.
    OffsetOverflow {
        /// Descriptor family the value was encoded with.
        kind: SedesKind,
        /// Byte position that no longer fits an offset.
        length: usize,
    },
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::TypeMismatch { kind } => {
                write!(f, "value shape does not match the {kind} descriptor")
            }
            SerializationError::WrongLength {
                kind,
                expected,
                actual,
            } => {
                write!(f, "wrong length for {kind}: expected {expected}, got {actual}")
            }
            SerializationError::MaxLengthExceeded { kind, max, actual } => {
                write!(f, "{kind} accepts at most {max} elements, value has {actual}")
            }
            SerializationError::ValueOutOfRange { kind, bits } => {
                write!(f, "{kind} value does not fit into {bits} bits")
            }
            SerializationError::MissingField { field } => {
                write!(f, "record is missing declared field `{field}`")
            }
            SerializationError::UnexpectedField { field } => {
                write!(f, "record carries undeclared field `{field}`")
            }
            SerializationError::OffsetOverflow { kind, length } => {
                write!(f, "{kind} payload at byte {length} exceeds the 4-byte offset range")
            }
        }
    }
}

impl std::error::Error for SerializationError {}

/// Raised when input bytes are structurally invalid for the target descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeserializationError {
    /// Total input length disagrees with a fixed-size layout.
    WrongLength {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// Length required by the layout.
        expected: usize,
        /// Length of the provided input.
        actual: usize,
    },
    /// Input ended before the expected number of bytes were read.
    UnexpectedEnd {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// Number of bytes the decoder needed.
        needed: usize,
        /// Number of bytes that were left.
        remaining: usize,
    },
    /// Encountered a byte no value of the descriptor encodes to.
    InvalidByte {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// The offending byte.
        byte: u8,
    },
    /// An offset disagrees with the fixed-part boundary or is misaligned.
    InvalidOffset {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// The offending offset.
        offset: usize,
    },
    /// An offset points before its predecessor.
    OffsetOutOfOrder {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// Offset read before the offending one.
        previous: usize,
        /// The offending offset.
        offset: usize,
    },
    /// An offset points past the end of the input.
    OffsetOutOfBounds {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// The offending offset.
        offset: usize,
        /// Total input length.
        length: usize,
    },
    /// A fixed-element body is not a multiple of the element size.
    NonUniformBody {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// Static size of one element.
        element_size: usize,
        /// Length of the provided body.
        length: usize,
    },
    /// The decoded element count exceeds the declared maximum.
    MaxLengthExceeded {
        /// Descriptor family being decoded.
        kind: SedesKind,
        /// Maximum length declared by the descriptor.
        max: usize,
        /// Decoded element count.
        actual: usize,
    },
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeserializationError::WrongLength {
                kind,
                expected,
                actual,
            } => {
                write!(f, "wrong input length for {kind}: expected {expected}, got {actual}")
            }
            DeserializationError::UnexpectedEnd {
                kind,
                needed,
                remaining,
            } => {
                write!(
                    f,
                    "input ended while decoding {kind}: needed {needed} bytes, {remaining} left"
                )
            }
            DeserializationError::InvalidByte { kind, byte } => {
                write!(f, "invalid byte 0x{byte:02x} for {kind}")
            }
            DeserializationError::InvalidOffset { kind, offset } => {
                write!(f, "invalid offset {offset} in {kind} encoding")
            }
            DeserializationError::OffsetOutOfOrder {
                kind,
                previous,
                offset,
            } => {
                write!(
                    f,
                    "offset {offset} in {kind} encoding precedes previous offset {previous}"
                )
            }
            DeserializationError::OffsetOutOfBounds {
                kind,
                offset,
                length,
            } => {
                write!(
                    f,
                    "offset {offset} in {kind} encoding exceeds input length {length}"
                )
            }
            DeserializationError::NonUniformBody {
                kind,
                element_size,
                length,
            } => {
                write!(
                    f,
                    "{kind} body of {length} bytes is not a multiple of the {element_size}-byte element size"
                )
            }
            DeserializationError::MaxLengthExceeded { kind, max, actual } => {
                write!(f, "{kind} decoded {actual} elements, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for DeserializationError {}

/// Common ancestor of the two leaf error kinds.
///
/// Callers that do not care whether a failure happened while encoding or
/// decoding can match on this type alone; the library itself always raises
/// one of the leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SszError {
    /// Encode-time failure.
    Serialization(SerializationError),
    /// Decode-time failure.
    Deserialization(DeserializationError),
}

impl fmt::Display for SszError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SszError::Serialization(error) => error.fmt(f),
            SszError::Deserialization(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for SszError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SszError::Serialization(error) => Some(error),
            SszError::Deserialization(error) => Some(error),
        }
    }
}

impl From<SerializationError> for SszError {
    fn from(error: SerializationError) -> Self {
        SszError::Serialization(error)
    }
}

impl From<DeserializationError> for SszError {
    fn from(error: DeserializationError) -> Self {
        SszError::Deserialization(error)
    }
}

/// Convenient alias for results carrying the umbrella error.
pub type SszResult<T> = core::result::Result<T, SszError>;
