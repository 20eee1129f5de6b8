use super::container::Container;
use super::value::{Record, Value};
use super::Sedes;
use crate::error::{DeserializationError, SerializationError};
use crate::tree_hash;

/// Schema builder binding an ordered field layout to constructible records.
///
/// A `Serializable` behaves as one more container descriptor plus a value
/// construction contract: [`create`](Serializable::create) validates a field
/// assignment against the declared schema and yields a [`Record`] with
/// by-name access and structural equality. Wire layout and Merkleization
/// delegate entirely to the container rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serializable {
    schema: Container,
}

impl Serializable {
    /// Builds a schema from ordered `(name, sedes)` pairs.
    pub fn new<N>(fields: Vec<(N, Sedes)>) -> Self
    where
        N: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, sedes)| (name.into(), sedes))
            .collect();
        Self {
            schema: Container::new(fields),
        }
    }

    /// The container descriptor backing this schema.
    pub fn container(&self) -> &Container {
        &self.schema
    }

    /// Returns this schema as a sedes usable with [`encode`](crate::encode),
    /// [`decode`](crate::decode) and [`hash_tree_root`](crate::hash_tree_root).
    pub fn sedes(&self) -> Sedes {
        Sedes::Container(self.schema.clone())
    }

    /// Builds a record from a field assignment.
    ///
    /// The assignment must carry exactly the declared field set; the
    /// resulting record stores its fields in declared order regardless of
    /// the assignment order.
    pub fn create<N>(&self, values: Vec<(N, Value)>) -> Result<Record, SerializationError>
    where
        N: Into<String>,
    {
        let assignment = Record::new(
            values
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        );
        let ordered = self.schema.ordered_values(&assignment)?;
        let fields = self
            .schema
            .fields()
            .iter()
            .zip(ordered)
            .map(|((name, _), value)| (name.clone(), value.clone()))
            .collect();
        Ok(Record::new(fields))
    }

    /// Encodes a record with this schema's container layout.
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>, SerializationError> {
        self.schema.serialize_record(record)
    }

    /// Decodes a record of this schema from canonical bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<Record, DeserializationError> {
        self.schema.deserialize_record(bytes)
    }

    /// Computes the Merkle root of a record under this schema.
    pub fn hash_tree_root(&self, record: &Record) -> Result<[u8; 32], SerializationError> {
        tree_hash::container_root(&self.schema, record)
    }
}
