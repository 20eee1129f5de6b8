use super::value::{Record, Value};
use super::Sedes;
use crate::codec::{self, EncodedPart};
use crate::error::{DeserializationError, SedesKind, SerializationError};

/// Descriptor for ordered heterogeneous records of named fields.
///
/// Field order is fixed at construction and determines both the wire layout
/// and the Merkle field ordering. A container is fixed-size exactly when
/// every field is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    fields: Vec<(String, Sedes)>,
}

impl Container {
    /// Builds a descriptor from ordered `(name, sedes)` pairs.
    pub fn new(fields: Vec<(String, Sedes)>) -> Self {
        Self { fields }
    }

    /// Ordered `(name, sedes)` pairs declared by the schema.
    pub fn fields(&self) -> &[(String, Sedes)] {
        &self.fields
    }

    pub(crate) fn fixed_size(&self) -> Option<usize> {
        self.fields
            .iter()
            .map(|(_, sedes)| sedes.fixed_size())
            .sum()
    }

    /// Returns the record's values in declared field order, validating that
    /// the record carries exactly the declared field set.
    pub(crate) fn ordered_values<'a>(
        &self,
        record: &'a Record,
    ) -> Result<Vec<&'a Value>, SerializationError> {
        let mut ordered = Vec::with_capacity(self.fields.len());
        for (name, _) in &self.fields {
            match record.get(name) {
                Some(value) => ordered.push(value),
                None => {
                    return Err(SerializationError::MissingField {
                        field: name.clone(),
                    })
                }
            }
        }
        for (name, _) in record.fields() {
            if !self.fields.iter().any(|(declared, _)| declared == name) {
                return Err(SerializationError::UnexpectedField {
                    field: name.clone(),
                });
            }
        }
        if record.len() != self.fields.len() {
            // Every name is declared and none is missing, so one repeats.
            for (index, (name, _)) in record.fields().iter().enumerate() {
                if record.fields()[..index].iter().any(|(seen, _)| seen == name) {
                    return Err(SerializationError::UnexpectedField {
                        field: name.clone(),
                    });
                }
            }
        }
        Ok(ordered)
    }

    pub(crate) fn serialize(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        match value {
            Value::Record(record) => self.serialize_record(record),
            _ => Err(SerializationError::TypeMismatch {
                kind: SedesKind::Container,
            }),
        }
    }

    pub(crate) fn serialize_record(&self, record: &Record) -> Result<Vec<u8>, SerializationError> {
        let values = self.ordered_values(record)?;
        let mut parts = Vec::with_capacity(self.fields.len());
        for ((_, sedes), value) in self.fields.iter().zip(values) {
            parts.push(EncodedPart {
                bytes: sedes.serialize(value)?,
                is_fixed: sedes.is_fixed_size(),
            });
        }
        codec::join_parts(SedesKind::Container, &parts)
    }

    pub(crate) fn deserialize(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        Ok(Value::Record(self.deserialize_record(bytes)?))
    }

    pub(crate) fn deserialize_record(
        &self,
        bytes: &[u8],
    ) -> Result<Record, DeserializationError> {
        let shapes: Vec<Option<usize>> = self
            .fields
            .iter()
            .map(|(_, sedes)| sedes.fixed_size())
            .collect();
        let segments = codec::split_parts(SedesKind::Container, bytes, &shapes)?;
        let mut fields = Vec::with_capacity(self.fields.len());
        for ((name, sedes), segment) in self.fields.iter().zip(segments) {
            fields.push((name.clone(), sedes.deserialize(segment)?));
        }
        Ok(Record::new(fields))
    }

    pub(crate) fn id(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|(name, sedes)| format!("{}:{}", name, sedes.sedes_id()))
            .collect::<Vec<_>>()
            .join(",");
        format!("Container({fields})")
    }
}
