//! # Record Instances
//!
//! An [`Entry`] is a transient, caller-built instance of a catalog archetype:
//! it names an [`EntryKind`] and carries a value for some subset of the
//! archetype's fields. Entries exist only to be consumed by
//! [`crate::writer::DxFile::add_entry`]; after the write call returns, the
//! persisted tree is owned solely by the HDF5 container.
//!
//! Field values are validated against the archetype at assignment time:
//! setting a field the archetype does not declare fails with
//! [`SchemaError::UnknownField`]. Fields never assigned stay absent and
//! produce no leaf dataset.
//!
//! Several instances of one archetype may coexist in a file (e.g. multiple
//! experimenters); route them to distinct groups with [`Entry::with_name`].

mod error;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::schema::{Archetype, EntryKind, FieldSpec};
use crate::writer::StorageOptions;

pub use error::SchemaError;

/// A payload value for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Variable-length UTF-8 string
    Text(String),
    /// Scalar integer
    Int(i64),
    /// Scalar float
    Float(f64),
    /// 1-D integer array
    IntArray(Vec<i64>),
    /// 1-D float array
    FloatArray(Vec<f64>),
    /// 1-D string array
    TextArray(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<Vec<i64>> for FieldValue {
    fn from(v: Vec<i64>) -> Self {
        FieldValue::IntArray(v)
    }
}

impl From<Vec<f64>> for FieldValue {
    fn from(v: Vec<f64>) -> Self {
        FieldValue::FloatArray(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        FieldValue::TextArray(v)
    }
}

/// Everything a caller can supply for one field: the payload plus optional
/// per-field overrides consumed at write time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldData {
    /// The payload written as the leaf dataset; `None` writes nothing
    pub value: Option<FieldValue>,
    /// Overrides the archetype's declared `units` attribute
    pub units: Option<String>,
    /// Dataset creation options (compression, chunking); never persisted as
    /// an attribute
    pub storage: Option<StorageOptions>,
    /// Additional attributes persisted on the leaf
    pub extra_attrs: Vec<(String, String)>,
}

impl FieldData {
    /// A field holding just a value, with attributes taken from the
    /// archetype.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        FieldData {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Override the `units` attribute for this instance.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Attach dataset creation options.
    pub fn with_storage(mut self, storage: StorageOptions) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Attach an additional attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_attrs.push((name.into(), value.into()));
        self
    }
}

impl From<FieldValue> for FieldData {
    fn from(value: FieldValue) -> Self {
        FieldData::new(value)
    }
}

// A blanket `impl<V: Into<FieldValue>> From<V> for FieldData` would collide
// with the reflexive `From` impl, so the payload conversions are spelled out.
macro_rules! impl_field_data_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldData {
                fn from(value: $ty) -> Self {
                    FieldData::new(value)
                }
            }
        )*
    };
}

impl_field_data_from!(&str, String, i64, i32, f64, Vec<i64>, Vec<f64>, Vec<String>);

/// A record instance of one catalog archetype.
#[derive(Debug, Clone)]
pub struct Entry {
    kind: EntryKind,
    name: Option<String>,
    fields: BTreeMap<&'static str, FieldData>,
}

impl Entry {
    /// A fresh instance with every field absent, stored under the
    /// archetype's default group name.
    pub fn new(kind: EntryKind) -> Self {
        Entry {
            kind,
            name: None,
            fields: BTreeMap::new(),
        }
    }

    /// A fresh instance stored under `name` instead of the archetype's
    /// default group name. Use this to keep several instances of one
    /// archetype apart, e.g. `experimenter_1`, `experimenter_2`.
    pub fn with_name(kind: EntryKind, name: impl Into<String>) -> Self {
        Entry {
            kind,
            name: Some(name.into()),
            fields: BTreeMap::new(),
        }
    }

    /// The entry type of this instance.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The archetype descriptor this instance conforms to.
    pub fn archetype(&self) -> &'static Archetype {
        self.kind.archetype()
    }

    /// Group name this instance occupies under the archetype root; empty
    /// means the instance writes directly into the root group.
    pub fn group_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self.archetype().entry_name,
        }
    }

    /// Full group path for this instance, e.g. `/measurement/sample`.
    pub fn path(&self) -> String {
        let name = self.group_name();
        if name.is_empty() {
            self.archetype().root.to_string()
        } else {
            format!("{}/{}", self.archetype().root, name)
        }
    }

    /// Assign a field.
    ///
    /// Accepts anything convertible to [`FieldData`]: a plain value for the
    /// common case, or a [`FieldData`] carrying unit/storage/attribute
    /// overrides.
    ///
    /// # Errors
    /// [`SchemaError::UnknownField`] if the archetype does not declare
    /// `field`.
    pub fn set(
        &mut self,
        field: &str,
        data: impl Into<FieldData>,
    ) -> Result<&mut Self, SchemaError> {
        let spec = self
            .archetype()
            .field(field)
            .ok_or_else(|| SchemaError::UnknownField {
                kind: self.kind.name(),
                field: field.to_string(),
            })?;
        self.fields.insert(spec.name, data.into());
        Ok(self)
    }

    /// The data assigned to `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldData> {
        self.fields.get(field)
    }

    /// Present fields in archetype declaration order, paired with their
    /// specs. Fields whose value is absent are not yielded.
    pub fn present_fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldData)> + '_ {
        self.archetype().fields.iter().filter_map(move |spec| {
            self.fields
                .get(spec.name)
                .filter(|data| data.value.is_some())
                .map(|data| (spec, data))
        })
    }
}
