//! # Data Exchange Container Writer
//!
//! [`DxFile`] wraps an open HDF5 file and materializes [`Entry`] instances
//! as groups and attributed leaf datasets, maintaining the root-level
//! `implements` manifest along the way.
//!
//! ## Manifest
//!
//! `/implements` is a root string dataset holding the colon-joined,
//! de-duplicated list of top-level groups present in the file, in
//! first-creation order (e.g. `"exchange:measurement:process"`). It is
//! rewritten whole (delete, then recreate) whenever a new top-level group
//! is added; it is never appended to in place.
//!
//! ## Write protocol
//!
//! For every entry, the writer first ensures the destination group path
//! exists (running the manifest procedure for an absent top-level segment),
//! then writes each present field as a leaf dataset carrying its `units`
//! attribute and any extra attributes. An existing leaf is never silently
//! clobbered: the colliding field is either skipped with a warning or, when
//! the caller passes `overwrite = true`, deleted and fully recreated. Other
//! container failures propagate; fields already written for the entry are
//! not rolled back.
//!
//! The writer holds no state besides the file handle; all sequencing lives
//! in the persisted tree. Concurrent writers to one file are unsupported
//! and would race on the manifest rewrite and the existence probes.

mod config;
mod error;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::str::FromStr;

use hdf5::types::VarLenUnicode;
use hdf5::{Dataset, File, Group, H5Type};
use log::warn;

use crate::entry::{Entry, FieldData, FieldValue};
use crate::schema::FieldSpec;

pub use config::StorageOptions;
pub use error::WriterError;

/// Name of the root manifest dataset.
const MANIFEST: &str = "implements";

/// Top-level group every Data Exchange file carries.
const EXCHANGE: &str = "exchange";

/// An open Data Exchange file.
pub struct DxFile {
    file: File,
}

impl DxFile {
    /// Create a new file, truncating any existing one, and bootstrap the
    /// `exchange` group and `implements` manifest.
    ///
    /// # Errors
    /// Propagates any HDF5 failure while creating the file or its root
    /// structure.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, WriterError> {
        let file = File::create(path)?;
        Self::init_writable(file)
    }

    /// Open a file read-write, creating it when absent. Bootstraps the
    /// `exchange` group and manifest if the file does not carry them yet.
    ///
    /// # Errors
    /// Propagates any HDF5 failure while opening the file or creating its
    /// root structure.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self, WriterError> {
        let file = File::append(path)?;
        Self::init_writable(file)
    }

    /// Open a file read-only.
    ///
    /// A file missing the `implements` manifest or the `exchange` group does
    /// not conform to the Data Exchange guidelines; that condition is
    /// reported as a warning and the handle stays usable.
    ///
    /// # Errors
    /// Propagates the HDF5 failure if the file cannot be opened at all.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, WriterError> {
        let file = File::open(path)?;
        if !file.link_exists(MANIFEST) || !file.link_exists(EXCHANGE) {
            warn!(
                "file does not have either/both `implements` or `exchange` at the root; \
                 not a conforming Data Exchange file"
            );
        }
        Ok(DxFile { file })
    }

    fn init_writable(file: File) -> Result<Self, WriterError> {
        let dx = DxFile { file };
        if !dx.file.link_exists(EXCHANGE) {
            dx.create_top_level_group(EXCHANGE)?;
        }
        Ok(dx)
    }

    /// The underlying HDF5 handle, for direct reads of the persisted tree.
    pub fn hdf5(&self) -> &File {
        &self.file
    }

    /// Flush and close the file.
    ///
    /// # Errors
    /// Propagates the HDF5 failure if closing fails.
    pub fn close(self) -> Result<(), WriterError> {
        Ok(self.file.close()?)
    }

    /// Create a group in the file root and record it in the `implements`
    /// manifest. Always use this, never a bare group creation, for
    /// root-level groups.
    ///
    /// Idempotent: an existing group of that name is left alone, but the
    /// manifest step still runs, so a file whose manifest predates the
    /// group is repaired.
    ///
    /// # Errors
    /// Propagates container failures not explained by the group already
    /// existing, and any failure while rewriting the manifest.
    pub fn create_top_level_group(&self, name: &str) -> Result<(), WriterError> {
        // A conflicting node of another kind makes create_group fail, and
        // that failure propagates.
        if self.file.group(name).is_err() {
            self.file.create_group(name)?;
        }
        self.update_manifest(name)
    }

    /// The current manifest value, or `None` when the file has none.
    ///
    /// Any failure to read the manifest dataset is treated as "no manifest",
    /// matching the reference implementation, which does not distinguish
    /// absence from an unreadable dataset.
    pub fn manifest(&self) -> Option<String> {
        let dataset = self.file.dataset(MANIFEST).ok()?;
        dataset
            .read_scalar::<VarLenUnicode>()
            .ok()
            .map(|v| v.to_string())
    }

    fn update_manifest(&self, name: &str) -> Result<(), WriterError> {
        match self.manifest() {
            Some(manifest) => {
                if !manifest.split(':').any(|token| token == name) {
                    self.file.unlink(MANIFEST)?;
                    write_string_dataset(&self.file, MANIFEST, &format!("{manifest}:{name}"))?;
                }
            }
            None => {
                write_string_dataset(&self.file, MANIFEST, name)?;
            }
        }
        Ok(())
    }

    /// Write one record instance into the file.
    ///
    /// Ensures the instance's group path exists (updating the manifest for a
    /// new top-level segment), then writes every present field as a leaf
    /// dataset. A field whose leaf already exists is skipped with a warning,
    /// or deleted and recreated when `overwrite` is true.
    ///
    /// # Errors
    /// Propagates schema-independent container failures. Fields written
    /// before a failure are not rolled back.
    pub fn add_entry(&self, entry: &Entry, overwrite: bool) -> Result<(), WriterError> {
        let group = self.ensure_group_path(&entry.path())?;
        for (spec, data) in entry.present_fields() {
            self.write_field(&group, spec, data, overwrite)?;
        }
        Ok(())
    }

    /// Write several record instances, each handled independently as in
    /// [`DxFile::add_entry`].
    ///
    /// # Errors
    /// Stops at the first entry that fails; earlier entries stay written.
    pub fn add_entries(&self, entries: &[Entry], overwrite: bool) -> Result<(), WriterError> {
        for entry in entries {
            self.add_entry(entry, overwrite)?;
        }
        Ok(())
    }

    /// Create every missing segment of `path`, routing the top-level segment
    /// through the manifest procedure, and return the leaf group.
    fn ensure_group_path(&self, path: &str) -> Result<Group, WriterError> {
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let top_level = current.is_empty();
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            if top_level {
                if !self.file.link_exists(segment) {
                    self.create_top_level_group(segment)?;
                }
            } else if !self.file.link_exists(&current) {
                self.file.create_group(&current)?;
            }
        }
        Ok(self.file.group(&current)?)
    }

    fn write_field(
        &self,
        group: &Group,
        spec: &FieldSpec,
        data: &FieldData,
        overwrite: bool,
    ) -> Result<(), WriterError> {
        let Some(value) = &data.value else {
            return Ok(());
        };
        match create_leaf(group, spec.name, value, data.storage.as_ref()) {
            Ok(dataset) => write_attributes(&dataset, spec, data),
            Err(_) if group.link_exists(spec.name) => {
                if overwrite {
                    group.unlink(spec.name)?;
                    let dataset = create_leaf(group, spec.name, value, data.storage.as_ref())?;
                    write_attributes(&dataset, spec, data)
                } else {
                    warn!(
                        "dataset `{}` already exists in `{}`; field skipped",
                        spec.name,
                        group.name()
                    );
                    Ok(())
                }
            }
            Err(err) => Err(err),
        }
    }
}

/// Apply [`StorageOptions`] to either flavor of HDF5 dataset builder; the
/// empty and with-data builders are distinct types with identical filter
/// methods.
macro_rules! apply_storage {
    ($builder:expr, $storage:expr) => {{
        let mut builder = $builder;
        if let Some(storage) = $storage {
            if storage.shuffle {
                builder = builder.shuffle();
            }
            if let Some(level) = storage.compression {
                builder = builder.deflate(level);
            }
            if let Some(chunk) = &storage.chunk {
                builder = builder.chunk(chunk.clone());
            }
        }
        builder
    }};
}

/// Create the leaf dataset for one field, applying any storage options.
fn create_leaf(
    group: &Group,
    name: &str,
    value: &FieldValue,
    storage: Option<&StorageOptions>,
) -> Result<Dataset, WriterError> {
    match value {
        FieldValue::Text(text) => {
            let dataset = create_scalar::<VarLenUnicode>(group, name, storage)?;
            dataset.write_scalar(&to_unicode(text)?)?;
            Ok(dataset)
        }
        FieldValue::Int(v) => {
            let dataset = create_scalar::<i64>(group, name, storage)?;
            dataset.write_scalar(v)?;
            Ok(dataset)
        }
        FieldValue::Float(v) => {
            let dataset = create_scalar::<f64>(group, name, storage)?;
            dataset.write_scalar(v)?;
            Ok(dataset)
        }
        FieldValue::IntArray(values) => create_array(group, name, values, storage),
        FieldValue::FloatArray(values) => create_array(group, name, values, storage),
        FieldValue::TextArray(values) => {
            let converted = values
                .iter()
                .map(|s| to_unicode(s))
                .collect::<Result<Vec<_>, _>>()?;
            create_array(group, name, &converted, storage)
        }
    }
}

fn create_scalar<T: H5Type>(
    group: &Group,
    name: &str,
    storage: Option<&StorageOptions>,
) -> Result<Dataset, WriterError> {
    let builder = apply_storage!(group.new_dataset::<T>(), storage);
    Ok(builder.create(name)?)
}

fn create_array<T: H5Type>(
    group: &Group,
    name: &str,
    values: &[T],
    storage: Option<&StorageOptions>,
) -> Result<Dataset, WriterError> {
    let builder = apply_storage!(group.new_dataset_builder().with_data(values), storage);
    Ok(builder.create(name)?)
}

/// Write the field's attributes: `units` (instance override wins over the
/// archetype), then the archetype's and instance's extra attributes. The
/// payload, docstrings, and storage options are never attributes.
fn write_attributes(
    dataset: &Dataset,
    spec: &FieldSpec,
    data: &FieldData,
) -> Result<(), WriterError> {
    if let Some(units) = data.units.as_deref().or(spec.units) {
        write_string_attr(dataset, "units", units)?;
    }
    for (name, value) in spec.extra_attrs {
        write_string_attr(dataset, name, value)?;
    }
    for (name, value) in &data.extra_attrs {
        write_string_attr(dataset, name, value)?;
    }
    Ok(())
}

fn write_string_attr(dataset: &Dataset, name: &str, value: &str) -> Result<(), WriterError> {
    dataset
        .new_attr::<VarLenUnicode>()
        .create(name)?
        .write_scalar(&to_unicode(value)?)?;
    Ok(())
}

fn write_string_dataset(group: &Group, name: &str, value: &str) -> Result<(), WriterError> {
    let dataset = group.new_dataset::<VarLenUnicode>().create(name)?;
    dataset.write_scalar(&to_unicode(value)?)?;
    Ok(())
}

fn to_unicode(value: &str) -> Result<VarLenUnicode, WriterError> {
    VarLenUnicode::from_str(value).map_err(|e| WriterError::InvalidString(e.to_string()))
}
