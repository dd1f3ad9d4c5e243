//! # dxfile - The Data Exchange File Format
//!
//! `dxfile` is a Rust implementation of the scientific Data Exchange (DXfile)
//! conventions for storing measurement data and metadata in HDF5 files, as
//! used at synchrotron tomography beamlines.
//!
//! ## Key Concepts
//!
//! - **Schema Catalog**: a fixed table of entry archetypes (`sample`,
//!   `detector`, `source`, `acquisition`, ...), each declaring where its
//!   instances live in the HDF5 tree and which unit-annotated fields they
//!   carry. See [`schema`].
//!
//! - **Entries**: transient record instances of an archetype, built by the
//!   caller with only the fields that were actually measured. Fields left
//!   unset are never written. See [`entry::Entry`].
//!
//! - **Container Writer**: [`writer::DxFile`] wraps an open HDF5 file and
//!   materializes entries as groups and attributed leaf datasets, while
//!   maintaining the root-level `implements` manifest that records which
//!   top-level groups the file carries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dxfile::entry::Entry;
//! use dxfile::schema::EntryKind;
//! use dxfile::writer::DxFile;
//!
//! let file = DxFile::create("scan_001.h5")?;
//!
//! let mut sample = Entry::new(EntryKind::Sample);
//! sample.set("name", "Ti64")?;
//! sample.set("mass", 0.002)?;
//!
//! file.add_entry(&sample, false)?;
//! # Ok::<(), dxfile::writer::WriterError>(())
//! ```
//!
//! This produces the tree:
//!
//! ```text
//! /implements              "exchange:measurement"
//! /exchange
//! /measurement/sample/name "Ti64"   (units = "text")
//! /measurement/sample/mass 0.002    (units = "kg")
//! ```
//!
//! ## Collision Policy
//!
//! A leaf dataset is never silently clobbered. Writing an entry whose field
//! already exists either skips that field with a warning (`overwrite =
//! false`) or deletes and fully recreates it (`overwrite = true`); attributes
//! are never merged between the old and new leaf.
//!
//! The HDF5 container engine itself (binary layout, compression codecs, file
//! locking) is supplied by the [`hdf5`] crate; this crate only drives its
//! group/dataset/attribute API.

pub mod entry;
pub mod schema;
pub mod writer;

pub use entry::{Entry, FieldData, FieldValue, SchemaError};
pub use schema::{Archetype, EntryKind, FieldSpec};
pub use writer::{DxFile, StorageOptions, WriterError};
