//! # Data Exchange Schema Catalog
//!
//! This module defines the static catalog of Data Exchange entry archetypes.
//!
//! ## Design Rationale
//!
//! An [`Archetype`] is a declarative record-type definition: the HDF5 path
//! where its instances live, the group name they occupy, and an ordered table
//! of unit-annotated fields. The catalog is a fixed registration table built
//! directly in the `catalog` module; there is no runtime type generation.
//! Callers
//! select an archetype through the [`EntryKind`] enum and build instances
//! with [`crate::entry::Entry`].
//!
//! Archetype and field docstrings exist for generated documentation only and
//! are never persisted to a file. The JSON view produced by
//! [`Archetype::to_json`] is the machine-readable form of that
//! documentation.
//!
//! ## Layout Conventions
//!
//! | Root group | Contents |
//! |------------|----------|
//! | `/exchange` | The measured data itself |
//! | `/measurement` | Static sample/instrument state at measurement start |
//! | `/process` | Acquisition and processing parameters |
//!
//! Archetypes may nest under one another: `roi` lives beneath the `detector`
//! group, `setup` entries beneath their parent stage groups, and so on.

mod catalog;

#[cfg(test)]
mod tests;

use serde::Serialize;

/// A single field declared by an archetype.
///
/// Every field is optional at write time: an instance that does not supply a
/// value for it produces no leaf dataset. When a value is supplied, the leaf
/// carries `units` (if declared) plus every pair from `extra_attrs` as HDF5
/// attributes.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Leaf dataset name.
    pub name: &'static str,
    /// Physical unit, persisted as the `units` attribute on the leaf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<&'static str>,
    /// Documentation only; never persisted.
    pub docstring: &'static str,
    /// Additional attributes persisted verbatim on the leaf.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub extra_attrs: &'static [(&'static str, &'static str)],
}

/// A declarative entry-type definition in the Schema Catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Archetype {
    /// HDF5 path under which instances of this archetype are created.
    pub root: &'static str,
    /// Group name for instances; empty means instances write directly into
    /// `root`.
    pub entry_name: &'static str,
    /// Documentation only; never persisted.
    pub docstring: &'static str,
    /// Ordered field table.
    pub fields: &'static [FieldSpec],
}

impl Archetype {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The group path instances of this archetype occupy, before any
    /// caller-supplied name override.
    pub fn default_path(&self) -> String {
        if self.entry_name.is_empty() {
            self.root.to_string()
        } else {
            format!("{}/{}", self.root, self.entry_name)
        }
    }

    /// Serialize the archetype descriptor to JSON for generated docs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The catalog of supported entry types.
///
/// One variant per archetype. Adding a new archetype means adding a variant
/// here and a table in the `catalog` module; the writer never needs to
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Results of the measurement, under `/exchange`.
    Exchange,
    /// The measured data array itself.
    Data,
    /// The sample measured.
    Sample,
    /// Facility proposal/activity/safety references.
    Experiment,
    /// A single experimenter; several may coexist under distinct names.
    Experimenter,
    /// Beamline instrument status at measurement start.
    Instrument,
    /// The light source.
    Source,
    /// X-ray beam attenuator.
    Attenuator,
    /// X-ray beam monochromator.
    Monochromator,
    /// X-ray beam mirror.
    Mirror,
    /// X-ray detector.
    Detector,
    /// Detector region of interest.
    Roi,
    /// Microscope objective lens.
    Objective,
    /// Scintillator screen.
    Scintillator,
    /// Sample stage stack.
    SampleStack,
    /// Static sample-stage motor positions.
    SampleStackSetup,
    /// Interferometer.
    Interferometer,
    /// Static interferometer parameters.
    InterferometerSetup,
    /// Parameters used to generate raw and processed data.
    Process,
    /// Per-image acquisition parameters.
    Acquisition,
    /// Static scan parameters.
    AcquisitionSetup,
}

impl EntryKind {
    /// Every archetype in the catalog, in declaration order.
    pub const ALL: [EntryKind; 21] = [
        EntryKind::Exchange,
        EntryKind::Data,
        EntryKind::Sample,
        EntryKind::Experiment,
        EntryKind::Experimenter,
        EntryKind::Instrument,
        EntryKind::Source,
        EntryKind::Attenuator,
        EntryKind::Monochromator,
        EntryKind::Mirror,
        EntryKind::Detector,
        EntryKind::Roi,
        EntryKind::Objective,
        EntryKind::Scintillator,
        EntryKind::SampleStack,
        EntryKind::SampleStackSetup,
        EntryKind::Interferometer,
        EntryKind::InterferometerSetup,
        EntryKind::Process,
        EntryKind::Acquisition,
        EntryKind::AcquisitionSetup,
    ];

    /// Catalog name of this entry type, e.g. `"sample_stack"`.
    pub fn name(&self) -> &'static str {
        match self {
            EntryKind::Exchange => "exchange",
            EntryKind::Data => "data",
            EntryKind::Sample => "sample",
            EntryKind::Experiment => "experiment",
            EntryKind::Experimenter => "experimenter",
            EntryKind::Instrument => "instrument",
            EntryKind::Source => "source",
            EntryKind::Attenuator => "attenuator",
            EntryKind::Monochromator => "monochromator",
            EntryKind::Mirror => "mirror",
            EntryKind::Detector => "detector",
            EntryKind::Roi => "roi",
            EntryKind::Objective => "objective",
            EntryKind::Scintillator => "scintillator",
            EntryKind::SampleStack => "sample_stack",
            EntryKind::SampleStackSetup => "sample_stack_setup",
            EntryKind::Interferometer => "interferometer",
            EntryKind::InterferometerSetup => "interferometer_setup",
            EntryKind::Process => "process",
            EntryKind::Acquisition => "acquisition",
            EntryKind::AcquisitionSetup => "acquisition_setup",
        }
    }

    /// The static descriptor for this entry type.
    pub fn archetype(&self) -> &'static Archetype {
        match self {
            EntryKind::Exchange => &catalog::EXCHANGE,
            EntryKind::Data => &catalog::DATA,
            EntryKind::Sample => &catalog::SAMPLE,
            EntryKind::Experiment => &catalog::EXPERIMENT,
            EntryKind::Experimenter => &catalog::EXPERIMENTER,
            EntryKind::Instrument => &catalog::INSTRUMENT,
            EntryKind::Source => &catalog::SOURCE,
            EntryKind::Attenuator => &catalog::ATTENUATOR,
            EntryKind::Monochromator => &catalog::MONOCHROMATOR,
            EntryKind::Mirror => &catalog::MIRROR,
            EntryKind::Detector => &catalog::DETECTOR,
            EntryKind::Roi => &catalog::ROI,
            EntryKind::Objective => &catalog::OBJECTIVE,
            EntryKind::Scintillator => &catalog::SCINTILLATOR,
            EntryKind::SampleStack => &catalog::SAMPLE_STACK,
            EntryKind::SampleStackSetup => &catalog::SAMPLE_STACK_SETUP,
            EntryKind::Interferometer => &catalog::INTERFEROMETER,
            EntryKind::InterferometerSetup => &catalog::INTERFEROMETER_SETUP,
            EntryKind::Process => &catalog::PROCESS,
            EntryKind::Acquisition => &catalog::ACQUISITION,
            EntryKind::AcquisitionSetup => &catalog::ACQUISITION_SETUP,
        }
    }
}
