use super::*;
use crate::entry::FieldData;
use crate::schema::EntryKind;

use hdf5::types::VarLenUnicode;
use tempfile::tempdir;

fn read_string(file: &File, path: &str) -> String {
    file.dataset(path)
        .unwrap()
        .read_scalar::<VarLenUnicode>()
        .unwrap()
        .to_string()
}

fn read_units(file: &File, path: &str) -> String {
    file.dataset(path)
        .unwrap()
        .attr("units")
        .unwrap()
        .read_scalar::<VarLenUnicode>()
        .unwrap()
        .to_string()
}

#[test]
fn test_fresh_file_bootstraps_exchange() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("fresh.h5")).unwrap();

    assert_eq!(dx.manifest().as_deref(), Some("exchange"));
    let mut members = dx.hdf5().member_names().unwrap();
    members.sort();
    assert_eq!(members, ["exchange", "implements"]);
}

#[test]
fn test_manifest_accumulates_in_first_occurrence_order() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("manifest.h5")).unwrap();

    dx.create_top_level_group("measurement").unwrap();
    dx.create_top_level_group("process").unwrap();
    assert_eq!(dx.manifest().as_deref(), Some("exchange:measurement:process"));

    assert!(dx.hdf5().group("measurement").is_ok());
    assert!(dx.hdf5().group("process").is_ok());
}

#[test]
fn test_create_top_level_group_is_idempotent() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("idem.h5")).unwrap();

    dx.create_top_level_group("measurement").unwrap();
    dx.create_top_level_group("measurement").unwrap();

    assert_eq!(dx.manifest().as_deref(), Some("exchange:measurement"));
    let mut members = dx.hdf5().member_names().unwrap();
    members.sort();
    assert_eq!(members, ["exchange", "implements", "measurement"]);
}

#[test]
fn test_absent_field_writes_no_leaf() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("absent.h5")).unwrap();

    let mut sample = Entry::new(EntryKind::Sample);
    sample.set("name", "Ti64").unwrap();
    dx.add_entry(&sample, false).unwrap();

    let group = dx.hdf5().group("measurement/sample").unwrap();
    assert!(group.link_exists("name"));
    assert!(!group.link_exists("temperature"));
}

#[test]
fn test_collision_skips_without_overwrite() {
    // make the duplicate-leaf warning visible under RUST_LOG
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("skip.h5")).unwrap();

    let mut first = Entry::new(EntryKind::Sample);
    first.set("name", "Ti64").unwrap();
    dx.add_entry(&first, false).unwrap();

    let mut second = Entry::new(EntryKind::Sample);
    second.set("name", "Al7075").unwrap();
    dx.add_entry(&second, false).unwrap();

    assert_eq!(read_string(dx.hdf5(), "measurement/sample/name"), "Ti64");
}

#[test]
fn test_collision_replaces_with_overwrite() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("overwrite.h5")).unwrap();

    let mut first = Entry::new(EntryKind::Sample);
    first
        .set("name", FieldData::new("Ti64").with_attr("batch", "a"))
        .unwrap();
    dx.add_entry(&first, false).unwrap();

    let mut second = Entry::new(EntryKind::Sample);
    second.set("name", "Al7075").unwrap();
    dx.add_entry(&second, true).unwrap();

    let leaf = dx.hdf5().dataset("measurement/sample/name").unwrap();
    assert_eq!(
        leaf.read_scalar::<VarLenUnicode>().unwrap().to_string(),
        "Al7075"
    );
    // no attribute merge: the replacement carries only its own attributes
    assert!(leaf.attr("batch").is_err());
    assert_eq!(read_units(dx.hdf5(), "measurement/sample/name"), "text");
}

#[test]
fn test_units_attribute_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("units.h5");

    let dx = DxFile::create(&path).unwrap();
    let mut sample = Entry::new(EntryKind::Sample);
    sample.set("mass", 0.002).unwrap();
    dx.add_entry(&sample, false).unwrap();
    dx.close().unwrap();

    let reopened = DxFile::open(&path).unwrap();
    let leaf = reopened.hdf5().dataset("measurement/sample/mass").unwrap();
    assert_eq!(
        leaf.attr("units")
            .unwrap()
            .read_scalar::<VarLenUnicode>()
            .unwrap()
            .to_string(),
        "kg"
    );
    // the attribute is named "units", never "unit"
    assert!(leaf.attr("unit").is_err());
}

#[test]
fn test_units_override_wins() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("override.h5")).unwrap();

    let mut mono = Entry::new(EntryKind::Monochromator);
    mono.set("energy", FieldData::new(30.0).with_units("keV"))
        .unwrap();
    dx.add_entry(&mono, false).unwrap();

    assert_eq!(
        read_units(dx.hdf5(), "measurement/instrument/monochromator/energy"),
        "keV"
    );
}

#[test]
fn test_field_without_units_has_no_units_attribute() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("no_units.h5")).unwrap();

    let mut setup = Entry::new(EntryKind::AcquisitionSetup);
    setup.set("number_of_projections", 1500_i64).unwrap();
    dx.add_entry(&setup, false).unwrap();

    let leaf = dx
        .hdf5()
        .dataset("process/acquisition/setup/number_of_projections")
        .unwrap();
    assert_eq!(leaf.read_scalar::<i64>().unwrap(), 1500);
    assert!(leaf.attr("units").is_err());
}

#[test]
fn test_array_payload_with_storage_options() {
    let dir = tempdir().unwrap();
    let dx = DxFile::create(dir.path().join("array.h5")).unwrap();

    let theta: Vec<f64> = (0..360).map(f64::from).collect();
    let mut acq = Entry::new(EntryKind::Acquisition);
    acq.set(
        "image_theta",
        FieldData::new(theta.clone()).with_storage(StorageOptions::gzip(4).with_chunk(vec![90])),
    )
    .unwrap();
    dx.add_entry(&acq, false).unwrap();

    let leaf = dx.hdf5().dataset("process/acquisition/image_theta").unwrap();
    assert_eq!(leaf.read_raw::<f64>().unwrap(), theta);
    assert_eq!(read_units(dx.hdf5(), "process/acquisition/image_theta"), "degree");
}

#[test]
fn test_append_preserves_existing_structure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("append.h5");

    let dx = DxFile::create(&path).unwrap();
    dx.create_top_level_group("measurement").unwrap();
    dx.close().unwrap();

    let dx = DxFile::append(&path).unwrap();
    assert_eq!(dx.manifest().as_deref(), Some("exchange:measurement"));
}

#[test]
fn test_open_warns_but_succeeds_on_nonconforming_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bare.h5");
    hdf5::File::create(&path).unwrap().close().unwrap();

    // missing manifest and exchange group is a warning, not an error
    let dx = DxFile::open(&path).unwrap();
    assert_eq!(dx.manifest(), None);
}
