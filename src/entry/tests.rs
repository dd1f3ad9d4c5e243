use super::*;
use crate::writer::StorageOptions;

#[test]
fn test_unknown_field_is_rejected() {
    let mut sample = Entry::new(EntryKind::Sample);
    let err = sample.set("wavelength", 1.0).unwrap_err();
    let SchemaError::UnknownField { kind, field } = err;
    assert_eq!(kind, "sample");
    assert_eq!(field, "wavelength");
}

#[test]
fn test_unset_fields_stay_absent() {
    let mut sample = Entry::new(EntryKind::Sample);
    sample.set("name", "Ti64").unwrap();

    let present: Vec<_> = sample.present_fields().map(|(spec, _)| spec.name).collect();
    assert_eq!(present, ["name"]);
    assert!(sample.get("temperature").is_none());
}

#[test]
fn test_present_fields_follow_archetype_order() {
    let mut sample = Entry::new(EntryKind::Sample);
    sample.set("mass", 0.002).unwrap();
    sample.set("name", "Ti64").unwrap();

    // archetype declares name before mass, regardless of assignment order
    let present: Vec<_> = sample.present_fields().map(|(spec, _)| spec.name).collect();
    assert_eq!(present, ["name", "mass"]);
}

#[test]
fn test_explicitly_absent_value() {
    let mut sample = Entry::new(EntryKind::Sample);
    sample.set("mass", FieldData::default()).unwrap();
    assert_eq!(sample.present_fields().count(), 0);
    assert!(sample.get("mass").is_some());
}

#[test]
fn test_group_name_override() {
    let entry = Entry::with_name(EntryKind::Experimenter, "experimenter_2");
    assert_eq!(entry.group_name(), "experimenter_2");
    assert_eq!(entry.path(), "/measurement/sample/experimenter_2");

    let default = Entry::new(EntryKind::Experimenter);
    assert_eq!(default.path(), "/measurement/sample/experimenter");
}

#[test]
fn test_empty_entry_name_path() {
    let data = Entry::new(EntryKind::Data);
    assert_eq!(data.path(), "/exchange");
}

#[test]
fn test_field_data_overrides() {
    let data = FieldData::new(vec![1.0, 2.0, 3.0])
        .with_units("eV")
        .with_storage(StorageOptions::gzip(4))
        .with_attr("axes", "theta:y:x");

    assert_eq!(data.value, Some(FieldValue::FloatArray(vec![1.0, 2.0, 3.0])));
    assert_eq!(data.units.as_deref(), Some("eV"));
    assert_eq!(data.storage, Some(StorageOptions::gzip(4)));
    assert_eq!(data.extra_attrs.len(), 1);
}

#[test]
fn test_value_conversions() {
    assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
    assert_eq!(FieldValue::from(7_i32), FieldValue::Int(7));
    assert_eq!(FieldValue::from(7_i64), FieldValue::Int(7));
    assert_eq!(FieldValue::from(0.5), FieldValue::Float(0.5));
    assert_eq!(
        FieldValue::from(vec![1_i64, 2]),
        FieldValue::IntArray(vec![1, 2])
    );
}
