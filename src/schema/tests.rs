use super::*;

#[test]
fn test_catalog_is_complete() {
    assert_eq!(EntryKind::ALL.len(), 21);
    for kind in EntryKind::ALL {
        let archetype = kind.archetype();
        assert!(
            !archetype.fields.is_empty(),
            "{} declares no fields",
            kind.name()
        );
        assert!(archetype.root.starts_with('/'));
        assert!(!archetype.docstring.is_empty());
    }
}

#[test]
fn test_kind_names_are_unique() {
    for (i, a) in EntryKind::ALL.iter().enumerate() {
        for b in &EntryKind::ALL[i + 1..] {
            assert_ne!(a.name(), b.name());
        }
    }
}

#[test]
fn test_field_names_avoid_reserved_keys() {
    for kind in EntryKind::ALL {
        for field in kind.archetype().fields {
            assert!(!field.name.starts_with('_'));
            assert!(!matches!(
                field.name,
                "root" | "entry_name" | "docstring" | "value" | "dataset_opts"
            ));
        }
    }
}

#[test]
fn test_sample_archetype() {
    let sample = EntryKind::Sample.archetype();
    assert_eq!(sample.root, "/measurement");
    assert_eq!(sample.entry_name, "sample");
    assert_eq!(sample.default_path(), "/measurement/sample");

    let mass = sample.field("mass").unwrap();
    assert_eq!(mass.units, Some("kg"));
    let name = sample.field("name").unwrap();
    assert_eq!(name.units, Some("text"));
    assert!(sample.field("does_not_exist").is_none());
}

#[test]
fn test_rootless_entry_names() {
    // exchange, data and process write directly into their root group
    assert_eq!(EntryKind::Exchange.archetype().default_path(), "/exchange");
    assert_eq!(EntryKind::Data.archetype().default_path(), "/exchange");
    assert_eq!(EntryKind::Process.archetype().default_path(), "/process");
}

#[test]
fn test_nested_archetype_roots() {
    assert_eq!(
        EntryKind::Roi.archetype().root,
        "/measurement/instrument/detector"
    );
    assert_eq!(
        EntryKind::AcquisitionSetup.archetype().default_path(),
        "/process/acquisition/setup"
    );
}

#[test]
fn test_archetype_json_docs() {
    let json = EntryKind::Sample.archetype().to_json().unwrap();
    assert!(json.contains("\"root\": \"/measurement\""));
    assert!(json.contains("Descriptive name of the sample."));
    assert!(json.contains("\"kg\""));

    // fields without units serialize without a units key
    let json = EntryKind::AcquisitionSetup.archetype().to_json().unwrap();
    assert!(json.contains("number_of_projections"));
}
