use mindbalance_core::error::CoreError;
use mindbalance_core::models::record::ImportedRecord;
use mindbalance_core::models::resolve_client_id;

const NOW: &str = "2026-04-01T00:00:00Z";

#[test]
fn imports_camel_case_client_records() {
    let json = r#"{
        "id": "6f1c1f9e-4c1e-4b8a-9a53-1f0b2f0f2d11",
        "scaleId": "phq9",
        "scaleTitle": "PHQ-9",
        "total": 12,
        "max": 27,
        "label": "Moderate",
        "values": [2, 2, 2, 2, 2, 1, 1, 0, 0],
        "timestamp": 1767225600000
    }"#;
    let imported: ImportedRecord = serde_json::from_str(json).unwrap();
    let record = imported.into_record("ana", NOW.parse().unwrap()).unwrap();

    assert_eq!(record.scale_id, "phq9");
    assert_eq!(record.user_id, "ana");
    assert_eq!(
        record.created_at,
        "2026-01-01T00:00:00Z".parse::<jiff::Timestamp>().unwrap()
    );
}

#[test]
fn imports_snake_case_server_records() {
    let json = r#"{
        "id": "6f1c1f9e-4c1e-4b8a-9a53-1f0b2f0f2d11",
        "scale_id": "gad7",
        "scale_title": "GAD-7",
        "total": 3,
        "max": 21,
        "label": "Minimal",
        "created_at": "2026-02-14T12:00:00Z"
    }"#;
    let imported: ImportedRecord = serde_json::from_str(json).unwrap();
    let record = imported.into_record("ana", NOW.parse().unwrap()).unwrap();

    assert!(record.values.is_empty());
    assert_eq!(
        record.created_at,
        "2026-02-14T12:00:00Z".parse::<jiff::Timestamp>().unwrap()
    );
}

#[test]
fn missing_timestamps_fall_back_to_now() {
    let json = r#"{
        "id": "6f1c1f9e-4c1e-4b8a-9a53-1f0b2f0f2d11",
        "scale_id": "gad7",
        "scale_title": "GAD-7",
        "total": 3,
        "max": 21,
        "label": "Minimal"
    }"#;
    let imported: ImportedRecord = serde_json::from_str(json).unwrap();
    let record = imported.into_record("ana", NOW.parse().unwrap()).unwrap();
    assert_eq!(record.created_at, NOW.parse::<jiff::Timestamp>().unwrap());
}

#[test]
fn maps_millisecond_client_ids_to_stable_uuids() {
    let json = r#"{
        "id": "1767225600000",
        "scaleId": "phq9",
        "scaleTitle": "PHQ-9",
        "total": 4,
        "max": 27,
        "label": "Minimal",
        "values": [1, 1, 1, 1, 0, 0, 0, 0, 0],
        "timestamp": 1767225600000
    }"#;
    let first: ImportedRecord = serde_json::from_str(json).unwrap();
    let second = first.clone();

    let a = first.into_record("ana", NOW.parse().unwrap()).unwrap();
    let b = second.into_record("ana", NOW.parse().unwrap()).unwrap();
    assert_eq!(a.id, b.id);
    assert_eq!(a.id, resolve_client_id("1767225600000").unwrap());
    assert_eq!(
        a.created_at,
        "2026-01-01T00:00:00Z".parse::<jiff::Timestamp>().unwrap()
    );
    assert_ne!(
        resolve_client_id("1767225600000").unwrap(),
        resolve_client_id("1767225600001").unwrap()
    );
}

#[test]
fn uuid_ids_are_kept_as_sent() {
    let id = "6f1c1f9e-4c1e-4b8a-9a53-1f0b2f0f2d11";
    assert_eq!(
        resolve_client_id(id).unwrap(),
        uuid::Uuid::parse_str(id).unwrap()
    );
}

#[test]
fn rejects_empty_ids() {
    let json = r#"{
        "id": "  ",
        "scale_id": "gad7",
        "scale_title": "GAD-7",
        "total": 3,
        "max": 21,
        "label": "Minimal"
    }"#;
    let imported: ImportedRecord = serde_json::from_str(json).unwrap();
    assert!(matches!(
        imported.into_record("ana", NOW.parse().unwrap()),
        Err(CoreError::MissingId)
    ));
}
