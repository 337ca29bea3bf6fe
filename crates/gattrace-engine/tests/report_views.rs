use gattrace_engine::{RecoveryPolicy, build_timeline, extract_operations, group_by_handle};
use gattrace_types::{AttRecord, OpcodeRegistry};
use std::fs;
use std::path::Path;

// Helper to load AttRecord[] from fixture JSON
fn load_records_from_fixture(fixture_name: &str) -> Vec<AttRecord> {
    let path = Path::new("tests/fixtures").join(fixture_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse fixture: {}", path.display()))
}

#[test]
fn test_session_extraction_skips_only_the_malformed_record() {
    let records = load_records_from_fixture("att_session.json");
    let registry = OpcodeRegistry::standard();

    let extraction =
        extract_operations(&records, &registry, RecoveryPolicy::Skip).expect("extraction");

    assert_eq!(extraction.operations.len(), 5);
    assert_eq!(extraction.skipped.len(), 1);
    assert!(
        extraction.skipped[0].to_string().contains("frame 6"),
        "unexpected skip: {}",
        extraction.skipped[0]
    );
}

#[test]
fn test_session_timeline_view() {
    let records = load_records_from_fixture("att_session.json");
    let registry = OpcodeRegistry::standard();
    let extraction =
        extract_operations(&records, &registry, RecoveryPolicy::Skip).expect("extraction");

    let timeline = build_timeline(&extraction.operations);

    let frames: Vec<_> = timeline.iter().map(|e| e.frame.as_str()).collect();
    assert_eq!(frames, ["1", "2", "3", "4", "5"]);

    let deltas: Vec<_> = timeline.iter().map(|e| e.rel_time).collect();
    assert_eq!(deltas, [0.0, 0.5, 0.25, 0.25, 0.25]);

    assert_eq!(timeline[0].operation_name, "Write Request");
    assert_eq!(timeline[0].data_summary.as_deref(), Some("01"));

    // Data precedence: the read-by-type request carries both a uuid and a
    // handle range; the uuid wins.
    assert_eq!(timeline[2].operation_name, "Read By Type Request");
    assert_eq!(timeline[2].handle, 0x0001);
    assert_eq!(timeline[2].data_summary.as_deref(), Some("UUID: 0x2a00"));
}

#[test]
fn test_session_handle_group_view() {
    let records = load_records_from_fixture("att_session.json");
    let registry = OpcodeRegistry::standard();
    let extraction =
        extract_operations(&records, &registry, RecoveryPolicy::Skip).expect("extraction");

    let report = group_by_handle(&extraction.operations);

    let handles: Vec<_> = report.keys().copied().collect();
    assert_eq!(handles, [0x0001, 0x0005]);

    // Three single-operation buckets under 0x0001, none reassembled.
    let first = &report[&0x0001];
    let types: Vec<_> = first.keys().cloned().collect();
    assert_eq!(
        types,
        ["Handle Value Notification", "Read By Type Request", "Write Request"]
    );
    for bucket in first.values() {
        assert_eq!(bucket.operations.len(), 1);
        assert_eq!(bucket.combined_data, None);
    }

    // The fragmented write command sequence reassembles.
    let writes = &report[&0x0005]["Write Command"];
    assert_eq!(writes.operations.len(), 2);
    assert_eq!(writes.combined_data.as_deref(), Some("ABCD"));

    // Connection context: explicit handle, bare link context, no context.
    assert_eq!(
        first["Write Request"].operations[0].connection.as_deref(),
        Some("0x0040")
    );
    assert_eq!(
        first["Read By Type Request"].operations[0].connection,
        None
    );
    assert_eq!(
        writes.operations[0].connection.as_deref(),
        Some("Unknown")
    );
}
