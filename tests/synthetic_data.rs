use std::fs;

use corpusfetch::synthetic::{self, ConalaRecord, StackSample};

#[test]
fn conala_substitute_has_fixed_record_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = synthetic::write_conala_synthetic(dir.path()).unwrap();

    let records: Vec<ConalaRecord> =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(records.len(), synthetic::CONALA_SYNTHETIC_RECORDS);
    assert_eq!(records[0].question_id, 0);
    assert_eq!(records[49].question_id, 49);
    assert!(!records[0].snippet.is_empty());
}

#[test]
fn stack_sample_has_fixed_record_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = synthetic::write_stack_samples(dir.path()).unwrap();

    let records: Vec<StackSample> =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(records.len(), synthetic::STACK_SAMPLE_RECORDS);
    assert_eq!(records[0].tags, ["python", "algorithm", "search"]);
    assert!(records[0].answer.contains("binary_search"));
}

#[test]
fn writers_create_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a/b/conala");
    synthetic::write_conala_synthetic(&nested).unwrap();
    assert!(nested.join("conala-synthetic.json").exists());
}
