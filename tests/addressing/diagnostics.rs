//! Diagnostics rendering and logging

use crate::common::*;
use docpath::best_effort_key_to_str;

#[test]
fn test_display_decodes_document_key() {
    let path = DocPath::with_subkeys(doc_key("user:1"), vec![s("address"), s("city")]);
    assert_eq!(
        path.to_string(),
        "DocPath(DocKey([], [\"user:1\"]), [\"address\", \"city\"])"
    );
}

#[test]
fn test_display_falls_back_for_opaque_key() {
    let path = DocPath::new(KeyBytes::from_bytes(b"\xffopaque".to_vec()));
    assert_eq!(path.to_string(), "DocPath(\"\\xffopaque\", [])");
}

#[test]
fn test_best_effort_renders_full_physical_key() {
    let path = DocPath::from_redis_key(7, "users", "alice");
    let mut physical = path.encoded_doc_key().clone();
    path.last_subkey().append_to_key(&mut physical);

    assert_eq!(
        best_effort_key_to_str(physical.as_slice()),
        "SubDocKey(DocKey(0x0007, [\"users\"], []), [\"alice\"])"
    );
}

#[test]
fn test_masked_hash_is_logged() {
    let (path, logs) = with_captured_logs(|| DocPath::from_redis_key(0x0001_0007, "users", ""));
    assert_eq!(path, DocPath::from_redis_key(7, "users", ""));

    let output = logs.contents();
    assert!(output.contains("WARN"), "missing warning in: {output}");
    assert!(output.contains("masking"), "missing message in: {output}");
}

#[test]
fn test_in_range_hash_is_not_logged_as_warning() {
    let (_, logs) = with_captured_logs(|| DocPath::from_redis_key(0xFFFF, "users", "alice"));
    assert!(!logs.contents().contains("WARN"));
}

#[test]
fn test_collapsed_subkey_is_traced() {
    let (_, logs) = with_captured_logs(|| DocPath::from_redis_key(7, "users", ""));
    assert!(logs.contents().contains("Empty Redis subkey"));
}
