//! Serde round trips

use crate::common::*;

#[test]
fn test_doc_path_json_roundtrip() {
    let path = DocPath::with_subkeys(
        doc_key("doc"),
        vec![s("a"), PrimitiveValue::array_index(2), PrimitiveValue::double(1.25)],
    );
    let json = serde_json::to_string(&path).unwrap();
    let restored: DocPath = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, path);
}

#[test]
fn test_doc_key_json_roundtrip() {
    let key = DocKey::with_hash(9, vec![s("h")], vec![PrimitiveValue::int64(3)]);
    let json = serde_json::to_string(&key).unwrap();
    let restored: DocKey = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, key);
    assert_eq!(restored.encode(), key.encode());
}

#[test]
fn test_doc_key_json_rejects_hashed_components_without_hash() {
    let json = r#"{"hash":null,"hashed_components":[{"String":"h"}],"range_components":[]}"#;
    let err = serde_json::from_str::<DocKey>(json).unwrap_err();
    assert!(
        err.to_string().contains("hashed components without a partition hash"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_doc_key_json_keeps_distinct_keys_distinct() {
    for key in [
        DocKey::default(),
        DocKey::new(vec![s("r")]),
        DocKey::with_hash(0, Vec::new(), Vec::new()),
        DocKey::from_redis_key(7, "users"),
    ] {
        let restored: DocKey = serde_json::from_str(&serde_json::to_string(&key).unwrap()).unwrap();
        assert_eq!(DocKey::decode_exact(restored.encode().as_slice()).unwrap(), key);
    }
}

#[test]
fn test_doc_path_json_roundtrip_non_finite_doubles() {
    let path = DocPath::with_subkeys(
        doc_key("doc"),
        vec![
            PrimitiveValue::double(f64::NAN),
            PrimitiveValue::double(f64::INFINITY),
            PrimitiveValue::double(f64::NEG_INFINITY),
            PrimitiveValue::double(-0.0),
        ],
    );
    let json = serde_json::to_string(&path).unwrap();
    let restored: DocPath = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, path);
    assert_eq!(restored.subkey(3), &PrimitiveValue::double(-0.0));
    assert_ne!(restored.subkey(3), &PrimitiveValue::double(0.0));
}
