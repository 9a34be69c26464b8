//! Building paths by list and by descent

use crate::common::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_address_city_by_descent_matches_list() {
    let key = doc_key("user:42");

    let mut walked = DocPath::new(key.clone());
    walked.add_subkey(s("address"));
    walked.add_subkey(s("city"));

    let direct = DocPath::with_subkeys(key, vec![s("address"), s("city")]);

    assert_eq!(walked, direct);
    assert_eq!(walked.num_subkeys(), 2);
    assert_eq!(walked.subkey(0), &s("address"));
    assert_eq!(walked.last_subkey(), &s("city"));
}

#[test]
fn test_mixed_subkey_kinds_read_back_in_order() {
    let subkeys = vec![
        s("orders"),
        PrimitiveValue::array_index(0),
        s("items"),
        PrimitiveValue::int64(-7),
        PrimitiveValue::bool(true),
        PrimitiveValue::double(0.5),
        PrimitiveValue::null(),
    ];
    let path = DocPath::with_subkeys(doc_key("cart"), subkeys.clone());

    assert_eq!(path.encoded_doc_key(), &doc_key("cart"));
    assert_eq!(path.subkeys(), subkeys.as_slice());
    for (i, subkey) in subkeys.iter().enumerate() {
        assert_eq!(path.subkey(i), subkey);
    }
}

#[test]
fn test_explicit_empty_list_addresses_whole_document() {
    let path = DocPath::with_subkeys(doc_key("doc"), Vec::new());
    assert_eq!(path.num_subkeys(), 0);
    assert!(path.parent().is_none());
}

#[test]
#[should_panic(expected = "no subkeys")]
fn test_last_subkey_on_whole_document_path_panics() {
    let path = DocPath::with_subkeys(doc_key("doc"), Vec::new());
    let _ = path.last_subkey();
}

#[test]
#[should_panic(expected = "out of range")]
fn test_subkey_past_end_panics() {
    let path = DocPath::new(doc_key("doc")).subkey_of(s("only"));
    let _ = path.subkey(1);
}

#[test]
fn test_many_paths_share_one_document_key() {
    let shared = Arc::new(doc_key("big-document"));
    let paths: Vec<DocPath> = (0..100)
        .map(|i| DocPath::new(Arc::clone(&shared)).subkey_of(PrimitiveValue::array_index(i)))
        .collect();

    assert_eq!(Arc::strong_count(&shared), 101);
    for path in &paths {
        assert!(Arc::ptr_eq(&path.shared_doc_key(), &shared));
    }
}

#[test]
fn test_frozen_path_shared_across_threads() {
    let path = Arc::new(
        DocPath::new(doc_key("doc"))
            .subkey_of(s("a"))
            .subkey_of(s("b")),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = Arc::clone(&path);
            thread::spawn(move || path.last_subkey().clone())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), s("b"));
    }
}
