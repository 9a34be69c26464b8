//! Caller-side limit policy

use crate::common::*;
use docpath::{Error, LimitError, Limits};

#[test]
fn test_default_limits_accept_typical_path() {
    let path = DocPath::from_redis_key(7, "users", "alice");
    assert!(Limits::default().validate_path(&path).is_ok());
}

#[test]
fn test_deep_path_rejected_only_when_caller_checks() {
    let mut path = DocPath::new(doc_key("doc"));
    for i in 0..300 {
        path.add_subkey(PrimitiveValue::array_index(i));
    }
    // Building the path itself never fails
    assert_eq!(path.num_subkeys(), 300);

    let err = Limits::default().validate_path(&path).unwrap_err();
    assert_eq!(
        err,
        LimitError::TooManySubkeys {
            actual: 300,
            max: 256
        }
    );
}

#[test]
fn test_limit_error_converts_to_crate_error() {
    let limits = Limits::with_small_limits();
    let path = DocPath::new(doc_key("doc")).subkey_of(s(&"x".repeat(100)));

    let result: docpath::Result<()> = limits.validate_path(&path).map_err(Error::from);
    assert!(matches!(
        result,
        Err(Error::Limit(LimitError::SubkeyTooLong { actual: 100, .. }))
    ));
}
