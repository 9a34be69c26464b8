//! Document paths
//!
//! A `DocPath` names one subdocument: the encoded key of the top-level
//! document plus the chain of subkeys leading from the document root down to
//! the subdocument. It is a logical address. It does not carry the exact
//! storage keys or any per-level write timestamps.
//!
//! # Invariants
//!
//! - Subkey order is traversal order. Reordering subkeys addresses a different
//!   subdocument.
//! - The encoded document key is never parsed or re-encoded here. It is shared
//!   behind an `Arc`, so many paths into the same document reuse one buffer.
//! - A path with subkeys `[s1, .., sn]` addresses a subdocument nested inside
//!   the one addressed by `[s1, .., s(n-1)]`. Paths only ever grow by
//!   appending, which keeps that prefix relation intact.
//!
//! # Contract violations
//!
//! [`DocPath::subkey`] with an out-of-range index and [`DocPath::last_subkey`]
//! on a path with no subkeys panic. Those are caller bugs that would otherwise
//! silently target the wrong subdocument.

use crate::doc_key::{best_effort_key_to_str, format_values, DocKey};
use crate::key_bytes::KeyBytes;
use crate::primitive_value::PrimitiveValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Address of a subdocument: encoded document key + ordered subkeys
///
/// # Examples
///
/// ```
/// use docpath_core::{DocKey, DocPath, PrimitiveValue};
///
/// let doc_key = DocKey::new(vec![PrimitiveValue::string("user:1")]).encode();
///
/// // Built by descent
/// let mut walked = DocPath::new(doc_key.clone());
/// walked.add_subkey(PrimitiveValue::string("address"));
/// walked.add_subkey(PrimitiveValue::string("city"));
///
/// // Built from a list
/// let direct = DocPath::with_subkeys(
///     doc_key,
///     vec![PrimitiveValue::string("address"), PrimitiveValue::string("city")],
/// );
///
/// assert_eq!(walked, direct);
/// assert_eq!(walked.last_subkey(), &PrimitiveValue::string("city"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocPath {
    encoded_doc_key: Arc<KeyBytes>,
    subkeys: Vec<PrimitiveValue>,
}

impl DocPath {
    /// Path to the whole document (no subkeys)
    ///
    /// Accepts either an owned `KeyBytes` or an `Arc<KeyBytes>` already shared
    /// with other paths.
    pub fn new(encoded_doc_key: impl Into<Arc<KeyBytes>>) -> Self {
        DocPath {
            encoded_doc_key: encoded_doc_key.into(),
            subkeys: Vec::new(),
        }
    }

    /// Path with an explicit subkey list, kept in the given order
    ///
    /// Subkeys are not checked for meaning in context (an array index under a
    /// map is accepted); that is up to whoever resolves the path.
    pub fn with_subkeys(
        encoded_doc_key: impl Into<Arc<KeyBytes>>,
        subkeys: impl IntoIterator<Item = PrimitiveValue>,
    ) -> Self {
        DocPath {
            encoded_doc_key: encoded_doc_key.into(),
            subkeys: subkeys.into_iter().collect(),
        }
    }

    /// Path for a flat Redis-style entry
    ///
    /// The document key is built from `hash` and `key` (see
    /// [`DocKey::from_redis_key`] for how `hash` is narrowed to 16 bits). A
    /// non-empty `subkey` becomes the single string subkey.
    ///
    /// An empty `subkey` means "no subkey": the result addresses the whole
    /// document. A genuine empty-string subkey cannot be expressed through
    /// this constructor; use [`DocPath::with_subkeys`] for that.
    pub fn from_redis_key(hash: u32, key: &str, subkey: &str) -> Self {
        let mut doc_path = DocPath::new(DocKey::from_redis_key(hash, key).encode());
        if subkey.is_empty() {
            trace!(key, "Empty Redis subkey, addressing whole document");
        } else {
            doc_path.add_subkey(PrimitiveValue::string(subkey));
        }
        doc_path
    }

    /// Encoded key of the top-level document
    pub fn encoded_doc_key(&self) -> &KeyBytes {
        &self.encoded_doc_key
    }

    /// Shared handle to the encoded document key, for building sibling paths
    pub fn shared_doc_key(&self) -> Arc<KeyBytes> {
        Arc::clone(&self.encoded_doc_key)
    }

    /// Number of subkeys
    pub fn num_subkeys(&self) -> usize {
        self.subkeys.len()
    }

    /// Subkey at position `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_subkeys()`.
    pub fn subkey(&self, i: usize) -> &PrimitiveValue {
        assert!(
            i < self.subkeys.len(),
            "subkey index {} out of range for DocPath with {} subkeys",
            i,
            self.subkeys.len()
        );
        &self.subkeys[i]
    }

    /// Last subkey
    ///
    /// # Panics
    ///
    /// Panics if the path has no subkeys.
    pub fn last_subkey(&self) -> &PrimitiveValue {
        match self.subkeys.last() {
            Some(subkey) => subkey,
            None => panic!("last_subkey called on DocPath with no subkeys"),
        }
    }

    /// All subkeys, root first
    pub fn subkeys(&self) -> &[PrimitiveValue] {
        &self.subkeys
    }

    /// Descend one level, taking ownership of the subkey
    pub fn add_subkey(&mut self, subkey: PrimitiveValue) {
        self.subkeys.push(subkey);
    }

    /// Descend one level, copying the subkey
    pub fn add_subkey_ref(&mut self, subkey: &PrimitiveValue) {
        self.subkeys.push(subkey.clone());
    }

    /// Descend one level (builder pattern)
    pub fn subkey_of(mut self, subkey: PrimitiveValue) -> Self {
        self.subkeys.push(subkey);
        self
    }

    /// Path to the enclosing subdocument (None for a whole-document path)
    pub fn parent(&self) -> Option<DocPath> {
        if self.subkeys.is_empty() {
            return None;
        }
        Some(DocPath {
            encoded_doc_key: Arc::clone(&self.encoded_doc_key),
            subkeys: self.subkeys[..self.subkeys.len() - 1].to_vec(),
        })
    }

    /// Check if this path addresses `other` or one of its enclosing subdocuments
    ///
    /// Both paths must name the same document. A path is its own ancestor.
    pub fn is_ancestor_of(&self, other: &DocPath) -> bool {
        self.encoded_doc_key == other.encoded_doc_key
            && other.subkeys.starts_with(&self.subkeys)
    }

    /// Check if this path is an ancestor of `other` and not equal to it
    pub fn is_strict_ancestor_of(&self, other: &DocPath) -> bool {
        self.subkeys.len() < other.subkeys.len() && self.is_ancestor_of(other)
    }

    /// Check if this path is nested inside `other` (or equal)
    pub fn is_descendant_of(&self, other: &DocPath) -> bool {
        other.is_ancestor_of(self)
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DocPath({}, {})",
            best_effort_key_to_str(self.encoded_doc_key.as_slice()),
            format_values(&self.subkeys)
        )
    }
}
