//! docpath - Subdocument addressing for an ordered key-value document store
//!
//! A document lives under one encoded top-level key. Any value nested inside it
//! is named by a [`DocPath`]: that encoded key plus the ordered chain of
//! subkeys leading from the document root down to the value.
//!
//! # Quick Start
//!
//! ```
//! use docpath::{DocKey, DocPath, PrimitiveValue};
//!
//! // Flat Redis-style entry: hash 7, key "users", field "alice"
//! let field = DocPath::from_redis_key(7, "users", "alice");
//! assert_eq!(field.num_subkeys(), 1);
//!
//! // Nested path built while walking into a document
//! let doc_key = DocKey::new(vec![PrimitiveValue::string("user:1")]).encode();
//! let mut path = DocPath::new(doc_key);
//! path.add_subkey(PrimitiveValue::string("address"));
//! path.add_subkey(PrimitiveValue::string("city"));
//! assert_eq!(path.last_subkey(), &PrimitiveValue::string("city"));
//! ```
//!
//! # Architecture
//!
//! All types live in `docpath-core`; this crate re-exports them.

// Re-export the public API from docpath-core
pub use docpath_core::*;
