//! cvs2svn-keywords: RCS/CVS keyword expansion for repository conversion
//!
//! This crate reproduces the keyword-substitution behavior of legacy
//! RCS/CVS tooling so that converted file content is byte-identical to what
//! CVS itself would have checked out:
//!
//! - The closed eleven-keyword vocabulary and its match grammar
//! - Per-keyword value computation against revision metadata
//! - `expand` / `collapse` transforms over decoded text or raw bytes
//! - The CVS 1.11 ("legacy") and 1.12 ("modern") date format variants
//!
//! The engine is purely functional per call: the caller supplies the
//! revision context and metadata store, and configuration (the date format)
//! is fixed at construction, so concurrent use needs no locking.
//!
//! ```
//! use std::sync::Arc;
//! use cvs2svn_keywords::{
//!     collapse_keywords, CvsFile, DateFormat, InMemoryMetadataStore, KeywordExpander,
//!     Project, RevisionReference,
//! };
//!
//! let mut store = InMemoryMetadataStore::new();
//! store.insert_author(1, "jrandom");
//!
//! let rev = RevisionReference {
//!     revision: "1.3".to_string(),
//!     timestamp: 1_609_459_200,
//!     metadata_id: 1,
//!     file: Arc::new(CvsFile {
//!         rcs_basename: "foo.c".to_string(),
//!         dir_components: vec![],
//!         project: Arc::new(Project {
//!             repository_root: "/cvsroot".to_string(),
//!             module: "proj".to_string(),
//!         }),
//!     }),
//! };
//!
//! let expander = KeywordExpander::new(&store, DateFormat::Modern);
//! let expanded = expander.expand("$Author$", &rev).unwrap();
//! assert_eq!(expanded, "$Author: jrandom $");
//! assert_eq!(collapse_keywords(expanded.as_str()), "$Author$");
//! ```

pub mod error;
pub mod keyword;
pub mod model;
pub mod pattern;
pub mod resolver;
pub mod substitution;
pub mod time_range;

pub use error::ResolveError;
pub use keyword::Keyword;
pub use model::{CvsFile, InMemoryMetadataStore, MetadataId, MetadataStore, Project, RevisionReference};
pub use pattern::{Site, Subject};
pub use resolver::DateFormat;
pub use substitution::{collapse_keywords, KeywordExpander};
pub use time_range::TimeRange;
