//! Revision, file, and project context consumed by keyword resolution.
//!
//! These types are owned and supplied by the surrounding conversion
//! pipeline; the substitution engine borrows them for the duration of one
//! call and never mutates them. Project and file objects are shared across
//! many revisions, hence the `Arc`s.

use std::collections::HashMap;
use std::sync::Arc;

/// Opaque id under which a revision's commit metadata is stored.
pub type MetadataId = u64;

/// The project a converted file belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Root of the CVS repository, e.g. `/cvsroot`.
    pub repository_root: String,
    /// Module name within the repository, e.g. `proj`.
    pub module: String,
}

/// One file under conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvsFile {
    /// Basename without the `,v` suffix, e.g. `foo.c`.
    pub rcs_basename: String,
    /// Directory components of the file's path relative to the project
    /// root, in order, excluding the basename. Empty for top-level files.
    pub dir_components: Vec<String>,
    pub project: Arc<Project>,
}

impl CvsFile {
    /// Path components of the RCS file: the directory components followed
    /// by the basename with its `,v` suffix.
    pub fn rcs_path_components(&self) -> Vec<String> {
        let mut components = self.dir_components.clone();
        components.push(format!("{},v", self.rcs_basename));
        components
    }
}

/// One historical revision of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionReference {
    /// CVS revision number, e.g. `1.3` or `1.2.4.1`.
    pub revision: String,
    /// Commit time in seconds since the Unix epoch, UTC.
    pub timestamp: i64,
    /// Key for looking up the commit's author in the metadata store.
    pub metadata_id: MetadataId,
    pub file: Arc<CvsFile>,
}

/// Read access to per-commit metadata recorded during history collection.
///
/// The store is assumed to be an in-memory, non-blocking read; the engine
/// performs at most one lookup per `Author`-bearing match and holds no
/// reference to the store beyond the call.
pub trait MetadataStore {
    /// The original author recorded for `metadata_id`, or `None` if the id
    /// is absent from the store.
    fn lookup_author(&self, metadata_id: MetadataId) -> Option<String>;
}

/// Metadata store backed by a plain map, as populated by the collection
/// passes of the conversion pipeline.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataStore {
    authors: HashMap<MetadataId, String>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the author for a metadata id, replacing any previous entry.
    pub fn insert_author(&mut self, metadata_id: MetadataId, author: impl Into<String>) {
        self.authors.insert(metadata_id, author.into());
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn lookup_author(&self, metadata_id: MetadataId) -> Option<String> {
        self.authors.get(&metadata_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_in(dirs: &[&str]) -> CvsFile {
        CvsFile {
            rcs_basename: "foo.c".to_string(),
            dir_components: dirs.iter().map(|s| s.to_string()).collect(),
            project: Arc::new(Project {
                repository_root: "/cvsroot".to_string(),
                module: "proj".to_string(),
            }),
        }
    }

    #[test]
    fn rcs_path_components_append_v_suffix() {
        let file = file_in(&["lib", "util"]);
        assert_eq!(file.rcs_path_components(), vec!["lib", "util", "foo.c,v"]);
    }

    #[test]
    fn top_level_file_has_single_component() {
        let file = file_in(&[]);
        assert_eq!(file.rcs_path_components(), vec!["foo.c,v"]);
    }

    #[test]
    fn in_memory_store_lookup() {
        let mut store = InMemoryMetadataStore::new();
        store.insert_author(7, "alice");
        assert_eq!(store.lookup_author(7).as_deref(), Some("alice"));
        assert_eq!(store.lookup_author(8), None);
    }
}
