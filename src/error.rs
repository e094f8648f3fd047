//! Error types for keyword value resolution.

use thiserror::Error;

use crate::model::MetadataId;

/// A keyword value could not be computed for a revision.
///
/// Resolution failures are fatal to the conversion of the revision being
/// substituted: they indicate a corrupt or incomplete upstream data set, not
/// a condition to paper over with a default. A failed resolution aborts the
/// whole `expand` call, so no partially-substituted output is ever emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The metadata store has no author recorded under this id.
    #[error("no author recorded for metadata id {0}")]
    UnknownAuthor(MetadataId),

    /// The revision timestamp cannot be represented as a calendar date.
    #[error("revision timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
}
