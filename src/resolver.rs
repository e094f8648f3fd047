//! Per-keyword value computation against a revision's metadata.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::keyword::Keyword;
use crate::model::{MetadataStore, RevisionReference};

/// Marker emitted for keywords whose historical value cannot be reproduced
/// after conversion.
const UNSUPPORTED: &str = "not supported by cvs2svn";

/// How the `Date` keyword (and the date portion of `Header`/`Id`) is
/// rendered.
///
/// Select once when constructing the engine; the choice only matters for
/// verifying a conversion byte-for-byte against a particular CVS version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY/MM/DD HH:MM:SS`, as emitted by CVS 1.11 and rcs.
    Legacy,
    /// `YYYY-MM-DD HH:MM:SS`, as emitted by CVS 1.12.
    #[default]
    Modern,
}

impl DateFormat {
    fn strftime(self) -> &'static str {
        match self {
            DateFormat::Legacy => "%Y/%m/%d %H:%M:%S",
            DateFormat::Modern => "%Y-%m-%d %H:%M:%S",
        }
    }

    /// Render a unix timestamp in UTC.
    pub(crate) fn render(self, timestamp: i64) -> Result<String, ResolveError> {
        let datetime = Utc
            .timestamp_opt(timestamp, 0)
            .single()
            .ok_or(ResolveError::TimestampOutOfRange(timestamp))?;
        Ok(datetime.format(self.strftime()).to_string())
    }
}

/// Computes replacement values for one revision.
///
/// Borrowed context only; nothing is cached across calls, since every call
/// may carry a different revision. Helper values (`date`, `author`, ...)
/// are recomputed where `Header` and `Id` reuse them.
pub(crate) struct Resolver<'a> {
    revision: &'a RevisionReference,
    store: &'a dyn MetadataStore,
    date_format: DateFormat,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        revision: &'a RevisionReference,
        store: &'a dyn MetadataStore,
        date_format: DateFormat,
    ) -> Self {
        Self {
            revision,
            store,
            date_format,
        }
    }

    /// The replacement value for `keyword`.
    ///
    /// Values never contain `$` or newline: every rule below builds from
    /// revision numbers, formatted dates, path components, and fixed
    /// literals, none of which carry the delimiter bytes.
    pub(crate) fn resolve(&self, keyword: Keyword) -> Result<String, ResolveError> {
        Ok(match keyword {
            Keyword::Author => self.author()?,
            Keyword::Date => self.date()?,
            Keyword::Header => format!(
                "{} {} {} {} Exp",
                self.source(),
                self.revision.revision,
                self.date()?,
                self.author()?,
            ),
            Keyword::Id => format!(
                "{} {} {} {} Exp",
                self.rcsfile(),
                self.revision.revision,
                self.date()?,
                self.author()?,
            ),
            // Converted repositories carry no locks; treat kvl like kv.
            Keyword::Locker => String::new(),
            Keyword::Log => UNSUPPORTED.to_string(),
            // Creating a symbol after conversion does not check out the
            // revision again, so Name cannot be reproduced either.
            Keyword::Name => UNSUPPORTED.to_string(),
            Keyword::RcsFile => self.rcsfile(),
            Keyword::Revision => self.revision.revision.clone(),
            Keyword::Source => self.source(),
            // Only live revisions are converted.
            Keyword::State => "Exp".to_string(),
        })
    }

    fn author(&self) -> Result<String, ResolveError> {
        let id = self.revision.metadata_id;
        self.store
            .lookup_author(id)
            .ok_or(ResolveError::UnknownAuthor(id))
    }

    fn date(&self) -> Result<String, ResolveError> {
        self.date_format.render(self.revision.timestamp)
    }

    fn rcsfile(&self) -> String {
        format!("{},v", self.revision.file.rcs_basename)
    }

    fn source(&self) -> String {
        let project = &self.revision.file.project;
        let mut path = format!("{}/{}", project.repository_root, project.module);
        for component in self.revision.file.rcs_path_components() {
            path.push('/');
            path.push_str(&component);
        }
        path
    }
}
