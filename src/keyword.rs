//! The closed RCS/CVS keyword vocabulary.
//!
//! CVS recognizes exactly eleven keyword names. The set is closed: there is
//! no user extension mechanism, and text that looks like a keyword but uses
//! an unrecognized name is never a match at the pattern level.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eleven keywords substituted by RCS/CVS.
///
/// Matching against file content is case-sensitive (only the canonical
/// spellings below occur in the wild), but dispatch from a matched name to a
/// variant tolerates case differences, mirroring the lower-cased method
/// dispatch of the historical tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Author,
    Date,
    Header,
    Id,
    Locker,
    Log,
    Name,
    RcsFile,
    Revision,
    Source,
    State,
}

impl Keyword {
    /// Every recognized keyword, in the alternation order used by CVS.
    pub const ALL: [Keyword; 11] = [
        Keyword::Author,
        Keyword::Date,
        Keyword::Header,
        Keyword::Id,
        Keyword::Locker,
        Keyword::Log,
        Keyword::Name,
        Keyword::RcsFile,
        Keyword::Revision,
        Keyword::Source,
        Keyword::State,
    ];

    /// The exact spelling CVS uses for this keyword.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Keyword::Author => "Author",
            Keyword::Date => "Date",
            Keyword::Header => "Header",
            Keyword::Id => "Id",
            Keyword::Locker => "Locker",
            Keyword::Log => "Log",
            Keyword::Name => "Name",
            Keyword::RcsFile => "RCSfile",
            Keyword::Revision => "Revision",
            Keyword::Source => "Source",
            Keyword::State => "State",
        }
    }

    /// Dispatch a matched keyword name to its variant.
    ///
    /// Case-insensitive on ASCII; returns `None` for anything outside the
    /// vocabulary.
    pub fn from_name(name: &str) -> Option<Keyword> {
        Keyword::ALL
            .into_iter()
            .find(|kw| kw.canonical_name().eq_ignore_ascii_case(name))
    }

    /// The `Author|Date|...|State` alternation, for building match patterns.
    ///
    /// Generated from [`Keyword::ALL`] so the pattern grammar and the enum
    /// cannot drift apart.
    pub(crate) fn alternation() -> String {
        Keyword::ALL
            .iter()
            .map(|kw| kw.canonical_name())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}
