//! The expand and collapse drivers.
//!
//! `expand` rewrites every expand-form site as `$Name: value $`, computing
//! values against the supplied revision; it is idempotent, so content that
//! already carries expanded keywords is refreshed rather than corrupted.
//! `collapse_keywords` strips values back to bare `$Name$` tokens and needs
//! no revision context. Everything outside matched sites passes through
//! byte-for-byte.

use tracing::trace;

use crate::error::ResolveError;
use crate::keyword::Keyword;
use crate::model::{MetadataStore, RevisionReference};
use crate::pattern::{Site, Subject};
use crate::resolver::{DateFormat, Resolver};

/// Expands RCS/CVS keywords against revision metadata.
///
/// Holds only its construction-time inputs; every `expand` call is an
/// independent, synchronous transform, so one expander can be shared
/// freely across threads.
pub struct KeywordExpander<'a> {
    store: &'a dyn MetadataStore,
    date_format: DateFormat,
}

impl<'a> KeywordExpander<'a> {
    pub fn new(store: &'a dyn MetadataStore, date_format: DateFormat) -> Self {
        Self { store, date_format }
    }

    /// Return `text` with keywords expanded for `revision`,
    /// e.g. `$Author$` -> `$Author: jrandom $`.
    ///
    /// Works over `&str` or `&[u8]`; byte mode substitutes without decoding
    /// and agrees with text mode on valid UTF-8 input. Every site is
    /// resolved before any output is assembled: a resolution failure aborts
    /// the call rather than emitting partially-substituted content.
    pub fn expand<S>(&self, text: &S, revision: &RevisionReference) -> Result<S::Owned, ResolveError>
    where
        S: Subject + ?Sized,
    {
        let sites = text.expand_sites();
        trace!(
            file = %revision.file.rcs_basename,
            revision = %revision.revision,
            sites = sites.len(),
            "expanding keywords"
        );

        let resolver = Resolver::new(revision, self.store, self.date_format);
        let mut replacements = Vec::with_capacity(sites.len());
        for site in &sites {
            let spelling = text.name_str(site.name.clone());
            // The alternation is generated from the Keyword table, so a
            // matched name that fails dispatch is a contract violation.
            let keyword = Keyword::from_name(spelling)
                .expect("matched keyword name missing from dispatch table");
            let value = resolver.resolve(keyword)?;
            replacements.push(format!("${spelling}: {value} $"));
        }

        Ok(splice(text, &sites, &replacements))
    }
}

/// Return `text` with keywords collapsed,
/// e.g. `$Author: jrandom $` -> `$Author$`.
///
/// Bare `$Name$` tokens carry no value to strip and are left untouched.
pub fn collapse_keywords<S>(text: &S) -> S::Owned
where
    S: Subject + ?Sized,
{
    let sites = text.collapse_sites();
    trace!(sites = sites.len(), "collapsing keywords");

    let replacements: Vec<String> = sites
        .iter()
        .map(|site| format!("${}$", text.name_str(site.name.clone())))
        .collect();

    splice(text, &sites, &replacements)
}

/// Rebuild the subject with each site replaced, copying the text between
/// sites verbatim. Sites are leftmost-first and non-overlapping.
fn splice<S>(text: &S, sites: &[Site], replacements: &[String]) -> S::Owned
where
    S: Subject + ?Sized,
{
    let mut out = S::owned_with_capacity(text.raw_len());
    let mut copied_to = 0;
    for (site, replacement) in sites.iter().zip(replacements) {
        S::push_slice(&mut out, text.slice_range(copied_to..site.span.start));
        S::push_replacement(&mut out, replacement);
        copied_to = site.span.end;
    }
    S::push_slice(&mut out, text.slice_range(copied_to..text.raw_len()));
    out
}
