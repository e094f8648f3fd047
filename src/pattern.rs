//! Keyword match patterns and the byte/text subject abstraction.
//!
//! Two pattern shapes over the fixed keyword alternation:
//!
//! - expand-form: `$Name$` or `$Name: value $` (value optional), matched
//!   when refreshing keywords in checked-out content;
//! - collapse-form: `$Name: value $` only (value mandatory), matched when
//!   stripping values back to bare `$Name$` tokens.
//!
//! The value run excludes `$` and newline, so a keyword never spans lines
//! and an unterminated token never swallows the rest of the file.
//!
//! Both shapes are compiled twice: once over `str` for decoded text and
//! once over raw bytes (with Unicode matching disabled) so files flagged as
//! binary receive literal byte-level substitution without any decoding.
//! The [`Subject`] trait lets the drivers run one generic splice algorithm
//! over either representation.

use std::ops::Range;
use std::sync::LazyLock;

use regex::bytes::Regex as BytesRegex;
use regex::Regex;

use crate::keyword::Keyword;

static EXPAND_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\$({})(:[^$\n]*)?\$", Keyword::alternation())).unwrap()
});

static COLLAPSE_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\$({}):[^$\n]*\$", Keyword::alternation())).unwrap()
});

static EXPAND_BYTES_RE: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(&format!(
        r"(?-u)\$({})(:[^$\n]*)?\$",
        Keyword::alternation()
    ))
    .unwrap()
});

static COLLAPSE_BYTES_RE: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(&format!(r"(?-u)\$({}):[^$\n]*\$", Keyword::alternation())).unwrap()
});

/// A located keyword occurrence in the subject.
///
/// `span` covers the whole `$...$` token; `name` covers just the keyword
/// name, which is always ASCII since it matched the alternation verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub span: Range<usize>,
    pub name: Range<usize>,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for [u8] {}
}

/// A sequence that keyword patterns can be applied to: decoded text
/// (`str`) or raw bytes (`[u8]`).
///
/// The two implementations locate identical token grammars, so byte-mode
/// and text-mode substitution agree wherever the input is valid UTF-8.
/// The trait is sealed; its methods exist for the substitution drivers.
pub trait Subject: sealed::Sealed {
    /// The owned buffer the drivers assemble output into.
    type Owned;

    fn raw_len(&self) -> usize;
    fn slice_range(&self, range: Range<usize>) -> &Self;

    /// The keyword spelling at `range`, verbatim as it appeared.
    fn name_str(&self, range: Range<usize>) -> &str;

    fn owned_with_capacity(capacity: usize) -> Self::Owned;
    fn push_slice(out: &mut Self::Owned, piece: &Self);
    fn push_replacement(out: &mut Self::Owned, replacement: &str);

    /// All expand-form sites, leftmost first, non-overlapping.
    fn expand_sites(&self) -> Vec<Site>;

    /// All collapse-form sites, leftmost first, non-overlapping.
    fn collapse_sites(&self) -> Vec<Site>;
}

impl Subject for str {
    type Owned = String;

    fn raw_len(&self) -> usize {
        self.len()
    }

    fn slice_range(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    fn name_str(&self, range: Range<usize>) -> &str {
        &self[range]
    }

    fn owned_with_capacity(capacity: usize) -> String {
        String::with_capacity(capacity)
    }

    fn push_slice(out: &mut String, piece: &str) {
        out.push_str(piece);
    }

    fn push_replacement(out: &mut String, replacement: &str) {
        out.push_str(replacement);
    }

    fn expand_sites(&self) -> Vec<Site> {
        text_sites(&EXPAND_TEXT_RE, self)
    }

    fn collapse_sites(&self) -> Vec<Site> {
        text_sites(&COLLAPSE_TEXT_RE, self)
    }
}

impl Subject for [u8] {
    type Owned = Vec<u8>;

    fn raw_len(&self) -> usize {
        self.len()
    }

    fn slice_range(&self, range: Range<usize>) -> &Self {
        &self[range]
    }

    fn name_str(&self, range: Range<usize>) -> &str {
        // The name span matched the keyword alternation, which is ASCII.
        std::str::from_utf8(&self[range]).expect("matched keyword name is ASCII")
    }

    fn owned_with_capacity(capacity: usize) -> Vec<u8> {
        Vec::with_capacity(capacity)
    }

    fn push_slice(out: &mut Vec<u8>, piece: &[u8]) {
        out.extend_from_slice(piece);
    }

    fn push_replacement(out: &mut Vec<u8>, replacement: &str) {
        out.extend_from_slice(replacement.as_bytes());
    }

    fn expand_sites(&self) -> Vec<Site> {
        byte_sites(&EXPAND_BYTES_RE, self)
    }

    fn collapse_sites(&self) -> Vec<Site> {
        byte_sites(&COLLAPSE_BYTES_RE, self)
    }
}

fn text_sites(re: &Regex, text: &str) -> Vec<Site> {
    re.captures_iter(text)
        .map(|caps| Site {
            span: caps.get(0).unwrap().range(),
            name: caps.get(1).unwrap().range(),
        })
        .collect()
}

fn byte_sites(re: &BytesRegex, bytes: &[u8]) -> Vec<Site> {
    re.captures_iter(bytes)
        .map(|caps| Site {
            span: caps.get(0).unwrap().range(),
            name: caps.get(1).unwrap().range(),
        })
        .collect()
}
