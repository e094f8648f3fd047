//! End-to-end keyword substitution over realistic file content.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use cvs2svn_keywords::{
    collapse_keywords, CvsFile, DateFormat, InMemoryMetadataStore, KeywordExpander, Project,
    RevisionReference,
};

fn fixture() -> (InMemoryMetadataStore, RevisionReference) {
    let mut store = InMemoryMetadataStore::new();
    store.insert_author(42, "alice");

    let project = Arc::new(Project {
        repository_root: "/cvsroot".to_string(),
        module: "proj".to_string(),
    });
    let file = Arc::new(CvsFile {
        rcs_basename: "main.c".to_string(),
        dir_components: vec!["src".to_string()],
        project,
    });
    let rev = RevisionReference {
        revision: "1.42".to_string(),
        timestamp: 1_609_459_200, // 2021-01-01T00:00:00Z
        metadata_id: 42,
        file,
    };
    (store, rev)
}

#[test]
fn expands_a_source_file_header_block() {
    let (store, rev) = fixture();
    let expander = KeywordExpander::new(&store, DateFormat::Modern);

    let content = "\
/*
 * $Id$
 * $Header$
 * $Source$
 * $RCSfile$ rev $Revision$ by $Author$ on $Date$ ($State$)
 * $Locker$$Log$$Name$
 */
int main(void) { return 0; }
";
    let expected = "\
/*
 * $Id: main.c,v 1.42 2021-01-01 00:00:00 alice Exp $
 * $Header: /cvsroot/proj/src/main.c,v 1.42 2021-01-01 00:00:00 alice Exp $
 * $Source: /cvsroot/proj/src/main.c,v $
 * $RCSfile: main.c,v $ rev $Revision: 1.42 $ by $Author: alice $ on $Date: 2021-01-01 00:00:00 $ ($State: Exp $)
 * $Locker:  $$Log: not supported by cvs2svn $$Name: not supported by cvs2svn $
 */
int main(void) { return 0; }
";
    assert_eq!(expander.expand(content, &rev).unwrap(), expected);

    // Collapsing the expanded content restores the original block.
    assert_eq!(collapse_keywords(expected), content);

    // And re-expanding the expanded content is a fixed point.
    assert_eq!(expander.expand(expected, &rev).unwrap(), expected);
}

#[test]
fn legacy_date_format_matches_cvs_1_11() {
    let (store, rev) = fixture();
    let expander = KeywordExpander::new(&store, DateFormat::Legacy);
    assert_eq!(
        expander.expand("$Date$", &rev).unwrap(),
        "$Date: 2021/01/01 00:00:00 $"
    );
    assert_eq!(
        expander.expand("$Id$", &rev).unwrap(),
        "$Id: main.c,v 1.42 2021/01/01 00:00:00 alice Exp $"
    );
}

#[test]
fn binary_content_is_substituted_without_decoding() {
    let (store, rev) = fixture();
    let expander = KeywordExpander::new(&store, DateFormat::Modern);

    let mut content: Vec<u8> = Vec::new();
    content.extend_from_slice(&[0x7f, b'E', b'L', b'F', 0x00, 0xff]);
    content.extend_from_slice(b"$Revision$");
    content.extend_from_slice(&[0xfe, 0xfd]);

    let mut expected: Vec<u8> = Vec::new();
    expected.extend_from_slice(&[0x7f, b'E', b'L', b'F', 0x00, 0xff]);
    expected.extend_from_slice(b"$Revision: 1.42 $");
    expected.extend_from_slice(&[0xfe, 0xfd]);

    assert_eq!(expander.expand(content.as_slice(), &rev).unwrap(), expected);
    assert_eq!(collapse_keywords(expected.as_slice()), content);
}

#[test]
fn byte_and_text_modes_agree_on_utf8_content() {
    let (store, rev) = fixture();
    let expander = KeywordExpander::new(&store, DateFormat::Modern);

    let content = "// caf\u{e9} \u{2014} $Id$\n// $Header: stale $\n";
    let from_text = expander.expand(content, &rev).unwrap();
    let from_bytes = expander.expand(content.as_bytes(), &rev).unwrap();
    assert_eq!(from_bytes, from_text.clone().into_bytes());

    let collapsed_text = collapse_keywords(from_text.as_str());
    let collapsed_bytes = collapse_keywords(from_bytes.as_slice());
    assert_eq!(collapsed_bytes, collapsed_text.into_bytes());
}

#[test]
fn unrecognized_and_malformed_tokens_pass_through() {
    let (store, rev) = fixture();
    let expander = KeywordExpander::new(&store, DateFormat::Modern);

    let content = "$Foo$ $5.00 $Id\n$ $author$ $Revision: unterminated\n";
    assert_eq!(expander.expand(content, &rev).unwrap(), content);
    assert_eq!(collapse_keywords(content), content);
}
