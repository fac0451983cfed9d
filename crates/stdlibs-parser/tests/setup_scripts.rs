//! Extraction over realistic `setup.py` excerpts.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use stdlibs_core::PythonVersion;
use stdlibs_parser::{KNOWN_GRAMMARS, ParserError, extract_extension_names, try_parse};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn modern_setup_script() {
    let script = try_parse(&fixture("setup_modern.py"), None).expect("parses");
    assert_eq!(script.grammar, KNOWN_GRAMMARS[0]);
    assert_eq!(
        extract_extension_names(&script),
        vec!["array", "_contextvars", "_socket", "_tkinter", "_struct"]
    );
}

#[test]
fn migrated_legacy_setup_script() {
    let script = try_parse(&fixture("setup_legacy_fixed.py"), None).expect("parses");
    // `async` as a variable name only parses before 3.7.
    assert_eq!(script.grammar, PythonVersion::new(3, 6));
    assert_eq!(
        extract_extension_names(&script),
        vec![
            "strop",
            "_weakref",
            "_CF",
            "ColorPicker",
            "gestalt",
            "MacOS",
            "Nav",
            "OSATerminology",
            "icglue",
            "_Qt",
            "_Carbon",
            "_AE",
        ]
    );
}

#[test]
fn unparseable_script_reports_newest_grammar() {
    let err = try_parse(&fixture("setup_modern.py"), Some(b"for fw in 'Tcl', 'Tk'\n".as_slice()))
        .unwrap_err();
    match err {
        ParserError::Syntax { grammar, line, .. } => {
            assert_eq!(grammar, KNOWN_GRAMMARS[0].to_string());
            assert_eq!(line, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}
