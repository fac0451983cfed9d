//! Version-gated syntax rules.
//!
//! tree-sitter's Python grammar accepts the union of every Python syntax it
//! knows about. A grammar version here is that tree plus the set of named
//! node shapes the version did not have (or no longer allowed).

use ast_grep_core::{Doc, Node};
use stdlibs_core::PythonVersion;

/// Grammar versions tried by [`crate::try_parse`], newest first.
pub const KNOWN_GRAMMARS: &[PythonVersion] = &[
    PythonVersion::new(3, 12),
    PythonVersion::new(3, 11),
    PythonVersion::new(3, 10),
    PythonVersion::new(3, 9),
    PythonVersion::new(3, 8),
    PythonVersion::new(3, 7),
    PythonVersion::new(3, 6),
    PythonVersion::new(3, 5),
    PythonVersion::new(3, 3),
    PythonVersion::new(3, 1),
    PythonVersion::new(3, 0),
];

struct SyntaxRule {
    what: &'static str,
    kind: &'static str,
    /// Extra test on the node text; `None` means every node of `kind`.
    applies: Option<fn(&str) -> bool>,
    /// First version that accepts the construct.
    since: Option<PythonVersion>,
    /// First version that rejects it again.
    until: Option<PythonVersion>,
}

impl SyntaxRule {
    fn allowed_in(&self, grammar: PythonVersion) -> bool {
        self.since.is_none_or(|since| grammar >= since)
            && self.until.is_none_or(|until| grammar < until)
    }
}

const PY3: PythonVersion = PythonVersion::new(3, 0);

const SYNTAX_RULES: &[SyntaxRule] = &[
    SyntaxRule {
        what: "print statement",
        kind: "print_statement",
        applies: Some(is_print_statement),
        since: None,
        until: Some(PY3),
    },
    SyntaxRule {
        what: "exec statement",
        kind: "exec_statement",
        applies: Some(is_exec_statement),
        since: None,
        until: Some(PY3),
    },
    SyntaxRule {
        what: "async/await used as a name",
        kind: "identifier",
        applies: Some(is_async_keyword),
        since: None,
        until: Some(PythonVersion::new(3, 7)),
    },
    SyntaxRule {
        what: "await expression",
        kind: "await",
        applies: None,
        since: Some(PythonVersion::new(3, 5)),
        until: None,
    },
    SyntaxRule {
        what: "f-string interpolation",
        kind: "interpolation",
        applies: None,
        since: Some(PythonVersion::new(3, 6)),
        until: None,
    },
    SyntaxRule {
        what: "assignment expression",
        kind: "named_expression",
        applies: None,
        since: Some(PythonVersion::new(3, 8)),
        until: None,
    },
    SyntaxRule {
        what: "match statement",
        kind: "match_statement",
        applies: None,
        since: Some(PythonVersion::new(3, 10)),
        until: None,
    },
    SyntaxRule {
        what: "type alias statement",
        kind: "type_alias_statement",
        applies: None,
        since: Some(PythonVersion::new(3, 12)),
        until: None,
    },
];

fn is_print_statement(text: &str) -> bool {
    not_a_call(text, "print") && !is_shift_expression(text)
}

fn is_exec_statement(text: &str) -> bool {
    not_a_call(text, "exec")
}

fn is_async_keyword(text: &str) -> bool {
    matches!(text, "async" | "await")
}

/// tree-sitter may read `print (x)` as a statement; Python 3 reads a call.
fn not_a_call(text: &str, keyword: &str) -> bool {
    !text
        .strip_prefix(keyword)
        .is_some_and(|rest| rest.trim_start().starts_with('('))
}

/// `print >> f` is a shift in Python 3; the chevron statement needs `, value`.
fn is_shift_expression(text: &str) -> bool {
    text.strip_prefix("print")
        .is_some_and(|rest| rest.trim_start().starts_with(">>") && !rest.contains(','))
}

/// Why a tree is not valid under some grammar version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Violation {
    pub line: usize,
    pub reason: String,
}

/// First node, in source order, that `grammar` rejects.
pub(crate) fn first_violation<D: Doc>(root: &Node<D>, grammar: PythonVersion) -> Option<Violation> {
    for node in root.dfs() {
        let line = node.start_pos().line() + 1;
        if node.is_error() {
            return Some(Violation {
                line,
                reason: format!("invalid syntax near {:?}", snippet(&node.text())),
            });
        }
        if node.is_missing() {
            return Some(Violation {
                line,
                reason: format!("expected {}", node.kind()),
            });
        }
        if !node.is_named() {
            continue;
        }
        let kind = node.kind();
        for rule in SYNTAX_RULES {
            if rule.kind != kind.as_ref() || rule.allowed_in(grammar) {
                continue;
            }
            if rule.applies.is_none_or(|applies| applies(&node.text())) {
                return Some(Violation {
                    line,
                    reason: format!("{} is not supported", rule.what),
                });
            }
        }
    }
    None
}

fn snippet(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    first_line.chars().take(40).collect()
}
