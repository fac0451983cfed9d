//! Extension module declarations in `setup.py`.
//!
//! Two shapes are recognized and nothing else:
//!
//! ```python
//! Extension("_socket", ["socketmodule.c"], ...)   # constructor call
//! CARBON_EXTS = ["_Qt", "_Carbon"]                # list assignment
//! ```

use ast_grep_core::{Doc, Node};

use crate::literal::evaluate_string_literal;
use crate::parser::ParsedScript;

/// Names that make a call or an assignment count as a declaration.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionPatterns {
    /// Callees whose first positional string argument is a module name.
    pub constructors: &'static [&'static str],
    /// Variables whose list-literal value enumerates module names.
    pub list_variables: &'static [&'static str],
}

pub const EXTENSION_PATTERNS: ExtensionPatterns = ExtensionPatterns {
    constructors: &["Extension", "addMacExtension"],
    list_variables: &["CARBON_EXTS"],
};

/// Collect declared extension names using [`EXTENSION_PATTERNS`].
#[must_use]
pub fn extract_extension_names(script: &ParsedScript) -> Vec<String> {
    extract_with(script, &EXTENSION_PATTERNS)
}

/// Collect declared extension names, in source order.
#[must_use]
pub fn extract_with(script: &ParsedScript, patterns: &ExtensionPatterns) -> Vec<String> {
    let mut names = Vec::new();
    for node in script.tree.root().dfs() {
        match node.kind().as_ref() {
            "call" => names.extend(constructor_argument(&node, patterns)),
            "assignment" => names.extend(list_assignment(&node, patterns)),
            _ => {}
        }
    }
    tracing::debug!(count = names.len(), "extension declarations");
    names
}

/// `Extension("name", ...)` -> `name`.
fn constructor_argument<D: Doc>(call: &Node<D>, patterns: &ExtensionPatterns) -> Option<String> {
    let callee = call.field("function")?;
    if callee.kind().as_ref() != "identifier"
        || !patterns.constructors.contains(&callee.text().as_ref())
    {
        return None;
    }
    let arguments = call.field("arguments")?;
    if arguments.kind().as_ref() != "argument_list" {
        return None;
    }
    let first = arguments
        .children()
        .find(|arg| arg.is_named() && arg.kind().as_ref() != "comment")?;
    if first.kind().as_ref() != "string" {
        return None;
    }
    evaluate_string_literal(&first.text())
}

/// `CARBON_EXTS = ["a", "b"]` -> `[a, b]`.
///
/// Chained (`X = CARBON_EXTS = [...]`) and annotated assignments do not count.
fn list_assignment<D: Doc>(assignment: &Node<D>, patterns: &ExtensionPatterns) -> Vec<String> {
    let sole_target = assignment
        .parent()
        .is_some_and(|p| p.kind().as_ref() == "expression_statement")
        && assignment.field("type").is_none();
    if !sole_target {
        return Vec::new();
    }

    let (Some(left), Some(right)) = (assignment.field("left"), assignment.field("right")) else {
        return Vec::new();
    };
    if left.kind().as_ref() != "identifier"
        || !patterns.list_variables.contains(&left.text().as_ref())
        || right.kind().as_ref() != "list"
    {
        return Vec::new();
    }

    right
        .children()
        .filter(|item| item.kind().as_ref() == "string")
        .filter_map(|item| evaluate_string_literal(&item.text()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::try_parse_str;
    use pretty_assertions::assert_eq;

    fn names(source: &str) -> Vec<String> {
        extract_extension_names(&try_parse_str(source).unwrap())
    }

    #[test]
    fn records_constructor_first_argument() {
        let source = "exts.append(Extension('_socket', ['socketmodule.c'], depends=['socketmodule.h']))\n";
        assert_eq!(names(source), vec!["_socket"]);
    }

    #[test]
    fn records_mac_extension_helper() {
        assert_eq!(names("addMacExtension('_CF', core_kwds)\n"), vec!["_CF"]);
    }

    #[test]
    fn records_list_assignment() {
        assert_eq!(names("CARBON_EXTS = ['_Qt', \"_Carbon\"]\n"), vec!["_Qt", "_Carbon"]);
    }

    #[test]
    fn ignores_non_literal_first_argument() {
        let source = "Extension(name, ['x.c'])\nExtension(f'{n}', [])\nExtension()\n";
        assert!(names(source).is_empty());
    }

    #[test]
    fn ignores_keyword_first_argument() {
        assert!(names("Extension(name='_x', sources=[])\n").is_empty());
    }

    #[test]
    fn ignores_other_callees() {
        let source = "Library('_x')\nself.Extension('_y')\n";
        assert!(names(source).is_empty());
    }

    #[test]
    fn ignores_other_assignment_shapes() {
        let source = "\
OTHER = ['_a']
X = CARBON_EXTS = ['_b']
CARBON_EXTS = ('_c',)
CARBON_EXTS += ['_d']
";
        assert!(names(source).is_empty());
    }

    #[test]
    fn skips_non_string_list_elements() {
        assert_eq!(names("CARBON_EXTS = ['_Qt', OTHER, 3, '_Fm']\n"), vec!["_Qt", "_Fm"]);
    }

    #[test]
    fn finds_nested_declarations_in_source_order() {
        let source = "\
class PyBuildExt(build_ext):
    def detect_modules(self):
        exts = []
        if True:
            exts.append( Extension('array', ['arraymodule.c']) )
        exts.append(Extension('cmath', ['cmathmodule.c'],
                              # trailing comment
                              libraries=['m']))
        return exts
";
        assert_eq!(names(source), vec!["array", "cmath"]);
    }

    #[test]
    fn custom_patterns() {
        let patterns = ExtensionPatterns {
            constructors: &["Module"],
            list_variables: &["EXTRA"],
        };
        let script = try_parse_str("Module('_m')\nEXTRA = ['_e']\nExtension('_x')\n").unwrap();
        assert_eq!(extract_with(&script, &patterns), vec!["_m", "_e"]);
    }
}
