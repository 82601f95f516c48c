// src/analysis/dependencies.rs
//! Function signature extraction and free-identifier collection.
//!
//! The dependency set is a structural approximation, not a free-variable
//! analysis: identifiers in the body are reported unless they are parameter
//! binding sites or match a parameter name. Locals and loop counters are
//! over-reported, shadowed outer names are over-excluded, and member-access
//! property names are not counted.

use std::collections::BTreeSet;
use tree_sitter::Node;

/// Declared parameter names in declaration order.
#[must_use]
pub fn parameters(func: Node, source: &str) -> Vec<String> {
    // Arrow functions with a single bare parameter have no formal_parameters
    // node; the identifier sits in the `parameter` field instead.
    if let Some(single) = func.child_by_field_name("parameter") {
        return text_of(single, source).map(String::from).into_iter().collect();
    }

    let Some(params) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        if let Some(name) = parameter_name(child, source) {
            out.push(name);
        }
    }
    out
}

fn parameter_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "identifier" => text_of(node, source).map(String::from),
        // TypeScript wraps each parameter; the declared name is the pattern.
        "required_parameter" | "optional_parameter" => node
            .child_by_field_name("pattern")
            .and_then(|p| text_of(p, source))
            .map(String::from),
        // Default value: `x = 1` declares x.
        "assignment_pattern" => node
            .child_by_field_name("left")
            .and_then(|p| text_of(p, source))
            .map(String::from),
        "rest_pattern" | "rest_parameter" => {
            let mut cursor = node.walk();
            let name = node
                .named_children(&mut cursor)
                .next()
                .and_then(|p| text_of(p, source))
                .map(String::from);
            name
        }
        // Destructured parameters keep their full textual form.
        "object_pattern" | "array_pattern" => text_of(node, source).map(String::from),
        _ => None,
    }
}

/// Textual return-type annotation with the leading `:` stripped, or `"any"`.
#[must_use]
pub fn return_type(func: Node, source: &str) -> String {
    func.child_by_field_name("return_type")
        .and_then(|n| text_of(n, source))
        .map_or_else(
            || "any".to_string(),
            |text| text.trim_start_matches(':').trim().to_string(),
        )
}

/// Identifiers referenced in the function body, excluding the function's own
/// parameters and parameter binding sites.
#[must_use]
pub fn dependencies(func: Node, source: &str) -> BTreeSet<String> {
    let param_names: BTreeSet<String> = parameters(func, source).into_iter().collect();
    let mut out = BTreeSet::new();

    let Some(body) = func.child_by_field_name("body") else {
        return out;
    };
    collect_identifiers(body, source, &param_names, &mut out);
    out
}

fn collect_identifiers(
    node: Node,
    source: &str,
    params: &BTreeSet<String>,
    out: &mut BTreeSet<String>,
) {
    if node.kind() == "identifier" && !is_param_binding(node) {
        if let Some(text) = text_of(node, source) {
            if !params.contains(text) {
                out.insert(text.to_string());
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_identifiers(child, source, params, out);
    }
}

// Binding sites of nested function parameters are declarations, not usages.
fn is_param_binding(node: Node) -> bool {
    node.parent().is_some_and(|p| {
        matches!(
            p.kind(),
            "formal_parameters"
                | "required_parameter"
                | "optional_parameter"
                | "rest_pattern"
                | "rest_parameter"
        )
    })
}

fn text_of<'a>(node: Node, source: &'a str) -> Option<&'a str> {
    node.utf8_text(source.as_bytes()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use tree_sitter::Parser;

    fn parse(lang: Lang, code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(lang.grammar())
            .expect("Failed to set language");
        parser.parse(code, None).expect("Failed to parse code")
    }

    fn first_function<'t>(tree: &'t tree_sitter::Tree, source: &str) -> Node<'t> {
        crate::analysis::functions::find_all(tree.root_node())
            .into_iter()
            .next()
            .unwrap_or_else(|| panic!("no function in: {source}"))
    }

    #[test]
    fn test_parameters_preserve_declaration_order() {
        let code = "function f(a, b, c) {}";
        let tree = parse(Lang::TypeScript, code);
        let func = first_function(&tree, code);
        assert_eq!(parameters(func, code), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_js_parameters_and_defaults() {
        let code = "function f(a, b = 1, ...rest) {}";
        let tree = parse(Lang::JavaScript, code);
        let func = first_function(&tree, code);
        assert_eq!(parameters(func, code), vec!["a", "b", "rest"]);
    }

    #[test]
    fn test_bare_arrow_parameter() {
        let code = "const f = x => x + 1;";
        let tree = parse(Lang::JavaScript, code);
        let func = first_function(&tree, code);
        assert_eq!(parameters(func, code), vec!["x"]);
    }

    #[test]
    fn test_return_type_annotation() {
        let code = "function f(a: number): number { return a; }";
        let tree = parse(Lang::TypeScript, code);
        let func = first_function(&tree, code);
        assert_eq!(return_type(func, code), "number");
    }

    #[test]
    fn test_return_type_defaults_to_any() {
        let code = "function f(a) { return a; }";
        let tree = parse(Lang::TypeScript, code);
        let func = first_function(&tree, code);
        assert_eq!(return_type(func, code), "any");
    }

    #[test]
    fn test_dependencies_exclude_parameters() {
        let code = "function add(a, b) { return a + b; }";
        let tree = parse(Lang::TypeScript, code);
        let func = first_function(&tree, code);
        assert!(dependencies(func, code).is_empty());
    }

    #[test]
    fn test_dependencies_report_free_identifiers() {
        let code = "function f(a) { return a + limit + helper(a); }";
        let tree = parse(Lang::TypeScript, code);
        let func = first_function(&tree, code);
        let deps = dependencies(func, code);
        assert!(deps.contains("limit"));
        assert!(deps.contains("helper"));
        assert!(!deps.contains("a"));
    }
}
