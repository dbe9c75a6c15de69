//! The regex seam of the pipeline.
//!
//! Everything here is textual pattern matching, not parsing; keeping it
//! behind this module means a stricter tokenizer could replace it without
//! touching the passes.

use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// A hand-maintained require directly preceded by an `@ignore` marker
/// comment, e.g. `/* @ignore */ sc_require('vendor/moment');`.
pub(crate) fn regex_manual_require() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"/\*.*@ignore.*\*/\s*sc_require"))
}

/// Definition and usage patterns anchored to one application namespace,
/// compiled once per run.
pub struct NamespacePatterns {
    definition: Regex,
    usage: Regex,
}

impl NamespacePatterns {
    pub fn new(namespace: &str) -> Self {
        let ns = regex::escape(namespace);
        // A member assignment whose right-hand side looks like a class-style
        // extend/design chain, an explicit mixin, a function literal, or an
        // object literal opening brace.
        let definition = regex(&format!(
            r"{ns}\.(\w+)\s*=\s*(?:[A-Za-z.]+(?:design|extend|SC\.mixin)|function|\{{|SC\.mixin)"
        ));
        // A namespace-qualified reference outside string literals, with an
        // optional member-access suffix consumed so matches don't overlap.
        let usage = regex(&format!(r#"(?:^|[^'"]){ns}\.([A-Za-z]+)\.?\w*"#));
        Self { definition, usage }
    }

    /// The namespace member defined on this line, if any.
    pub fn definition_symbol<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.definition
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Namespace members referenced on this line, in match order.
    pub fn usage_symbols<'l>(&self, line: &'l str) -> impl Iterator<Item = &'l str> {
        self.usage
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::{NamespacePatterns, regex_manual_require};

    fn patterns() -> NamespacePatterns {
        NamespacePatterns::new("App")
    }

    #[test]
    fn definition_matches_extend_mixin_function_and_object_literal() {
        let p = patterns();
        assert_eq!(
            p.definition_symbol("App.CommentsView = SC.View.extend({"),
            Some("CommentsView")
        );
        assert_eq!(
            p.definition_symbol("App.Mixed = SC.mixin({}, {"),
            Some("Mixed")
        );
        assert_eq!(
            p.definition_symbol("App.helper = function(x) {"),
            Some("helper")
        );
        assert_eq!(p.definition_symbol("App.CONSTANTS = {"), Some("CONSTANTS"));
        assert_eq!(
            p.definition_symbol("App.Page = SC.Page.design({"),
            Some("Page")
        );
    }

    #[test]
    fn definition_ignores_plain_assignments_and_other_namespaces() {
        let p = patterns();
        assert_eq!(p.definition_symbol("App.counter = 12;"), None);
        assert_eq!(p.definition_symbol("var x = App.Foo.create();"), None);
        assert_eq!(p.definition_symbol("Other.Foo = SC.Object.extend({"), None);
    }

    #[test]
    fn usage_captures_each_reference_once() {
        let p = patterns();
        let symbols: Vec<&str> = p
            .usage_symbols("var x = App.Foo.create(App.Bar, App.Baz);")
            .collect();
        assert_eq!(symbols, vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn usage_skips_quoted_references() {
        let p = patterns();
        let symbols: Vec<&str> = p.usage_symbols("var s = 'App.Foo';").collect();
        assert!(symbols.is_empty());
        let symbols: Vec<&str> = p.usage_symbols(r#"bind: "App.Foo.value""#).collect();
        assert!(symbols.is_empty());
    }

    #[test]
    fn usage_matches_at_line_start() {
        let p = patterns();
        let symbols: Vec<&str> = p.usage_symbols("App.Foo.refresh();").collect();
        assert_eq!(symbols, vec!["Foo"]);
    }

    #[test]
    fn manual_require_annotation() {
        let re = regex_manual_require();
        assert!(re.is_match("/* @ignore */ sc_require('vendor/moment');"));
        assert!(re.is_match("/* keep this one, @ignore */sc_require('lib/ext');"));
        assert!(!re.is_match("sc_require('views/nav');"));
        assert!(!re.is_match("/* @ignore */ var x = 1;"));
    }
}
