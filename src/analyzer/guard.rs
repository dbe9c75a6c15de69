//! Repeat-protection for the rewrite pass.
//!
//! Classifies each line as previously-injected boilerplate (dropped before
//! re-injection) or real content (retained), so running the tool twice never
//! stacks a second header on top of the first.

use super::patterns::regex_manual_require;

/// Banner rule line, also the first and fourth line of the injected header.
pub const BANNER_RULE: &str =
    "// ==========================================================================";

const REQUIRE_CALL: &str = "sc_require";
const PROJECT_MARKER: &str = "// Project:";
const COPYRIGHT_MARKER: &str = "// Copyright:";
const GLOBALS_MARKER: &str = "/*globals";

/// The bootstrap module's directive is hand-authored scaffolding, never ours
/// to strip.
const BOOTSTRAP_REQUIRE: &str = "sc_require('core')";

/// True when the line is real content to retain; false when it is stale
/// injected boilerplate. The bootstrap require and `@ignore`-annotated
/// manual requires are always retained even though they look like output.
pub fn is_real_content(line: &str) -> bool {
    let keep = !line.contains(REQUIRE_CALL)
        && !line.contains(BANNER_RULE)
        && !line.contains(PROJECT_MARKER)
        && !line.contains(COPYRIGHT_MARKER)
        && !line.contains(GLOBALS_MARKER);
    keep || line.contains(BOOTSTRAP_REQUIRE) || regex_manual_require().is_match(line)
}

#[cfg(test)]
mod tests {
    use super::{BANNER_RULE, is_real_content};

    #[test]
    fn strips_injected_boilerplate() {
        assert!(!is_real_content("sc_require('views/nav');"));
        assert!(!is_real_content(BANNER_RULE));
        assert!(!is_real_content("// Project:   DarkHorse"));
        assert!(!is_real_content("// Copyright: 2010"));
        assert!(!is_real_content("/*globals DarkHorse */"));
    }

    #[test]
    fn keeps_ordinary_code_and_comments() {
        assert!(is_real_content("var x = App.Foo.create();"));
        assert!(is_real_content("// a perfectly normal comment"));
        assert!(is_real_content(""));
    }

    #[test]
    fn bootstrap_require_is_carved_out() {
        assert!(is_real_content("sc_require('core');"));
    }

    #[test]
    fn annotated_manual_require_is_carved_out() {
        assert!(is_real_content("/* @ignore */ sc_require('vendor/moment');"));
    }
}
