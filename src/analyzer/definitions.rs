//! Pass one: build the symbol table.

use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_utils::module_id;

use super::patterns::NamespacePatterns;
use super::symbols::SymbolTable;

/// Scan every file for its defining symbol and collect the table.
///
/// Only the first definition-shaped line of a file is recorded; a file with
/// no match contributes nothing. Unreadable files are reported and skipped,
/// the scan continues.
pub fn scan_definitions(
    files: &[PathBuf],
    root: &Path,
    patterns: &NamespacePatterns,
) -> SymbolTable {
    let mut table = SymbolTable::new();
    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("[screq][warn] skipping {}: {}", path.display(), err);
                continue;
            }
        };
        let Some(module) = module_id(path, root) else {
            continue;
        };
        for line in content.lines() {
            let Some(symbol) = patterns.definition_symbol(line) else {
                continue;
            };
            if let Some(existing) = table.record(symbol.to_string(), module.clone())
                && existing != &module
            {
                eprintln!(
                    "[screq][warn] {symbol} already defined in {existing}, ignoring definition in {module}"
                );
            }
            break;
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::scan_definitions;
    use crate::analyzer::patterns::NamespacePatterns;
    use crate::fs_utils::source_files;
    use std::path::Path;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdirs");
        std::fs::write(path, content).expect("write fixture");
    }

    #[test]
    fn records_first_definition_per_file() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path();
        write(
            root,
            "views/comments.js",
            "App.CommentsView = SC.View.extend({\nApp.Sneaky = SC.View.extend({\n",
        );
        write(root, "models/foo.js", "App.Foo = SC.Object.extend({});\n");
        write(root, "util.js", "App.util = function(x) {\n  return x;\n};\n");
        write(root, "no_defs.js", "var local = 1;\n");

        let patterns = NamespacePatterns::new("App");
        let files = source_files(root, None).expect("walk");
        let table = scan_definitions(&files, root, &patterns);

        assert_eq!(
            table.resolve("CommentsView").map(String::as_str),
            Some("views/comments")
        );
        assert_eq!(table.resolve("Foo").map(String::as_str), Some("models/foo"));
        assert_eq!(table.resolve("util").map(String::as_str), Some("util"));
        // first match per file wins, the second definition-shaped line is not recorded
        assert!(table.resolve("Sneaky").is_none());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn duplicate_symbol_across_files_keeps_first_owner() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let root = tmp.path();
        write(root, "a.js", "App.Dup = SC.Object.extend({});\n");
        write(root, "b.js", "App.Dup = SC.Object.extend({});\n");

        let patterns = NamespacePatterns::new("App");
        let files = source_files(root, None).expect("walk");
        let table = scan_definitions(&files, root, &patterns);

        assert_eq!(table.len(), 1);
        let owner = table.resolve("Dup").expect("resolved").clone();
        assert!(owner == "a" || owner == "b");
        let first = files
            .iter()
            .position(|p| p.ends_with(format!("{owner}.js")))
            .expect("owner in walk order");
        assert_eq!(first, 0);
    }
}
