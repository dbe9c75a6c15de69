//! Pass two: usage scan and in-place rewrite.
//!
//! Each file is fully read, rewritten in memory as header + sorted require
//! directives + guard-filtered original content, then fully written back.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::fs_utils::module_id;
use crate::types::{FileReport, ModuleId};

use super::body::BodyTracker;
use super::guard::{BANNER_RULE, is_real_content};
use super::patterns::NamespacePatterns;
use super::symbols::SymbolTable;

/// Texts rendered into the injected banner.
pub struct Header {
    project: String,
    copyright: String,
    namespace: String,
}

impl Header {
    /// Banner texts, defaulting to namespace-derived lines when the config
    /// does not override them.
    pub fn new(namespace: &str, project: Option<String>, copyright: Option<String>) -> Self {
        Self {
            project: project.unwrap_or_else(|| format!("{namespace} application")),
            copyright: copyright.unwrap_or_else(|| format!("{namespace} authors")),
            namespace: namespace.to_string(),
        }
    }

    /// Four banner lines plus the globals declaration, each newline-terminated.
    pub fn render(&self) -> String {
        format!(
            "{rule}\n// Project:   {project}\n// Copyright: {copyright}\n{rule}\n/*globals {ns} */\n",
            rule = BANNER_RULE,
            project = self.project,
            copyright = self.copyright,
            ns = self.namespace,
        )
    }
}

pub fn require_directive(module: &str) -> String {
    format!("sc_require('{module}');")
}

/// Outcome of rewriting one file in memory.
pub struct Rewrite {
    pub content: String,
    pub requires: Vec<ModuleId>,
}

/// Compute the rewritten content of one file.
///
/// Lines are guard-filtered (stale boilerplate dropped), tracked through the
/// function-body state machine, and scanned for namespace usages when they
/// are retained, outside a body, and not comment-opening. Resolved usages
/// that are not the file's own module become its require set.
pub fn rewrite_source(
    content: &str,
    module: &str,
    table: &SymbolTable,
    patterns: &NamespacePatterns,
    header: &str,
    verbose: bool,
) -> Rewrite {
    let mut retained = String::new();
    let mut requires: BTreeSet<ModuleId> = BTreeSet::new();
    let mut tracker = BodyTracker::new();

    for line in content.lines() {
        let inside_body = tracker.observe(line);
        if !is_real_content(line) {
            continue;
        }
        if !inside_body && !line.is_empty() && !line.starts_with('/') {
            for symbol in patterns.usage_symbols(line) {
                if verbose {
                    println!("\tUsage: {} in {}", symbol, line.replace([' ', '\t'], ""));
                }
                let Some(target) = table.resolve(symbol) else {
                    continue;
                };
                if target != module && requires.insert(target.clone()) && verbose {
                    println!("\t\tRequiring: {target}");
                }
            }
        }
        retained.push_str(line);
        retained.push('\n');
    }

    let mut rewritten = String::from(header);
    for require in &requires {
        rewritten.push_str(&require_directive(require));
        rewritten.push('\n');
    }
    rewritten.push_str(&retained);

    Rewrite {
        content: rewritten,
        requires: requires.into_iter().collect(),
    }
}

/// Rewrite one file on disk. Read or write failures bubble up to the caller,
/// which skips the file and carries on.
pub fn inject_requires(
    path: &Path,
    root: &Path,
    table: &SymbolTable,
    patterns: &NamespacePatterns,
    header: &str,
    verbose: bool,
) -> io::Result<Option<FileReport>> {
    let content = fs::read_to_string(path)?;
    let Some(module) = module_id(path, root) else {
        return Ok(None);
    };
    if verbose {
        println!("\n{}", path.display());
    }
    let rewrite = rewrite_source(&content, &module, table, patterns, header, verbose);
    fs::write(path, rewrite.content.as_bytes())?;
    Ok(Some(FileReport {
        module,
        requires: rewrite.requires,
    }))
}
