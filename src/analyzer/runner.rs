//! Orchestration of the two-pass run.
//!
//! Pass one must finish for every file before pass two touches any file, so
//! the rewrite only ever resolves against the completed symbol table; the
//! tree is walked once per pass.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, bail};

use crate::args::ParsedArgs;
use crate::config::ScreqConfig;
use crate::fs_utils::{build_globset, source_files};
use crate::progress::{self, Spinner};
use crate::types::{OutputMode, RunReport, SkippedFile};

use super::definitions::scan_definitions;
use super::injector::{Header, inject_requires};
use super::patterns::NamespacePatterns;

fn absolute_root(parsed: &ParsedArgs) -> PathBuf {
    if parsed.root.is_absolute() {
        parsed.root.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&parsed.root)
    }
}

pub fn run_require_processor(parsed: &ParsedArgs) -> anyhow::Result<RunReport> {
    let root = absolute_root(parsed);

    let parent_name = root
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str());
    if parent_name != Some("apps") {
        bail!(
            "{} is not an app root: the parent directory must be named apps",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("expected a directory at {}", root.display());
    }
    let root = root
        .canonicalize()
        .with_context(|| format!("resolving {}", root.display()))?;

    let config = ScreqConfig::load(&root);
    let mut ignore_patterns = parsed.ignore_patterns.clone();
    ignore_patterns.extend(config.ignore.iter().cloned());
    let ignore = build_globset(&ignore_patterns);

    let patterns = NamespacePatterns::new(&parsed.namespace);
    let header = Header::new(
        &parsed.namespace,
        config.header.project.clone(),
        config.header.copyright.clone(),
    )
    .render();

    let human = parsed.output == OutputMode::Human;
    let quiet_spinner = human && !parsed.verbose;

    // Pass one: definitions.
    if human && parsed.verbose {
        println!("Scanning for definitions");
    }
    let spinner = quiet_spinner.then(|| Spinner::new("Scanning for definitions"));
    let started = Instant::now();
    let files = source_files(&root, ignore.as_ref())
        .with_context(|| format!("walking {}", root.display()))?;
    let table = scan_definitions(&files, &root, &patterns);
    let definition_pass = started.elapsed();
    if human {
        let summary = format!(
            "{} in {} ({})",
            progress::format_count(table.len(), "definition", "definitions"),
            progress::format_count(files.len(), "file", "files"),
            progress::format_duration(definition_pass),
        );
        match &spinner {
            Some(spinner) => spinner.finish_success(&summary),
            None => progress::success(&summary),
        }
    }
    if human && parsed.verbose {
        for (symbol, module) in table.iter() {
            println!("File: {module:<60}\tdefines: {symbol}");
        }
    }

    // Pass two: usage scan and rewrite, against the finished table.
    if human && parsed.verbose {
        println!("Scanning for usage");
    }
    let spinner = quiet_spinner.then(|| Spinner::new("Scanning for usage"));
    let started = Instant::now();
    let files = source_files(&root, ignore.as_ref())
        .with_context(|| format!("walking {}", root.display()))?;
    let mut reports = Vec::new();
    let mut skipped = Vec::new();
    for path in &files {
        match inject_requires(
            path,
            &root,
            &table,
            &patterns,
            &header,
            human && parsed.verbose,
        ) {
            Ok(Some(report)) => reports.push(report),
            Ok(None) => {}
            Err(err) => {
                eprintln!("[screq][warn] skipping {}: {}", path.display(), err);
                skipped.push(SkippedFile {
                    path: path.display().to_string(),
                    error: err.to_string(),
                });
            }
        }
    }
    let usage_pass = started.elapsed();
    if human {
        let with_requires = reports.iter().filter(|r| !r.requires.is_empty()).count();
        let summary = format!(
            "{} rewritten, {} with requires ({})",
            progress::format_count(reports.len(), "file", "files"),
            with_requires,
            progress::format_duration(usage_pass),
        );
        match &spinner {
            Some(spinner) => spinner.finish_success(&summary),
            None => progress::success(&summary),
        }
    }

    let report = RunReport {
        namespace: parsed.namespace.clone(),
        files_scanned: files.len(),
        definitions: table.entries().clone(),
        files: reports,
        skipped,
        definition_pass_ms: definition_pass.as_millis() as u64,
        usage_pass_ms: usage_pass.as_millis() as u64,
    };

    if parsed.output == OutputMode::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing run report")?
        );
    }

    Ok(report)
}
