use std::collections::BTreeMap;

use serde::Serialize;

/// Suffix of eligible source files (without the dot).
pub const SOURCE_SUFFIX: &str = "js";

/// The one file the loader always loads first. Never scanned, never rewritten,
/// never a resolution target.
pub const BOOTSTRAP_FILE: &str = "core.js";

/// Logical name of a source file: root-relative path, `/`-separated, suffix
/// stripped. The unit of dependency between files.
pub type ModuleId = String;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputMode {
    Human,
    Json,
}

/// What a single run did, serialized on `--json`.
#[derive(Serialize, Debug)]
pub struct RunReport {
    pub namespace: String,
    pub files_scanned: usize,
    pub definitions: BTreeMap<String, ModuleId>,
    pub files: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
    pub definition_pass_ms: u64,
    pub usage_pass_ms: u64,
}

#[derive(Serialize, Debug)]
pub struct FileReport {
    pub module: ModuleId,
    pub requires: Vec<ModuleId>,
}

#[derive(Serialize, Debug)]
pub struct SkippedFile {
    pub path: String,
    pub error: String,
}
