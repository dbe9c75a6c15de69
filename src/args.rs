use std::path::PathBuf;

use crate::types::OutputMode;

#[derive(Debug)]
pub struct ParsedArgs {
    pub root: PathBuf,
    pub namespace: String,
    pub ignore_patterns: Vec<String>,
    pub output: OutputMode,
    pub verbose: bool,
    pub show_help: bool,
    pub show_version: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            namespace: String::new(),
            ignore_patterns: Vec::new(),
            output: OutputMode::Human,
            verbose: false,
            show_help: false,
            show_version: false,
        }
    }
}

const USAGE_LINE: &str = "USAGE: screq <appDirectory> <appName> [options]";

fn validate_namespace(raw: &str) -> Result<(), String> {
    let mut chars = raw.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(format!(
            "<appName> must be an identifier (got \"{raw}\")"
        ))
    }
}

fn validate_globs(patterns: &[String], flag: &str) -> Result<(), String> {
    for pat in patterns {
        if pat.trim().is_empty() {
            continue;
        }
        globset::Glob::new(pat).map_err(|e| format!("{flag}: invalid glob '{pat}': {e}"))?;
    }
    Ok(())
}

pub fn parse_args() -> Result<ParsedArgs, String> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    parse_arg_list(&args)
}

pub fn parse_arg_list(args: &[String]) -> Result<ParsedArgs, String> {
    let mut parsed = ParsedArgs::default();
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => {
                parsed.show_help = true;
                i += 1;
            }
            "--version" | "-V" => {
                parsed.show_version = true;
                i += 1;
            }
            "--verbose" | "-v" => {
                parsed.verbose = true;
                i += 1;
            }
            "--json" => {
                parsed.output = OutputMode::Json;
                i += 1;
            }
            "--ignore" | "-I" => {
                let next = args
                    .get(i + 1)
                    .ok_or_else(|| "-I/--ignore requires a glob pattern".to_string())?;
                parsed.ignore_patterns.push(next.clone());
                i += 2;
            }
            _ if arg.starts_with("--ignore=") => {
                let value = arg.trim_start_matches("--ignore=");
                parsed.ignore_patterns.push(value.to_string());
                i += 1;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("Unknown option: {arg}\n{USAGE_LINE}"));
            }
            _ => {
                positionals.push(arg.clone());
                i += 1;
            }
        }
    }

    if parsed.show_help || parsed.show_version {
        return Ok(parsed);
    }

    match positionals.len() {
        2 => {
            parsed.root = PathBuf::from(&positionals[0]);
            parsed.namespace = positionals[1].clone();
        }
        n if n < 2 => return Err(USAGE_LINE.to_string()),
        _ => {
            return Err(format!(
                "Unexpected argument: {}\n{USAGE_LINE}",
                positionals[2]
            ));
        }
    }

    validate_namespace(&parsed.namespace)?;
    validate_globs(&parsed.ignore_patterns, "-I/--ignore")?;

    Ok(parsed)
}
