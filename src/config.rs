//! Configuration file support.
//!
//! Loads optional `.screq/config.toml` from the app root.

use serde::Deserialize;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ScreqConfig {
    /// Extra ignore globs, merged with `-I` patterns from the command line.
    pub ignore: Vec<String>,
    pub header: HeaderConfig,
}

/// Overrides for the injected banner text.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Text of the `// Project:` banner line.
    pub project: Option<String>,
    /// Text of the `// Copyright:` banner line.
    pub copyright: Option<String>,
}

impl ScreqConfig {
    /// Load config from `.screq/config.toml` in the given app root.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".screq").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[screq][warn] Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[screq][warn] Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScreqConfig;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let config = ScreqConfig::load(tmp.path());
        assert!(config.ignore.is_empty());
        assert!(config.header.project.is_none());
    }

    #[test]
    fn loads_ignore_and_header_sections() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let dir = tmp.path().join(".screq");
        std::fs::create_dir_all(&dir).expect("config dir");
        std::fs::write(
            dir.join("config.toml"),
            r#"
ignore = ["fixtures/**"]

[header]
project = "DarkHorse - browser face of the web app"
"#,
        )
        .expect("write config");

        let config = ScreqConfig::load(tmp.path());
        assert_eq!(config.ignore, vec!["fixtures/**".to_string()]);
        assert_eq!(
            config.header.project.as_deref(),
            Some("DarkHorse - browser face of the web app")
        );
        assert!(config.header.copyright.is_none());
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "ignore = not-a-list").expect("write config");
        let config = ScreqConfig::load_from_path(&path);
        assert!(config.ignore.is_empty());
    }
}
