//! Configuration for the emojiscript CLI.
//!
//! Loads config from:
//! 1. Global: ~/.config/emojiscript/config.toml
//! 2. Per-project: .emojiscript/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [transpile]
//! flavor = "typescript"
//! max_input_len = 100000
//!
//! [output]
//! json = false
//! ```

use emojiscript_markup::Flavor;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Inputs longer than this many bytes are refused unless configured otherwise.
pub const DEFAULT_MAX_INPUT_LEN: usize = 100_000;

/// Transpile settings. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TranspileConfig {
    /// Output flavor used when `--flavor` is not given.
    pub flavor: Option<Flavor>,
    /// Largest accepted input, in bytes.
    pub max_input_len: Option<usize>,
}

/// Output settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of plain text.
    pub json: Option<bool>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EmojiscriptConfig {
    pub transpile: TranspileConfig,
    pub output: OutputConfig,
}

impl EmojiscriptConfig {
    /// Load configuration for a project.
    ///
    /// Loads the global config, then merges the per-project config from
    /// `<root>/.emojiscript/config.toml` over it. Files that are missing or
    /// fail to parse are skipped.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_file(&global_path) {
                config = config.merge(global);
            }
        }

        let project_path = root.join(".emojiscript").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("emojiscript").join("config.toml"))
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Fields set in `other` win; unset fields keep the current value.
    fn merge(self, other: Self) -> Self {
        Self {
            transpile: TranspileConfig {
                flavor: other.transpile.flavor.or(self.transpile.flavor),
                max_input_len: other.transpile.max_input_len.or(self.transpile.max_input_len),
            },
            output: OutputConfig {
                json: other.output.json.or(self.output.json),
            },
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.transpile.flavor.unwrap_or_default()
    }

    pub fn max_input_len(&self) -> usize {
        self.transpile.max_input_len.unwrap_or(DEFAULT_MAX_INPUT_LEN)
    }

    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_project_config(dir: &TempDir, body: &str) {
        let config_dir = dir.path().join(".emojiscript");
        std::fs::create_dir_all(&config_dir).unwrap();
        let mut file = std::fs::File::create(config_dir.join("config.toml")).unwrap();
        writeln!(file, "{body}").unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = EmojiscriptConfig::default();
        assert_eq!(config.flavor(), Flavor::JavaScript);
        assert_eq!(config.max_input_len(), DEFAULT_MAX_INPUT_LEN);
        assert!(!config.json());
    }

    #[test]
    fn test_load_project_file() {
        let dir = TempDir::new().unwrap();
        write_project_config(
            &dir,
            r#"
[transpile]
flavor = "typescript"
max_input_len = 64

[output]
json = true
"#,
        );

        let config = EmojiscriptConfig::load_file(
            &dir.path().join(".emojiscript").join("config.toml"),
        )
        .unwrap();
        assert_eq!(config.flavor(), Flavor::TypeScript);
        assert_eq!(config.max_input_len(), 64);
        assert!(config.json());
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_project_config(&dir, "[transpile]\nflavor = \"cobol\"\n");
        assert!(
            EmojiscriptConfig::load_file(&dir.path().join(".emojiscript").join("config.toml"))
                .is_none()
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(EmojiscriptConfig::load_file(&dir.path().join("nope.toml")).is_none());
    }

    #[test]
    fn test_merge_is_per_field() {
        let global: EmojiscriptConfig = toml::from_str(
            r#"
[transpile]
flavor = "typescript"
max_input_len = 10
"#,
        )
        .unwrap();
        let project: EmojiscriptConfig = toml::from_str(
            r#"
[transpile]
max_input_len = 20

[output]
json = true
"#,
        )
        .unwrap();

        let merged = EmojiscriptConfig::default().merge(global).merge(project);
        assert_eq!(merged.flavor(), Flavor::TypeScript);
        assert_eq!(merged.max_input_len(), 20);
        assert!(merged.json());
    }
}
