use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Config filename looked up in the working directory.
pub const CONFIG_FILE: &str = "fileconv.toml";
/// Environment variable overriding the OCR command.
pub const OCR_COMMAND_ENV: &str = "FILECONV_OCR_COMMAND";

/// Resolved configuration: where it came from and the settings it holds.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The config file the settings were loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Settings after file loading and environment overrides.
    pub settings: Settings,
}

/// User-configurable settings from fileconv.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output placement.
    pub output: OutputSettings,
    /// OCR engine configuration.
    pub ocr: OcrSettings,
}

/// Output-related settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for output files when none is given per conversion.
    /// Unset means "next to the input file".
    pub directory: Option<PathBuf>,
}

/// OCR engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// OCR executable, by name (looked up in PATH) or by path.
    pub command: String,
    /// Language passed to the engine (`-l`), e.g. "eng" or "deu+eng".
    pub language: Option<String>,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            command: "tesseract".into(),
            language: None,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit config file must exist and parse. Without one, `fileconv.toml`
    /// in `dir` is used when present and valid, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self {
                config_path: Some(path.to_path_buf()),
                settings: Self::read_settings(path)?,
            },
            None => Self::from_dir(dir),
        };
        config.apply_overrides(std::env::var(OCR_COMMAND_ENV).ok());
        Ok(config)
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConvertError::Config(format!("cannot get cwd: {e}")))?;
        Self::load(None, &cwd)
    }

    /// Pick up `fileconv.toml` from `dir`, falling back to defaults.
    fn from_dir(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::read_settings(&path) {
            Ok(settings) => Self {
                config_path: Some(path),
                settings,
            },
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn read_settings(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ConvertError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Apply the OCR command override, ignoring blank values.
    pub fn apply_overrides(&mut self, ocr_command: Option<String>) {
        if let Some(cmd) = ocr_command.filter(|c| !c.trim().is_empty()) {
            self.settings.ocr.command = cmd;
        }
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(&self.settings)
            .map_err(|e| ConvertError::Config(format!("failed to serialize settings: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let cfg = Config::from_dir(tmp.path());
        assert!(cfg.config_path.is_none());
        assert_eq!(cfg.settings.ocr.command, "tesseract");
        assert!(cfg.settings.output.directory.is_none());
    }

    #[test]
    fn loads_config_file_from_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "[output]\ndirectory = \"converted\"\n\n[ocr]\nlanguage = \"deu\"\n",
        )
        .unwrap();

        let cfg = Config::from_dir(tmp.path());
        assert_eq!(cfg.config_path, Some(tmp.path().join(CONFIG_FILE)));
        assert_eq!(
            cfg.settings.output.directory,
            Some(PathBuf::from("converted"))
        );
        assert_eq!(cfg.settings.ocr.language.as_deref(), Some("deu"));
        // Unspecified keys keep their defaults
        assert_eq!(cfg.settings.ocr.command, "tesseract");
    }

    #[test]
    fn invalid_config_in_dir_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "[ocr\ncommand = ").unwrap();
        let cfg = Config::from_dir(tmp.path());
        assert!(cfg.config_path.is_none());
        assert_eq!(cfg.settings, Settings::default());
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(Some(&tmp.path().join("missing.toml")), tmp.path()).unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn explicit_invalid_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "ocr = 5").unwrap();
        assert!(Config::load(Some(&path), tmp.path()).is_err());
    }

    #[test]
    fn override_replaces_ocr_command() {
        let mut cfg = Config::default();
        cfg.apply_overrides(Some("/opt/ocr/bin/tesseract".into()));
        assert_eq!(cfg.settings.ocr.command, "/opt/ocr/bin/tesseract");

        cfg.apply_overrides(Some("  ".into()));
        assert_eq!(cfg.settings.ocr.command, "/opt/ocr/bin/tesseract");
    }

    #[test]
    fn to_toml_round_trips() {
        let mut cfg = Config::default();
        cfg.settings.ocr.language = Some("eng".into());
        let rendered = cfg.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, cfg.settings);
    }
}
