//! Validator configuration.

use libpali_core::{ConfigError, Script};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validator configuration that extends the engine `Config` from core.
///
/// The engine keys (`title_case_scripts`, `[book]`) are flattened into the
/// same TOML document, so one file drives both the converter and the
/// validator.
///
/// # Example
///
/// ```rust
/// use libpali_validate::ValidatorConfig;
///
/// let config = ValidatorConfig::default();
/// assert!(config.localize);
/// let engine = config.into_base();
/// assert!(engine.title_case_scripts.contains(&libpali_core::Script::Latin));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Scripts each word is round-tripped through.
    pub scripts: Vec<Script>,

    /// Largest syllable window tried while localizing. The default, 0, lets
    /// windows grow up to the whole word.
    pub max_window: usize,

    /// Compare script strings after the codec's comparison normalization
    /// (Myanmar tall `ā`, for instance) instead of byte for byte.
    pub normalize_for_comparison: bool,

    /// Search for minimal reproductions when a word fails.
    pub localize: bool,

    /// Engine configuration (title casing, book punctuation).
    #[serde(flatten)]
    pub base: libpali_core::Config,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            scripts: Script::DISPLAY.to_vec(),
            max_window: 0,
            normalize_for_comparison: true,
            localize: true,
            base: libpali_core::Config::default(),
        }
    }
}

impl ValidatorConfig {
    /// Convert this validator config into the engine config for `Converter::with_config`
    pub fn into_base(self) -> libpali_core::Config {
        self.base
    }

    pub fn base(&self) -> &libpali_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut libpali_core::Config {
        &mut self.base
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base.validate()?;
        if self.scripts.is_empty() {
            return Err(ConfigError::Invalid {
                field: "scripts",
                reason: "no script to validate against".to_string(),
            });
        }
        if self.scripts.contains(&Script::Unknown) {
            return Err(ConfigError::Invalid {
                field: "scripts",
                reason: "Unknown is not a conversion target".to_string(),
            });
        }
        if self.max_window == 1 {
            return Err(ConfigError::Invalid {
                field: "max_window",
                reason: "windows start at two syllables; use 0 for unlimited".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_keys_sit_at_the_top_level() {
        let config = ValidatorConfig::from_toml_str(
            r#"
scripts = ["thai", "latin"]
max_window = 3
title_case_scripts = ["latin"]

[book]
collapse_spaces = false
"#,
        )
        .unwrap();
        assert_eq!(config.scripts, vec![Script::Thai, Script::Latin]);
        assert_eq!(config.max_window, 3);
        assert_eq!(config.base().title_case_scripts, vec![Script::Latin]);
        assert!(!config.base().book.collapse_spaces);
        assert!(config.localize);
    }

    #[test]
    fn windows_are_unbounded_by_default() {
        assert_eq!(ValidatorConfig::default().max_window, 0);
        let config = ValidatorConfig::from_toml_str("localize = true").unwrap();
        assert_eq!(config.max_window, 0);
    }

    #[test]
    fn defaults_survive_toml_round_trip() {
        let config = ValidatorConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(ValidatorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(ValidatorConfig::from_toml_str("scripts = []").is_err());
        assert!(ValidatorConfig::from_toml_str(r#"scripts = ["unknown"]"#).is_err());
        assert!(ValidatorConfig::from_toml_str("max_window = 1").is_err());
        assert!(ValidatorConfig::from_toml_str(r#"title_case_scripts = ["thai"]"#).is_err());
    }

    #[test]
    fn base_is_mutable_in_place() {
        let mut config = ValidatorConfig::default();
        config.base_mut().title_case_scripts.clear();
        assert!(config.into_base().title_case_scripts.is_empty());
    }
}
