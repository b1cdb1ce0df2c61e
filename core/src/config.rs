//! Engine configuration.
//!
//! The engine runs with `Config::default()` unless a caller loads a TOML
//! file. Validator front-ends wrap this struct in their own config with
//! `#[serde(flatten)]`, so the keys below can also appear at the top level of
//! a validator config file.

use crate::error::ConfigError;
use crate::Script;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Punctuation handling for book conversion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BookConfig {
    /// `rend` values of verse paragraphs.
    pub gatha_rends: Vec<String>,
    /// `rend` values of centred paragraphs (titles, colophons).
    pub centre_rends: Vec<String>,
    pub collapse_spaces: bool,
    /// Remove a space left before `.`, `,`, `;`, `:`, `?`, `!` or `)`.
    pub trim_space_before_punctuation: bool,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            gatha_rends: ["gatha1", "gatha2", "gatha3", "gathalast"]
                .into_iter()
                .map(String::from)
                .collect(),
            centre_rends: vec!["centre".to_string()],
            collapse_spaces: true,
            trim_space_before_punctuation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Target scripts for which `title_case` is honoured.
    pub title_case_scripts: Vec<Script>,
    pub book: BookConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title_case_scripts: vec![Script::Latin, Script::Cyrillic],
            book: BookConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(script) = self.title_case_scripts.iter().find(|s| !s.has_case()) {
            return Err(ConfigError::Invalid {
                field: "title_case_scripts",
                reason: format!("{script} has no letter case"),
            });
        }
        let mut rends = self.book.gatha_rends.iter().chain(&self.book.centre_rends);
        if let Some(bad) = rends.find(|r| r.is_empty() || r.contains('"')) {
            return Err(ConfigError::Invalid {
                field: "book",
                reason: format!("unusable rend value {bad:?}"),
            });
        }
        Ok(())
    }

    pub fn title_cases(&self, script: Script) -> bool {
        self.title_case_scripts.contains(&script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("title_case_scripts"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_toml_str("[book]\ncollapse_spaces = false\n").unwrap();
        assert!(!config.book.collapse_spaces);
        assert_eq!(config.book.gatha_rends.len(), 4);
        assert!(config.title_cases(Script::Latin));
    }

    #[test]
    fn caseless_title_case_script_is_rejected() {
        let err = Config::from_toml_str("title_case_scripts = [\"thai\"]").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "title_case_scripts",
                ..
            }
        ));
    }

    #[test]
    fn load_and_save_through_a_file() {
        let path = std::env::temp_dir().join(format!("libpali-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.book.centre_rends.push("title".into());
        config.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
