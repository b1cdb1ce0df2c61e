//! Single-word round trip through a script.
//!
//! A Devanagari word is taken to IPE, rendered in the script, read back and
//! rendered again. The trip succeeds when both IPE strings agree and both
//! renderings agree. Divergence is data, never an error: the only error is
//! a script the dispatcher cannot reach.

use crate::config::ValidatorConfig;
use libpali_core::ipe::to_phonetic;
use libpali_core::{registry, ConvertError, Converter, Script};
use serde::Serialize;
use tracing::debug;

/// Everything computed during one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTrip {
    pub word: String,
    pub script: Script,
    pub ipe1: String,
    /// `ipe1` rendered in the script.
    pub s1: String,
    /// IPE read back from `s1`.
    pub ipe2: String,
    /// `ipe2` rendered in the script.
    pub s2: String,
    pub ipe_match: bool,
    pub script_match: bool,
    /// Latin spelling of `ipe1`, for reports.
    pub phonetic1: String,
    /// Latin spelling of `ipe2`.
    pub phonetic2: String,
}

impl RoundTrip {
    pub fn is_success(&self) -> bool {
        self.ipe_match && self.script_match
    }
}

/// Round-trip checker. Cheap to share between threads.
#[derive(Debug, Clone)]
pub struct Validator {
    converter: Converter,
    config: ValidatorConfig,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            converter: Converter::with_config(config.base().clone()),
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Round-trip a Devanagari `word` through `script`.
    pub fn check(&self, word: &str, script: Script) -> Result<RoundTrip, ConvertError> {
        let conv = &self.converter;
        let ipe1 = conv.to_ipe(word, Script::Devanagari)?;
        let s1 = conv.convert(&ipe1, Script::Ipe, script, false)?;
        let read_back = conv.to_devanagari(&s1, script)?;
        let ipe2 = conv.to_ipe(&read_back, Script::Devanagari)?;
        let s2 = conv.convert(&ipe2, Script::Ipe, script, false)?;

        let ipe_match = ipe1 == ipe2;
        let script_match = self.same_rendering(&s1, &s2, script);
        if !(ipe_match && script_match) {
            debug!(%script, word, s1 = %s1, s2 = %s2, ipe_match, "round trip diverged");
        }

        Ok(RoundTrip {
            word: word.to_string(),
            script,
            phonetic1: to_phonetic(&ipe1),
            phonetic2: to_phonetic(&ipe2),
            ipe1,
            s1,
            ipe2,
            s2,
            ipe_match,
            script_match,
        })
    }

    fn same_rendering(&self, a: &str, b: &str, script: Script) -> bool {
        if !self.config.normalize_for_comparison {
            return a == b;
        }
        match registry().get(script) {
            Some(codec) => codec.normalize_for_comparison(a) == codec.normalize_for_comparison(b),
            None => a == b,
        }
    }
}
