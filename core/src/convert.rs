//! Conversion dispatcher.
//!
//! A conversion is planned as a short route through the pivots: decode the
//! source into its pivot, bridge Devanagari and IPE when the two ends use
//! different pivots, then encode into the target. Routes hold at most four
//! steps and are computed per call from the registry.

use crate::codec::{registry, Pivot};
use crate::config::Config;
use crate::error::ConvertError;
use crate::ipe;
use crate::Script;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// One stage of a conversion route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Script text → the script's pivot.
    Decode(Script),
    DevanagariToIpe,
    IpeToDevanagari,
    /// Pivot text → script text.
    Encode(Script),
}

impl Step {
    fn apply(self, text: &str) -> String {
        match self {
            Step::DevanagariToIpe => ipe::devanagari_to_ipe(text),
            Step::IpeToDevanagari => ipe::ipe_to_devanagari(text),
            Step::Decode(script) => match registry().get(script) {
                Some(codec) => codec.to_pivot(text),
                None => text.to_string(),
            },
            Step::Encode(script) => match registry().get(script) {
                Some(codec) => codec.from_pivot(text),
                None => text.to_string(),
            },
        }
    }
}

/// Plan the route from `source` to `target`. Both must be concrete scripts.
pub fn route(source: Script, target: Script) -> Result<Vec<Step>, ConvertError> {
    let unsupported = ConvertError::UnsupportedPair {
        from: source,
        to: target,
    };
    let reg = registry();
    let (Some(from), Some(to)) = (reg.get(source), reg.get(target)) else {
        return Err(unsupported);
    };

    let mut steps = Vec::with_capacity(4);
    if source == target {
        return Ok(steps);
    }
    if source != from.pivot().script() {
        steps.push(Step::Decode(source));
    }
    match (from.pivot(), to.pivot()) {
        (Pivot::Devanagari, Pivot::Ipe) => steps.push(Step::DevanagariToIpe),
        (Pivot::Ipe, Pivot::Devanagari) => steps.push(Step::IpeToDevanagari),
        _ => {}
    }
    if target != to.pivot().script() {
        steps.push(Step::Encode(target));
    }
    Ok(steps)
}

/// Entry point for conversions between any two supported scripts.
///
/// # Example
/// ```
/// use libpali_core::{Converter, Script};
///
/// let conv = Converter::new();
/// let latin = conv.convert("बुद्धो", Script::Devanagari, Script::Latin, false).unwrap();
/// assert_eq!(latin, "buddho");
/// let thai = conv.convert(&latin, Script::Latin, Script::Thai, false).unwrap();
/// assert_eq!(thai, "พุทฺโธ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert `text` from `source` to `target`.
    ///
    /// `Script::Unknown` as source asks for detection; text in no supported
    /// script is returned unchanged. `Script::Unknown` as target is an error.
    /// With `title_case`, targets listed in `Config::title_case_scripts` get
    /// the first letter of every word upper-cased.
    pub fn convert(
        &self,
        text: &str,
        source: Script,
        target: Script,
        title_case: bool,
    ) -> Result<String, ConvertError> {
        if target == Script::Unknown {
            return Err(ConvertError::UnsupportedPair {
                from: source,
                to: target,
            });
        }
        let source = match source {
            Script::Unknown => match Script::detect(text) {
                Some(detected) => {
                    debug!(%detected, "detected source script");
                    detected
                }
                None => return Ok(text.to_string()),
            },
            known => known,
        };
        if source == target {
            return Ok(text.to_string());
        }

        let steps = route(source, target)?;
        trace!(%source, %target, ?steps, "conversion route");
        let mut out = steps
            .iter()
            .fold(text.to_string(), |acc, step| step.apply(&acc));

        if title_case && self.config.title_cases(target) {
            out = title_case_words(&out);
        }
        Ok(out)
    }

    pub fn to_devanagari(&self, text: &str, source: Script) -> Result<String, ConvertError> {
        self.convert(text, source, Script::Devanagari, false)
    }

    pub fn to_ipe(&self, text: &str, source: Script) -> Result<String, ConvertError> {
        self.convert(text, source, Script::Ipe, false)
    }

    /// Pali alphabetical order of two strings written in `script`.
    pub fn compare(&self, a: &str, b: &str, script: Script) -> Result<Ordering, ConvertError> {
        let a = self.to_ipe(a, script)?;
        let b = self.to_ipe(b, script)?;
        Ok(ipe::compare(&a, &b))
    }
}

/// Upper-case the first letter of every whitespace-separated word. Leading
/// punctuation such as `(` or `“` is skipped over.
pub fn title_case_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    out
}
