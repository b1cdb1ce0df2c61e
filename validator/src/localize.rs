//! Narrowing a failing word down to the syllables that fail.
//!
//! Single syllables are tried first; any that fail on their own are
//! context-free reproductions. When every syllable passes alone the failure
//! needs context, and windows of two, three, ... consecutive syllables are
//! tried left to right until one fails.

use crate::roundtrip::{RoundTrip, Validator};
use libpali_core::syllable::{join, parse_syllables, Syllable};
use libpali_core::{ConvertError, Script};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, info};

/// Smallest substring found to reproduce a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalRepro {
    pub substring: String,
    /// Indices into `WordVerdict::syllables`.
    pub syllable_range: Range<usize>,
    pub result: RoundTrip,
    /// The substring fails on its own, without neighbouring syllables.
    pub context_free: bool,
}

/// Outcome of one word in one script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptVerdict {
    pub script: Script,
    pub result: RoundTrip,
    /// Empty when the word passed, or when no window reproduced the failure.
    pub repros: Vec<MinimalRepro>,
}

impl ScriptVerdict {
    pub fn passed(&self) -> bool {
        self.result.is_success()
    }

    pub fn is_localized(&self) -> bool {
        !self.repros.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordVerdict {
    pub word: String,
    pub syllables: Vec<String>,
    pub scripts: Vec<ScriptVerdict>,
}

impl WordVerdict {
    pub fn passed(&self) -> bool {
        self.scripts.iter().all(ScriptVerdict::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScriptVerdict> {
        self.scripts.iter().filter(|v| !v.passed())
    }
}

impl Validator {
    /// Round-trip `word` through every script in `scripts`, localizing
    /// failures when the configuration asks for it.
    pub fn validate(&self, word: &str, scripts: &[Script]) -> Result<WordVerdict, ConvertError> {
        let syllables = parse_syllables(word);
        let mut verdicts = Vec::with_capacity(scripts.len());

        for &script in scripts {
            let result = self.check(word, script)?;
            let repros = if result.is_success() || !self.config().localize {
                Vec::new()
            } else {
                self.localize(&result, &syllables, script)?
            };
            verdicts.push(ScriptVerdict {
                script,
                result,
                repros,
            });
        }

        Ok(WordVerdict {
            word: word.to_string(),
            syllables: syllables.iter().map(|s| s.text.clone()).collect(),
            scripts: verdicts,
        })
    }

    fn localize(
        &self,
        whole: &RoundTrip,
        syllables: &[Syllable],
        script: Script,
    ) -> Result<Vec<MinimalRepro>, ConvertError> {
        let repros = find_repros(whole, syllables, self.config().max_window, |text| {
            self.check(text, script)
        })?;
        match repros.first() {
            Some(first) if first.context_free => {
                info!(%script, word = %whole.word, count = repros.len(), "context-free failures");
            }
            Some(first) => {
                info!(%script, word = %whole.word, substring = %first.substring, "minimal failing window");
            }
            None => {
                debug!(%script, word = %whole.word, "failure not reproduced by any window");
            }
        }
        Ok(repros)
    }
}

/// Search `syllables` of a failing word for minimal reproductions, using
/// `check` to round-trip each candidate substring. `max_window` caps the
/// window size; 0 lets it grow to the whole word.
fn find_repros<F>(
    whole: &RoundTrip,
    syllables: &[Syllable],
    max_window: usize,
    check: F,
) -> Result<Vec<MinimalRepro>, ConvertError>
where
    F: Fn(&str) -> Result<RoundTrip, ConvertError>,
{
    let n = syllables.len();
    if n == 1 {
        return Ok(vec![MinimalRepro {
            substring: syllables[0].text.clone(),
            syllable_range: 0..1,
            result: whole.clone(),
            context_free: true,
        }]);
    }

    let mut repros = Vec::new();
    for (i, syllable) in syllables.iter().enumerate() {
        let result = check(&syllable.text)?;
        if !result.is_success() {
            repros.push(MinimalRepro {
                substring: syllable.text.clone(),
                syllable_range: i..i + 1,
                result,
                context_free: true,
            });
        }
    }
    if !repros.is_empty() {
        return Ok(repros);
    }

    let widest = match max_window {
        0 => n,
        w => w.min(n),
    };
    for size in 2..=widest {
        for start in 0..=n - size {
            let substring = join(&syllables[start..start + size]);
            let result = check(&substring)?;
            if !result.is_success() {
                return Ok(vec![MinimalRepro {
                    substring,
                    syllable_range: start..start + size,
                    result,
                    context_free: false,
                }]);
            }
        }
    }
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorConfig;

    #[test]
    fn passing_word_has_no_repros() {
        let verdict = Validator::new()
            .validate("धम्मो", &[Script::Thai, Script::Latin])
            .unwrap();
        assert!(verdict.passed());
        assert_eq!(verdict.syllables, vec!["ध", "म्मो"]);
        assert!(verdict.scripts.iter().all(|v| v.repros.is_empty()));
    }

    #[test]
    fn failure_inside_one_syllable_is_context_free() {
        let verdict = Validator::new()
            .validate("सक्हि", &[Script::Latin])
            .unwrap();
        let latin = &verdict.scripts[0];
        assert!(!latin.passed());
        assert_eq!(latin.repros.len(), 1);
        let repro = &latin.repros[0];
        assert!(repro.context_free);
        assert_eq!(repro.syllable_range, 1..2);
        assert_eq!(repro.substring, "क्हि");
    }

    #[test]
    fn thai_leading_vowel_before_a_carrier_passes() {
        let verdict = Validator::new()
            .validate("कोअ", &[Script::Thai])
            .unwrap();
        assert!(verdict.passed(), "{:?}", verdict.scripts[0].result);
    }

    /// Stand-in round trip that fails whenever `bad` occurs in the text.
    fn failing_on(bad: &'static str) -> impl Fn(&str) -> Result<RoundTrip, ConvertError> {
        move |text: &str| {
            let ok = !text.contains(bad);
            Ok(RoundTrip {
                word: text.to_string(),
                script: Script::Thai,
                ipe1: String::new(),
                s1: text.to_string(),
                ipe2: String::new(),
                s2: text.to_string(),
                ipe_match: ok,
                script_match: true,
                phonetic1: String::new(),
                phonetic2: String::new(),
            })
        }
    }

    #[test]
    fn smallest_failing_window_is_reported() {
        let syllables = parse_syllables("धम्मेअसो");
        let check = failing_on("मेअ");
        let whole = check("धम्मेअसो").unwrap();
        let repros = find_repros(&whole, &syllables, 0, check).unwrap();
        assert_eq!(repros.len(), 1);
        assert_eq!(repros[0].substring, "म्मेअ");
        assert_eq!(repros[0].syllable_range, 1..3);
        assert!(!repros[0].context_free);
    }

    #[test]
    fn max_window_caps_the_search() {
        let syllables = parse_syllables("धम्मेअसो");
        let check = failing_on("धम्मेअ");
        let whole = check("धम्मेअसो").unwrap();
        let capped = find_repros(&whole, &syllables, 2, &check).unwrap();
        assert!(capped.is_empty());
        let open = find_repros(&whole, &syllables, 0, &check).unwrap();
        assert_eq!(open[0].syllable_range, 0..3);
    }

    #[test]
    fn failing_syllables_win_over_windows() {
        let syllables = parse_syllables("सक्हिसक्हि");
        let check = failing_on("क्हि");
        let whole = check("सक्हिसक्हि").unwrap();
        let repros = find_repros(&whole, &syllables, 0, check).unwrap();
        let ranges: Vec<_> = repros.iter().map(|r| r.syllable_range.clone()).collect();
        assert_eq!(ranges, vec![1..2, 3..4]);
        assert!(repros.iter().all(|r| r.context_free));
    }

    #[test]
    fn localization_can_be_switched_off() {
        let config = ValidatorConfig {
            localize: false,
            ..ValidatorConfig::default()
        };
        let verdict = Validator::with_config(config)
            .validate("सक्हि", &[Script::Latin])
            .unwrap();
        assert!(!verdict.passed());
        assert!(!verdict.scripts[0].is_localized());
    }
}
