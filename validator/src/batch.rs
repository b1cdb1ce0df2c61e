//! Validating word lists.
//!
//! Words are independent, so with the `parallel` feature they are checked on
//! the rayon pool. Verdicts always come back in input order.

use crate::localize::WordVerdict;
use crate::roundtrip::Validator;
use libpali_core::{ConvertError, Script};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptCounts {
    pub passed: usize,
    pub failed: usize,
    /// Failures narrowed down to at least one reproduction.
    pub localized: usize,
    /// Failures with a reproduction that fails on its own.
    pub context_free: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub words: usize,
    /// Words that passed in every script.
    pub clean: usize,
    pub per_script: BTreeMap<Script, ScriptCounts>,
}

impl BatchSummary {
    fn tally(verdicts: &[WordVerdict]) -> Self {
        let mut summary = BatchSummary {
            words: verdicts.len(),
            ..BatchSummary::default()
        };
        for verdict in verdicts {
            if verdict.passed() {
                summary.clean += 1;
            }
            for sv in &verdict.scripts {
                let counts = summary.per_script.entry(sv.script).or_default();
                if sv.passed() {
                    counts.passed += 1;
                    continue;
                }
                counts.failed += 1;
                if sv.is_localized() {
                    counts.localized += 1;
                }
                if sv.repros.iter().any(|r| r.context_free) {
                    counts.context_free += 1;
                }
            }
        }
        summary
    }

    /// Failed (word, script) checks across all scripts.
    pub fn failures(&self) -> usize {
        self.per_script.values().map(|c| c.failed).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub scripts: Vec<Script>,
    pub summary: BatchSummary,
    pub verdicts: Vec<WordVerdict>,
}

impl BatchReport {
    pub fn failing(&self) -> impl Iterator<Item = &WordVerdict> {
        self.verdicts.iter().filter(|v| !v.passed())
    }
}

impl Validator {
    /// Validate every word against one script.
    pub fn validate_batch<S>(&self, words: &[S], script: Script) -> Result<BatchReport, ConvertError>
    where
        S: AsRef<str> + Sync,
    {
        self.validate_batch_in(words, &[script])
    }

    /// Validate every word against each of `scripts`.
    pub fn validate_batch_in<S>(
        &self,
        words: &[S],
        scripts: &[Script],
    ) -> Result<BatchReport, ConvertError>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        let verdicts = words
            .par_iter()
            .map(|w| self.validate(w.as_ref(), scripts))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(not(feature = "parallel"))]
        let verdicts = words
            .iter()
            .map(|w| self.validate(w.as_ref(), scripts))
            .collect::<Result<Vec<_>, _>>()?;

        let summary = BatchSummary::tally(&verdicts);
        info!(
            words = summary.words,
            clean = summary.clean,
            failures = summary.failures(),
            "batch validated"
        );
        Ok(BatchReport {
            scripts: scripts.to_vec(),
            summary,
            verdicts,
        })
    }
}
