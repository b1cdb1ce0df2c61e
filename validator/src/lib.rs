//! libpali-validate
//!
//! Round-trip validation for the libpali engine. A word passes a script when
//! rendering it there and reading it back changes neither its IPE nor its
//! rendering. Failing words are narrowed down to the syllables responsible.
//!
//! Public API:
//! - `Validator::check` - one word, one script
//! - `Validator::validate` - one word, many scripts, with localization
//! - `Validator::validate_batch` - word lists, optionally in parallel
//! - `ValidatorConfig` - validator settings on top of the engine `Config`
//!
//! ```
//! use libpali_core::Script;
//! use libpali_validate::Validator;
//!
//! let verdict = Validator::new().validate("धम्मो", &Script::DISPLAY).unwrap();
//! assert!(verdict.passed());
//! ```

pub mod batch;
pub mod config;
pub mod localize;
pub mod roundtrip;

pub use batch::{BatchReport, BatchSummary, ScriptCounts};
pub use config::ValidatorConfig;
pub use localize::{MinimalRepro, ScriptVerdict, WordVerdict};
pub use roundtrip::{RoundTrip, Validator};
