//! libpali-core
//!
//! Script tables, the IPE pivot and the per-script codecs for converting
//! canonical Pali text between writing systems without losing phonetic
//! identity.
//!
//! Public API:
//! - `Script` - the supported writing systems, with detection
//! - `Converter` - conversion between any two scripts, and book conversion
//! - `ScriptCodec` / `Registry` - one codec per script, built once
//! - `ipe` - the intermediate phonetic encoding and Pali collation
//! - `parse_syllables` - Devanagari syllable segmentation
//! - `Config` - book punctuation and title-case settings
//!
//! ```
//! use libpali_core::{Converter, Script};
//!
//! let conv = Converter::new();
//! let khmer = conv.convert("धम्मो", Script::Devanagari, Script::Khmer, false).unwrap();
//! let back = conv.convert(&khmer, Script::Khmer, Script::Devanagari, false).unwrap();
//! assert_eq!(back, "धम्मो");
//! ```

pub mod book;
pub mod codec;
pub mod config;
pub mod convert;
pub mod devanagari;
pub mod error;
pub mod ipe;
pub mod script;
pub mod syllable;
pub mod table;
pub mod trie;

pub use book::has_native_dandas;
pub use codec::{registry, Pivot, Registry, ScriptCodec};
pub use config::{BookConfig, Config};
pub use convert::{Converter, Step};
pub use error::{ConfigError, ConvertError};
pub use script::{ParseScriptError, Script};
pub use syllable::{parse_syllables, Syllable};
pub use table::{CharTable, TableBuilder};
pub use trie::SequenceTrie;
