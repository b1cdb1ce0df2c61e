//! Per-script codecs and the registry that owns them.
//!
//! Every supported script has exactly one [`ScriptCodec`] converting between
//! the script and its pivot. Abugida scripts pivot through Devanagari, the
//! alphabetic scripts (Latin, Cyrillic) through IPE. The dispatcher composes
//! codecs; it never needs to know how a particular script works.

use crate::devanagari::{self, CharClass};
use crate::table::CharTable;
use crate::Script;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use tracing::debug;

pub mod cyrillic;
pub mod indic;
pub mod khmer;
pub mod latin;
pub mod myanmar;
pub mod sinhala;
pub mod thai;
pub mod tibetan;

pub use cyrillic::CyrillicCodec;
pub use indic::IndicCodec;
pub use khmer::KhmerCodec;
pub use latin::LatinCodec;
pub use myanmar::MyanmarCodec;
pub use sinhala::SinhalaCodec;
pub use thai::ThaiCodec;
pub use tibetan::TibetanCodec;

/// Encoding a codec converts to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pivot {
    Devanagari,
    Ipe,
}

impl Pivot {
    pub fn script(self) -> Script {
        match self {
            Pivot::Devanagari => Script::Devanagari,
            Pivot::Ipe => Script::Ipe,
        }
    }
}

/// Bidirectional conversion between one script and its pivot.
///
/// Implementations are immutable after construction and shared by every
/// thread through the [`Registry`].
pub trait ScriptCodec: Send + Sync {
    fn script(&self) -> Script;

    fn pivot(&self) -> Pivot;

    /// Script text → pivot text.
    fn to_pivot(&self, text: &str) -> String;

    /// Pivot text → script text.
    fn from_pivot(&self, text: &str) -> String;

    /// Fold accepted display variants together before two renderings are
    /// compared. Stored and displayed text is never passed through this.
    fn normalize_for_comparison<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    /// The character table behind the codec, if it has one.
    fn table(&self) -> Option<&CharTable> {
        None
    }
}

/// Codec for a pivot encoding itself.
#[derive(Debug, Clone, Copy)]
pub struct IdentityCodec {
    pivot: Pivot,
}

impl IdentityCodec {
    pub const fn new(pivot: Pivot) -> Self {
        Self { pivot }
    }
}

impl ScriptCodec for IdentityCodec {
    fn script(&self) -> Script {
        self.pivot.script()
    }

    fn pivot(&self) -> Pivot {
        self.pivot
    }

    fn to_pivot(&self, text: &str) -> String {
        text.to_string()
    }

    fn from_pivot(&self, text: &str) -> String {
        text.to_string()
    }
}

/// All codecs, keyed by script.
pub struct Registry {
    codecs: AHashMap<Script, Box<dyn ScriptCodec>>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

/// The process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn build() -> Self {
        let codecs: Vec<Box<dyn ScriptCodec>> = vec![
            Box::new(IdentityCodec::new(Pivot::Devanagari)),
            Box::new(IdentityCodec::new(Pivot::Ipe)),
            Box::new(LatinCodec::new()),
            Box::new(CyrillicCodec::new()),
            Box::new(IndicCodec::bengali()),
            Box::new(IndicCodec::gujarati()),
            Box::new(IndicCodec::gurmukhi()),
            Box::new(IndicCodec::kannada()),
            Box::new(IndicCodec::malayalam()),
            Box::new(IndicCodec::telugu()),
            Box::new(SinhalaCodec::new()),
            Box::new(ThaiCodec::new()),
            Box::new(MyanmarCodec::new()),
            Box::new(KhmerCodec::new()),
            Box::new(TibetanCodec::new()),
        ];
        let codecs: AHashMap<Script, Box<dyn ScriptCodec>> =
            codecs.into_iter().map(|c| (c.script(), c)).collect();
        debug!(count = codecs.len(), "codec registry built");
        Self { codecs }
    }

    pub fn get(&self, script: Script) -> Option<&dyn ScriptCodec> {
        self.codecs.get(&script).map(|c| c.as_ref())
    }

    pub fn table(&self, script: Script) -> Option<&CharTable> {
        self.get(script).and_then(|c| c.table())
    }

    /// Registered scripts in `Script` order.
    pub fn scripts(&self) -> Vec<Script> {
        let mut scripts: Vec<Script> = self.codecs.keys().copied().collect();
        scripts.sort();
        scripts
    }
}

/// What the abugida decoder emitted last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecoderState {
    Idle,
    AfterConsonant,
    AfterVirama,
    AfterVowel,
    AfterNasal,
}

impl DecoderState {
    fn after(fragment: &str) -> Self {
        match fragment.chars().last().map(devanagari::classify) {
            Some(CharClass::Consonant) => DecoderState::AfterConsonant,
            Some(CharClass::Virama) => DecoderState::AfterVirama,
            Some(CharClass::IndependentVowel | CharClass::VowelSign) => DecoderState::AfterVowel,
            Some(CharClass::Nasal) => DecoderState::AfterNasal,
            _ => DecoderState::Idle,
        }
    }
}

/// Script → Devanagari for abugidas, run after any visual-order pre-pass.
///
/// Longest match against the table; a dependent vowel sign with no consonant
/// to attach to becomes its independent vowel. Fragments that decode to
/// nothing (joiners) leave the state alone; unmapped characters are copied
/// and reset it.
pub(crate) fn decode_abugida(table: &CharTable, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut state = DecoderState::Idle;
    let mut i = 0;

    while i < chars.len() {
        let Some((end, deva)) = table.lookup_reverse(&chars, i) else {
            out.push(chars[i]);
            state = DecoderState::Idle;
            i += 1;
            continue;
        };
        i = end;
        if deva.is_empty() {
            continue;
        }
        let orphan_sign = match single_char(deva) {
            Some(sign) if state != DecoderState::AfterConsonant => {
                devanagari::independent_of_sign(sign)
            }
            _ => None,
        };
        match orphan_sign {
            Some(vowel) => {
                out.push(vowel);
                state = DecoderState::AfterVowel;
            }
            None => {
                out.push_str(deva);
                state = DecoderState::after(deva);
            }
        }
    }
    out
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Longest-match substitution for alphabetic scripts, reading upper case as
/// lower case. Unmapped characters are copied in their original case.
pub(crate) fn decode_alphabet(table: &CharTable, text: &str) -> String {
    let original: Vec<char> = text.chars().collect();
    let lowered: Vec<char> = original.iter().map(|&ch| lower(ch)).collect();
    let mut out = String::with_capacity(text.len() * 3);
    let mut i = 0;

    while i < lowered.len() {
        match table.lookup_reverse(&lowered, i) {
            Some((end, ipe)) => {
                out.push_str(ipe);
                i = end;
            }
            None => {
                out.push(original[i]);
                i += 1;
            }
        }
    }
    out
}

fn lower(ch: char) -> char {
    let mut lowered = ch.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(l), None) => l,
        _ => ch,
    }
}
