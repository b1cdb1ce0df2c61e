//! Intermediate phonetic encoding (IPE).
//!
//! IPE spells every Pali phoneme with exactly one Private Use Area code point
//! and spells the inherent vowel explicitly. That removes the two ambiguities
//! the display scripts carry (implicit `a` in abugidas, digraph aspirates in
//! romanizations), so IPE is the pivot for every conversion that touches an
//! alphabetic script and the key used by search indexing.
//!
//! Code points are allocated in Pali alphabetical order, so comparing IPE
//! strings code point by code point is Pali collation.

use crate::devanagari::{self, VIRAMA, ZWJ, ZWNJ};
use crate::error::ConvertError;
use crate::Script;
use phf::phf_map;
use std::cmp::Ordering;

/// First code point of the IPE range.
pub const IPE_BASE: u32 = 0xE000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeKind {
    Vowel,
    Nasal,
    Consonant,
}

/// One unit of the Pali phonetic inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme {
    /// IPE code point.
    pub ipe: char,
    /// Devanagari independent vowel, consonant or anusvara.
    pub devanagari: char,
    /// Devanagari dependent vowel sign, for vowels other than `a`.
    pub sign: Option<char>,
    /// Conventional romanization, used for diagnostics.
    pub latin: &'static str,
    pub kind: PhonemeKind,
}

const fn unit(
    index: u32,
    devanagari: char,
    sign: Option<char>,
    latin: &'static str,
    kind: PhonemeKind,
) -> Phoneme {
    let ipe = match char::from_u32(IPE_BASE + index) {
        Some(c) => c,
        None => panic!("IPE code point out of range"),
    };
    Phoneme {
        ipe,
        devanagari,
        sign,
        latin,
        kind,
    }
}

use PhonemeKind::{Consonant as C, Nasal as N, Vowel as V};

/// The inventory in collation order.
pub static PHONEMES: [Phoneme; 41] = [
    unit(0, 'अ', None, "a", V),
    unit(1, 'आ', Some('ा'), "ā", V),
    unit(2, 'इ', Some('ि'), "i", V),
    unit(3, 'ई', Some('ी'), "ī", V),
    unit(4, 'उ', Some('ु'), "u", V),
    unit(5, 'ऊ', Some('ू'), "ū", V),
    unit(6, 'ए', Some('े'), "e", V),
    unit(7, 'ओ', Some('ो'), "o", V),
    unit(8, 'ं', None, "ṃ", N),
    unit(9, 'क', None, "k", C),
    unit(10, 'ख', None, "kh", C),
    unit(11, 'ग', None, "g", C),
    unit(12, 'घ', None, "gh", C),
    unit(13, 'ङ', None, "ṅ", C),
    unit(14, 'च', None, "c", C),
    unit(15, 'छ', None, "ch", C),
    unit(16, 'ज', None, "j", C),
    unit(17, 'झ', None, "jh", C),
    unit(18, 'ञ', None, "ñ", C),
    unit(19, 'ट', None, "ṭ", C),
    unit(20, 'ठ', None, "ṭh", C),
    unit(21, 'ड', None, "ḍ", C),
    unit(22, 'ढ', None, "ḍh", C),
    unit(23, 'ण', None, "ṇ", C),
    unit(24, 'त', None, "t", C),
    unit(25, 'थ', None, "th", C),
    unit(26, 'द', None, "d", C),
    unit(27, 'ध', None, "dh", C),
    unit(28, 'न', None, "n", C),
    unit(29, 'प', None, "p", C),
    unit(30, 'फ', None, "ph", C),
    unit(31, 'ब', None, "b", C),
    unit(32, 'भ', None, "bh", C),
    unit(33, 'म', None, "m", C),
    unit(34, 'य', None, "y", C),
    unit(35, 'र', None, "r", C),
    unit(36, 'ल', None, "l", C),
    unit(37, 'व', None, "v", C),
    unit(38, 'स', None, "s", C),
    unit(39, 'ह', None, "h", C),
    unit(40, 'ळ', None, "ḷ", C),
];

/// IPE spelling of the inherent vowel.
pub const IPE_A: char = '\u{E000}';

/// Devanagari code point → index into `PHONEMES`. Dependent vowel signs share
/// the index of their independent vowel.
static DEVANAGARI_INDEX: phf::Map<char, u8> = phf_map! {
    'अ' => 0, 'आ' => 1, 'ा' => 1, 'इ' => 2, 'ि' => 2, 'ई' => 3, 'ी' => 3,
    'उ' => 4, 'ु' => 4, 'ऊ' => 5, 'ू' => 5, 'ए' => 6, 'े' => 6, 'ओ' => 7, 'ो' => 7,
    'ं' => 8,
    'क' => 9, 'ख' => 10, 'ग' => 11, 'घ' => 12, 'ङ' => 13,
    'च' => 14, 'छ' => 15, 'ज' => 16, 'झ' => 17, 'ञ' => 18,
    'ट' => 19, 'ठ' => 20, 'ड' => 21, 'ढ' => 22, 'ण' => 23,
    'त' => 24, 'थ' => 25, 'द' => 26, 'ध' => 27, 'न' => 28,
    'प' => 29, 'फ' => 30, 'ब' => 31, 'भ' => 32, 'म' => 33,
    'य' => 34, 'र' => 35, 'ल' => 36, 'व' => 37, 'स' => 38, 'ह' => 39, 'ळ' => 40,
};

/// The phoneme spelled by an IPE code point.
pub fn phoneme(ch: char) -> Option<&'static Phoneme> {
    let offset = (ch as u32).checked_sub(IPE_BASE)?;
    PHONEMES.get(offset as usize)
}

/// The phoneme a Devanagari code point (letter or sign) belongs to.
pub fn phoneme_of_devanagari(ch: char) -> Option<&'static Phoneme> {
    DEVANAGARI_INDEX
        .get(&ch)
        .map(|idx| &PHONEMES[usize::from(*idx)])
}

/// Devanagari → IPE.
///
/// The inherent vowel is made explicit: a consonant not followed by a virama
/// or a dependent vowel sign is followed by `IPE_A`, including at the end of
/// the input. The decision is made with one code point of lookahead before
/// the consonant is substituted. Virama and joiners vanish; everything
/// outside the inventory is copied.
///
/// ```
/// use libpali_core::ipe::{devanagari_to_ipe, ipe_to_devanagari};
///
/// let ipe = devanagari_to_ipe("बुद्ध");
/// assert_eq!(ipe.chars().count(), 5); // b u d dh a
/// assert_eq!(ipe_to_devanagari(&ipe), "बुद्ध");
/// ```
pub fn devanagari_to_ipe(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        if matches!(ch, VIRAMA | ZWJ | ZWNJ) {
            continue;
        }
        let Some(p) = phoneme_of_devanagari(ch) else {
            out.push(ch);
            continue;
        };
        out.push(p.ipe);
        if p.kind == PhonemeKind::Consonant {
            let vowelless = chars
                .get(i + 1)
                .is_some_and(|next| *next == VIRAMA || devanagari::is_vowel_sign(*next));
            if !vowelless {
                out.push(IPE_A);
            }
        }
    }
    out
}

/// Position of the alphabet decoder relative to the last emitted unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Idle,
    AfterConsonant,
    AfterVowel,
    AfterNasal,
}

/// IPE → Devanagari.
///
/// A consonant directly after a consonant gets a virama between them; a vowel
/// after a consonant is written as its sign (`a` disappears); a consonant left
/// open at the end of the input or before a character outside the inventory
/// is closed with a virama. Nasals never cluster and never reset vowel
/// context.
pub fn ipe_to_devanagari(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    let mut state = DecodeState::Idle;

    for ch in text.chars() {
        let Some(p) = phoneme(ch) else {
            if state == DecodeState::AfterConsonant {
                out.push(VIRAMA);
            }
            out.push(ch);
            state = DecodeState::Idle;
            continue;
        };
        state = match (p.kind, state) {
            (PhonemeKind::Consonant, DecodeState::AfterConsonant) => {
                out.push(VIRAMA);
                out.push(p.devanagari);
                DecodeState::AfterConsonant
            }
            (PhonemeKind::Consonant, _) => {
                out.push(p.devanagari);
                DecodeState::AfterConsonant
            }
            (PhonemeKind::Vowel, DecodeState::AfterConsonant) => {
                if let Some(sign) = p.sign {
                    out.push(sign);
                }
                DecodeState::AfterVowel
            }
            (PhonemeKind::Vowel, _) => {
                out.push(p.devanagari);
                DecodeState::AfterVowel
            }
            (PhonemeKind::Nasal, _) => {
                out.push(p.devanagari);
                DecodeState::AfterNasal
            }
        };
    }
    if state == DecodeState::AfterConsonant {
        out.push(VIRAMA);
    }
    out
}

/// `ToIpe` for the scripts IPE is defined against directly: Devanagari and
/// the alphabetic scripts (Latin, Cyrillic). Other scripts go through the
/// dispatcher.
pub fn to_ipe(text: &str, source: Script) -> Result<String, ConvertError> {
    match source {
        Script::Ipe => Ok(text.to_string()),
        Script::Devanagari => Ok(devanagari_to_ipe(text)),
        Script::Latin | Script::Cyrillic => crate::codec::registry()
            .get(source)
            .map(|codec| codec.to_pivot(text))
            .ok_or(ConvertError::UnsupportedPair {
                from: source,
                to: Script::Ipe,
            }),
        other => Err(ConvertError::UnsupportedPair {
            from: other,
            to: Script::Ipe,
        }),
    }
}

/// `FromIpe`, the inverse of [`to_ipe`].
pub fn from_ipe(text: &str, target: Script) -> Result<String, ConvertError> {
    match target {
        Script::Ipe => Ok(text.to_string()),
        Script::Devanagari => Ok(ipe_to_devanagari(text)),
        Script::Latin | Script::Cyrillic => crate::codec::registry()
            .get(target)
            .map(|codec| codec.from_pivot(text))
            .ok_or(ConvertError::UnsupportedPair {
                from: Script::Ipe,
                to: target,
            }),
        other => Err(ConvertError::UnsupportedPair {
            from: Script::Ipe,
            to: other,
        }),
    }
}

/// Collation key of an IPE string. Keys compare in Pali alphabetical order;
/// characters outside the inventory sort by code point, before every IPE
/// unit for the scripts the engine handles.
pub fn sort_key(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Pali collation of two IPE strings.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars().cmp(b.chars())
}

/// Diagnostic romanization of IPE: every unit spelled with its conventional
/// Latin letters, other characters kept. Unlike the Latin codec this never
/// title-cases and never maps digits.
pub fn to_phonetic(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut out, ch| {
            match phoneme(ch) {
                Some(p) => out.push_str(p.latin),
                None => out.push(ch),
            }
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipe(latin_units: &[&str]) -> String {
        latin_units
            .iter()
            .map(|u| {
                PHONEMES
                    .iter()
                    .find(|p| p.latin == *u)
                    .map(|p| p.ipe)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn inventory_is_contiguous_and_ordered() {
        for (i, p) in PHONEMES.iter().enumerate() {
            assert_eq!(p.ipe as u32, IPE_BASE + i as u32);
            assert_eq!(phoneme(p.ipe), Some(p));
            assert_eq!(phoneme_of_devanagari(p.devanagari), Some(p));
            if let Some(sign) = p.sign {
                assert_eq!(phoneme_of_devanagari(sign), Some(p));
            }
        }
        assert!(phoneme('\u{E029}').is_none());
    }

    #[test]
    fn inherent_vowel_inserted_after_bare_consonants() {
        assert_eq!(devanagari_to_ipe("बुद्ध"), ipe(&["b", "u", "d", "dh", "a"]));
        assert_eq!(devanagari_to_ipe("धम्म"), ipe(&["dh", "a", "m", "m", "a"]));
        assert_eq!(devanagari_to_ipe("सक्"), ipe(&["s", "a", "k"]));
    }

    #[test]
    fn nasal_and_independent_vowels() {
        assert_eq!(
            devanagari_to_ipe("संघं"),
            ipe(&["s", "a", "ṃ", "gh", "a", "ṃ"])
        );
        assert_eq!(devanagari_to_ipe("एव"), ipe(&["e", "v", "a"]));
    }

    #[test]
    fn pass_through_outside_inventory() {
        let text = "क, ५ श।";
        let out = devanagari_to_ipe(text);
        assert!(out.contains(", ५ श।"));
        assert_eq!(ipe_to_devanagari(&out), text);
    }

    #[test]
    fn decoder_inserts_virama_between_consonants() {
        assert_eq!(ipe_to_devanagari(&ipe(&["b", "u", "d", "dh", "a"])), "बुद्ध");
        assert_eq!(ipe_to_devanagari(&ipe(&["s", "a", "k"])), "सक्");
        assert_eq!(ipe_to_devanagari(&ipe(&["a", "ṃ", "s", "a"])), "अंस");
        // A vowel after a nasal is independent again.
        assert_eq!(ipe_to_devanagari(&ipe(&["a", "ṃ", "a"])), "अंअ");
    }

    #[test]
    fn collation_follows_pali_alphabet() {
        let mut words: Vec<String> = ["मग्ग", "अत्थ", "ओघ", "कम्म", "अंस", "आनन्द"]
            .iter()
            .map(|w| devanagari_to_ipe(w))
            .collect();
        words.sort_by_key(|w| sort_key(w));
        assert_eq!(compare(&words[0], &words[1]), Ordering::Less);
        let sorted: Vec<String> = words.iter().map(|w| ipe_to_devanagari(w)).collect();
        assert_eq!(sorted, vec!["अंस", "अत्थ", "आनन्द", "ओघ", "कम्म", "मग्ग"]);
    }

    #[test]
    fn phonetic_rendering() {
        assert_eq!(to_phonetic(&devanagari_to_ipe("भिक्खु")), "bhikkhu");
        assert_eq!(to_phonetic(&devanagari_to_ipe("संघ")), "saṃgha");
    }

    #[test]
    fn unsupported_scripts_are_rejected() {
        assert_eq!(
            to_ipe("ก", Script::Thai),
            Err(ConvertError::UnsupportedPair {
                from: Script::Thai,
                to: Script::Ipe
            })
        );
        assert!(from_ipe("", Script::Myanmar).is_err());
    }
}
