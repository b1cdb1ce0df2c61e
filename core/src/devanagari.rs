//! Devanagari character classes.
//!
//! Devanagari is the reference encoding of every table in the crate: each
//! script table maps to and from Devanagari fragments, and the syllable parser
//! works on Devanagari only. Classification is by code point range so that
//! characters outside the Pali inventory (e.g. `ऋ`, `श`) still segment
//! sensibly.

use phf::phf_map;

pub const VIRAMA: char = '\u{094D}';
pub const ANUSVARA: char = '\u{0902}';
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';
pub const ZWJ: char = '\u{200D}';
pub const ZWNJ: char = '\u{200C}';

/// Independent vowel `a`.
pub const LETTER_A: char = '\u{0905}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    IndependentVowel,
    Consonant,
    VowelSign,
    Virama,
    /// Anusvara, candrabindu and visarga.
    Nasal,
    Digit,
    Other,
}

pub fn classify(ch: char) -> CharClass {
    match ch as u32 {
        0x0904..=0x0914 | 0x0960..=0x0961 | 0x0972..=0x0977 => CharClass::IndependentVowel,
        0x0915..=0x0939 | 0x0958..=0x095F | 0x0978..=0x097F => CharClass::Consonant,
        0x093A..=0x093B | 0x093E..=0x094C | 0x094E..=0x094F | 0x0955..=0x0957 | 0x0962..=0x0963 => {
            CharClass::VowelSign
        }
        0x094D => CharClass::Virama,
        0x0900..=0x0903 => CharClass::Nasal,
        0x0966..=0x096F => CharClass::Digit,
        _ => CharClass::Other,
    }
}

pub fn is_consonant(ch: char) -> bool {
    classify(ch) == CharClass::Consonant
}

pub fn is_vowel_sign(ch: char) -> bool {
    classify(ch) == CharClass::VowelSign
}

/// True for characters that take part in syllables (everything except digits
/// and `Other`).
pub fn is_phonetic(ch: char) -> bool {
    !matches!(classify(ch), CharClass::Digit | CharClass::Other)
}

/// Dependent vowel sign → independent vowel, for the Pali vowels.
static SIGN_TO_VOWEL: phf::Map<char, char> = phf_map! {
    '\u{093E}' => '\u{0906}', // ā
    '\u{093F}' => '\u{0907}', // i
    '\u{0940}' => '\u{0908}', // ī
    '\u{0941}' => '\u{0909}', // u
    '\u{0942}' => '\u{090A}', // ū
    '\u{0947}' => '\u{090F}', // e
    '\u{094B}' => '\u{0913}', // o
};

/// Independent vowel → dependent vowel sign. `अ` has no sign.
static VOWEL_TO_SIGN: phf::Map<char, char> = phf_map! {
    '\u{0906}' => '\u{093E}',
    '\u{0907}' => '\u{093F}',
    '\u{0908}' => '\u{0940}',
    '\u{0909}' => '\u{0941}',
    '\u{090A}' => '\u{0942}',
    '\u{090F}' => '\u{0947}',
    '\u{0913}' => '\u{094B}',
};

pub fn independent_of_sign(sign: char) -> Option<char> {
    SIGN_TO_VOWEL.get(&sign).copied()
}

pub fn sign_of_independent(vowel: char) -> Option<char> {
    VOWEL_TO_SIGN.get(&vowel).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_pali_inventory() {
        for ch in "अआइईउऊएओ".chars() {
            assert_eq!(classify(ch), CharClass::IndependentVowel, "{ch}");
        }
        for ch in "कखगघङचछजझञटठडढणतथदधनपफबभमयरलवसहळ".chars() {
            assert_eq!(classify(ch), CharClass::Consonant, "{ch}");
        }
        for ch in "ािीुूेो".chars() {
            assert_eq!(classify(ch), CharClass::VowelSign, "{ch}");
        }
        assert_eq!(classify(VIRAMA), CharClass::Virama);
        assert_eq!(classify(ANUSVARA), CharClass::Nasal);
        assert_eq!(classify('५'), CharClass::Digit);
        assert_eq!(classify(DANDA), CharClass::Other);
        assert_eq!(classify('a'), CharClass::Other);
    }

    #[test]
    fn sign_and_vowel_tables_are_inverse() {
        for (sign, vowel) in SIGN_TO_VOWEL.entries() {
            assert_eq!(sign_of_independent(*vowel), Some(*sign));
        }
        assert_eq!(sign_of_independent(LETTER_A), None);
    }
}
