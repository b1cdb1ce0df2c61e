//! Devanagari syllable segmentation.
//!
//! A syllable is an independent vowel, or a consonant cluster (consonants
//! joined by virama) with an optional dependent vowel sign, either one
//! optionally followed by a nasal mark. The validator uses syllables as the
//! unit when it narrows a failing word down to a minimal reproduction.

use crate::devanagari::{classify, CharClass, VIRAMA};
use serde::Serialize;

/// A syllable and the span of the source word it was read from, in chars.
///
/// `text` holds only the phonetic characters of the span, so it can be
/// shorter than `end - start` when the word contains joiners or other
/// skipped characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Syllable {
    fn open(ch: char, at: usize) -> Self {
        Self {
            text: ch.to_string(),
            start: at,
            end: at + 1,
        }
    }

    fn push(&mut self, ch: char, at: usize) {
        self.text.push(ch);
        self.end = at + 1;
    }

    fn last(&self) -> Option<char> {
        self.text.chars().last()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    InConsonantCluster,
    InVowelTail,
}

struct Parser {
    syllables: Vec<Syllable>,
    open: Option<Syllable>,
    state: State,
}

impl Parser {
    fn close(&mut self) {
        if let Some(syllable) = self.open.take() {
            self.syllables.push(syllable);
        }
        self.state = State::Scanning;
    }

    fn start(&mut self, ch: char, at: usize, state: State) {
        self.close();
        self.open = Some(Syllable::open(ch, at));
        self.state = state;
    }

    fn extend(&mut self, ch: char, at: usize, state: State) {
        if let Some(open) = self.open.as_mut() {
            open.push(ch, at);
        }
        self.state = state;
    }

    /// A phonetic character with nothing to attach to stands alone.
    fn orphan(&mut self, ch: char, at: usize) {
        self.close();
        self.syllables.push(Syllable::open(ch, at));
    }

    fn last(&self) -> Option<char> {
        self.open.as_ref().and_then(Syllable::last)
    }

    fn feed(&mut self, ch: char, at: usize) {
        let ends_in_virama = self.last() == Some(VIRAMA);
        match (classify(ch), self.state) {
            (CharClass::IndependentVowel, _) => self.start(ch, at, State::InVowelTail),
            (CharClass::Consonant, State::InConsonantCluster) if ends_in_virama => {
                self.extend(ch, at, State::InConsonantCluster)
            }
            (CharClass::Consonant, _) => self.start(ch, at, State::InConsonantCluster),
            (CharClass::Virama, State::InConsonantCluster) if !ends_in_virama => {
                self.extend(ch, at, State::InConsonantCluster)
            }
            (CharClass::VowelSign, State::InConsonantCluster) if !ends_in_virama => {
                self.extend(ch, at, State::InVowelTail)
            }
            (CharClass::Nasal, State::InConsonantCluster | State::InVowelTail) if !ends_in_virama => {
                self.extend(ch, at, State::Scanning);
                self.close();
            }
            (CharClass::Virama | CharClass::VowelSign | CharClass::Nasal, _) => self.orphan(ch, at),
            (CharClass::Digit | CharClass::Other, _) => {}
        }
    }
}

/// Split a Devanagari word into syllables.
///
/// Concatenating the syllables gives back the word with every character
/// that is not phonetic (digits, punctuation, joiners, other scripts)
/// removed.
///
/// ```
/// use libpali_core::syllable::parse_syllables;
///
/// let parts: Vec<String> = parse_syllables("संखित्तेन")
///     .into_iter()
///     .map(|s| s.text)
///     .collect();
/// assert_eq!(parts, ["सं", "खि", "त्ते", "न"]);
/// ```
pub fn parse_syllables(word: &str) -> Vec<Syllable> {
    let mut parser = Parser {
        syllables: Vec::new(),
        open: None,
        state: State::Scanning,
    };
    for (at, ch) in word.chars().enumerate() {
        parser.feed(ch, at);
    }
    parser.close();
    parser.syllables
}

/// Concatenated text of a run of syllables.
pub fn join(syllables: &[Syllable]) -> String {
    syllables.iter().map(Syllable::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(word: &str) -> Vec<String> {
        parse_syllables(word).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn clusters_and_vowel_signs() {
        assert_eq!(texts("बुद्ध"), ["बु", "द्ध"]);
        assert_eq!(texts("भिक्खवे"), ["भि", "क्ख", "वे"]);
        assert_eq!(texts("सक्"), ["स", "क्"]);
    }

    #[test]
    fn independent_vowels_take_nasal() {
        assert_eq!(texts("अंस"), ["अं", "स"]);
        assert_eq!(texts("एवं"), ["ए", "वं"]);
        assert_eq!(texts("आइ"), ["आ", "इ"]);
    }

    #[test]
    fn orphans_stand_alone() {
        assert_eq!(texts("ािक"), ["ा", "ि", "क"]);
        assert_eq!(texts("क्ं"), ["क्", "ं"]);
        assert_eq!(texts("कंं"), ["कं", "ं"]);
    }

    #[test]
    fn other_characters_do_not_close() {
        let syllables = parse_syllables("क्\u{200D}ष, ५");
        assert_eq!(syllables.len(), 1);
        assert_eq!(syllables[0].text, "क्ष");
        assert_eq!((syllables[0].start, syllables[0].end), (0, 4));
    }

    #[test]
    fn spans_are_char_offsets() {
        let syllables = parse_syllables("धम्मो");
        let spans: Vec<(usize, usize)> = syllables.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, [(0, 1), (1, 5)]);
        assert_eq!(join(&syllables), "धम्मो");
    }

    #[test]
    fn empty_and_non_devanagari_input() {
        assert!(parse_syllables("").is_empty());
        assert!(parse_syllables("abc 123").is_empty());
    }
}
