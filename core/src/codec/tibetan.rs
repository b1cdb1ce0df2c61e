//! Tibetan.
//!
//! Tibetan has no visible virama inside clusters: the second and later
//! consonants are written in their subjoined forms, which sit `0x50` above
//! the full forms. The table therefore maps `्` + consonant as one unit.
//! Vowels at the start of a syllable are written on the carrier `ཨ`.

use super::{decode_abugida, Pivot, ScriptCodec};
use crate::table::{CharTable, TableBuilder};
use crate::Script;
use std::borrow::Cow;

/// Full consonant forms. `ḷa` has no letter of its own and is `la` with a
/// mark below.
const CONSONANTS: &[(&str, &str)] = &[
    ("क", "ཀ"),
    ("ख", "ཁ"),
    ("ग", "ག"),
    ("घ", "\u{0F43}"),
    ("ङ", "ང"),
    ("च", "ཙ"),
    ("छ", "ཚ"),
    ("ज", "ཛ"),
    ("झ", "\u{0F5C}"),
    ("ञ", "ཉ"),
    ("ट", "ཊ"),
    ("ठ", "ཋ"),
    ("ड", "ཌ"),
    ("ढ", "\u{0F4D}"),
    ("ण", "ཎ"),
    ("त", "ཏ"),
    ("थ", "ཐ"),
    ("द", "ད"),
    ("ध", "\u{0F52}"),
    ("न", "ན"),
    ("प", "པ"),
    ("फ", "ཕ"),
    ("ब", "བ"),
    ("भ", "\u{0F57}"),
    ("म", "མ"),
    ("य", "ཡ"),
    ("र", "ར"),
    ("ल", "ལ"),
    ("व", "ཝ"),
    ("स", "ས"),
    ("ह", "ཧ"),
    ("ळ", "ལ\u{0F39}"),
];

const OTHERS: &[(&str, &str)] = &[
    ("अ", "ཨ"),
    ("आ", "ཨ\u{0F71}"),
    ("इ", "ཨ\u{0F72}"),
    ("ई", "ཨ\u{0F71}\u{0F72}"),
    ("उ", "ཨ\u{0F74}"),
    ("ऊ", "ཨ\u{0F71}\u{0F74}"),
    ("ए", "ཨ\u{0F7A}"),
    ("ओ", "ཨ\u{0F7C}"),
    ("ा", "\u{0F71}"),
    ("ि", "\u{0F72}"),
    ("ी", "\u{0F71}\u{0F72}"),
    ("ु", "\u{0F74}"),
    ("ू", "\u{0F71}\u{0F74}"),
    ("े", "\u{0F7A}"),
    ("ो", "\u{0F7C}"),
    ("ं", "\u{0F7E}"),
    ("्", "\u{0F84}"),
    ("०", "༠"),
    ("१", "༡"),
    ("२", "༢"),
    ("३", "༣"),
    ("४", "༤"),
    ("५", "༥"),
    ("६", "༦"),
    ("७", "༧"),
    ("८", "༨"),
    ("९", "༩"),
    ("।", "\u{0F0D}"),
    ("॥", "\u{0F0E}"),
];

/// Decomposed spellings of the precomposed letters and vowel signs.
const ALTERNATIVES: &[(&str, &str)] = &[
    ("\u{0F42}\u{0FB7}", "घ"),
    ("\u{0F5B}\u{0FB7}", "झ"),
    ("\u{0F4C}\u{0FB7}", "ढ"),
    ("\u{0F51}\u{0FB7}", "ध"),
    ("\u{0F56}\u{0FB7}", "भ"),
    ("\u{0F92}\u{0FB7}", "्घ"),
    ("\u{0FAB}\u{0FB7}", "्झ"),
    ("\u{0F9C}\u{0FB7}", "्ढ"),
    ("\u{0FA1}\u{0FB7}", "्ध"),
    ("\u{0FA6}\u{0FB7}", "्भ"),
    ("\u{0F73}", "ी"),
    ("\u{0F75}", "ू"),
    ("ཨ\u{0F73}", "ई"),
    ("ཨ\u{0F75}", "ऊ"),
];

const CARRIER: char = 'ཨ';

/// Subjoined form of a full consonant form.
fn subjoined(full: &str) -> String {
    full.chars()
        .map(|ch| match ch as u32 {
            0x0F40..=0x0F6C => char::from_u32(ch as u32 + 0x50).unwrap_or(ch),
            _ => ch,
        })
        .collect()
}

fn is_vowel_sign(ch: char) -> bool {
    matches!(ch as u32, 0x0F71..=0x0F7D | 0x0F80..=0x0F81)
}

fn is_subjoined(ch: char) -> bool {
    matches!(ch as u32, 0x0F8D..=0x0FBC)
}

/// Move vowel signs typed before subjoined letters to after them. Signs on
/// the carrier belong to an independent vowel and are left where they are.
fn to_logical_order(text: &str) -> Cow<'_, str> {
    let chars: Vec<char> = text.chars().collect();
    let misplaced = chars.windows(2).any(|w| is_vowel_sign(w[0]) && is_subjoined(w[1]));
    if !misplaced {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let on_carrier = i > 0 && chars[i - 1] == CARRIER;
        if !is_vowel_sign(ch) || on_carrier {
            out.push(ch);
            i += 1;
            continue;
        }
        let signs_end = (i..chars.len())
            .find(|&j| !is_vowel_sign(chars[j]))
            .unwrap_or(chars.len());
        let stack_end = (signs_end..chars.len())
            .find(|&j| !is_subjoined(chars[j]))
            .unwrap_or(chars.len());
        out.extend(&chars[signs_end..stack_end]);
        out.extend(&chars[i..signs_end]);
        i = stack_end;
    }
    Cow::Owned(out)
}

pub struct TibetanCodec {
    table: CharTable,
}

impl TibetanCodec {
    pub fn new() -> Self {
        let stacked: Vec<(String, String)> = CONSONANTS
            .iter()
            .map(|(deva, full)| (format!("्{deva}"), subjoined(full)))
            .collect();
        let table = TableBuilder::new(Script::Tibetan)
            .pairs(CONSONANTS)
            .extend_pairs(stacked)
            .pairs(OTHERS)
            .alternatives(ALTERNATIVES)
            .build();
        Self { table }
    }
}

impl Default for TibetanCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptCodec for TibetanCodec {
    fn script(&self) -> Script {
        Script::Tibetan
    }

    fn pivot(&self) -> Pivot {
        Pivot::Devanagari
    }

    fn to_pivot(&self, text: &str) -> String {
        decode_abugida(&self.table, &to_logical_order(text))
    }

    fn from_pivot(&self, text: &str) -> String {
        self.table.encode(text)
    }

    fn table(&self) -> Option<&CharTable> {
        Some(&self.table)
    }
}
