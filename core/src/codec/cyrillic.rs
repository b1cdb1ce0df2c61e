use super::{decode_alphabet, Pivot, ScriptCodec};
use crate::ipe::PHONEMES;
use crate::table::{CharTable, TableBuilder};
use crate::Script;

/// Cyrillic spelling of each IPE unit, in inventory order. Aspirates are
/// digraphs with `х`; retroflexes carry a dot below.
const LETTERS: [&str; 41] = [
    "а",
    "а\u{0304}",
    "и",
    "\u{04E3}",
    "у",
    "\u{04EF}",
    "е",
    "о",
    "м\u{0323}",
    "к",
    "кх",
    "г",
    "гх",
    "н\u{0307}",
    "ч",
    "чх",
    "дж",
    "джх",
    "н\u{0303}",
    "т\u{0323}",
    "т\u{0323}х",
    "д\u{0323}",
    "д\u{0323}х",
    "н\u{0323}",
    "т",
    "тх",
    "д",
    "дх",
    "н",
    "п",
    "пх",
    "б",
    "бх",
    "м",
    "й",
    "р",
    "л",
    "в",
    "с",
    "х",
    "л\u{0323}",
];

/// Decomposed spellings of the precomposed long vowels, and the dotted-above
/// niggahita.
const VARIANTS: &[(&str, usize)] = &[("и\u{0304}", 3), ("у\u{0304}", 5), ("м\u{0307}", 8)];

const DIGITS: [(&str, &str); 10] = [
    ("०", "0"),
    ("१", "1"),
    ("२", "2"),
    ("३", "3"),
    ("४", "4"),
    ("५", "5"),
    ("६", "6"),
    ("७", "7"),
    ("८", "8"),
    ("९", "9"),
];

pub struct CyrillicCodec {
    table: CharTable,
}

impl CyrillicCodec {
    pub fn new() -> Self {
        let mut builder = TableBuilder::new(Script::Cyrillic)
            .extend_pairs(
                PHONEMES
                    .iter()
                    .zip(LETTERS)
                    .map(|(p, cyr)| (p.ipe.to_string(), cyr.to_string())),
            )
            .pairs(&DIGITS);
        for (variant, index) in VARIANTS {
            builder = builder.alternative(*variant, PHONEMES[*index].ipe.to_string());
        }
        Self {
            table: builder.build(),
        }
    }
}

impl Default for CyrillicCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptCodec for CyrillicCodec {
    fn script(&self) -> Script {
        Script::Cyrillic
    }

    fn pivot(&self) -> Pivot {
        Pivot::Ipe
    }

    fn to_pivot(&self, text: &str) -> String {
        decode_alphabet(&self.table, text)
    }

    fn from_pivot(&self, text: &str) -> String {
        self.table.encode(text)
    }

    fn table(&self) -> Option<&CharTable> {
        Some(&self.table)
    }
}
