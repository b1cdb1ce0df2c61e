use super::{decode_alphabet, Pivot, ScriptCodec};
use crate::ipe::PHONEMES;
use crate::table::{CharTable, TableBuilder};
use crate::Script;

/// Variant spellings read as the given canonical letter: combining-mark
/// sequences, the dotted-above niggahita, and the velar-nasal sign some
/// editions use for niggahita.
const VARIANTS: &[(&str, &str)] = &[
    ("a\u{0304}", "ā"),
    ("i\u{0304}", "ī"),
    ("u\u{0304}", "ū"),
    ("m\u{0323}", "ṃ"),
    ("ṁ", "ṃ"),
    ("m\u{0307}", "ṃ"),
    ("ŋ", "ṃ"),
    ("n\u{0307}", "ṅ"),
    ("n\u{0303}", "ñ"),
    ("t\u{0323}", "ṭ"),
    ("t\u{0323}h", "ṭh"),
    ("d\u{0323}", "ḍ"),
    ("d\u{0323}h", "ḍh"),
    ("n\u{0323}", "ṇ"),
    ("l\u{0323}", "ḷ"),
];

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

/// Romanized Pali. Reads precomposed and combining-mark spellings in either
/// case; writes lower-case precomposed letters.
pub struct LatinCodec {
    table: CharTable,
}

impl LatinCodec {
    pub fn new() -> Self {
        let ipe_of = |latin: &str| {
            PHONEMES
                .iter()
                .find(|p| p.latin == latin)
                .map(|p| p.ipe.to_string())
                .unwrap_or_default()
        };
        let mut builder = TableBuilder::new(Script::Latin)
            .extend_pairs(PHONEMES.iter().map(|p| (p.ipe.to_string(), p.latin.to_string())))
            .pairs(&DIGITS);
        for (variant, canonical) in VARIANTS {
            builder = builder.alternative(*variant, ipe_of(*canonical));
        }
        Self {
            table: builder.build(),
        }
    }
}

impl Default for LatinCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptCodec for LatinCodec {
    fn script(&self) -> Script {
        Script::Latin
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
