use super::{decode_abugida, Pivot, ScriptCodec};
use crate::table::{CharTable, TableBuilder};
use crate::Script;

const PAIRS: &[(&str, &str)] = &[
    ("अ", "អ"),
    ("आ", "អា"),
    ("इ", "ឥ"),
    ("ई", "ឦ"),
    ("उ", "ឧ"),
    ("ऊ", "ឩ"),
    ("ए", "ឯ"),
    ("ओ", "ឱ"),
    ("क", "ក"),
    ("ख", "ខ"),
    ("ग", "គ"),
    ("घ", "ឃ"),
    ("ङ", "ង"),
    ("च", "ច"),
    ("छ", "ឆ"),
    ("ज", "ជ"),
    ("झ", "ឈ"),
    ("ञ", "ញ"),
    ("ट", "ដ"),
    ("ठ", "ឋ"),
    ("ड", "ឌ"),
    ("ढ", "ឍ"),
    ("ण", "ណ"),
    ("त", "ត"),
    ("थ", "ថ"),
    ("द", "ទ"),
    ("ध", "ធ"),
    ("न", "ន"),
    ("प", "ប"),
    ("फ", "ផ"),
    ("ब", "ព"),
    ("भ", "ភ"),
    ("म", "ម"),
    ("य", "យ"),
    ("र", "រ"),
    ("ल", "ល"),
    ("व", "វ"),
    ("स", "ស"),
    ("ह", "ហ"),
    ("ळ", "ឡ"),
    ("ा", "\u{17B6}"),
    ("ि", "\u{17B7}"),
    ("ी", "\u{17B8}"),
    ("ु", "\u{17BB}"),
    ("ू", "\u{17BC}"),
    ("े", "\u{17C1}"),
    ("ो", "\u{17C4}"),
    ("ं", "\u{17C6}"),
    ("्", "\u{17D2}"),
    ("०", "០"),
    ("१", "១"),
    ("२", "២"),
    ("३", "៣"),
    ("४", "៤"),
    ("५", "៥"),
    ("६", "៦"),
    ("७", "៧"),
    ("८", "៨"),
    ("९", "៩"),
    ("।", "។"),
    ("॥", "៕"),
];

/// Khmer. Clusters use the coeng; a virama that closes a word is written
/// with the viriam.
pub struct KhmerCodec {
    table: CharTable,
}

impl KhmerCodec {
    pub fn new() -> Self {
        let table = TableBuilder::new(Script::Khmer)
            .pairs(PAIRS)
            .final_virama("\u{17D1}")
            .alternative("ឲ", "ओ")
            .build();
        Self { table }
    }
}

impl Default for KhmerCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptCodec for KhmerCodec {
    fn script(&self) -> Script {
        Script::Khmer
    }

    fn pivot(&self) -> Pivot {
        Pivot::Devanagari
    }

    fn to_pivot(&self, text: &str) -> String {
        decode_abugida(&self.table, text)
    }

    fn from_pivot(&self, text: &str) -> String {
        self.table.encode(text)
    }

    fn table(&self) -> Option<&CharTable> {
        Some(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nasal_stays_on_its_syllable() {
        let km = KhmerCodec::new();
        let khmer = km.from_pivot("संखित्तेन");
        assert_eq!(khmer, "ស\u{17C6}ខ\u{17B7}ត\u{17D2}ត\u{17C1}ន");
        assert_eq!(km.to_pivot(&khmer), "संखित्तेन");
    }

    #[test]
    fn viriam_closes_words() {
        let km = KhmerCodec::new();
        assert_eq!(km.from_pivot("सक् च"), "សក\u{17D1} ច");
        assert_eq!(km.to_pivot("សក\u{17D1} ច"), "सक् च");
        assert_eq!(km.to_pivot("សក\u{17D2}"), "सक्");
    }

    #[test]
    fn independent_o_variants() {
        let km = KhmerCodec::new();
        assert_eq!(km.to_pivot("ឲឃ"), "ओघ");
        assert_eq!(km.from_pivot("ओघ"), "ឱឃ");
    }
}
