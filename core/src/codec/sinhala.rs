use super::{decode_abugida, Pivot, ScriptCodec};
use crate::table::{CharTable, TableBuilder};
use crate::Script;

const PAIRS: &[(&str, &str)] = &[
    ("अ", "අ"),
    ("आ", "ආ"),
    ("इ", "ඉ"),
    ("ई", "ඊ"),
    ("उ", "උ"),
    ("ऊ", "ඌ"),
    ("ए", "එ"),
    ("ओ", "ඔ"),
    ("क", "ක"),
    ("ख", "ඛ"),
    ("ग", "ග"),
    ("घ", "ඝ"),
    ("ङ", "ඞ"),
    ("च", "ච"),
    ("छ", "ඡ"),
    ("ज", "ජ"),
    ("झ", "ඣ"),
    ("ञ", "ඤ"),
    ("ट", "ට"),
    ("ठ", "ඨ"),
    ("ड", "ඩ"),
    ("ढ", "ඪ"),
    ("ण", "ණ"),
    ("त", "ත"),
    ("थ", "ථ"),
    ("द", "ද"),
    ("ध", "ධ"),
    ("न", "න"),
    ("प", "ප"),
    ("फ", "ඵ"),
    ("ब", "බ"),
    ("भ", "භ"),
    ("म", "ම"),
    ("य", "ය"),
    ("र", "ර"),
    ("ल", "ල"),
    ("व", "ව"),
    ("स", "ස"),
    ("ह", "හ"),
    ("ळ", "ළ"),
    ("ा", "\u{0DCF}"),
    ("ि", "\u{0DD2}"),
    ("ी", "\u{0DD3}"),
    ("ु", "\u{0DD4}"),
    ("ू", "\u{0DD6}"),
    ("े", "\u{0DD9}"),
    ("ो", "\u{0DDC}"),
    ("ं", "\u{0D82}"),
    ("्", "\u{0DCA}"),
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

/// Sinhala. Conjunct joiners are ignored when reading; digits are written
/// with European numerals.
pub struct SinhalaCodec {
    table: CharTable,
}

impl SinhalaCodec {
    pub fn new() -> Self {
        let table = TableBuilder::new(Script::Sinhala)
            .pairs(PAIRS)
            .alternatives(&[
                ("\u{0DD9}\u{0DCF}", "ो"),
                ("\u{200D}", ""),
                ("\u{200C}", ""),
            ])
            .build();
        Self { table }
    }
}

impl Default for SinhalaCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptCodec for SinhalaCodec {
    fn script(&self) -> Script {
        Script::Sinhala
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
