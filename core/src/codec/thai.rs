use super::{decode_abugida, Pivot, ScriptCodec};
use crate::devanagari::ZWNJ;
use crate::table::{CharTable, TableBuilder};
use crate::Script;
use std::borrow::Cow;

const PAIRS: &[(&str, &str)] = &[
    ("अ", "อ"),
    ("आ", "อา"),
    ("इ", "อิ"),
    ("ई", "อี"),
    ("उ", "อุ"),
    ("ऊ", "อู"),
    ("ए", "เอ"),
    ("ओ", "โอ"),
    ("क", "ก"),
    ("ख", "ข"),
    ("ग", "ค"),
    ("घ", "ฆ"),
    ("ङ", "ง"),
    ("च", "จ"),
    ("छ", "ฉ"),
    ("ज", "ช"),
    ("झ", "ฌ"),
    ("ञ", "ญ"),
    ("ट", "ฏ"),
    ("ठ", "ฐ"),
    ("ड", "ฑ"),
    ("ढ", "ฒ"),
    ("ण", "ณ"),
    ("त", "ต"),
    ("थ", "ถ"),
    ("द", "ท"),
    ("ध", "ธ"),
    ("न", "น"),
    ("प", "ป"),
    ("फ", "ผ"),
    ("ब", "พ"),
    ("भ", "ภ"),
    ("म", "ม"),
    ("य", "ย"),
    ("र", "ร"),
    ("ल", "ล"),
    ("व", "ว"),
    ("स", "ส"),
    ("ह", "ห"),
    ("ळ", "ฬ"),
    ("ा", "า"),
    ("ि", "\u{0E34}"),
    ("ी", "\u{0E35}"),
    ("ु", "\u{0E38}"),
    ("ू", "\u{0E39}"),
    ("े", "เ"),
    ("ो", "โ"),
    ("ं", "\u{0E4D}"),
    ("्", "\u{0E3A}"),
    ("०", "๐"),
    ("१", "๑"),
    ("२", "๒"),
    ("३", "๓"),
    ("४", "๔"),
    ("५", "๕"),
    ("६", "๖"),
    ("७", "๗"),
    ("८", "๘"),
    ("९", "๙"),
];

const SARA_E: char = 'เ';
const SARA_O: char = 'โ';
const O_ANG: char = 'อ';

/// Thai. `เ` and `โ` are written before the consonant they follow in
/// speech; `อ` carries vowels that begin a syllable.
pub struct ThaiCodec {
    table: CharTable,
}

impl ThaiCodec {
    pub fn new() -> Self {
        let table = TableBuilder::new(Script::Thai)
            .pairs(PAIRS)
            .alternative("บ", "ब")
            .alternative(ZWNJ.to_string(), "")
            .leading_sign('े')
            .leading_sign('ो')
            .build();
        Self { table }
    }
}

impl Default for ThaiCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn is_thai_consonant(ch: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&ch)
}

/// Move each leading vowel after the consonant it is written before. A
/// leading vowel on the carrier `อ` spells an independent vowel and stays.
///
/// A moved vowel is followed by ZWNJ, which decodes to nothing, so that it
/// cannot join a following `อ` into an independent vowel.
fn to_logical_order(text: &str) -> Cow<'_, str> {
    if !text.contains([SARA_E, SARA_O]) {
        return Cow::Borrowed(text);
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match chars.get(i + 1) {
            Some(&next) if matches!(ch, SARA_E | SARA_O) && is_thai_consonant(next) && next != O_ANG => {
                out.push(next);
                out.push(ch);
                out.push(ZWNJ);
                i += 2;
            }
            _ => {
                out.push(ch);
                i += 1;
            }
        }
    }
    Cow::Owned(out)
}

impl ScriptCodec for ThaiCodec {
    fn script(&self) -> Script {
        Script::Thai
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
