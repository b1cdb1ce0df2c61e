use super::{decode_abugida, Pivot, ScriptCodec};
use crate::table::{CharTable, TableBuilder};
use crate::Script;
use std::borrow::Cow;

const PAIRS: &[(&str, &str)] = &[
    ("अ", "အ"),
    ("आ", "အာ"),
    ("इ", "ဣ"),
    ("ई", "ဤ"),
    ("उ", "ဥ"),
    ("ऊ", "ဦ"),
    ("ए", "ဧ"),
    ("ओ", "ဩ"),
    // Clusters with their own letters come before the plain consonants.
    ("ञ्ञ", "ည"),
    ("ङ्", "င\u{103A}\u{1039}"),
    ("्य", "\u{103B}"),
    ("्र", "\u{103C}"),
    ("्व", "\u{103D}"),
    ("्ह", "\u{103E}"),
    ("क", "က"),
    ("ख", "ခ"),
    ("ग", "ဂ"),
    ("घ", "ဃ"),
    ("ङ", "င"),
    ("च", "စ"),
    ("छ", "ဆ"),
    ("ज", "ဇ"),
    ("झ", "ဈ"),
    ("ञ", "ဉ"),
    ("ट", "ဋ"),
    ("ठ", "ဌ"),
    ("ड", "ဍ"),
    ("ढ", "ဎ"),
    ("ण", "ဏ"),
    ("त", "တ"),
    ("थ", "ထ"),
    ("द", "ဒ"),
    ("ध", "ဓ"),
    ("न", "န"),
    ("प", "ပ"),
    ("फ", "ဖ"),
    ("ब", "ဗ"),
    ("भ", "ဘ"),
    ("म", "မ"),
    ("य", "ယ"),
    ("र", "ရ"),
    ("ल", "လ"),
    ("व", "ဝ"),
    ("स", "သ"),
    ("ह", "ဟ"),
    ("ळ", "ဠ"),
    ("ा", "\u{102C}"),
    ("ि", "\u{102D}"),
    ("ी", "\u{102E}"),
    ("ु", "\u{102F}"),
    ("ू", "\u{1030}"),
    ("े", "\u{1031}"),
    ("ो", "\u{1031}\u{102C}"),
    ("ं", "\u{1036}"),
    ("्", "\u{1039}"),
    ("०", "၀"),
    ("१", "၁"),
    ("२", "၂"),
    ("३", "၃"),
    ("४", "၄"),
    ("५", "၅"),
    ("६", "၆"),
    ("७", "၇"),
    ("८", "၈"),
    ("९", "၉"),
    ("।", "၊"),
    ("॥", "။"),
];

const AA: char = '\u{102C}';
const TALL_AA: char = '\u{102B}';
const E_SIGN: char = '\u{1031}';

/// Consonants whose round shape would be mistaken for `ဝ` + `ာ`.
const TALL_AA_AFTER: [char; 6] = ['ခ', 'ဂ', 'င', 'ဒ', 'ပ', 'ဝ'];

/// Myanmar (Burmese). Clusters are stacked with the invisible virama and
/// closed word-finally with the visible asat; `ya`, `ra`, `va`, `ha` after a
/// virama become medials.
pub struct MyanmarCodec {
    table: CharTable,
}

impl MyanmarCodec {
    pub fn new() -> Self {
        let table = TableBuilder::new(Script::Myanmar)
            .pairs(PAIRS)
            .final_virama("\u{103A}")
            .alternatives(&[
                ("\u{102B}", "ा"),
                ("\u{1031}\u{102B}", "ो"),
                ("\u{1025}\u{102E}", "ऊ"),
            ])
            .build();
        Self { table }
    }
}

impl Default for MyanmarCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `ာ` with `ါ` after the consonants that take the tall form. The
/// `ေ` of a split `o` sits between them and is skipped.
fn use_tall_aa(text: String) -> String {
    if !text.contains(AA) {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    let mut base: Option<char> = None;
    for ch in text.chars() {
        if ch == AA && base.is_some_and(|b| TALL_AA_AFTER.contains(&b)) {
            out.push(TALL_AA);
        } else {
            out.push(ch);
        }
        if ch != E_SIGN {
            base = Some(ch);
        }
    }
    out
}

impl ScriptCodec for MyanmarCodec {
    fn script(&self) -> Script {
        Script::Myanmar
    }

    fn pivot(&self) -> Pivot {
        Pivot::Devanagari
    }

    fn to_pivot(&self, text: &str) -> String {
        decode_abugida(&self.table, text)
    }

    fn from_pivot(&self, text: &str) -> String {
        use_tall_aa(self.table.encode(text))
    }

    /// Both shapes of `ā` compare equal.
    fn normalize_for_comparison<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.contains(TALL_AA) {
            Cow::Owned(text.replace(TALL_AA, &AA.to_string()))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn table(&self) -> Option<&CharTable> {
        Some(&self.table)
    }
}
