//! Brahmic scripts whose Unicode blocks mirror the Devanagari chart.
//!
//! Bengali, Gujarati, Gurmukhi, Kannada, Malayalam and Telugu place each
//! letter at the same offset from the block start as Devanagari does, so
//! their tables are generated from the offset and patched with the few
//! letters that differ.

use super::{decode_abugida, Pivot, ScriptCodec};
use crate::table::{offset_pairs, CharTable, TableBuilder};
use crate::Script;

pub struct IndicCodec {
    script: Script,
    table: CharTable,
}

impl IndicCodec {
    fn with_table(script: Script, block_start: u32, patch: impl FnOnce(TableBuilder) -> TableBuilder) -> Self {
        let builder = patch(TableBuilder::new(script)).extend_pairs(offset_pairs(block_start));
        Self {
            script,
            table: builder.build(),
        }
    }

    /// Bengali writes Pali `va` with `ৱ` and `ḷa` with `ল` + nukta.
    pub fn bengali() -> Self {
        Self::with_table(Script::Bengali, 0x0980, |b| {
            b.pairs(&[("व", "\u{09F1}"), ("ळ", "\u{09B2}\u{09BC}")])
                .alternative("\u{09C7}\u{09BE}", "ो")
        })
    }

    pub fn gujarati() -> Self {
        Self::with_table(Script::Gujarati, 0x0A80, |b| b)
    }

    pub fn gurmukhi() -> Self {
        Self::with_table(Script::Gurmukhi, 0x0A00, |b| {
            b.alternative("\u{0A32}\u{0A3C}", "ळ")
        })
    }

    pub fn kannada() -> Self {
        Self::with_table(Script::Kannada, 0x0C80, |b| b)
    }

    /// Malayalam also reads the chillu letters, which spell a consonant
    /// with an inherent virama.
    pub fn malayalam() -> Self {
        Self::with_table(Script::Malayalam, 0x0D00, |b| {
            b.alternatives(&[
                ("\u{0D47}\u{0D3E}", "ो"),
                ("\u{0D7A}", "ण्"),
                ("\u{0D7B}", "न्"),
                ("\u{0D7C}", "र्"),
                ("\u{0D7D}", "ल्"),
                ("\u{0D7E}", "ळ्"),
            ])
        })
    }

    pub fn telugu() -> Self {
        Self::with_table(Script::Telugu, 0x0C00, |b| b)
    }
}

impl ScriptCodec for IndicCodec {
    fn script(&self) -> Script {
        self.script
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
