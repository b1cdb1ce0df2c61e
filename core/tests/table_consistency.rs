// Character table consistency.
//
// Every spelling a table decodes must encode back to the same spelling,
// except declared alternatives, which decode like their canonical form.
// Alternatives that are Unicode variants of the canonical spelling must be
// canonically equivalent to it.

use libpali_core::{registry, Script};
use unicode_normalization::UnicodeNormalization;

fn nfd(s: &str) -> String {
    s.nfd().collect()
}

#[test]
fn every_table_is_inverse_consistent() {
    let reg = registry();
    for script in Script::ALL {
        let Some(table) = reg.table(script) else {
            assert!(matches!(script, Script::Devanagari | Script::Ipe));
            continue;
        };
        let mismatches = table.inverse_mismatches();
        assert!(mismatches.is_empty(), "{script}: {mismatches:?}");
    }
}

#[test]
fn forward_entries_decode_back() {
    let reg = registry();
    for script in Script::DISPLAY {
        let Some(table) = reg.table(script) else {
            continue;
        };
        for (pivot, script_text) in table.forward_entries() {
            assert_eq!(
                table.substitute_reverse(&script_text),
                pivot,
                "{script}: {script_text}"
            );
        }
    }
}

#[test]
fn canonical_variants_decode_identically() {
    let cases: &[(Script, &str, &str)] = &[
        (Script::Bengali, "ক\u{09C7}\u{09BE}", "ক\u{09CB}"),
        (Script::Malayalam, "ക\u{0D47}\u{0D3E}", "ക\u{0D4B}"),
        (Script::Gurmukhi, "\u{0A32}\u{0A3C}", "\u{0A33}"),
        (Script::Sinhala, "ක\u{0DD9}\u{0DCF}", "ක\u{0DDC}"),
        (Script::Tibetan, "\u{0F42}\u{0FB7}", "\u{0F43}"),
        (Script::Tibetan, "ཀ\u{0F73}", "ཀ\u{0F71}\u{0F72}"),
        (Script::Tibetan, "ཀ\u{0F75}", "ཀ\u{0F71}\u{0F74}"),
        (Script::Myanmar, "\u{1025}\u{102E}", "\u{1026}"),
        (Script::Latin, "a\u{0304}", "ā"),
        (Script::Latin, "n\u{0303}", "ñ"),
        (Script::Cyrillic, "и\u{0304}", "\u{04E3}"),
    ];
    let reg = registry();
    for (script, variant, canonical) in cases {
        assert_eq!(nfd(variant), nfd(canonical), "{script}: not canonically equivalent");
        let codec = reg.get(*script).unwrap();
        assert_eq!(
            codec.to_pivot(variant),
            codec.to_pivot(canonical),
            "{script}: {variant:?}"
        );
    }
}

#[test]
fn display_variants_decode_identically() {
    // Not Unicode equivalents, but accepted spellings of the same letter.
    let cases: &[(Script, &str, &str)] = &[
        (Script::Thai, "บ", "พ"),
        (Script::Khmer, "ឲ", "ឱ"),
        (Script::Myanmar, "ဒါ", "ဒာ"),
        (Script::Malayalam, "ന\u{0D4D}", "\u{0D7B}"),
        (Script::Latin, "ṁ", "ṃ"),
    ];
    let reg = registry();
    for (script, variant, canonical) in cases {
        let codec = reg.get(*script).unwrap();
        assert_eq!(
            codec.to_pivot(variant),
            codec.to_pivot(canonical),
            "{script}: {variant:?}"
        );
    }
}

#[test]
fn myanmar_kinzi_is_cluster_only() {
    let table = registry().table(Script::Myanmar).unwrap();
    assert_eq!(table.encode("सङ्घ"), "သင\u{103A}\u{1039}ဃ");
    assert_eq!(table.encode("सङ्"), "သင\u{103A}");
}
