// Validator behaviour on word lists: known ambiguous spellings are caught
// and localized, inventory words pass, and reports serialize.

use libpali_core::Script;
use libpali_validate::Validator;
use proptest::prelude::*;

#[test]
fn sutta_opening_is_clean_everywhere() {
    let words = ["एवं", "मे", "सुतं", "एकं", "समयं", "भगवा", "सावत्थियं", "विहरति"];
    let report = Validator::new()
        .validate_batch_in(&words, &Script::DISPLAY)
        .unwrap();
    assert_eq!(report.summary.clean, words.len(), "{:#?}", report.failing().next());
    assert_eq!(report.summary.per_script.len(), Script::DISPLAY.len());
}

#[test]
fn ambiguous_clusters_are_localized_per_script() {
    let verdict = Validator::new()
        .validate("अनुसक्हि", &[Script::Latin, Script::Cyrillic, Script::Thai])
        .unwrap();
    assert_eq!(verdict.syllables, vec!["अ", "नु", "स", "क्हि"]);

    let failing: Vec<Script> = verdict.failures().map(|v| v.script).collect();
    assert_eq!(failing, vec![Script::Latin, Script::Cyrillic]);
    for sv in verdict.failures() {
        assert_eq!(sv.repros.len(), 1, "{}", sv.script);
        assert_eq!(sv.repros[0].syllable_range, 3..4);
        assert!(sv.repros[0].context_free);
    }
}

#[test]
fn leading_vowel_before_an_independent_vowel_passes_in_thai() {
    let words = ["केअ", "कोअ", "धम्मेअ", "न्त्रेअ", "म्बेअं", "कोओ"];
    let report = Validator::new()
        .validate_batch(&words, Script::Thai)
        .unwrap();
    assert_eq!(report.summary.clean, words.len(), "{:#?}", report.failing().next());
}

#[test]
fn report_serializes_to_json() {
    let report = Validator::new()
        .validate_batch(&["सक्हि"], Script::Latin)
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["scripts"][0], "latin");
    assert_eq!(json["summary"]["per_script"]["latin"]["failed"], 1);
    let repro = &json["verdicts"][0]["scripts"][0]["repros"][0];
    assert_eq!(repro["substring"], "क्हि");
    assert_eq!(repro["syllable_range"]["start"], 1);
    assert_eq!(repro["syllable_range"]["end"], 2);
    assert_eq!(repro["context_free"], true);
    assert_eq!(repro["result"]["ipe_match"], false);
}

const CONSONANTS: &[&str] = &[
    "क", "ग", "च", "ज", "ञ", "ट", "ड", "ण", "त", "द", "न", "प", "ब", "म", "य", "र", "ल", "व",
    "स", "ह", "ळ", "ख", "घ", "थ", "ध", "भ",
];
/// Pali clusters. None ends in `ह`, whose Latin, Cyrillic and Tibetan
/// spellings read back as an aspirate.
const CLUSTERS: &[&str] = &[
    "क्क", "क्ख", "ग्ग", "ङ्क", "ङ्ग", "च्च", "च्छ", "ज्ज", "ञ्च", "ञ्ज", "ञ्ञ", "ट्ट", "ड्ड",
    "ण्ड", "ण्ण", "त्त", "त्थ", "त्र", "त्व", "द्द", "द्ध", "न्त", "न्द", "न्न", "प्प", "ब्ब",
    "ब्र", "म्ब", "म्म", "य्य", "ल्ल", "स्स", "स्म", "न्त्र",
];
const INDEPENDENT_VOWELS: &[&str] = &["अ", "आ", "इ", "ई", "उ", "ऊ", "ए", "ओ"];
const SIGNS: &[&str] = &["", "ा", "ि", "ी", "ु", "ू", "े", "ो"];

fn syllable() -> impl Strategy<Value = String> {
    let onset = prop_oneof![
        3 => prop::sample::select(CONSONANTS),
        1 => prop::sample::select(CLUSTERS),
    ];
    prop_oneof![
        4 => (onset, prop::sample::select(SIGNS), prop::bool::weighted(0.2)),
        1 => (prop::sample::select(INDEPENDENT_VOWELS), Just(""), prop::bool::weighted(0.2)),
    ]
    .prop_map(|(head, sign, nasal)| format!("{head}{sign}{}", if nasal { "ं" } else { "" }))
}

fn word() -> impl Strategy<Value = String> {
    prop::collection::vec(syllable(), 1..7).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn inventory_words_always_pass(w in word()) {
        let verdict = Validator::new().validate(&w, &Script::DISPLAY).unwrap();
        prop_assert!(verdict.passed(), "{:?}", verdict.failures().next());
    }
}
