// Book conversion: markup is preserved, dandas are rewritten per paragraph
// kind for scripts without their own, and spacing is tidied.

use libpali_core::{BookConfig, Config, Converter, Script};

const SUTTA: &str = concat!(
    r#"<p rend="centre">नमो तस्स भगवतो ।</p>"#,
    "\n",
    r#"<p rend="bodytext" n="1">एवं  मे सुतं । एकं समयं भगवा ॥</p>"#,
    "\n",
    r#"<p rend="gatha1">मनोपुब्बङ्गमा धम्मा ।</p>"#,
    "\n",
    r#"<p rend="gathalast">मनोसेट्ठा मनोमया ॥</p>"#,
);

#[test]
fn latin_book() {
    let out = Converter::new().convert_book(SUTTA, Script::Latin).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], r#"<p rend="centre">namo tassa bhagavato</p>"#);
    assert_eq!(
        lines[1],
        r#"<p rend="bodytext" n="1">evaṃ me sutaṃ. ekaṃ samayaṃ bhagavā.</p>"#
    );
    assert_eq!(lines[2], r#"<p rend="gatha1">manopubbaṅgamā dhammā;</p>"#);
    assert_eq!(lines[3], r#"<p rend="gathalast">manoseṭṭhā manomayā.</p>"#);
}

#[test]
fn thai_book_uses_latin_stops() {
    let out = Converter::new().convert_book(SUTTA, Script::Thai).unwrap();
    assert!(out.contains("เอวํ เม สุตํ. เอกํ สมยํ ภควา."));
    assert!(!out.contains('।'));
}

#[test]
fn native_danda_scripts_keep_stops() {
    let conv = Converter::new();
    let myanmar = conv.convert_book(SUTTA, Script::Myanmar).unwrap();
    assert!(myanmar.contains('၊'));
    assert!(myanmar.contains('။'));

    let gujarati = conv.convert_book(SUTTA, Script::Gujarati).unwrap();
    assert!(gujarati.contains("નમો તસ્સ ભગવતો ।"));
}

#[test]
fn markup_is_never_converted() {
    let text = r#"<pb ed="M" n="1.0001" /><hi rend="paranum">१</hi> धम्मो"#;
    let out = Converter::new().convert_book(text, Script::Sinhala).unwrap();
    assert!(out.starts_with(r#"<pb ed="M" n="1.0001" /><hi rend="paranum">1</hi> "#));
    assert!(out.ends_with("ධම\u{0DCA}ම\u{0DDC}"));
}

#[test]
fn rend_names_are_configurable() {
    let config = Config {
        book: BookConfig {
            gatha_rends: vec!["verse".into()],
            ..BookConfig::default()
        },
        ..Config::default()
    };
    let conv = Converter::with_config(config);
    let out = conv
        .convert_book(r#"<p rend="verse">धम्मा । मनोमया ॥</p>"#, Script::Latin)
        .unwrap();
    assert_eq!(out, r#"<p rend="verse">dhammā; manomayā.</p>"#);
}

#[test]
fn unknown_target_is_an_error() {
    assert!(Converter::new().convert_book("धम्म", Script::Unknown).is_err());
}
