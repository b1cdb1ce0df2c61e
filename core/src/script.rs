//! Writing systems known to the engine.
//!
//! `Script` is a closed set: every value is known at compile time and carries
//! no data. `Devanagari` and `Ipe` double as the two pivot encodings through
//! which conversions without a direct codec are composed. `Unknown` is only
//! meaningful as a *source* tag and asks the dispatcher to detect the script.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Devanagari,
    Latin,
    Bengali,
    Gujarati,
    Gurmukhi,
    Kannada,
    Khmer,
    Malayalam,
    Myanmar,
    Sinhala,
    Telugu,
    Thai,
    Tibetan,
    Cyrillic,
    Ipe,
    Unknown,
}

impl Script {
    /// Every concrete script, pivots included. `Unknown` is not listed.
    pub const ALL: [Script; 15] = [
        Script::Devanagari,
        Script::Latin,
        Script::Bengali,
        Script::Gujarati,
        Script::Gurmukhi,
        Script::Kannada,
        Script::Khmer,
        Script::Malayalam,
        Script::Myanmar,
        Script::Sinhala,
        Script::Telugu,
        Script::Thai,
        Script::Tibetan,
        Script::Cyrillic,
        Script::Ipe,
    ];

    /// Scripts a reader would actually display text in (no pivots).
    pub const DISPLAY: [Script; 13] = [
        Script::Latin,
        Script::Bengali,
        Script::Gujarati,
        Script::Gurmukhi,
        Script::Kannada,
        Script::Khmer,
        Script::Malayalam,
        Script::Myanmar,
        Script::Sinhala,
        Script::Telugu,
        Script::Thai,
        Script::Tibetan,
        Script::Cyrillic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Script::Devanagari => "devanagari",
            Script::Latin => "latin",
            Script::Bengali => "bengali",
            Script::Gujarati => "gujarati",
            Script::Gurmukhi => "gurmukhi",
            Script::Kannada => "kannada",
            Script::Khmer => "khmer",
            Script::Malayalam => "malayalam",
            Script::Myanmar => "myanmar",
            Script::Sinhala => "sinhala",
            Script::Telugu => "telugu",
            Script::Thai => "thai",
            Script::Tibetan => "tibetan",
            Script::Cyrillic => "cyrillic",
            Script::Ipe => "ipe",
            Script::Unknown => "unknown",
        }
    }

    /// True when the script has a case distinction worth title-casing.
    pub fn has_case(self) -> bool {
        matches!(self, Script::Latin | Script::Cyrillic)
    }

    /// Unicode block owning `ch`, restricted to the supported scripts.
    pub fn of_char(ch: char) -> Option<Script> {
        let script = match ch as u32 {
            0x0900..=0x097F => Script::Devanagari,
            0x0980..=0x09FF => Script::Bengali,
            0x0A00..=0x0A7F => Script::Gurmukhi,
            0x0A80..=0x0AFF => Script::Gujarati,
            0x0C00..=0x0C7F => Script::Telugu,
            0x0C80..=0x0CFF => Script::Kannada,
            0x0D00..=0x0D7F => Script::Malayalam,
            0x0D80..=0x0DFF => Script::Sinhala,
            0x0E00..=0x0E7F => Script::Thai,
            0x0F00..=0x0FFF => Script::Tibetan,
            0x1000..=0x109F => Script::Myanmar,
            0x1780..=0x17FF => Script::Khmer,
            0x0400..=0x04FF => Script::Cyrillic,
            0xE000..=0xE0FF => Script::Ipe,
            0x0041..=0x005A
            | 0x0061..=0x007A
            | 0x00C0..=0x024F
            | 0x1E00..=0x1EFF => Script::Latin,
            _ => return None,
        };
        Some(script)
    }

    /// Best-effort detection: the first character that belongs to a supported
    /// script decides. Digits, punctuation and combining marks shared between
    /// blocks are skipped.
    ///
    /// ```
    /// use libpali_core::Script;
    ///
    /// assert_eq!(Script::detect("१२ बुद्ध"), Some(Script::Devanagari));
    /// assert_eq!(Script::detect("- buddha"), Some(Script::Latin));
    /// assert_eq!(Script::detect("123 ..."), None);
    /// ```
    pub fn detect(text: &str) -> Option<Script> {
        text.chars()
            .filter(|c| !matches!(*c as u32, 0x0964 | 0x0965 | 0x0300..=0x036F))
            .filter(|c| !c.is_ascii_digit())
            .find_map(Script::of_char)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a script name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown script name: {0}")]
pub struct ParseScriptError(pub String);

impl FromStr for Script {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let script = match s.trim().to_ascii_lowercase().as_str() {
            "devanagari" | "deva" => Script::Devanagari,
            "latin" | "latn" | "roman" | "iast" => Script::Latin,
            "bengali" | "beng" => Script::Bengali,
            "gujarati" | "gujr" => Script::Gujarati,
            "gurmukhi" | "guru" => Script::Gurmukhi,
            "kannada" | "knda" => Script::Kannada,
            "khmer" | "khmr" => Script::Khmer,
            "malayalam" | "mlym" => Script::Malayalam,
            "myanmar" | "mymr" | "burmese" => Script::Myanmar,
            "sinhala" | "sinh" => Script::Sinhala,
            "telugu" | "telu" => Script::Telugu,
            "thai" => Script::Thai,
            "tibetan" | "tibt" => Script::Tibetan,
            "cyrillic" | "cyrl" => Script::Cyrillic,
            "ipe" => Script::Ipe,
            "unknown" | "auto" => Script::Unknown,
            other => return Err(ParseScriptError(other.to_string())),
        };
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for script in Script::ALL {
            assert_eq!(script.name().parse::<Script>().unwrap(), script);
        }
        assert_eq!("auto".parse::<Script>().unwrap(), Script::Unknown);
        assert!("klingon".parse::<Script>().is_err());
    }

    #[test]
    fn detect_uses_first_script_character() {
        assert_eq!(Script::detect("ဗုဒ္ဓ"), Some(Script::Myanmar));
        assert_eq!(Script::detect("พุทฺธ"), Some(Script::Thai));
        assert_eq!(Script::detect("будддха"), Some(Script::Cyrillic));
        assert_eq!(Script::detect("।। ॥"), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            script: Script,
        }
        let s = toml::to_string(&Wrapper { script: Script::Myanmar }).unwrap();
        assert_eq!(s.trim(), "script = \"myanmar\"");
        let back: Wrapper = toml::from_str("script = \"thai\"").unwrap();
        assert_eq!(back.script, Script::Thai);
    }
}
