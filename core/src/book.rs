//! Whole-book conversion.
//!
//! Books are Devanagari text with light XML markup (`<p rend="...">`,
//! `<hi>`, `<pb/>`, ...). Tags are copied verbatim; only the text between
//! them is converted. Sentence stops need care for scripts without dandas:
//! a danda ends a sentence in prose but only half a line in verse, and
//! titles carry no stops at all.

use crate::config::BookConfig;
use crate::convert::{route, Converter};
use crate::devanagari::{DANDA, DOUBLE_DANDA};
use crate::error::ConvertError;
use crate::Script;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static PARAGRAPH_REND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^<p\b[^>]*\brend="([^"]*)""#).expect("rend pattern"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("space pattern"));
static SPACE_BEFORE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +([.,;:?!)\]])").expect("punctuation pattern"));

/// Kind of paragraph the text being converted sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paragraph {
    Prose,
    Verse,
    Centred,
}

impl Paragraph {
    /// Paragraph kind after `tag`. Only `<p>` tags change it.
    fn after(self, tag: &str, config: &BookConfig) -> Self {
        if tag.starts_with("</p") {
            return Paragraph::Prose;
        }
        if let Some(caps) = PARAGRAPH_REND.captures(tag) {
            let rend = &caps[1];
            return if config.gatha_rends.iter().any(|r| r == rend) {
                Paragraph::Verse
            } else if config.centre_rends.iter().any(|r| r == rend) {
                Paragraph::Centred
            } else {
                Paragraph::Prose
            };
        }
        if tag.starts_with("<p ") || tag == "<p>" {
            return Paragraph::Prose;
        }
        self
    }
}

/// Scripts that write dandas themselves. The codec maps them where the
/// script has its own signs (Myanmar, Khmer, Tibetan); Indic scripts share
/// the Devanagari ones.
pub fn has_native_dandas(script: Script) -> bool {
    matches!(
        script,
        Script::Devanagari
            | Script::Bengali
            | Script::Gujarati
            | Script::Gurmukhi
            | Script::Kannada
            | Script::Malayalam
            | Script::Telugu
            | Script::Myanmar
            | Script::Khmer
            | Script::Tibetan
    )
}

fn is_stop(ch: char) -> bool {
    ch == DANDA || ch == DOUBLE_DANDA
}

/// Drop stops before the first and after the last letter of a segment,
/// together with the spaces that separate them from the text.
fn strip_surrounding_stops(segment: &str) -> String {
    let is_body = |c: char| !c.is_whitespace() && !is_stop(c);
    let Some(start) = segment.find(is_body) else {
        return segment.chars().filter(|c| !is_stop(*c)).collect();
    };
    let end = segment
        .rfind(is_body)
        .map(|i| i + segment[i..].chars().next().map_or(0, char::len_utf8))
        .unwrap_or(segment.len());

    let head = &segment[..start];
    let head = head.find(is_stop).map_or(head, |i| &head[..i]);
    let tail = &segment[end..];
    let tail = tail
        .rfind(is_stop)
        .map_or(tail, |i| &tail[i + tail[i..].chars().next().map_or(0, char::len_utf8)..]);

    let mut out = String::with_capacity(segment.len());
    out.push_str(head);
    out.push_str(&segment[start..end]);
    out.push_str(tail);
    out
}

/// Replace dandas with Latin punctuation for scripts that have none.
fn latinize_stops(segment: &str, paragraph: Paragraph) -> String {
    let body: Cow<'_, str> = match paragraph {
        Paragraph::Centred => Cow::Owned(strip_surrounding_stops(segment)),
        _ => Cow::Borrowed(segment),
    };
    body.chars()
        .map(|ch| match (ch, paragraph) {
            (DANDA, Paragraph::Verse) => ';',
            (DANDA | DOUBLE_DANDA, _) => '.',
            _ => ch,
        })
        .collect()
}

fn tidy_spaces(text: String, config: &BookConfig) -> String {
    let mut text = text;
    if config.collapse_spaces {
        text = SPACE_RUN.replace_all(&text, " ").into_owned();
    }
    if config.trim_space_before_punctuation {
        text = SPACE_BEFORE_CLOSE.replace_all(&text, "$1").into_owned();
    }
    text
}

impl Converter {
    /// Convert a Devanagari book, markup included, to `target`.
    pub fn convert_book(&self, text: &str, target: Script) -> Result<String, ConvertError> {
        route(Script::Devanagari, target)?;
        let config = &self.config().book;
        let mut out = String::with_capacity(text.len() * 2);
        let mut paragraph = Paragraph::Prose;
        let mut last = 0;
        let mut tags = 0usize;

        for tag in TAG.find_iter(text) {
            self.push_book_text(&mut out, &text[last..tag.start()], paragraph, target)?;
            out.push_str(tag.as_str());
            paragraph = paragraph.after(tag.as_str(), config);
            last = tag.end();
            tags += 1;
        }
        self.push_book_text(&mut out, &text[last..], paragraph, target)?;

        debug!(%target, bytes = text.len(), tags, "book converted");
        Ok(out)
    }

    fn push_book_text(
        &self,
        out: &mut String,
        segment: &str,
        paragraph: Paragraph,
        target: Script,
    ) -> Result<(), ConvertError> {
        if segment.is_empty() {
            return Ok(());
        }
        let punctuated: Cow<'_, str> = if has_native_dandas(target) {
            Cow::Borrowed(segment)
        } else {
            Cow::Owned(latinize_stops(segment, paragraph))
        };
        let converted = self.convert(&punctuated, Script::Devanagari, target, false)?;
        out.push_str(&tidy_spaces(converted, &self.config().book));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_kind_follows_p_tags() {
        let config = BookConfig::default();
        let p = Paragraph::Prose.after(r#"<p rend="gatha1" n="3">"#, &config);
        assert_eq!(p, Paragraph::Verse);
        assert_eq!(p.after(r#"<hi rend="bold">"#, &config), Paragraph::Verse);
        assert_eq!(p.after("</p>", &config), Paragraph::Prose);
        assert_eq!(
            Paragraph::Prose.after(r#"<p rend="centre">"#, &config),
            Paragraph::Centred
        );
        assert_eq!(
            Paragraph::Verse.after(r#"<p rend="bodytext">"#, &config),
            Paragraph::Prose
        );
    }

    #[test]
    fn stops_by_paragraph_kind() {
        assert_eq!(latinize_stops("क । ख ॥", Paragraph::Prose), "क . ख .");
        assert_eq!(latinize_stops("क । ख ॥", Paragraph::Verse), "क ; ख .");
        assert_eq!(latinize_stops("॥ क । ख ॥ ", Paragraph::Centred), "क . ख ");
        assert_eq!(latinize_stops("\nनमो ।\n", Paragraph::Centred), "\nनमो\n");
    }

    #[test]
    fn tidy_collapses_and_trims() {
        let config = BookConfig::default();
        assert_eq!(
            tidy_spaces("evaṃ  me   sutaṃ . ekaṃ ;".into(), &config),
            "evaṃ me sutaṃ. ekaṃ;"
        );
        let keep = BookConfig {
            collapse_spaces: false,
            trim_space_before_punctuation: false,
            ..BookConfig::default()
        };
        assert_eq!(tidy_spaces("a  .".into(), &keep), "a  .");
    }

    #[test]
    fn native_danda_scripts() {
        assert!(has_native_dandas(Script::Myanmar));
        assert!(!has_native_dandas(Script::Thai));
        assert!(!has_native_dandas(Script::Latin));
    }
}
