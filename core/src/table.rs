//! Character tables.
//!
//! A `CharTable` holds the two directions of one script's mapping to
//! Devanagari. Each direction is split into a single-code-point map and a
//! multi-code-point trie; lookups always prefer the longest multi-code-point
//! key and fall back to the single map.
//!
//! Tables are assembled with [`TableBuilder`] from `(devanagari, script)`
//! pairs. A pair feeds both directions; an *alternative* feeds only the
//! decoding direction (script → Devanagari) and records an accepted variant
//! spelling, e.g. a precomposed letter next to its decomposed form.

use crate::devanagari::{self, VIRAMA};
use crate::trie::SequenceTrie;
use crate::Script;
use ahash::{AHashMap, AHashSet};

/// The Pali phonetic inventory in Devanagari, used to seed tables for scripts
/// that follow the Devanagari code chart layout.
pub const PALI_VOWELS: [char; 8] = ['अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ए', 'ओ'];
pub const PALI_VOWEL_SIGNS: [char; 7] = ['ा', 'ि', 'ी', 'ु', 'ू', 'े', 'ो'];
pub const PALI_CONSONANTS: [char; 32] = [
    'क', 'ख', 'ग', 'घ', 'ङ', 'च', 'छ', 'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ', 'द', 'ध',
    'न', 'प', 'फ', 'ब', 'भ', 'म', 'य', 'र', 'ल', 'व', 'स', 'ह', 'ळ',
];

#[derive(Debug, Clone)]
pub struct CharTable {
    script: Script,
    forward_single: AHashMap<char, String>,
    forward_multi: SequenceTrie<String>,
    reverse_single: AHashMap<char, String>,
    reverse_multi: SequenceTrie<String>,
    /// Script spellings that decode but are never produced by encoding.
    alternatives: AHashSet<String>,
    /// Virama form used when the virama does not precede a consonant.
    final_virama: Option<String>,
    /// Devanagari vowel signs whose script form is written before the
    /// consonant they follow.
    leading_signs: Vec<char>,
}

impl CharTable {
    pub fn script(&self) -> Script {
        self.script
    }

    /// Devanagari → script: longest match on Devanagari keys.
    ///
    /// Characters without an entry are copied unchanged.
    pub fn encode(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len() * 2);
        // Byte offset in `out` where the most recent consonant starts.
        let mut consonant_at: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            if let Some((end, text)) = self.longest_forward(&chars, i) {
                let start = out.len();
                out.push_str(text);
                consonant_at = devanagari::is_consonant(chars[end - 1]).then_some(start);
                i = end;
                continue;
            }

            let ch = chars[i];
            if ch == VIRAMA {
                let before_consonant = chars
                    .get(i + 1)
                    .is_some_and(|next| devanagari::is_consonant(*next));
                match (&self.final_virama, before_consonant) {
                    (Some(final_form), false) => out.push_str(final_form),
                    _ => self.push_forward(&mut out, ch),
                }
                consonant_at = None;
                i += 1;
                continue;
            }

            match self.forward_single.get(&ch) {
                Some(mapped) if self.leading_signs.contains(&ch) => match consonant_at {
                    Some(pos) => out.insert_str(pos, mapped),
                    None => out.push_str(mapped),
                },
                Some(mapped) => {
                    let start = out.len();
                    out.push_str(mapped);
                    if devanagari::is_consonant(ch) {
                        consonant_at = Some(start);
                        i += 1;
                        continue;
                    }
                }
                None => out.push(ch),
            }
            consonant_at = None;
            i += 1;
        }
        out
    }

    /// Longest forward multi-code-point match at `start`. A key ending in a
    /// virama only applies inside a cluster, i.e. before a consonant.
    fn longest_forward(&self, chars: &[char], start: usize) -> Option<(usize, &str)> {
        self.forward_multi
            .walk_prefixes(chars, start)
            .into_iter()
            .rev()
            .find(|(end, _)| {
                chars[end - 1] != VIRAMA
                    || chars.get(*end).is_some_and(|next| devanagari::is_consonant(*next))
            })
            .map(|(end, text)| (end, text.as_str()))
    }

    fn push_forward(&self, out: &mut String, ch: char) {
        match self.forward_single.get(&ch) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(ch),
        }
    }

    /// Script → Devanagari lookup at `start`: the longest multi-code-point key
    /// wins, then the single map. Returns `(end_index, devanagari)`.
    pub fn lookup_reverse<'a>(&'a self, input: &[char], start: usize) -> Option<(usize, &'a str)> {
        if let Some((end, deva)) = self.reverse_multi.longest_prefix(input, start) {
            return Some((end, deva.as_str()));
        }
        let ch = input.get(start)?;
        self.reverse_single.get(ch).map(|deva| (start + 1, deva.as_str()))
    }

    /// Plain longest-match substitution, script → Devanagari, with no
    /// context handling. Codecs layer their state machines on top of
    /// [`CharTable::lookup_reverse`]; this is what the consistency check uses.
    pub fn substitute_reverse(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            match self.lookup_reverse(&chars, i) {
                Some((end, deva)) => {
                    out.push_str(deva);
                    i = end;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
        out
    }

    pub fn is_alternative(&self, script_text: &str) -> bool {
        self.alternatives.contains(script_text)
    }

    /// Every decoding entry as `(script, devanagari)`.
    pub fn reverse_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .reverse_single
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        collect_trie(&self.reverse_multi, &mut entries);
        entries.sort();
        entries
    }

    /// Every encoding entry as `(devanagari, script)`.
    pub fn forward_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .forward_single
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        collect_trie(&self.forward_multi, &mut entries);
        entries.sort();
        entries
    }

    /// Decoding entries whose Devanagari does not encode back to the same
    /// script text. Alternatives are exempt: they are expected to encode to
    /// their canonical spelling instead.
    ///
    /// An empty result means the table satisfies the inverse-consistency
    /// requirement.
    pub fn inverse_mismatches(&self) -> Vec<(String, String, String)> {
        self.reverse_entries()
            .into_iter()
            .filter(|(script_text, _)| !self.is_alternative(script_text))
            .filter_map(|(script_text, deva)| {
                let back = self.encode_in_cluster(&deva);
                (back != script_text).then_some((script_text, deva, back))
            })
            .collect()
    }

    /// Encode `deva`; a trailing virama is encoded as it would be inside a
    /// cluster rather than in its word-final form.
    fn encode_in_cluster(&self, deva: &str) -> String {
        if self.final_virama.is_none() || !deva.ends_with(VIRAMA) {
            return self.encode(deva);
        }
        let probe = self.encode(&format!("{deva}क"));
        let tail = self.encode("क");
        match probe.strip_suffix(tail.as_str()) {
            Some(head) => head.to_string(),
            None => probe,
        }
    }
}

fn collect_trie(trie: &SequenceTrie<String>, out: &mut Vec<(String, String)>) {
    out.extend(trie.entries().into_iter().map(|(k, v)| (k, v.clone())));
}

/// Assembles a [`CharTable`].
///
/// The first pair registered for a key wins in each direction, so canonical
/// spellings must be listed before variants that share a key.
#[derive(Debug)]
pub struct TableBuilder {
    script: Script,
    pairs: Vec<(String, String)>,
    alternatives: Vec<(String, String)>,
    final_virama: Option<String>,
    leading_signs: Vec<char>,
}

impl TableBuilder {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            pairs: Vec::new(),
            alternatives: Vec::new(),
            final_virama: None,
            leading_signs: Vec::new(),
        }
    }

    pub fn pair(mut self, deva: impl Into<String>, script_text: impl Into<String>) -> Self {
        self.pairs.push((deva.into(), script_text.into()));
        self
    }

    pub fn pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        self.pairs
            .extend(pairs.iter().map(|(d, s)| (d.to_string(), s.to_string())));
        self
    }

    /// Owned pairs, e.g. from [`offset_pairs`]. Keys already registered are
    /// skipped.
    pub fn extend_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let taken: AHashSet<String> = self.pairs.iter().map(|(d, _)| d.clone()).collect();
        self.pairs
            .extend(pairs.into_iter().filter(|(d, _)| !taken.contains(d)));
        self
    }

    /// Decode-only spelling: `script_text` is read as `deva` but never
    /// written.
    pub fn alternative(mut self, script_text: impl Into<String>, deva: impl Into<String>) -> Self {
        self.alternatives.push((script_text.into(), deva.into()));
        self
    }

    pub fn alternatives(mut self, alternatives: &[(&str, &str)]) -> Self {
        self.alternatives
            .extend(alternatives.iter().map(|(s, d)| (s.to_string(), d.to_string())));
        self
    }

    pub fn final_virama(mut self, text: impl Into<String>) -> Self {
        self.final_virama = Some(text.into());
        self
    }

    pub fn leading_sign(mut self, sign: char) -> Self {
        self.leading_signs.push(sign);
        self
    }

    pub fn build(self) -> CharTable {
        let mut forward_single = AHashMap::new();
        let mut forward_multi = SequenceTrie::new();
        let mut reverse_single = AHashMap::new();
        let mut reverse_multi = SequenceTrie::new();
        let mut alternatives = AHashSet::new();

        for (deva, script_text) in &self.pairs {
            insert_first(&mut forward_single, &mut forward_multi, deva, script_text);
            insert_first(&mut reverse_single, &mut reverse_multi, script_text, deva);
        }
        if let Some(final_form) = &self.final_virama {
            insert_first(&mut reverse_single, &mut reverse_multi, final_form, &VIRAMA.to_string());
            alternatives.insert(final_form.clone());
        }
        for (script_text, deva) in &self.alternatives {
            if insert_first(&mut reverse_single, &mut reverse_multi, script_text, deva) {
                alternatives.insert(script_text.clone());
            }
        }

        CharTable {
            script: self.script,
            forward_single,
            forward_multi,
            reverse_single,
            reverse_multi,
            alternatives,
            final_virama: self.final_virama,
            leading_signs: self.leading_signs,
        }
    }
}

/// Insert unless the key is already present. Returns whether it was inserted.
fn insert_first(
    single: &mut AHashMap<char, String>,
    multi: &mut SequenceTrie<String>,
    key: &str,
    value: &str,
) -> bool {
    if key.is_empty() {
        return false;
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            if single.contains_key(&ch) {
                return false;
            }
            single.insert(ch, value.to_string());
            true
        }
        _ => {
            if multi.contains_key(key) {
                return false;
            }
            multi.insert(key, value.to_string());
            true
        }
    }
}

/// Pairs for a script laid out like the Devanagari code chart: each letter of
/// the inventory sits at the same offset from the start of its block.
pub fn offset_pairs(block_start: u32) -> Vec<(String, String)> {
    let shift = |ch: char| -> String {
        char::from_u32(ch as u32 - 0x0900 + block_start)
            .map(String::from)
            .unwrap_or_default()
    };
    PALI_VOWELS
        .iter()
        .chain(PALI_VOWEL_SIGNS.iter())
        .chain(PALI_CONSONANTS.iter())
        .copied()
        .chain([devanagari::ANUSVARA, VIRAMA])
        .chain('\u{0966}'..='\u{096F}')
        .map(|ch| (ch.to_string(), shift(ch)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> CharTable {
        TableBuilder::new(Script::Thai)
            .pairs(&[("क", "ก"), ("ख", "ข"), ("े", "เ"), ("्", "ฺ"), ("अ", "อ"), ("ए", "เอ")])
            .alternative("บ", "ब")
            .leading_sign('े')
            .build()
    }

    #[test]
    fn encode_places_leading_sign_before_consonant() {
        let t = toy();
        assert_eq!(t.encode("के"), "เก");
        assert_eq!(t.encode("क्खे"), "กฺเข");
        // Independent vowel is already in visual order.
        assert_eq!(t.encode("कए"), "กเอ");
    }

    #[test]
    fn lookup_prefers_multi_code_point_keys() {
        let t = toy();
        let input: Vec<char> = "เอก".chars().collect();
        assert_eq!(t.lookup_reverse(&input, 0), Some((2, "ए")));
        assert_eq!(t.lookup_reverse(&input, 2), Some((3, "क")));
    }

    #[test]
    fn final_virama_depends_on_following_consonant() {
        let t = TableBuilder::new(Script::Khmer)
            .pairs(&[("क", "ក"), ("्", "្")])
            .final_virama("៑")
            .build();
        assert_eq!(t.encode("क्क"), "ក្ក");
        assert_eq!(t.encode("क्"), "ក៑");
        assert_eq!(t.substitute_reverse("ក៑"), "क्");
    }

    #[test]
    fn virama_final_keys_only_apply_before_consonants() {
        let t = TableBuilder::new(Script::Myanmar)
            .pairs(&[("ङ्", "င်္"), ("ङ", "င"), ("ग", "ဂ"), ("्", "္")])
            .final_virama("်")
            .build();
        assert_eq!(t.encode("ङ्ग"), "င်္ဂ");
        assert_eq!(t.encode("ङ्"), "င်");
    }

    #[test]
    fn extend_pairs_keeps_overrides() {
        let t = TableBuilder::new(Script::Bengali)
            .pair("व", "ৱ")
            .extend_pairs(offset_pairs(0x0980))
            .build();
        assert_eq!(t.encode("व"), "ৱ");
        assert_eq!(t.encode("क"), "ক");
        assert!(t.inverse_mismatches().is_empty());
    }

    #[test]
    fn alternatives_are_exempt_from_inverse_check() {
        let t = toy();
        assert!(t.is_alternative("บ"));
        assert!(t.inverse_mismatches().is_empty());
    }

    #[test]
    fn offset_pairs_cover_inventory() {
        let pairs = offset_pairs(0x0A80);
        assert!(pairs.contains(&("क".to_string(), "ક".to_string())));
        assert!(pairs.contains(&("ळ".to_string(), "ળ".to_string())));
        assert!(pairs.contains(&("०".to_string(), "૦".to_string())));
        assert_eq!(pairs.len(), 8 + 7 + 32 + 2 + 10);
    }
}
