/// Prefix trie over code-point sequences.
use ahash::AHashMap;

/// A prefix tree mapping code-point sequences to values.
///
/// Character tables store their multi-code-point keys here so that the
/// longest key starting at a position can be found in one walk instead of
/// probing every key length separately.
///
/// # Example
/// ```
/// use libpali_core::trie::SequenceTrie;
///
/// let mut trie = SequenceTrie::new();
/// trie.insert("က", 1);
/// trie.insert("ကျ", 2);
///
/// let input: Vec<char> = "ကျော".chars().collect();
/// assert_eq!(trie.longest_prefix(&input, 0), Some((2, &2)));
/// assert_eq!(trie.longest_prefix(&input, 2), None);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceTrie<V> {
    children: AHashMap<char, SequenceTrie<V>>,
    value: Option<V>,
}

impl<V> Default for SequenceTrie<V> {
    fn default() -> Self {
        Self {
            children: AHashMap::new(),
            value: None,
        }
    }
}

impl<V> SequenceTrie<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, replacing any value already stored for it.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.value.replace(value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.get(&ch)?;
        }
        node.value.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Walk from `start` and return every stored key that prefixes the input
    /// there, as `(end_index, value)`, shortest first.
    pub fn walk_prefixes<'a>(&'a self, input: &[char], start: usize) -> Vec<(usize, &'a V)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(v) = &node.value {
                        res.push((idx, v));
                    }
                }
                None => break,
            }
        }
        res
    }

    /// Longest stored key that prefixes `input[start..]`, as
    /// `(end_index, value)`.
    pub fn longest_prefix<'a>(&'a self, input: &[char], start: usize) -> Option<(usize, &'a V)> {
        self.walk_prefixes(input, start).pop()
    }

    /// Every stored `(key, value)` pair, in no particular order.
    pub fn entries(&self) -> Vec<(String, &V)> {
        let mut out = Vec::new();
        let mut prefix = String::new();
        self.collect_entries(&mut prefix, &mut out);
        out
    }

    fn collect_entries<'a>(&'a self, prefix: &mut String, out: &mut Vec<(String, &'a V)>) {
        if let Some(v) = &self.value {
            out.push((prefix.clone(), v));
        }
        for (ch, child) in &self.children {
            prefix.push(*ch);
            child.collect_entries(prefix, out);
            prefix.pop();
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        let own = usize::from(self.value.is_some());
        own + self.children.values().map(SequenceTrie::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
