use std::collections::HashMap;

use rand::{seq::IndexedRandom, Rng};

/// Index of the root node inside the arena
const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, usize>,
    terminal: bool,
    /// Stored words ending at or below this node
    completions: usize,
}

/// Prefix tree over normalized words.
///
/// Nodes live in a single arena and refer to their children by index, so
/// every node has exactly one parent edge and the whole tree is released in
/// one drop. The word list is the authoritative collection used for
/// enumeration and sampling; the tree only answers lookups.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<TrieNode>,
    words: Vec<String>,
}

impl PrefixTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: Vec::new(),
        }
    }

    /// Insert an already normalized word.
    ///
    /// Returns `true` if the word was not stored before. Empty words are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut path = Vec::with_capacity(word.len() + 1);
        let mut node = ROOT;
        path.push(node);
        for ch in word.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
            path.push(node);
        }

        let end = &mut self.nodes[node];
        if end.terminal {
            return false;
        }
        end.terminal = true;
        for idx in path {
            self.nodes[idx].completions += 1;
        }
        self.words.push(word.to_owned());
        true
    }

    /// Check if `word` was inserted
    pub fn search(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Check if any stored word begins with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.walk(prefix).is_some()
    }

    /// Number of stored words beginning with `prefix`, in O(len(prefix))
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.walk(prefix)
            .map_or(0, |node| self.nodes[node].completions)
    }

    /// Read-only view of every stored word, in insertion order
    pub fn all_words(&self) -> &[String] {
        &self.words
    }

    /// Draw one stored word uniformly at random
    pub fn random_word<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Get the number of stored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the tree holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of allocated nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn walk(&self, key: &str) -> Option<usize> {
        key.chars()
            .try_fold(ROOT, |node, ch| self.nodes[node].children.get(&ch).copied())
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_empty_tree() {
        let tree = PrefixTree::new();
        assert!(tree.is_empty());
        assert!(!tree.search("test"));
        assert!(!tree.starts_with(""));
        assert!(!tree.starts_with("t"));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_inserted_words_are_found() {
        let mut tree = PrefixTree::new();
        for word in ["cat", "car", "cart", "dog"] {
            assert!(tree.insert(word));
            assert!(tree.search(word), "'{}' should be found right after insertion", word);
        }

        // Earlier words survive later insertions
        for word in ["cat", "car", "cart", "dog"] {
            assert!(tree.search(word));
        }
    }

    #[test]
    fn test_prefix_of_word_is_not_a_word() {
        let tree: PrefixTree = ["cart"].into_iter().collect();
        assert!(!tree.search("car"));
        assert!(!tree.search("ca"));
        assert!(!tree.search("carts"));
        assert!(!tree.search(""));
        assert!(tree.search("cart"));
    }

    #[test]
    fn test_starts_with_ignores_terminal_flag() {
        let tree: PrefixTree = ["cart", "dog"].into_iter().collect();
        assert!(tree.starts_with("c"));
        assert!(tree.starts_with("car"));
        assert!(tree.starts_with("cart"));
        assert!(tree.starts_with(""));
        assert!(!tree.starts_with("carts"));
        assert!(!tree.starts_with("x"));
    }

    #[test]
    fn test_starts_with_matches_word_scan() {
        let words = ["apple", "apply", "ape", "banana", "band", "b"];
        let tree: PrefixTree = words.into_iter().collect();

        for prefix in ["a", "ap", "app", "appl", "apx", "ban", "bana", "c", "bandana"] {
            let expected = words.iter().any(|w| w.starts_with(prefix));
            assert_eq!(tree.starts_with(prefix), expected, "prefix '{}'", prefix);
        }
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut tree = PrefixTree::new();
        assert!(tree.insert("cat"));
        let nodes = tree.node_count();

        assert!(!tree.insert("cat"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node_count(), nodes);
        assert!(tree.search("cat"));
    }

    #[test]
    fn test_empty_word_is_ignored() {
        let mut tree = PrefixTree::new();
        assert!(!tree.insert(""));
        assert!(tree.is_empty());
        assert!(!tree.search(""));
    }

    #[test]
    fn test_word_set_matches_terminal_paths() {
        let tree: PrefixTree = ["cat", "car", "cart", "car", "dog", "do"]
            .into_iter()
            .collect();

        let unique: HashSet<&str> = tree.all_words().iter().map(String::as_str).collect();
        assert_eq!(unique.len(), tree.len());
        assert_eq!(unique, HashSet::from(["cat", "car", "cart", "dog", "do"]));
        for word in tree.all_words() {
            assert!(tree.search(word));
        }
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let tree: PrefixTree = ["car", "cart", "cat"].into_iter().collect();
        // root + c + a + r + t + t
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn test_unicode_words() {
        let tree: PrefixTree = ["café", "caña"].into_iter().collect();
        assert!(tree.search("café"));
        assert!(tree.starts_with("caf"));
        assert!(tree.starts_with("cañ"));
        assert!(!tree.search("cafe"));
    }

    #[test]
    fn test_count_with_prefix_matches_word_scan() {
        let words = ["cat", "car", "cart", "car", "dog", "do", "d"];
        let tree: PrefixTree = words.into_iter().collect();

        for prefix in ["", "c", "ca", "car", "cart", "carts", "d", "do", "dog", "x"] {
            let expected = tree
                .all_words()
                .iter()
                .filter(|w| w.starts_with(prefix))
                .count();
            assert_eq!(tree.count_with_prefix(prefix), expected, "prefix '{}'", prefix);
        }
        assert_eq!(tree.count_with_prefix(""), 6);
    }

    #[test]
    fn test_random_word_draws_stored_words() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(PrefixTree::new().random_word(&mut rng).is_none());

        let tree: PrefixTree = ["cat", "car", "dog"].into_iter().collect();
        for _ in 0..50 {
            let word = tree.random_word(&mut rng).unwrap();
            assert!(tree.search(word));
        }
    }
}
