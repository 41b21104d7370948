mod node;

use std::fmt::{Debug, Formatter};

use crate::wordlist::compressed::node::CompressedNode;
use crate::wordlist::mutation::mutate_with;
use crate::wordlist::searchconfig::SearchConfig;
use crate::wordlist::store::{Phase, Suggestion, WordStore};

/// Prefix-compressed (radix) trie with 27 child slots per node.
///
/// Chains of single-child nodes are merged into one node holding the whole
/// label. Adding a word that shares only part of an existing label splits it:
/// the shared part becomes a new intermediate node and the old node hangs
/// below it under the rest of its label. The root has an empty label and is
/// never a word.
pub struct CompressedTrie {
    root: CompressedNode,
    words: usize,
    config: SearchConfig,
}

impl Default for CompressedTrie {
    fn default() -> Self {
        CompressedTrie::new()
    }
}

impl CompressedTrie {
    pub fn new() -> CompressedTrie {
        CompressedTrie::with_config(SearchConfig::new())
    }

    pub fn with_config(config: SearchConfig) -> CompressedTrie {
        CompressedTrie {
            root: CompressedNode::default(),
            words: 0,
            config,
        }
    }

    /// Registered words in slot order.
    pub fn words(&self) -> Vec<String> {
        let mut words = vec![];
        self.root.traverse_words(&mut String::new(), &mut |w: &str| words.push(w.to_string()));
        words
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl WordStore for CompressedTrie {
    fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if self.root.insert(word) {
            self.words += 1;
        }
    }

    fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.root.descend(word).map(|x| x.is_word).unwrap_or(false)
    }

    fn suggest(&self, word: &str) -> Suggestion {
        let mut current = &self.root;
        let mut rest = word;
        let mut path = String::new();
        let mut ancestor: Option<String> = None;

        while let Some(c) = rest.chars().next() {
            let child = match current.get_child(c) {
                Some(child) => child,
                None => break,
            };
            rest = match rest.strip_prefix(child.prefix.as_str()) {
                Some(remainder) => remainder,
                None => break,
            };
            path.push_str(&child.prefix);
            current = child;
            if child.is_word {
                ancestor = Some(path.clone());
            }
        }

        if let Some(found) = ancestor {
            let suggestion = Suggestion::Found(found);
            Phase::Ancestor.record(word, &suggestion);
            return suggestion;
        }

        if let Some(child) = current.children().find(|x| x.is_word) {
            path.push_str(&child.prefix);
            let suggestion = Suggestion::Found(path);
            Phase::Child.record(word, &suggestion);
            return suggestion;
        }

        let suggestion = mutate_with(word, &self.config, |x| self.contains(x));
        Phase::Mutation.record(word, &suggestion);
        suggestion
    }

    fn len(&self) -> usize {
        self.words
    }
}

impl Debug for CompressedTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressedTrie")
            .field("words", &self.words)
            .field("nodes", &self.node_count())
            .field("config", &self.config)
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::compressed::CompressedTrie;
    use crate::wordlist::searchconfig::SearchConfig;
    use crate::wordlist::store::{Suggestion, WordStore};

    fn trie_of(words: &[&str]) -> CompressedTrie {
        let mut trie = CompressedTrie::new();
        trie.add_all(words.iter().copied());
        trie
    }

    fn found(word: &str) -> Suggestion {
        Suggestion::Found(word.to_string())
    }

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good", "don't", "do", "d"];
        let trie = trie_of(&words);
        words.iter().for_each(|word| assert!(trie.contains(word), "{} missing", word));
        assert_eq!(trie.len(), words.len());
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let trie = trie_of(&["hello", "help", "goodbye", "good"]);
        let bad_words = vec!["he", "hel", "h", "lol", "banana", "helps", "goo", "goodby", ""];
        bad_words.iter().for_each(|word| assert!(!trie.contains(word), "{} found", word));
    }

    #[test]
    fn shared_prefix_is_not_a_word() {
        let mut trie = trie_of(&["tell", "test"]);
        assert!(trie.contains("tell"));
        assert!(trie.contains("test"));
        assert!(!trie.contains("te"));
        assert!(!trie.contains("t"));

        trie.add("te");
        assert!(trie.contains("te"));
        assert!(trie.contains("tell"));
        assert!(trie.contains("test"));
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let words = ["romane", "romanus", "romulus", "rubens", "ruber", "rubicon", "rubicundus", "rom", "r"];
        let forward = trie_of(&words);
        let mut reversed_words = words.to_vec();
        reversed_words.reverse();
        let backward = trie_of(&reversed_words);

        assert_eq!(forward.words(), backward.words());
        assert_eq!(forward.node_count(), backward.node_count());
        words.iter().for_each(|word| assert!(backward.contains(word)));
    }

    #[test]
    fn adding_twice_is_a_no_op() {
        let once = trie_of(&["tell", "test"]);
        let mut twice = trie_of(&["tell", "test"]);
        twice.add("test");
        twice.add("tell");

        assert_eq!(twice.len(), 2);
        assert_eq!(once.node_count(), twice.node_count());
        for query in ["tell", "test", "tee", "te", "xyz"] {
            assert_eq!(once.contains(query), twice.contains(query));
            assert_eq!(once.suggest(query), twice.suggest(query));
        }
    }

    #[test]
    fn suggests_word_itself() {
        let trie = trie_of(&["cat", "cats", "dog"]);
        assert_eq!(trie.suggest("cat"), found("cat"));
        assert_eq!(trie.suggest("cats"), found("cats"));
    }

    #[test]
    fn suggests_ancestor_word() {
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.suggest("cats"), found("cat"));
    }

    #[test]
    fn deepest_ancestor_wins() {
        let trie = trie_of(&["a", "an", "ant"]);
        assert_eq!(trie.suggest("antz"), found("ant"));
        assert_eq!(trie.suggest("anx"), found("an"));
    }

    #[test]
    fn child_fallback_prefers_lower_slot() {
        let trie = trie_of(&["test", "tell"]);
        assert_eq!(trie.suggest("tee"), found("tell"));
    }

    #[test]
    fn partial_label_match_stops_descent() {
        // "tesx" only shares part of the "testing" label, so the walk stays at
        // the root whose only child is a word
        let trie = trie_of(&["testing"]);
        assert_eq!(trie.suggest("tesx"), found("testing"));
    }

    #[test]
    fn child_fallback_sees_whole_labels() {
        let trie = trie_of(&["cat", "cub"]);
        assert_eq!(trie.suggest("cz"), found("cat"));
    }

    #[test]
    fn falls_back_to_mutation() {
        // root -> "a" is no word, and "bt" misses it entirely
        let trie = trie_of(&["at", "an"]);
        assert_eq!(trie.suggest("bt"), found("at"));
    }

    #[test]
    fn unreachable_word_terminates() {
        let mut trie = CompressedTrie::new();
        trie.add("bat");
        // the root's only child is a word, so the child phase answers
        assert_eq!(trie.suggest("zzz"), found("bat"));

        let trie = trie_of(&["bat", "bar"]);
        // root -> "ba" is no word; the query misses it and no 3-letter sweep of "zzz" hits
        assert_eq!(trie.suggest("zzz"), Suggestion::NotFound);
    }

    #[test]
    fn length_limit_is_respected() {
        let config = SearchConfig::builder().max_word_len(2).build();
        let mut trie = CompressedTrie::with_config(config);
        trie.add_all(["bat", "bar"]);
        assert_eq!(trie.suggest("baz"), found("bar"));
        assert_eq!(trie.suggest("qqq"), Suggestion::NotFound);
    }

    #[test]
    fn lists_words_in_slot_order() {
        let trie = trie_of(&["test", "tell", "cat", "te", "don't"]);
        assert_eq!(trie.words(), vec!["cat", "don't", "te", "tell", "test"]);
    }
}
