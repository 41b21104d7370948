mod node;

use std::fmt::{Debug, Formatter};

use crate::wordlist::chartrie::node::CharTrieNode;
use crate::wordlist::mutation::mutate_with;
use crate::wordlist::searchconfig::SearchConfig;
use crate::wordlist::store::{Phase, Suggestion, WordStore};

/// Plain trie, one character per node, children in insertion order.
pub struct CharTrie {
    root: CharTrieNode,
    words: usize,
    config: SearchConfig,
}

impl Default for CharTrie {
    fn default() -> Self {
        CharTrie::new()
    }
}

impl CharTrie {
    pub fn new() -> CharTrie {
        CharTrie::with_config(SearchConfig::new())
    }

    pub fn with_config(config: SearchConfig) -> CharTrie {
        CharTrie {
            // sentinel, its letter is never read
            root: CharTrieNode::new(' '),
            words: 0,
            config,
        }
    }

    fn get_node(&self, word: &str) -> Option<&CharTrieNode> {
        word.chars().try_fold(&self.root, |node, c| node.get_child(c))
    }

    /// Registered words in storage order.
    pub fn words(&self) -> Vec<String> {
        let mut words = vec![];
        self.root.traverse_words(&mut String::new(), &mut |w: &str| words.push(w.to_string()));
        words
    }

    /// How many inserted words run through the prefix `prefix`.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.get_node(prefix).map(|x| x.count).unwrap_or(0)
    }
}

impl WordStore for CharTrie {
    fn add(&mut self, word: &str) {
        if self.contains(word) {
            return;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
            current.count += 1;
        }
        current.is_word = true;
        self.words += 1;
    }

    fn contains(&self, word: &str) -> bool {
        self.get_node(word).map(|x| x.is_word).unwrap_or(false)
    }

    fn suggest(&self, word: &str) -> Suggestion {
        let mut current = &self.root;
        let mut path = String::new();
        let mut ancestor: Option<String> = None;

        for c in word.chars() {
            match current.get_child(c) {
                Some(child) => {
                    path.push(c);
                    current = child;
                    if child.is_word {
                        // deepest word on the path wins
                        ancestor = Some(path.clone());
                    }
                }
                None => break,
            }
        }

        if let Some(found) = ancestor {
            let suggestion = Suggestion::Found(found);
            Phase::Ancestor.record(word, &suggestion);
            return suggestion;
        }

        if let Some(child) = current.children.iter().find(|x| x.is_word) {
            path.push(child.letter);
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

impl Debug for CharTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharTrie")
            .field("words", &self.words)
            .field("config", &self.config)
            .field("root", &self.root)
            .finish()
    }
}
