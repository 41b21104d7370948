use std::fmt::{Debug, Formatter};

use derive_new::new;

/// One character per node. Children keep insertion order and are scanned linearly.
#[derive(new, Default)]
pub(crate) struct CharTrieNode {
    pub(crate) letter: char,
    #[new(default)]
    pub(crate) is_word: bool,
    /// How many insertions passed through this node.
    #[new(default)]
    pub(crate) count: usize,
    #[new(default)]
    pub(crate) children: Vec<CharTrieNode>,
}

impl CharTrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&CharTrieNode> {
        self.children.iter().find(|x| x.letter == c)
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut CharTrieNode {
        let idx = match self.children.iter().position(|x| x.letter == c) {
            Some(idx) => idx,
            None => {
                self.children.push(CharTrieNode::new(c));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    /// Visits every word below this node, `path` being the word spelled so far.
    pub(crate) fn traverse_words<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&str) {
        if self.is_word {
            f(path);
        }
        for child in &self.children {
            path.push(child.letter);
            child.traverse_words(path, f);
            path.pop();
        }
    }
}

impl Debug for CharTrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharTrieNode")
            .field("letter", &self.letter)
            .field("count", &self.count)
            .field("is_word", &self.is_word)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
