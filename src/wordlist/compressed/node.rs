use std::fmt::{Debug, Formatter};

use derive_new::new;

use crate::alphabet::{ALPHABET, get_idx};

/// A radix-trie node. `prefix` is the edge label owned by this node, so the
/// word a node spells is the concatenation of the labels from the root down.
#[derive(new, Default)]
pub(crate) struct CompressedNode {
    pub(crate) prefix: String,
    pub(crate) is_word: bool,
    #[new(default)]
    pub(crate) children: [Option<Box<CompressedNode>>; ALPHABET.len()],
}

/// Byte length of the longest common prefix of `a` and `b`.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

impl CompressedNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&CompressedNode> {
        self.children[get_idx(c)].as_deref()
    }

    /// Children in slot order, `a` first and `'` last.
    pub(crate) fn children(&self) -> impl Iterator<Item=&CompressedNode> {
        self.children.iter().flatten().map(|x| x.as_ref())
    }

    /// Inserts the unconsumed `suffix` below this node, splitting a child's
    /// label when it only partially matches. Returns whether a word was added.
    pub(crate) fn insert(&mut self, suffix: &str) -> bool {
        let first = match suffix.chars().next() {
            None => {
                let added = !self.is_word;
                self.is_word = true;
                return added;
            }
            Some(c) => c,
        };

        let slot = &mut self.children[get_idx(first)];
        match slot.take() {
            None => {
                *slot = Some(Box::new(CompressedNode::new(suffix.to_string(), true)));
                true
            }
            Some(mut child) => {
                let common = common_prefix_len(&child.prefix, suffix);
                if common == child.prefix.len() {
                    let added = child.insert(&suffix[common..]);
                    *slot = Some(child);
                    added
                } else {
                    // the shared part moves into a new parent, the old child
                    // keeps the rest of its label
                    let mut parent = Box::new(CompressedNode::new(suffix[..common].to_string(), false));
                    child.prefix = child.prefix.split_off(common);
                    let idx = get_idx(child.prefix.chars().next().unwrap_or('\''));
                    parent.children[idx] = Some(child);
                    let added = parent.insert(&suffix[common..]);
                    *slot = Some(parent);
                    added
                }
            }
        }
    }

    /// Follows `rest` down the tree, consuming one whole label per step.
    pub(crate) fn descend(&self, rest: &str) -> Option<&CompressedNode> {
        let first = match rest.chars().next() {
            None => return Some(self),
            Some(c) => c,
        };
        let child = self.get_child(first)?;
        let remainder = rest.strip_prefix(child.prefix.as_str())?;
        child.descend(remainder)
    }

    pub(crate) fn traverse_words<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&str) {
        if self.is_word {
            f(path);
        }
        for child in self.children() {
            path.push_str(&child.prefix);
            child.traverse_words(path, f);
            path.truncate(path.len() - child.prefix.len());
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        1 + self.children().map(|x| x.node_count()).sum::<usize>()
    }
}

impl Debug for CompressedNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompressedNode")
            .field("prefix", &self.prefix)
            .field("is_word", &self.is_word)
            .field("children", &self.children()
                .map(|x| x.prefix.as_str())
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::compressed::node::{common_prefix_len, CompressedNode};

    #[test]
    fn common_prefix() {
        assert_eq!(common_prefix_len("test", "tell"), 2);
        assert_eq!(common_prefix_len("te", "tell"), 2);
        assert_eq!(common_prefix_len("tell", "te"), 2);
        assert_eq!(common_prefix_len("abc", "xyz"), 0);
        assert_eq!(common_prefix_len("", "abc"), 0);
    }

    #[test]
    fn split_keeps_both_branches() {
        let mut root = CompressedNode::default();
        assert!(root.insert("tell"));
        assert!(root.insert("test"));

        let te = root.get_child('t').unwrap();
        assert_eq!(te.prefix, "te");
        assert!(!te.is_word);
        let labels: Vec<&str> = te.children().map(|x| x.prefix.as_str()).collect();
        assert_eq!(labels, vec!["ll", "st"]);
        assert!(te.children().all(|x| x.is_word));
    }

    #[test]
    fn inserting_a_label_boundary_marks_existing_node() {
        let mut root = CompressedNode::default();
        root.insert("tell");
        root.insert("test");
        assert_eq!(root.node_count(), 4);

        assert!(root.insert("te"));
        assert_eq!(root.node_count(), 4);
        assert!(root.get_child('t').unwrap().is_word);
        assert!(!root.insert("te"));
    }

    #[test]
    fn inserting_a_prefix_of_a_label_splits_it() {
        let mut root = CompressedNode::default();
        root.insert("tell");
        assert!(root.insert("tel"));

        let tel = root.get_child('t').unwrap();
        assert_eq!(tel.prefix, "tel");
        assert!(tel.is_word);
        assert_eq!(tel.get_child('l').unwrap().prefix, "l");
    }

    #[test]
    fn descend_requires_whole_labels() {
        let mut root = CompressedNode::default();
        root.insert("testing");
        assert!(root.descend("testing").is_some());
        assert!(root.descend("test").is_none());
        assert!(root.descend("tx").is_none());
    }
}
