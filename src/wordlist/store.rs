use std::fmt::{Display, Formatter};

use log::trace;
use metrics::increment_counter;
use serde::{Deserialize, Serialize};

/// Result of asking a store for the closest registered word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    Found(String),
    NotFound,
}

impl Suggestion {
    pub fn is_found(&self) -> bool {
        matches!(self, Suggestion::Found(_))
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Suggestion::Found(word) => Some(word),
            Suggestion::NotFound => None,
        }
    }
}

impl From<Suggestion> for Option<String> {
    fn from(s: Suggestion) -> Self {
        match s {
            Suggestion::Found(word) => Some(word),
            Suggestion::NotFound => None,
        }
    }
}

impl Display for Suggestion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::Found(word) => write!(f, "{}", word),
            Suggestion::NotFound => write!(f, "(no suggestion)"),
        }
    }
}

/// Which step of the three-phase lookup produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Ancestor,
    Child,
    Mutation,
}

impl Phase {
    pub(crate) fn record(self, word: &str, suggestion: &Suggestion) {
        match (self, suggestion) {
            (_, Suggestion::NotFound) => increment_counter!("spelltrie.suggest.none"),
            (Phase::Ancestor, _) => increment_counter!("spelltrie.suggest.ancestor"),
            (Phase::Child, _) => increment_counter!("spelltrie.suggest.child"),
            (Phase::Mutation, _) => increment_counter!("spelltrie.suggest.mutation"),
        }
        trace!("suggest {:?} -> {} ({:?})", word, suggestion, self);
    }
}

/// The add/contains/suggest contract shared by every storage strategy.
///
/// Words are expected to be normalized already: non-empty, made of `a`..`z`
/// and `'` only. Anything else is undefined input and is not checked here.
///
/// Stores are filled with `add` first and queried afterwards; mutation needs
/// `&mut self`, so a populated store can be shared read-only across threads.
pub trait WordStore: Send + Sync {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn suggest(&self, word: &str) -> Suggestion;

    /// Number of distinct registered words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'a str>, Self: Sized {
        items.into_iter().for_each(|x| self.add(x));
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::store::Suggestion;

    #[test]
    fn suggestion_accessors() {
        let found = Suggestion::Found("cat".to_string());
        assert!(found.is_found());
        assert_eq!(found.as_deref(), Some("cat"));
        assert_eq!(found.to_string(), "cat");

        assert!(!Suggestion::NotFound.is_found());
        assert_eq!(Option::<String>::from(Suggestion::NotFound), None);
        assert_eq!(Suggestion::NotFound.to_string(), "(no suggestion)");
    }

    #[test]
    fn suggestion_serializes_as_tagged_value() {
        let json = serde_json::to_string(&Suggestion::Found("cat".to_string())).unwrap();
        assert_eq!(json, r#"{"found":"cat"}"#);
        assert_eq!(serde_json::to_string(&Suggestion::NotFound).unwrap(), r#""not_found""#);
    }
}
