//! Dictionary lookup and spelling correction over two interchangeable trie
//! layouts: one character per node ([`CharTrie`]) or prefix-compressed
//! ([`CompressedTrie`]). Both answer through the [`WordStore`] contract.

pub mod alphabet;
pub mod checker;
pub mod config;
pub mod error;
pub mod loader;
pub mod wordlist;

pub use crate::error::{Error, Result};
pub use crate::wordlist::chartrie::CharTrie;
pub use crate::wordlist::compressed::CompressedTrie;
pub use crate::wordlist::store::{Suggestion, WordStore};
pub use crate::wordlist::wordlist::{StorageKind, Wordlist};
