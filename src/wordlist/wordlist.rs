use std::fmt::{Display, Formatter};
use std::io::BufRead;
use std::str::FromStr;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Error, Result};
use crate::wordlist::chartrie::CharTrie;
use crate::wordlist::compressed::CompressedTrie;
use crate::wordlist::searchconfig::SearchConfig;
use crate::wordlist::store::{Suggestion, WordStore};

/// Which storage strategy backs a [`Wordlist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// One character per node.
    Tree,
    /// Prefix-compressed.
    #[default]
    Trie,
}

impl FromStr for StorageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(StorageKind::Tree),
            "trie" => Ok(StorageKind::Trie),
            other => Err(Error::config(format!("unknown storage {:?}, expected tree or trie", other))),
        }
    }
}

impl StorageKind {
    /// Lenient parse used for config files: anything unknown becomes `Trie`.
    pub fn from_property(s: &str) -> StorageKind {
        s.parse().unwrap_or_else(|_| {
            warn!("Unknown storage {:?}, defaulting to trie", s);
            StorageKind::Trie
        })
    }
}

impl Display for StorageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::Tree => write!(f, "tree"),
            StorageKind::Trie => write!(f, "trie"),
        }
    }
}

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct(String),
    Incorrect { word: String, suggestion: Suggestion },
}

impl Verdict {
    pub fn word(&self) -> &str {
        match self {
            Verdict::Correct(word) => word,
            Verdict::Incorrect { word, .. } => word,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct(_))
    }

    /// What to write in place of the word: itself, its correction, or itself
    /// again when no correction exists.
    pub fn replacement(&self) -> &str {
        match self {
            Verdict::Correct(word) => word,
            Verdict::Incorrect { word, suggestion } => suggestion.as_deref().unwrap_or(word),
        }
    }
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default = 100_000_000)]
    word_limit: usize,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

/// A word store chosen once at construction time.
pub struct Wordlist {
    kind: StorageKind,
    store: Box<dyn WordStore>,
}

impl Wordlist {
    pub fn new(kind: StorageKind) -> Wordlist {
        Wordlist::with_config(kind, SearchConfig::new())
    }

    pub fn with_config(kind: StorageKind, config: SearchConfig) -> Wordlist {
        let store: Box<dyn WordStore> = match kind {
            StorageKind::Tree => Box::new(CharTrie::with_config(config)),
            StorageKind::Trie => Box::new(CompressedTrie::with_config(config)),
        };
        Wordlist { kind, store }
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    delegate! {
        to self.store {
            pub fn add(&mut self, word: &str);
            pub fn contains(&self, word: &str) -> bool;
            pub fn suggest(&self, word: &str) -> Suggestion;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn add_all<'a, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'a str> {
        items.into_iter().for_each(|x| self.add(x));
    }

    /// Reads a dictionary, one entry per line, until the format's word limit.
    /// Returns how many words were read.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<usize> {
        let start = Instant::now();
        let mut count: usize = 0;
        let mut skipped: usize = 0;

        for line in reader.lines() {
            let line = line?;
            let word = match format.parse_line(&line) {
                Some(column) => normalize(column),
                None => {
                    skipped += 1;
                    continue;
                }
            };
            if word.is_empty() {
                continue;
            }
            self.add(&word);
            count += 1;
            if count % 100000 == 0 {
                debug!("{} {}", count, word);
            }
            if count >= format.word_limit {
                info!("Stopped at the word limit of {}", format.word_limit);
                break;
            }
        }

        info!("Read {} words ({} distinct) into a {} in {:.3}s [{} lines without a word column]",
              count, self.len(), self.kind, start.elapsed().as_secs_f64(), skipped);
        Ok(count)
    }

    pub fn check(&self, word: &str) -> Verdict {
        if self.contains(word) {
            Verdict::Correct(word.to_string())
        } else {
            Verdict::Incorrect { word: word.to_string(), suggestion: self.suggest(word) }
        }
    }

    /// Checks a batch in parallel. Results keep the input order.
    pub fn check_all<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<Verdict> {
        words.par_iter().map(|x| self.check(x.as_ref())).collect()
    }
}
