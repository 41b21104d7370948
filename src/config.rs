pub mod parse;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loader::DictionarySource;
use crate::wordlist::searchconfig::SearchConfig;
use crate::wordlist::wordlist::{FileFormat, StorageKind};

/// Runtime settings, read from a properties file (or JSON when the file ends
/// in `.json`) and optionally overridden from the command line.
///
/// ```text
/// storage=tree
/// dict.url=https://example.com/english.0
/// dict.path=english.0
/// dict.limit=100000
/// suggest.max_len=12
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageKind,
    pub dict_url: Option<String>,
    pub dict_path: PathBuf,
    pub word_limit: usize,
    pub max_word_len: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: StorageKind::Trie,
            dict_url: None,
            dict_path: PathBuf::from(Config::DEFAULT_DICTIONARY),
            word_limit: 100_000_000,
            max_word_len: None,
        }
    }
}

impl Config {
    pub const DEFAULT_FILE: &'static str = "a1properties.txt";
    pub const DEFAULT_DICTIONARY: &'static str = "english.0";

    /// A missing file is not an error: the defaults are used instead.
    pub fn from_file(path: &Path) -> Result<Config> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Config file {:?} not found, defaulting to local {:?} and trie", path, Config::DEFAULT_DICTIONARY);
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = if path.extension().map(|x| x == "json").unwrap_or(false) {
            serde_json::from_str(&text)?
        } else {
            Config::from_properties(&text)?
        };
        info!("Loaded config from {:?}: storage={}", path, config.storage);
        Ok(config)
    }

    pub fn from_properties(text: &str) -> Result<Config> {
        let mut config = Config::default();
        for (key, value) in parse::properties(text)? {
            match key {
                "storage" => config.storage = StorageKind::from_property(value),
                "dict.url" => config.dict_url = Some(value.to_string()).filter(|x| !x.is_empty()),
                "dict.path" => config.dict_path = PathBuf::from(value),
                "dict.limit" => config.word_limit = parse_number(key, value)?,
                "suggest.max_len" => config.max_word_len = Some(parse_number(key, value)?),
                other => debug!("Ignoring unknown config key {:?}", other),
            }
        }
        Ok(config)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig { max_word_len: self.max_word_len }
    }

    pub fn file_format(&self) -> FileFormat {
        FileFormat::builder().word_limit(self.word_limit).build()
    }

    pub fn source(&self) -> DictionarySource {
        DictionarySource::new(self.dict_url.clone(), self.dict_path.clone())
    }
}

fn parse_number(key: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|e| Error::config(format!("{}: {:?} is not a number ({})", key, value, e)))
}
