use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use derive_new::new;
use log::{info, warn};

use crate::error::{Error, Result};
use crate::wordlist::wordlist::{FileFormat, Wordlist};

/// Where the vocabulary comes from: an optional remote copy, with a local file
/// to fall back on.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    url: Option<String>,
    path: PathBuf,
}

impl DictionarySource {
    /// Tries the URL first, then the local file. Only failing both is an error.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match &self.url {
            Some(url) => match fetch(url) {
                Ok(reader) => {
                    info!("Reading dictionary from {}", url);
                    return Ok(reader);
                }
                Err(e) => warn!("{}; defaulting to local {:?}", e, self.path),
            },
            None => info!("No dictionary URL configured, defaulting to local {:?}", self.path),
        }
        self.open_local()
    }

    fn open_local(&self) -> Result<Box<dyn BufRead>> {
        let file = File::open(&self.path)
            .map_err(|source| Error::DictionaryUnavailable { path: self.path.clone(), source })?;
        info!("Reading dictionary from {:?}", self.path);
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(feature = "remote")]
fn fetch(url: &str) -> Result<Box<dyn BufRead>> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| Error::fetch(url, format!("invalid URL ({})", e)))?;
    let response = reqwest::blocking::get(parsed)
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::fetch(url, e))?;
    Ok(Box::new(BufReader::new(response)))
}

#[cfg(not(feature = "remote"))]
fn fetch(url: &str) -> Result<Box<dyn BufRead>> {
    Err(Error::fetch(url, "built without the `remote` feature"))
}

/// Fills `wordlist` from `source`, returning the number of words read.
pub fn load_into(wordlist: &mut Wordlist, source: &DictionarySource, format: &FileFormat) -> Result<usize> {
    info!("Adding dictionary...");
    let reader = source.open()?;
    wordlist.load(reader, format)
}
