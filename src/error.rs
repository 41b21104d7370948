//! Errors raised around the word stores: configuration, dictionary sourcing
//! and the batch checker. The stores themselves never fail; a missing
//! correction is a [`Suggestion::NotFound`](crate::wordlist::store::Suggestion),
//! not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("no dictionary available: remote source failed or unset and {path:?} could not be opened ({source})")]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn fetch<U: Into<String>, R: ToString>(url: U, reason: R) -> Self {
        Error::Fetch { url: url.into(), reason: reason.to_string() }
    }
}
