//! Batch driver: reads words line by line, checks each one against a
//! [`Wordlist`] and writes the word or its correction to the output.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::alphabet::normalize;
use crate::error::Result;
use crate::wordlist::store::Suggestion;
use crate::wordlist::wordlist::{Verdict, Wordlist};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One word per line.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub checked: usize,
    pub correct: usize,
    pub corrected: usize,
    pub unresolved: usize,
}

#[derive(Serialize)]
struct Record<'a> {
    word: &'a str,
    correct: bool,
    suggestion: Option<&'a str>,
}

impl<'a> From<&'a Verdict> for Record<'a> {
    fn from(verdict: &'a Verdict) -> Self {
        match verdict {
            Verdict::Correct(word) => Record { word, correct: true, suggestion: None },
            Verdict::Incorrect { word, suggestion } => Record { word, correct: false, suggestion: suggestion.as_deref() },
        }
    }
}

impl Summary {
    fn count(&mut self, verdict: &Verdict) {
        self.checked += 1;
        match verdict {
            Verdict::Correct(_) => self.correct += 1,
            Verdict::Incorrect { suggestion: Suggestion::NotFound, .. } => self.unresolved += 1,
            Verdict::Incorrect { .. } => self.corrected += 1,
        }
    }
}

pub fn check_stream<R, W>(wordlist: &Wordlist, input: R, mut output: W, format: ReportFormat) -> Result<Summary>
    where R: BufRead, W: Write {
    let mut summary = Summary::default();

    for line in input.lines() {
        let word = normalize(&line?);
        if word.is_empty() {
            continue;
        }

        let verdict = wordlist.check(&word);
        match &verdict {
            Verdict::Correct(word) => info!("{:<20} (Correct)", word),
            Verdict::Incorrect { word, suggestion } => info!("{:<20} (Incorrect Suggested: {})", word, suggestion),
        }

        match format {
            ReportFormat::Plain => writeln!(output, "{}", verdict.replacement())?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut output, &Record::from(&verdict))?;
                writeln!(output)?;
            }
        }
        summary.count(&verdict);
    }

    output.flush()?;
    Ok(summary)
}

pub fn check_files(wordlist: &Wordlist, input: &Path, output: &Path, format: ReportFormat) -> Result<Summary> {
    info!("Input file: {:?} Output file: {:?}", input, output);
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let summary = check_stream(wordlist, reader, writer, format)?;
    info!("Completed spellcheck: {:?}", summary);
    Ok(summary)
}
