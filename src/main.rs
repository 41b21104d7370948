use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use env_logger::Builder;
use log::{info, LevelFilter};
use structopt::StructOpt;

use spelltrie::checker::{check_files, ReportFormat};
use spelltrie::config::Config;
use spelltrie::loader::load_into;
use spelltrie::{Result, StorageKind, Wordlist};

/// Check every word of a file against a dictionary and write each word, or
/// its suggested correction, to another file.
#[derive(StructOpt)]
struct Cli {
    /// File with one word per line
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Where the checked words are written
    #[structopt(parse(from_os_str))]
    output: PathBuf,
    /// Properties (or .json) config file
    #[structopt(short, long, parse(from_os_str), default_value = "a1properties.txt")]
    config: PathBuf,
    /// Override the configured storage: tree or trie
    #[structopt(short, long)]
    storage: Option<StorageKind>,
    /// Override the configured dictionary URL
    #[structopt(long)]
    dict_url: Option<String>,
    /// Override the local dictionary file
    #[structopt(long, parse(from_os_str))]
    dict_path: Option<PathBuf>,
    /// Skip brute-force correction for words longer than this
    #[structopt(long)]
    max_len: Option<usize>,
    /// Write one JSON record per word instead of plain words
    #[structopt(long)]
    json: bool,
    /// More output, repeat for more
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Cli {
    fn settings(&self) -> Result<Config> {
        let mut config = Config::from_file(&self.config)?;
        if let Some(storage) = self.storage {
            config.storage = storage;
        }
        if let Some(url) = &self.dict_url {
            config.dict_url = Some(url.clone());
        }
        if let Some(path) = &self.dict_path {
            config.dict_path = path.clone();
        }
        if self.max_len.is_some() {
            config.max_word_len = self.max_len;
        }
        Ok(config)
    }
}

fn run(args: &Cli) -> Result<()> {
    let config = args.settings()?;
    info!("Selecting {}...", config.storage);

    let mut wordlist = Wordlist::with_config(config.storage, config.search_config());
    load_into(&mut wordlist, &config.source(), &config.file_format())?;

    let format = if args.json { ReportFormat::Json } else { ReportFormat::Plain };
    let start = Instant::now();
    let summary = check_files(&wordlist, &args.input, &args.output, format)?;
    println!("{} words checked ({} correct, {} corrected, {} without suggestion) in {:.3}s",
             summary.checked, summary.correct, summary.corrected, summary.unresolved,
             start.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    let args = Cli::from_args();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
