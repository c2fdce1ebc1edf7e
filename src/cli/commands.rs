use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use crate::models::{DEFAULT_PATH_LIMIT, SieveConfig};
use crate::pipeline::{RunEnd, Sieve};
use crate::utils::init_logging;

#[derive(Debug, Parser)]
#[command(name = "url-sieve")]
#[command(version = "0.1.0")]
#[command(
    about = "Strip near-duplicate URLs (same host, path and parameter names) and noise from a URL stream",
    long_about = None
)]
pub struct Cli {
    /// Input files, read in order; "-" or nothing reads stdin
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Exclude static file extensions (images, media, fonts, css)
    #[arg(short = 's', long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub exclude_static: bool,

    /// Exclude noise patterns like calendars, blog posts and numeric id pages
    #[arg(short = 'n', long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub exclude_noise: bool,

    /// Only keep URLs carrying at least one key=value parameter
    #[arg(short = 'p', long)]
    pub has_param: bool,

    /// Maximum length of a single path segment
    #[arg(short = 'l', long, value_name = "N", default_value_t = DEFAULT_PATH_LIMIT, value_parser = parse_path_limit)]
    pub path_limit: usize,

    /// Exclude URLs matching this regex
    #[arg(short = 'e', long, value_name = "REGEX")]
    pub blacklist_regex: Option<String>,

    /// Only keep URLs whose host contains this string
    #[arg(short = 't', long, value_name = "SCOPE")]
    pub target_scope: Option<String>,

    /// Read input as JSON lines and take the URL from this field
    #[arg(short = 'f', long, value_name = "FIELD")]
    pub json_field: Option<String>,

    /// Print run statistics as JSON to stderr when done
    #[arg(long)]
    pub stats: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_config(&self) -> SieveConfig {
        SieveConfig {
            exclude_static: self.exclude_static,
            exclude_noise: self.exclude_noise,
            has_param: self.has_param,
            path_limit: self.path_limit,
            blacklist_regex: self.blacklist_regex.clone().unwrap_or_default(),
            target_scope: self.target_scope.clone().unwrap_or_default(),
            json_field: self.json_field.clone().unwrap_or_default(),
        }
    }
}

fn parse_path_limit(value: &str) -> Result<usize, String> {
    let limit: usize = value.parse().map_err(|e| format!("invalid number: {}", e))?;
    if limit == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(limit)
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut sieve = Sieve::new(cli.to_config())?;
    let inputs = open_inputs(&cli.inputs)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (name, reader) in inputs {
        tracing::info!("reading {}", name);
        match sieve.run(reader, &mut out) {
            Ok(RunEnd::EndOfInput) => {}
            Ok(RunEnd::OutputClosed) => break,
            Err(e) => {
                tracing::error!("stopped while reading {}: {:#}", name, e);
                return Err(e.context(format!("Failed to process {}", name)));
            }
        }
    }

    let stats = sieve.stats();
    tracing::info!(
        lines = stats.lines_read,
        emitted = stats.emitted,
        dropped = stats.dropped(),
        shapes = sieve.registry().len(),
        noisy_hosts = sieve.registry().noisy_host_count(),
        "finished"
    );
    if cli.stats {
        eprintln!("{}", serde_json::to_string(stats)?);
    }

    Ok(())
}

/// Open every input before processing starts, so a bad path fails the run up front
fn open_inputs(paths: &[PathBuf]) -> Result<Vec<(String, Box<dyn BufRead>)>> {
    if paths.is_empty() {
        return Ok(vec![stdin_input()]);
    }

    paths
        .iter()
        .map(|path| {
            if path == Path::new("-") {
                return Ok(stdin_input());
            }
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            let reader: Box<dyn BufRead> = Box::new(BufReader::new(file));
            Ok((path.display().to_string(), reader))
        })
        .collect()
}

fn stdin_input() -> (String, Box<dyn BufRead>) {
    // Unlocked handle: `-` may be given more than once
    ("<stdin>".to_string(), Box::new(BufReader::new(io::stdin())))
}
