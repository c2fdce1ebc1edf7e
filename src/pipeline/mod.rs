//! The line-by-line filtering and deduplication pipeline.
//!
//! Each line moves through a fixed chain of decisions with no backtracking:
//!
//! 1. Line source (JSON field extraction when configured)
//! 2. Static asset / has-param check
//! 3. URL parsing
//! 4. Scope filter
//! 5. Fingerprint (with the path shape guard)
//! 6. Already-seen fingerprint check
//! 7. Noise classifier with one-per-host emission, or the blacklist regex
//! 8. Registration and emission
//!
//! A dropped line produces no output and no error.

pub mod stats;

use std::io::{BufRead, ErrorKind, Write};

use anyhow::{Context, Result};

use crate::dedup::{DedupRegistry, fingerprint};
use crate::filters::{
    Blacklist, NoiseKind, classify_noise, has_key_value_param, in_scope, is_static_asset,
};
use crate::models::SieveConfig;
use crate::parsers::{extract_candidate, parse_url};
pub use stats::SieveStats;

/// Why a line produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    Blank,
    InvalidJson,
    StaticAsset,
    MissingParam,
    UnparsableUrl,
    OutOfScope,
    PathShape,
    Duplicate,
    NoisyHostSeen,
    Blacklisted,
}

/// Outcome for a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Print `line`; `noise` is set when it is the first noisy URL of its host
    Emit { line: String, noise: Option<NoiseKind> },
    Dropped(DropReason),
}

impl Verdict {
    pub fn emitted_line(&self) -> Option<&str> {
        match self {
            Verdict::Emit { line, .. } => Some(line.as_str()),
            Verdict::Dropped(_) => None,
        }
    }
}

/// How a call to [`Sieve::run`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    EndOfInput,
    /// The reader of our output went away (e.g. `| head`)
    OutputClosed,
}

/// Pipeline driver owning the configuration, compiled patterns and both registries
#[derive(Debug)]
pub struct Sieve {
    config: SieveConfig,
    blacklist: Blacklist,
    registry: DedupRegistry,
    stats: SieveStats,
}

impl Sieve {
    /// Build a pipeline, compiling the blacklist pattern once
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation. An invalid blacklist regex is
    /// not an error; it is logged and ignored.
    pub fn new(config: SieveConfig) -> Result<Self> {
        config.validate()?;
        let blacklist = Blacklist::compile(&config.blacklist_regex);
        tracing::debug!(?config, blacklist_active = blacklist.is_active(), "pipeline configured");

        Ok(Self { config, blacklist, registry: DedupRegistry::new(), stats: SieveStats::default() })
    }

    pub fn registry(&self) -> &DedupRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &SieveStats {
        &self.stats
    }

    /// Decide the fate of one raw input line, updating the registries
    pub fn process_line(&mut self, line: &str) -> Verdict {
        let verdict = self.evaluate(line.trim());
        if let Verdict::Dropped(reason) = &verdict {
            tracing::trace!(?reason, line = line.trim(), "dropped");
        }
        self.stats.record(&verdict);
        verdict
    }

    /// Stream every line of `reader` through the pipeline, writing emitted lines to `writer`
    ///
    /// Can be called repeatedly to process several inputs as one stream. Lines that are not
    /// valid UTF-8 are decoded lossily rather than aborting the read.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or a write fails for any reason other than a closed
    /// pipe. Output written before the failure stays written.
    pub fn run<R: BufRead, W: Write>(&mut self, mut reader: R, writer: &mut W) -> Result<RunEnd> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).context("Failed to read input line")?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let verdict = self.process_line(&line);
            if let Some(emitted) = verdict.emitted_line() {
                match writeln!(writer, "{}", emitted) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                        tracing::debug!("output closed, stopping");
                        return Ok(RunEnd::OutputClosed);
                    }
                    Err(e) => return Err(e).context("Failed to write output line"),
                }
            }
        }

        match writer.flush() {
            Ok(()) => Ok(RunEnd::EndOfInput),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(RunEnd::OutputClosed),
            Err(e) => Err(e).context("Failed to flush output"),
        }
    }

    fn evaluate(&mut self, line: &str) -> Verdict {
        if line.is_empty() {
            return Verdict::Dropped(DropReason::Blank);
        }

        let json_field = self.config.json_mode().then_some(self.config.json_field.as_str());
        let Some(candidate) = extract_candidate(line, json_field) else {
            return Verdict::Dropped(DropReason::InvalidJson);
        };

        if self.config.exclude_static && is_static_asset(&candidate.url) {
            return Verdict::Dropped(DropReason::StaticAsset);
        }
        // Has-param is part of the static check and only applies while it is enabled
        if self.config.exclude_static
            && self.config.has_param
            && !has_key_value_param(&candidate.url)
        {
            return Verdict::Dropped(DropReason::MissingParam);
        }

        let Some(parsed) = parse_url(&candidate.url) else {
            return Verdict::Dropped(DropReason::UnparsableUrl);
        };
        if !in_scope(&parsed.host, &self.config.target_scope) {
            return Verdict::Dropped(DropReason::OutOfScope);
        }

        let Some(identity) = fingerprint(&parsed, self.config.path_limit) else {
            return Verdict::Dropped(DropReason::PathShape);
        };
        if self.registry.contains(&identity) {
            return Verdict::Dropped(DropReason::Duplicate);
        }

        let output = candidate.output_line();

        if self.config.exclude_noise {
            if let Some(kind) = classify_noise(&candidate.url) {
                // Noisy URLs are capped per host and never claim their fingerprint
                if self.registry.register_noisy_host(&parsed.host, output) {
                    return Verdict::Emit { line: output.to_string(), noise: Some(kind) };
                }
                return Verdict::Dropped(DropReason::NoisyHostSeen);
            }
        }

        if self.blacklist.is_match(&candidate.url) {
            return Verdict::Dropped(DropReason::Blacklisted);
        }

        let newly_registered = self.registry.register(identity, output);
        debug_assert!(newly_registered, "fingerprint was checked absent");
        Verdict::Emit { line: output.to_string(), noise: None }
    }
}
