use std::collections::BTreeSet;

/// A line after the line source adapter ran
///
/// `url` is what the filters look at; `original` is what gets printed when the line survives.
/// Outside JSON mode both are the same trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub original: String,
    pub from_json: bool,
}

impl Candidate {
    pub fn plain(line: &str) -> Self {
        Self { url: line.to_string(), original: line.to_string(), from_json: false }
    }

    /// The line that represents this candidate in the output
    pub fn output_line(&self) -> &str {
        if self.from_json { &self.original } else { &self.url }
    }
}

/// The dedup-relevant parts of a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Hostname as written in the input (case and script preserved), without IPv6
    /// brackets, never empty
    pub host: String,
    /// Percent-decoded path
    pub path: String,
    /// Query parameter names, values and duplicates discarded
    pub query_keys: BTreeSet<String>,
}

/// Content-addressed identity of a URL shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn new(digest: String) -> Self {
        Self(digest)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
