//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use url_sieve::{Sieve, SieveConfig};

/// Run `lines` through a fresh pipeline and collect what it emits
pub fn sieve_lines(config: SieveConfig, lines: &[&str]) -> Vec<String> {
    let mut sieve = Sieve::new(config).expect("valid config");
    lines
        .iter()
        .filter_map(|line| sieve.process_line(line).emitted_line().map(str::to_string))
        .collect()
}

/// Run `lines` through a pipeline with default options
pub fn sieve_defaults(lines: &[&str]) -> Vec<String> {
    sieve_lines(SieveConfig::default(), lines)
}

/// Builder for JSON input lines carrying a URL field
pub struct JsonLineBuilder {
    field: String,
    url: String,
    status: u16,
}

impl JsonLineBuilder {
    pub fn new(url: &str) -> Self {
        Self { field: "url".to_string(), url: url.to_string(), status: 200 }
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn to_json(&self) -> String {
        let mut object = serde_json::Map::new();
        object.insert(self.field.clone(), self.url.clone().into());
        object.insert("status".to_string(), self.status.into());
        serde_json::Value::Object(object).to_string()
    }
}

/// Temporary directory holding input files for the binary
pub struct InputDir {
    temp_dir: TempDir,
}

impl InputDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `lines` (newline-terminated) to `name` and return its path
    pub fn with_file(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let content: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        fs::write(&path, content).expect("Failed to write input file");
        path
    }
}

impl Default for InputDir {
    fn default() -> Self {
        Self::new()
    }
}
