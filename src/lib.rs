//! URL Sieve - reduce large crawled URL corpora to one representative per URL shape
//!
//! Lines go through a single sequential pipeline:
//!
//! - Optional JSON field extraction, keeping the original line for output
//! - Static asset and has-parameter checks
//! - URL parsing and host scope filtering
//! - Fingerprinting by host, decoded path and sorted query parameter names
//! - Noise heuristics with one emitted URL per noisy host, or a user blacklist regex
//! - At-most-once emission per fingerprint
//!
//! # Example
//!
//! ```
//! use url_sieve::{Sieve, SieveConfig};
//!
//! let mut sieve = Sieve::new(SieveConfig::default())?;
//! let input = "http://a.com/p?a=1\nhttp://a.com/p?a=2\nhttp://a.com/q.png\n";
//! let mut out = Vec::new();
//! sieve.run(input.as_bytes(), &mut out)?;
//! assert_eq!(String::from_utf8(out)?, "http://a.com/p?a=1\n");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod dedup;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use models::{Fingerprint, ParsedUrl, SieveConfig};
pub use pipeline::{DropReason, RunEnd, Sieve, SieveStats, Verdict};
