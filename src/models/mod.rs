//! Data models shared by the filtering pipeline.
//!
//! - [`SieveConfig`] - Options resolved once at startup
//! - [`Candidate`] - An input line reduced to the URL the filters inspect
//! - [`ParsedUrl`] - Host, decoded path and query parameter names of a URL
//! - [`Fingerprint`] - Digest identifying a URL's dedup-relevant shape

pub mod config;
pub mod candidate;

pub use config::{DEFAULT_PATH_LIMIT, SieveConfig};
pub use candidate::{Candidate, Fingerprint, ParsedUrl};
