//! Parsers turning raw input lines into structured candidates.
//!
//! # Error Handling Strategy
//!
//! Every input line is untrusted and most corpora contain garbage. Nothing in this module
//! returns an error: a line that is not valid JSON (in JSON mode), not a URL, or a URL without
//! a host yields `None`, and the pipeline drops it as routine filtering.

pub mod line;
pub mod url;

pub use line::extract_candidate;
pub use self::url::parse_url;
