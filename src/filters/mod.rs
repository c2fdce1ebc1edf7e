//! Inclusion and exclusion rules applied to each candidate URL.
//!
//! Pattern-based rules are compiled once (either as statics or, for the user-supplied
//! blacklist, at startup) and evaluated against the candidate string as read.

pub mod blacklist;
pub mod noise;
pub mod scope;
pub mod static_assets;

pub use blacklist::Blacklist;
pub use noise::{NoiseKind, classify_noise};
pub use scope::in_scope;
pub use static_assets::{has_key_value_param, is_static_asset};
