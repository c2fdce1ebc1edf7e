//! URL shape identity and the registries that enforce at-most-once emission.

pub mod fingerprint;
pub mod registry;

pub use fingerprint::{fingerprint, passes_shape_guard};
pub use registry::DedupRegistry;
