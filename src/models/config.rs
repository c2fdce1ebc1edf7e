use anyhow::{Result, bail};

/// Default maximum length of a single path segment
pub const DEFAULT_PATH_LIMIT: usize = 100;

/// Options resolved once at startup and read-only for the rest of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveConfig {
    /// Drop URLs that point at static assets (images, fonts, media, stylesheets)
    pub exclude_static: bool,
    /// Apply the noise classifier and keep at most one noisy URL per host
    pub exclude_noise: bool,
    /// Require at least one `key=value` query parameter
    pub has_param: bool,
    /// Maximum allowed length of any single path segment
    pub path_limit: usize,
    /// Exclude URLs matching this regex (empty = disabled)
    pub blacklist_regex: String,
    /// Require the host to contain this substring (empty = disabled)
    pub target_scope: String,
    /// Treat input lines as JSON and read the URL from this field (empty = plain lines)
    pub json_field: String,
}

impl SieveConfig {
    /// Whether input lines are JSON documents rather than bare URLs
    pub fn json_mode(&self) -> bool {
        !self.json_field.is_empty()
    }

    /// Reject option combinations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.path_limit == 0 {
            bail!("path limit must be at least 1");
        }
        Ok(())
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            exclude_static: true,
            exclude_noise: true,
            has_param: false,
            path_limit: DEFAULT_PATH_LIMIT,
            blacklist_regex: String::new(),
            target_scope: String::new(),
            json_field: String::new(),
        }
    }
}
