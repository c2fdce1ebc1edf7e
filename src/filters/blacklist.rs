use regex::Regex;

/// User-supplied exclusion pattern, compiled once at startup
///
/// An empty or invalid pattern never matches: a bad regex disables the filter instead of
/// aborting the run.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    pattern: Option<Regex>,
}

impl Blacklist {
    pub fn compile(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self::default();
        }

        match Regex::new(pattern) {
            Ok(regex) => Self { pattern: Some(regex) },
            Err(e) => {
                tracing::warn!("ignoring invalid blacklist regex {:?}: {}", pattern, e);
                Self::default()
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn is_match(&self, raw: &str) -> bool {
        self.pattern.as_ref().is_some_and(|regex| regex.is_match(raw))
    }
}
