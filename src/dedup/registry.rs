use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::models::Fingerprint;

/// Process-lifetime memory of what has already been emitted
///
/// Two independent keys: fingerprints of regular URLs, and hosts that already had their one
/// noisy URL printed. A noisy URL never registers its fingerprint. Entries are immutable once
/// set and are never pruned.
#[derive(Debug, Default)]
pub struct DedupRegistry {
    by_fingerprint: HashMap<Fingerprint, String>,
    noisy_hosts: HashMap<String, String>,
}

impl DedupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.by_fingerprint.contains_key(fingerprint)
    }

    /// Record `line` as the representative of `fingerprint`
    ///
    /// Returns `false`, leaving the existing representative untouched, if the fingerprint
    /// was already known.
    pub fn register(&mut self, fingerprint: Fingerprint, line: &str) -> bool {
        match self.by_fingerprint.entry(fingerprint) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(line.to_string());
                true
            }
        }
    }

    /// Record `line` as the single noisy URL of `host`
    ///
    /// Returns `false` if the host already has one.
    pub fn register_noisy_host(&mut self, host: &str, line: &str) -> bool {
        if self.noisy_hosts.contains_key(host) {
            return false;
        }
        self.noisy_hosts.insert(host.to_string(), line.to_string());
        true
    }

    /// Number of distinct fingerprints emitted
    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty() && self.noisy_hosts.is_empty()
    }

    /// Number of hosts that had a noisy URL emitted
    pub fn noisy_host_count(&self) -> usize {
        self.noisy_hosts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(value: &str) -> Fingerprint {
        Fingerprint::new(value.to_string())
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = DedupRegistry::new();
        assert!(registry.register(fp("abc"), "first"));
        assert!(!registry.register(fp("abc"), "second"));
        assert!(registry.contains(&fp("abc")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_noisy_host_first_wins() {
        let mut registry = DedupRegistry::new();
        assert!(registry.register_noisy_host("a.com", "http://a.com/blog/one"));
        assert!(!registry.register_noisy_host("a.com", "http://a.com/blog/two"));
        assert!(registry.register_noisy_host("b.com", "http://b.com/blog/one"));
        assert_eq!(registry.noisy_host_count(), 2);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut registry = DedupRegistry::new();
        assert!(registry.is_empty());
        registry.register_noisy_host("a.com", "http://a.com/blog/one");
        assert!(!registry.contains(&fp("abc")));
        assert_eq!(registry.len(), 0);
        assert!(!registry.is_empty());
    }
}
