use serde::Serialize;

use super::{DropReason, Verdict};

/// Counters describing one run, reported with `--stats`
///
/// Purely observational: nothing in the pipeline reads them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SieveStats {
    pub lines_read: u64,
    pub blank: u64,
    pub emitted: u64,
    /// Emitted lines that were the first noisy URL of their host
    pub emitted_noisy: u64,
    pub invalid_json: u64,
    pub static_asset: u64,
    pub missing_param: u64,
    pub unparsable_url: u64,
    pub out_of_scope: u64,
    pub path_shape: u64,
    pub duplicate: u64,
    pub noisy_host_seen: u64,
    pub blacklisted: u64,
}

impl SieveStats {
    pub fn record(&mut self, verdict: &Verdict) {
        self.lines_read += 1;

        match verdict {
            Verdict::Emit { noise, .. } => {
                self.emitted += 1;
                if noise.is_some() {
                    self.emitted_noisy += 1;
                }
            }
            Verdict::Dropped(reason) => *self.counter_mut(*reason) += 1,
        }
    }

    /// Lines that produced no output, blank lines excluded
    pub fn dropped(&self) -> u64 {
        self.lines_read - self.emitted - self.blank
    }

    fn counter_mut(&mut self, reason: DropReason) -> &mut u64 {
        match reason {
            DropReason::Blank => &mut self.blank,
            DropReason::InvalidJson => &mut self.invalid_json,
            DropReason::StaticAsset => &mut self.static_asset,
            DropReason::MissingParam => &mut self.missing_param,
            DropReason::UnparsableUrl => &mut self.unparsable_url,
            DropReason::OutOfScope => &mut self.out_of_scope,
            DropReason::PathShape => &mut self.path_shape,
            DropReason::Duplicate => &mut self.duplicate,
            DropReason::NoisyHostSeen => &mut self.noisy_host_seen,
            DropReason::Blacklisted => &mut self.blacklisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::NoiseKind;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut stats = SieveStats::default();
        stats.record(&Verdict::Emit { line: "a".to_string(), noise: None });
        stats.record(&Verdict::Emit {
            line: "b".to_string(),
            noise: Some(NoiseKind::ContentSection),
        });
        stats.record(&Verdict::Dropped(DropReason::Duplicate));
        stats.record(&Verdict::Dropped(DropReason::Blank));

        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.emitted, 2);
        assert_eq!(stats.emitted_noisy, 1);
        assert_eq!(stats.duplicate, 1);
        assert_eq!(stats.blank, 1);
        assert_eq!(stats.dropped(), 1);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let stats = SieveStats { lines_read: 3, emitted: 1, static_asset: 2, ..Default::default() };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["lines_read"], 3);
        assert_eq!(json["emitted"], 1);
        assert_eq!(json["static_asset"], 2);
        assert_eq!(json["blacklisted"], 0);
    }
}
