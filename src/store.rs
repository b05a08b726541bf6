use anyhow::bail;

use crate::generate::{self, XorShift64};
use crate::models::{AdmissionLead, DigitalRequest, ItAsset};

/// Seed sizes and RNG seed for a session. Counts are signed so a bad
/// flag value fails at validation instead of wrapping.
#[derive(Debug, Clone, Copy)]
pub struct StoreConfig {
    pub requests: i64,
    pub leads: i64,
    pub assets: i64,
    pub seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            requests: 60,
            leads: 80,
            assets: 50,
            seed: None,
        }
    }
}

/// Session-wide record collections, seeded once and never mutated.
/// Consumers share one instance behind `Arc` and must not clone the
/// collections out for editing.
#[derive(Debug)]
pub struct RecordStore {
    pub digital_requests: Vec<DigitalRequest>,
    pub admission_leads: Vec<AdmissionLead>,
    pub it_assets: Vec<ItAsset>,
}

impl RecordStore {
    pub fn seed(config: &StoreConfig) -> anyhow::Result<RecordStore> {
        for (label, count) in [
            ("requests", config.requests),
            ("leads", config.leads),
            ("assets", config.assets),
        ] {
            if count < 0 {
                bail!("record count for {label} must be non-negative, got {count}");
            }
        }

        let mut rng = match config.seed {
            Some(seed) => XorShift64::new(seed),
            None => XorShift64::from_clock(),
        };

        Ok(RecordStore {
            digital_requests: generate::generate_requests(&mut rng, config.requests as usize),
            admission_leads: generate::generate_leads(&mut rng, config.leads as usize),
            it_assets: generate::generate_assets(&mut rng, config.assets as usize),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_default_sizes() {
        let store = RecordStore::seed(&StoreConfig::default()).unwrap();
        assert_eq!(store.digital_requests.len(), 60);
        assert_eq!(store.admission_leads.len(), 80);
        assert_eq!(store.it_assets.len(), 50);
    }

    #[test]
    fn rejects_negative_count() {
        let config = StoreConfig {
            leads: -1,
            ..StoreConfig::default()
        };
        let err = RecordStore::seed(&config).unwrap_err();
        assert!(err.to_string().contains("leads"));
    }

    #[test]
    fn zero_counts_are_valid() {
        let config = StoreConfig {
            requests: 0,
            leads: 0,
            assets: 0,
            seed: Some(1),
        };
        let store = RecordStore::seed(&config).unwrap();
        assert!(store.digital_requests.is_empty());
        assert!(store.admission_leads.is_empty());
        assert!(store.it_assets.is_empty());
    }
}
