//! pcm_hosts — Host-pool generators.
//!
//! Populates a growable sequence of [`Host`] descriptors in one of two
//! modes: a synthetic pool drawn from truncated-normal CPU/GPU/NPU
//! tiers, or a small fixed fixture used in tests and examples. This
//! crate only builds host pools; the planner (`pcm_planner`) never
//! depends on it.

#![forbid(unsafe_code)]

use pcm_core::Host;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tiers mirror the original generator's fixed distributions: CPU hosts
/// cluster an order of magnitude below GPU hosts, which cluster an
/// order of magnitude below NPU hosts.
const CPU_TIER: Tier = Tier {
    mean: 1e10,
    sd: 1e9,
    count: 100,
};
const GPU_TIER: Tier = Tier {
    mean: 1e11,
    sd: 1e10,
    count: 50,
};
const NPU_TIER: Tier = Tier {
    mean: 1e12,
    sd: 1e11,
    count: 20,
};

/// Storage capacities assigned to every synthetically generated host.
const SYNTHETIC_STORAGE: f64 = 10.0;

/// Samples beyond this many standard deviations from a tier's mean are
/// rejected and redrawn (truncated normal).
const TRUNCATION_SIGMA: f64 = 4.0;

struct Tier {
    mean: f64,
    sd: f64,
    count: u32,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostGenError {
    /// Synthetic mode was requested with cpu, gpu, and npu all disabled.
    #[error("synthetic host generation requested with no tiers enabled")]
    NoTiersEnabled,
}

/// Which tiers to draw from and with what seed, for synthetic generation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyntheticSpec {
    pub cpu: bool,
    pub gpu: bool,
    pub npu: bool,
    /// RNG seed; omit for an OS-entropy-seeded (non-reproducible) run.
    pub seed: Option<u64>,
}

impl Default for SyntheticSpec {
    fn default() -> Self {
        SyntheticSpec {
            cpu: true,
            gpu: true,
            npu: true,
            seed: None,
        }
    }
}

/// Which host-pool mode to populate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum HostSource {
    Synthetic(SyntheticSpec),
    Fixture,
}

/// Populate a host pool per `source`.
pub fn make_hosts(source: &HostSource) -> Result<Vec<Host>, HostGenError> {
    match source {
        HostSource::Synthetic(spec) => make_hosts_synthetic(spec),
        HostSource::Fixture => Ok(make_hosts_fixture()),
    }
}

/// Synthetic pool: a union of up to three independently-enabled tiers.
/// Identities are assigned monotonically from 1, in tier order
/// cpu, gpu, npu, across whichever tiers are enabled.
pub fn make_hosts_synthetic(spec: &SyntheticSpec) -> Result<Vec<Host>, HostGenError> {
    if !spec.cpu && !spec.gpu && !spec.npu {
        return Err(HostGenError::NoTiersEnabled);
    }
    let mut rng = match spec.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut hosts = Vec::new();
    let mut next_id: u64 = 1;
    for (enabled, tier) in [
        (spec.cpu, &CPU_TIER),
        (spec.gpu, &GPU_TIER),
        (spec.npu, &NPU_TIER),
    ] {
        if !enabled {
            continue;
        }
        for _ in 0..tier.count {
            let throughput = tier.mean + sample_truncated_standard_normal(&mut rng) * tier.sd;
            hosts.push(Host::new(
                throughput,
                SYNTHETIC_STORAGE,
                SYNTHETIC_STORAGE,
                next_id,
            ));
            next_id += 1;
        }
    }
    tracing::debug!(generated = hosts.len(), "synthetic host pool built");
    Ok(hosts)
}

/// Draw a standard-normal sample, rejecting and redrawing any sample
/// whose magnitude exceeds [`TRUNCATION_SIGMA`].
fn sample_truncated_standard_normal(rng: &mut impl Rng) -> f64 {
    loop {
        let x: f64 = StandardNormal.sample(rng);
        if x.abs() < TRUNCATION_SIGMA {
            return x;
        }
    }
}

/// Fixed 23-host pool used by tests and examples: `{1.0, 0.9, 0.6} ∪ 0.2 × 20`,
/// all with storage (10, 10), identities 1..23.
pub fn make_hosts_fixture() -> Vec<Host> {
    let mut hosts = Vec::with_capacity(23);
    let mut next_id: u64 = 1;
    for throughput in [1.0, 0.9, 0.6] {
        hosts.push(Host::new(
            throughput,
            SYNTHETIC_STORAGE,
            SYNTHETIC_STORAGE,
            next_id,
        ));
        next_id += 1;
    }
    for _ in 0..20 {
        hosts.push(Host::new(
            0.2,
            SYNTHETIC_STORAGE,
            SYNTHETIC_STORAGE,
            next_id,
        ));
        next_id += 1;
    }
    hosts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_23_hosts_with_expected_throughputs_and_storage() {
        let hosts = make_hosts_fixture();
        assert_eq!(hosts.len(), 23);
        assert_eq!(hosts[0].throughput, 1.0);
        assert_eq!(hosts[1].throughput, 0.9);
        assert_eq!(hosts[2].throughput, 0.6);
        for h in &hosts[3..] {
            assert_eq!(h.throughput, 0.2);
        }
        for h in &hosts {
            assert_eq!(h.outer_storage, 10.0);
            assert_eq!(h.inner_storage, 10.0);
        }
        let ids: Vec<u64> = hosts.iter().map(|h| h.id).collect();
        assert_eq!(ids, (1..=23).collect::<Vec<_>>());
    }

    #[test]
    fn synthetic_rejects_no_tiers_enabled() {
        let spec = SyntheticSpec {
            cpu: false,
            gpu: false,
            npu: false,
            seed: Some(1),
        };
        assert_eq!(make_hosts_synthetic(&spec), Err(HostGenError::NoTiersEnabled));
    }

    #[test]
    fn synthetic_is_deterministic_given_a_seed() {
        let spec = SyntheticSpec {
            cpu: true,
            gpu: true,
            npu: true,
            seed: Some(42),
        };
        let a = make_hosts_synthetic(&spec).unwrap();
        let b = make_hosts_synthetic(&spec).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn synthetic_assigns_monotonic_ids_across_enabled_tiers_only() {
        let spec = SyntheticSpec {
            cpu: false,
            gpu: true,
            npu: true,
            seed: Some(7),
        };
        let hosts = make_hosts_synthetic(&spec).unwrap();
        assert_eq!(hosts.len(), 50 + 20);
        let ids: Vec<u64> = hosts.iter().map(|h| h.id).collect();
        assert_eq!(ids, (1..=70).collect::<Vec<_>>());
    }

    #[test]
    fn synthetic_samples_stay_within_truncation_bound() {
        let spec = SyntheticSpec {
            cpu: true,
            gpu: true,
            npu: true,
            seed: Some(1234),
        };
        let hosts = make_hosts_synthetic(&spec).unwrap();
        for h in &hosts {
            // Loosely bucket by magnitude to find the tier and bound check it.
            let (mean, sd) = if h.throughput < 5e10 {
                (CPU_TIER.mean, CPU_TIER.sd)
            } else if h.throughput < 5e11 {
                (GPU_TIER.mean, GPU_TIER.sd)
            } else {
                (NPU_TIER.mean, NPU_TIER.sd)
            };
            let z = (h.throughput - mean) / sd;
            assert!(z.abs() < TRUNCATION_SIGMA, "z={z} out of bound for {h:?}");
        }
    }
}
