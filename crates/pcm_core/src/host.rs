//! crates/pcm_core/src/host.rs
//! Immutable compute-host descriptor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single compute resource: a throughput rating and two independent
/// storage capacities. `id` is unique within a planning run and is used
/// only for stable tie-breaking and diagnostics, never for arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Host {
    pub throughput: f64,
    pub outer_storage: f64,
    pub inner_storage: f64,
    pub id: u64,
}

impl Host {
    pub fn new(throughput: f64, outer_storage: f64, inner_storage: f64, id: u64) -> Self {
        Host {
            throughput,
            outer_storage,
            inner_storage,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_with_given_fields() {
        let h = Host::new(1.5, 10.0, 5.0, 7);
        assert_eq!(h.throughput, 1.5);
        assert_eq!(h.outer_storage, 10.0);
        assert_eq!(h.inner_storage, 5.0);
        assert_eq!(h.id, 7);
    }
}
