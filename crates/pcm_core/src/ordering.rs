//! crates/pcm_core/src/ordering.rs
//! The one host ordering the planner ever uses: throughput descending,
//! `id` ascending as a tie-break. Deterministic, total (hosts never tie
//! on both keys since `id` is unique).

use core::cmp::Ordering;

use crate::host::Host;

/// Compare two hosts per the planning order: faster first, then lower id.
pub fn compare_hosts(a: &Host, b: &Host) -> Ordering {
    b.throughput
        .partial_cmp(&a.throughput)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort a host slice in place per the planning order.
pub fn sort_hosts(hosts: &mut [Host]) {
    hosts.sort_by(compare_hosts);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(throughput: f64, id: u64) -> Host {
        Host::new(throughput, 10.0, 10.0, id)
    }

    #[test]
    fn sorts_descending_by_throughput() {
        let mut hosts = vec![h(0.2, 1), h(1.0, 2), h(0.6, 3)];
        sort_hosts(&mut hosts);
        let throughputs: Vec<f64> = hosts.iter().map(|x| x.throughput).collect();
        assert_eq!(throughputs, vec![1.0, 0.6, 0.2]);
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let mut hosts = vec![h(0.5, 3), h(0.5, 1), h(0.5, 2)];
        sort_hosts(&mut hosts);
        let ids: Vec<u64> = hosts.iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn idempotent() {
        let mut hosts = vec![h(0.2, 5), h(1.0, 1), h(1.0, 0), h(0.6, 3)];
        sort_hosts(&mut hosts);
        let once = hosts.clone();
        sort_hosts(&mut hosts);
        assert_eq!(hosts, once);
    }
}
