//! LEACH: cluster-based routing with per-round probabilistic cluster heads.
//!
//! Each round:
//!
//! 1. Every live non-base node elects itself head with probability `p`
//!    (one draw per node, list order, no memory of earlier rounds).
//! 2. If nobody was elected, one live non-base node is drawn uniformly as
//!    the sole head.
//! 3. Remaining live non-base nodes join the nearest head; the first head
//!    at the minimum distance wins.
//! 4. Members send one reading to their head, cluster by cluster.
//! 5. Every head still alive uplinks its aggregate to the base station.

use std::collections::BTreeMap;

use tracing::trace;
use wsn_core::{ConfigResult, EnergyLedger, LeachConfig, NodeIndex, RoundConfig, SimRng};

use crate::cost::{self, CostModel, HopOutcome};
use crate::{Algorithm, Network, RoundActivity, RoutingProtocol};

/// Cluster topology of one LEACH round.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterSnapshot {
    /// Head ids in election (node-list) order.
    pub heads: Vec<String>,
    /// Head id → member ids.  Every head has an entry, possibly empty.
    pub clusters: BTreeMap<String, Vec<String>>,
    /// `true` when no node self-elected and the sole head was drawn instead.
    pub fallback: bool,
}

impl ClusterSnapshot {
    pub fn member_count(&self) -> usize {
        self.clusters.values().map(Vec::len).sum()
    }
}

/// The LEACH protocol.  Holds no state between rounds beyond its config.
#[derive(Clone, Debug)]
pub struct Leach {
    config: LeachConfig,
    cost:   CostModel,
}

impl Leach {
    pub fn new(config: LeachConfig) -> Self {
        let cost = CostModel::from_config(&config.rounds);
        Self { config, cost }
    }

    pub fn config(&self) -> &LeachConfig {
        &self.config
    }
}

impl RoutingProtocol for Leach {
    type Snapshot = ClusterSnapshot;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Leach
    }

    fn round_config(&self) -> &RoundConfig {
        &self.config.rounds
    }

    fn validate(&self) -> ConfigResult<()> {
        self.config.validate()
    }

    fn execute_round(
        &mut self,
        round:   u32,
        network: &Network<'_>,
        ledger:  &mut EnergyLedger,
        rng:     &mut SimRng,
    ) -> RoundActivity<ClusterSnapshot> {
        let live: Vec<NodeIndex> = network
            .non_base()
            .filter(|&n| ledger.is_alive(n))
            .collect();

        let (heads, fallback) = elect_heads(&live, self.config.cluster_head_probability, rng);
        let clusters = assign_members(network, &live, &heads);

        trace!(
            round,
            live = live.len(),
            heads = heads.len(),
            fallback,
            "leach clusters formed"
        );

        // ── Member → head ─────────────────────────────────────────────────
        let mut data_bits = 0.0;
        let mut delivered = vec![0usize; heads.len()];
        for (slot, (&head, members)) in heads.iter().zip(&clusters).enumerate() {
            for &member in members {
                let d = network.distance_km(member, head);
                if cost::hop(ledger, &self.cost, member, head, d) == HopOutcome::Delivered {
                    delivered[slot] += 1;
                    data_bits += self.cost.bits;
                }
            }
        }

        // ── Head → base ───────────────────────────────────────────────────
        //
        // A head that died receiving its members is skipped by `uplink`.
        for (slot, &head) in heads.iter().enumerate() {
            let size = cost::cluster_aggregate_bits(self.cost.bits, delivered[slot]);
            data_bits += cost::uplink(
                ledger,
                &self.cost,
                head,
                size,
                network.distance_to_base_km(head),
            );
        }

        let snapshot = ClusterSnapshot {
            heads: heads.iter().map(|&h| network.id(h).to_owned()).collect(),
            clusters: heads
                .iter()
                .zip(&clusters)
                .map(|(&h, members)| {
                    (
                        network.id(h).to_owned(),
                        members.iter().map(|&m| network.id(m).to_owned()).collect(),
                    )
                })
                .collect(),
            fallback,
        };

        RoundActivity { snapshot, data_bits }
    }

    fn dormant_snapshot(&self, _network: &Network<'_>) -> ClusterSnapshot {
        ClusterSnapshot::default()
    }
}

// ── Topology helpers ──────────────────────────────────────────────────────────

/// Elect cluster heads among `live` nodes.
///
/// Returns the heads in `live` order and whether the fallback draw was used.
/// The result is empty only when `live` is empty.
pub fn elect_heads(live: &[NodeIndex], probability: f64, rng: &mut SimRng) -> (Vec<NodeIndex>, bool) {
    let heads: Vec<NodeIndex> = live
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(probability))
        .collect();

    if !heads.is_empty() {
        return (heads, false);
    }
    match rng.choose(live) {
        Some(&head) => (vec![head], true),
        None        => (Vec::new(), false),
    }
}

/// Assign every live non-head node to its nearest head.
///
/// Returns one member list per head, aligned with `heads`.  Heads are
/// scanned in order with a strict `<`, so ties go to the earlier head.
pub fn assign_members(
    network: &Network<'_>,
    live:    &[NodeIndex],
    heads:   &[NodeIndex],
) -> Vec<Vec<NodeIndex>> {
    let mut clusters = vec![Vec::new(); heads.len()];
    if heads.is_empty() {
        return clusters;
    }

    let mut is_head = vec![false; network.len()];
    for &h in heads {
        is_head[h.index()] = true;
    }

    for &node in live.iter().filter(|n| !is_head[n.index()]) {
        let mut best_slot = 0;
        let mut best_dist = f64::INFINITY;
        for (slot, &head) in heads.iter().enumerate() {
            let d = network.distance_km(node, head);
            if d < best_dist {
                best_dist = d;
                best_slot = slot;
            }
        }
        clusters[best_slot].push(node);
    }
    clusters
}
