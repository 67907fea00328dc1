//! PEGASIS: chain-based routing with a single rotating leader.
//!
//! The chain is built once per run with a greedy nearest-neighbour walk
//! over the sensor nodes and never rebuilt, even as nodes die.  Each round
//! a leader is picked, readings hop inward from both chain ends toward the
//! leader, and the leader uplinks one fused message to the base station.

use std::sync::Arc;

use tracing::{debug, trace};
use wsn_core::{
    ConfigResult, EnergyLedger, LeaderSelection, NodeIndex, PegasisConfig, RoundConfig, SimRng,
};

use crate::cost::{self, CHAIN_AGGREGATION_FACTOR, CostModel, HopOutcome};
use crate::{Algorithm, Network, RoundActivity, RoutingProtocol};

/// Chain topology of one PEGASIS round.
///
/// `chain` is shared by every snapshot of a run: it is built once, and all
/// rounds hold the same `Arc`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainSnapshot {
    pub chain:  Arc<[String]>,
    /// `None` for dormant rounds and for an empty chain.
    pub leader: Option<String>,
}

/// The PEGASIS protocol.
#[derive(Clone, Debug)]
pub struct Pegasis {
    config: PegasisConfig,
    cost:   CostModel,
    chain:  Vec<NodeIndex>,
    ids:    Arc<[String]>,
}

impl Pegasis {
    pub fn new(config: PegasisConfig) -> Self {
        let cost = CostModel::from_config(&config.rounds);
        Self {
            config,
            cost,
            chain: Vec::new(),
            ids:   Arc::from(Vec::<String>::new()),
        }
    }

    pub fn config(&self) -> &PegasisConfig {
        &self.config
    }

    /// The chain built by the last [`prepare`][RoutingProtocol::prepare].
    pub fn chain(&self) -> &[NodeIndex] {
        &self.chain
    }

    /// Chain position of this round's leader, or `None` for an empty chain.
    fn select_leader(&self, round: u32, ledger: &EnergyLedger) -> Option<usize> {
        if self.chain.is_empty() {
            return None;
        }
        match self.config.leader_selection {
            LeaderSelection::RoundRobin => {
                Some(round.saturating_sub(1) as usize % self.chain.len())
            }
            LeaderSelection::HighestEnergy => {
                let mut best = 0;
                for (pos, &node) in self.chain.iter().enumerate().skip(1) {
                    if ledger.remaining(node) > ledger.remaining(self.chain[best]) {
                        best = pos;
                    }
                }
                Some(best)
            }
        }
    }
}

impl RoutingProtocol for Pegasis {
    type Snapshot = ChainSnapshot;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Pegasis
    }

    fn round_config(&self) -> &RoundConfig {
        &self.config.rounds
    }

    fn validate(&self) -> ConfigResult<()> {
        self.config.validate()
    }

    fn prepare(&mut self, network: &Network<'_>, rng: &mut SimRng) {
        self.chain = build_chain(network, rng);
        self.ids = self.chain.iter().map(|&n| network.id(n).to_owned()).collect();
        debug!(length = self.chain.len(), "pegasis chain built");
    }

    fn execute_round(
        &mut self,
        round:   u32,
        network: &Network<'_>,
        ledger:  &mut EnergyLedger,
        _rng:    &mut SimRng,
    ) -> RoundActivity<ChainSnapshot> {
        let Some(leader_pos) = self.select_leader(round, ledger) else {
            return RoundActivity {
                snapshot:  ChainSnapshot { chain: Arc::clone(&self.ids), leader: None },
                data_bits: 0.0,
            };
        };
        let leader = self.chain[leader_pos];
        trace!(round, leader = network.id(leader), "pegasis leader selected");

        // ── Relay phase: both ends toward the leader ──────────────────────
        let mut data_bits = 0.0;
        let inward = (0..leader_pos)
            .map(|i| (i, i + 1))
            .chain((leader_pos + 1..self.chain.len()).rev().map(|i| (i, i - 1)));
        for (from, to) in inward {
            let sender = self.chain[from];
            let receiver = self.chain[to];
            let d = network.distance_km(sender, receiver);
            if cost::hop(ledger, &self.cost, sender, receiver, d) == HopOutcome::Delivered {
                data_bits += self.cost.bits;
            }
        }

        // ── Leader → base ─────────────────────────────────────────────────
        data_bits += cost::uplink(
            ledger,
            &self.cost,
            leader,
            self.cost.bits * CHAIN_AGGREGATION_FACTOR,
            network.distance_to_base_km(leader),
        );

        RoundActivity {
            snapshot: ChainSnapshot {
                chain:  Arc::clone(&self.ids),
                leader: Some(network.id(leader).to_owned()),
            },
            data_bits,
        }
    }

    fn dormant_snapshot(&self, _network: &Network<'_>) -> ChainSnapshot {
        ChainSnapshot { chain: Arc::clone(&self.ids), leader: None }
    }
}

/// Greedy nearest-neighbour chain over every sensor node.
///
/// Starts from a sensor drawn uniformly with `rng`, then repeatedly appends
/// the unchained sensor nearest to the current tail (first in list order on
/// ties).  Relays and the base station are never chained.
pub fn build_chain(network: &Network<'_>, rng: &mut SimRng) -> Vec<NodeIndex> {
    let mut pending: Vec<NodeIndex> = network.sensors().collect();
    let Some(&start) = rng.choose(&pending) else {
        return Vec::new();
    };

    let mut chain = Vec::with_capacity(pending.len());
    pending.retain(|&n| n != start);
    chain.push(start);

    while !pending.is_empty() {
        let tail = chain[chain.len() - 1];
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (pos, &candidate) in pending.iter().enumerate() {
            let d = network.distance_km(tail, candidate);
            if d < best_dist {
                best_dist = d;
                best = pos;
            }
        }
        chain.push(pending.remove(best));
    }
    chain
}
