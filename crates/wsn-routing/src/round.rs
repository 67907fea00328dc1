//! Round log and run result types.

use std::collections::BTreeMap;

use crate::{Algorithm, Metrics};

/// What happened in one round.  One entry per round, 1-based and
/// contiguous.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult<T> {
    pub round_number: u32,

    /// Protocol topology: clusters for LEACH, chain + leader for PEGASIS.
    pub topology: T,

    /// Node id → joules actually removed from that node this round.  Nodes
    /// that spent nothing are absent.
    pub energy_used: BTreeMap<String, f64>,

    /// Alive nodes after the round, base station included.
    pub nodes_alive: usize,

    /// Bits moved this round, aggregation included.
    pub data_transmitted_bits: f64,

    /// `true` for rounds appended after the network died.  These carry no
    /// topology, no energy use and no data.
    pub dormant: bool,
}

impl<T> RoundResult<T> {
    /// Sum of `energy_used`.
    pub fn total_energy_used(&self) -> f64 {
        self.energy_used.values().sum()
    }
}

/// Everything one run produces.  Immutable once returned; refers to the
/// caller's nodes by id only.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult<T> {
    pub algorithm: Algorithm,

    /// Node count including the base station.
    pub total_nodes: usize,

    /// Exactly `round_count` entries.
    pub rounds: Vec<RoundResult<T>>,

    pub metrics: Metrics,

    /// Node id → remaining joules after the last round.
    pub final_energy: BTreeMap<String, f64>,
}

impl<T> SimulationResult<T> {
    /// Round `n` (1-based).
    pub fn round(&self, n: u32) -> Option<&RoundResult<T>> {
        n.checked_sub(1).and_then(|i| self.rounds.get(i as usize))
    }

    /// `true` if at least one node ran out of energy.
    pub fn network_died(&self) -> bool {
        self.rounds.iter().any(|r| r.nodes_alive < self.total_nodes)
    }
}
