//! Plain data row types written by output backends.

use wsn_routing::{Algorithm, RoundResult};

/// Coarse health label for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    /// More than half the nodes are still alive.
    Healthy,
    Degraded,
}

impl NetworkStatus {
    /// `Healthy` iff `nodes_alive > 0.5 × total_nodes`.
    pub fn classify(nodes_alive: usize, total_nodes: usize) -> Self {
        if nodes_alive as f64 > 0.5 * total_nodes as f64 {
            NetworkStatus::Healthy
        } else {
            NetworkStatus::Degraded
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkStatus::Healthy  => "Healthy",
            NetworkStatus::Degraded => "Degraded",
        }
    }
}

impl std::fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of `round_log.csv`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRow {
    pub round:                 u32,
    pub algorithm:             Algorithm,
    pub nodes_alive:           usize,
    /// Joules spent by all nodes this round.
    pub energy_usage_joules:   f64,
    pub data_transmitted_bits: f64,
    pub status:                NetworkStatus,
}

impl RoundRow {
    pub fn from_round<T>(algorithm: Algorithm, total_nodes: usize, round: &RoundResult<T>) -> Self {
        Self {
            round:                 round.round_number,
            algorithm,
            nodes_alive:           round.nodes_alive,
            energy_usage_joules:   round.total_energy_used(),
            data_transmitted_bits: round.data_transmitted_bits,
            status:                NetworkStatus::classify(round.nodes_alive, total_nodes),
        }
    }
}
