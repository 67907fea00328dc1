//! Summary metrics folded from a finished round log.

use wsn_core::EnergyLedger;

use crate::RoundResult;

/// Comparative performance figures for one run.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Σ over rounds of Σ `energy_used`.
    pub total_energy_consumed: f64,

    /// First round whose `nodes_alive` fell below the node count, or the
    /// configured round count if nobody died.
    pub network_lifetime_rounds: u32,

    /// Σ over rounds of `data_transmitted_bits`.
    pub total_data_delivered_bits: f64,

    /// Mean remaining joules over all nodes, base station included.
    pub average_remaining_energy: f64,
}

impl Metrics {
    /// Fold `rounds` and the final `ledger` of a run.
    pub fn aggregate<T>(
        rounds:      &[RoundResult<T>],
        total_nodes: usize,
        round_count: u32,
        ledger:      &EnergyLedger,
    ) -> Self {
        let (total_energy_consumed, total_data_delivered_bits) = rounds
            .iter()
            .fold((0.0, 0.0), |(energy, data), r| {
                (energy + r.total_energy_used(), data + r.data_transmitted_bits)
            });

        let network_lifetime_rounds = rounds
            .iter()
            .find(|r| r.nodes_alive < total_nodes)
            .map_or(round_count, |r| r.round_number);

        Self {
            total_energy_consumed,
            network_lifetime_rounds,
            total_data_delivered_bits,
            average_remaining_energy: ledger.average_remaining(),
        }
    }
}
