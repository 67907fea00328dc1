//! First-order radio cost model shared by both protocols.
//!
//! | Transfer               | Size                           | Distance coeff |
//! |------------------------|--------------------------------|----------------|
//! | member → head          | `bits`                         | 0.1            |
//! | chain neighbour hop    | `bits`                         | 0.1            |
//! | LEACH head → base      | `bits × (0.5 + 0.5 × members)` | 0.2            |
//! | PEGASIS leader → base  | `bits × 0.8`                   | 0.2            |
//!
//! Transmit cost is `tx_per_bit × size × (1 + coeff × distance_km)`;
//! receive cost is `rx_per_bit × bits` regardless of distance.

use wsn_core::{EnergyLedger, NodeIndex, RoundConfig};

/// Distance coefficient for intra-cluster and chain hops.
pub const HOP_DISTANCE_COEFF: f64 = 0.1;

/// Distance coefficient for the long-haul uplink to the base station.
pub const UPLINK_DISTANCE_COEFF: f64 = 0.2;

/// Fraction of one reading a PEGASIS leader sends to the base station.
pub const CHAIN_AGGREGATION_FACTOR: f64 = 0.8;

/// LEACH aggregate size in bits for a head that received `members` readings.
#[inline]
pub fn cluster_aggregate_bits(bits: f64, members: usize) -> f64 {
    bits * (0.5 + 0.5 * members as f64)
}

/// Constants of the energy model, lifted out of a [`RoundConfig`].
#[derive(Copy, Clone, Debug)]
pub struct CostModel {
    pub tx_per_bit: f64,
    pub rx_per_bit: f64,
    pub bits:       f64,
}

impl CostModel {
    pub fn from_config(config: &RoundConfig) -> Self {
        Self {
            tx_per_bit: config.transmit_energy_per_bit,
            rx_per_bit: config.receive_energy_per_bit,
            bits:       config.data_bits(),
        }
    }

    #[inline]
    pub fn transmit(&self, size_bits: f64, distance_km: f64, coeff: f64) -> f64 {
        self.tx_per_bit * size_bits * (1.0 + coeff * distance_km)
    }

    #[inline]
    pub fn receive(&self) -> f64 {
        self.rx_per_bit * self.bits
    }
}

/// Result of one single-reading hop between two battery nodes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HopOutcome {
    /// Sender was dead: nothing spent, nothing moved.
    Skipped,
    /// Sender transmitted but the receiver was dead.
    Lost,
    /// Both paid; one reading arrived.
    Delivered,
}

/// Move one reading from `sender` to `receiver` over `distance_km`.
pub fn hop(
    ledger:      &mut EnergyLedger,
    cost:        &CostModel,
    sender:      NodeIndex,
    receiver:    NodeIndex,
    distance_km: f64,
) -> HopOutcome {
    if !ledger.is_alive(sender) {
        return HopOutcome::Skipped;
    }
    ledger.spend(sender, cost.transmit(cost.bits, distance_km, HOP_DISTANCE_COEFF));
    if !ledger.is_alive(receiver) {
        return HopOutcome::Lost;
    }
    ledger.spend(receiver, cost.receive());
    HopOutcome::Delivered
}

/// Send `size_bits` from `sender` to the base station.  Returns the bits
/// delivered (zero if `sender` is dead).
pub fn uplink(
    ledger:      &mut EnergyLedger,
    cost:        &CostModel,
    sender:      NodeIndex,
    size_bits:   f64,
    distance_km: f64,
) -> f64 {
    if !ledger.is_alive(sender) {
        return 0.0;
    }
    ledger.spend(sender, cost.transmit(size_bits, distance_km, UPLINK_DISTANCE_COEFF));
    size_bits
}
