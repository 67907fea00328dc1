//! Run configuration for the routing simulators.
//!
//! All structs implement `Default` with the documented dashboard defaults,
//! so hosts only override what they need:
//!
//! | Field                       | Default    |
//! |-----------------------------|------------|
//! | `round_count`               | 20         |
//! | `initial_energy`            | 2.0 J      |
//! | `transmit_energy_per_bit`   | 50e-6 J    |
//! | `receive_energy_per_bit`    | 25e-6 J    |
//! | `data_size_bits`            | 4000       |
//! | `cluster_head_probability`  | 0.2        |
//! | `leader_selection`          | round robin|
//!
//! With the `serde` feature every field is optional when deserialising.

use crate::{ConfigError, ConfigResult};

// ── RoundConfig ───────────────────────────────────────────────────────────────

/// Energy model and run length shared by both protocols.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundConfig {
    /// Number of rounds to simulate.  The round log always has exactly this
    /// many entries.
    pub round_count: u32,

    /// Joules every node starts with.  Zero is allowed and models a network
    /// whose batteries are already flat.
    pub initial_energy: f64,

    /// Joules per transmitted bit, before distance scaling.
    pub transmit_energy_per_bit: f64,

    /// Joules per received bit.
    pub receive_energy_per_bit: f64,

    /// Size of one sensor reading in bits.
    pub data_size_bits: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            round_count:             20,
            initial_energy:          2.0,
            transmit_energy_per_bit: 50e-6,
            receive_energy_per_bit:  25e-6,
            data_size_bits:          4_000,
        }
    }
}

impl RoundConfig {
    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.round_count == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if !self.initial_energy.is_finite() || self.initial_energy < 0.0 {
            return Err(ConfigError::InvalidInitialEnergy(self.initial_energy));
        }
        positive("transmit_energy_per_bit", self.transmit_energy_per_bit)?;
        positive("receive_energy_per_bit", self.receive_energy_per_bit)?;
        positive("data_size_bits", f64::from(self.data_size_bits))?;
        Ok(())
    }

    /// `data_size_bits` as `f64` for cost arithmetic.
    #[inline]
    pub fn data_bits(&self) -> f64 {
        f64::from(self.data_size_bits)
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveEnergy { field, value })
    }
}

// ── LEACH ─────────────────────────────────────────────────────────────────────

/// Configuration for a LEACH (cluster-based) run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LeachConfig {
    pub rounds: RoundConfig,

    /// Probability that a live node elects itself cluster head each round.
    pub cluster_head_probability: f64,
}

impl Default for LeachConfig {
    fn default() -> Self {
        Self {
            rounds:                   RoundConfig::default(),
            cluster_head_probability: 0.2,
        }
    }
}

impl LeachConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.rounds.validate()?;
        if !(0.0..=1.0).contains(&self.cluster_head_probability) {
            return Err(ConfigError::InvalidProbability(self.cluster_head_probability));
        }
        Ok(())
    }
}

// ── PEGASIS ───────────────────────────────────────────────────────────────────

/// How the PEGASIS leader is picked each round.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LeaderSelection {
    /// Chain position `(round - 1) mod chain_len`.
    #[default]
    RoundRobin,
    /// Chain member with the most remaining energy; first in chain order
    /// wins ties.
    HighestEnergy,
}

impl LeaderSelection {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaderSelection::RoundRobin    => "roundRobin",
            LeaderSelection::HighestEnergy => "highestEnergy",
        }
    }
}

impl std::fmt::Display for LeaderSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a PEGASIS (chain-based) run.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PegasisConfig {
    pub rounds:           RoundConfig,
    pub leader_selection: LeaderSelection,
}

impl PegasisConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.rounds.validate()
    }
}
