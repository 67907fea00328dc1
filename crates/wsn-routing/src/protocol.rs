//! The `RoutingProtocol` trait, the seam between the shared round executor
//! and the protocol-specific topology logic.

use wsn_core::{ConfigResult, EnergyLedger, RoundConfig, SimRng};

use crate::Network;

/// Which protocol produced a result.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Leach,
    Pegasis,
}

impl Algorithm {
    /// Label used in exported reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Leach   => "LEACH",
            Algorithm::Pegasis => "PEGASIS",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one executed round produced, before the executor's bookkeeping.
#[derive(Clone, Debug)]
pub struct RoundActivity<T> {
    pub snapshot:  T,
    /// Bits moved this round, aggregation included.
    pub data_bits: f64,
}

/// A round-based routing protocol.
///
/// Implementations hold only their configuration plus run-scoped topology
/// (e.g. the PEGASIS chain).  All energy state lives in the
/// [`EnergyLedger`] the executor passes in, and all randomness comes from
/// the caller's [`SimRng`].
///
/// [`simulate`][crate::simulate] drives an implementation:
///
/// 1. [`validate`][Self::validate] before anything runs.
/// 2. [`prepare`][Self::prepare] once per run.
/// 3. [`execute_round`][Self::execute_round] for each live round.
/// 4. [`dormant_snapshot`][Self::dormant_snapshot] for each round after the
///    network has died.
pub trait RoutingProtocol {
    /// Per-round topology snapshot recorded in the round log.
    type Snapshot: Clone + std::fmt::Debug;

    fn algorithm(&self) -> Algorithm;

    fn round_config(&self) -> &RoundConfig;

    /// Reject the configuration before the first round.
    fn validate(&self) -> ConfigResult<()>;

    /// Build run-scoped topology.  Default: nothing to build.
    fn prepare(&mut self, _network: &Network<'_>, _rng: &mut SimRng) {}

    /// Execute one live round, spending energy through `ledger`.
    fn execute_round(
        &mut self,
        round:   u32,
        network: &Network<'_>,
        ledger:  &mut EnergyLedger,
        rng:     &mut SimRng,
    ) -> RoundActivity<Self::Snapshot>;

    /// Snapshot recorded for a round that carries no activity.
    fn dormant_snapshot(&self, network: &Network<'_>) -> Self::Snapshot;
}
