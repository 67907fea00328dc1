//! Per-run energy ledger.
//!
//! # Clamping policy
//!
//! Every deduction is clamped at zero the moment it is applied.  A node that
//! is alive (`remaining > 0`) when an operation starts performs it and pays
//! whatever it has left, up to the full cost; from then on it is dead and
//! every later [`spend`][EnergyLedger::spend] is a no-op.  The ledger
//! records the joules *actually removed*, so for any run
//!
//!   Σ initial − Σ remaining == Σ recorded usage
//!
//! holds exactly and no value is ever negative.
//!
//! The base station is mains-powered: it never pays and is always alive.

use crate::{NodeIndex, NodeRole};

/// Remaining and per-round energy for every node of one run, indexed by
/// [`NodeIndex`].
///
/// Created fresh per run and dropped with it; nothing is shared between
/// runs.
#[derive(Clone, Debug)]
pub struct EnergyLedger {
    remaining:     Vec<f64>,
    round_usage:   Vec<f64>,
    mains_powered: Vec<bool>,
}

impl EnergyLedger {
    /// One entry per role, each starting at `initial_energy` joules.
    pub fn new(roles: impl IntoIterator<Item = NodeRole>, initial_energy: f64) -> Self {
        let mains_powered: Vec<bool> = roles.into_iter().map(NodeRole::is_base).collect();
        let n = mains_powered.len();
        Self {
            remaining: vec![initial_energy.max(0.0); n],
            round_usage: vec![0.0; n],
            mains_powered,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    pub fn remaining(&self, node: NodeIndex) -> f64 {
        self.remaining[node.index()]
    }

    /// Base stations are always alive; everything else while `remaining > 0`.
    #[inline]
    pub fn is_alive(&self, node: NodeIndex) -> bool {
        let i = node.index();
        self.mains_powered[i] || self.remaining[i] > 0.0
    }

    /// Deduct up to `joules` from `node` and return the amount actually
    /// removed.
    ///
    /// Returns `0.0` for the base station and for nodes that are already
    /// dead.  Negative costs are treated as zero.
    pub fn spend(&mut self, node: NodeIndex, joules: f64) -> f64 {
        let i = node.index();
        if self.mains_powered[i] || self.remaining[i] <= 0.0 {
            return 0.0;
        }
        let paid = joules.max(0.0).min(self.remaining[i]);
        self.remaining[i] -= paid;
        if self.remaining[i] <= 0.0 {
            self.remaining[i] = 0.0;
        }
        self.round_usage[i] += paid;
        paid
    }

    /// Number of alive nodes, base station included.
    pub fn alive_count(&self) -> usize {
        (0..self.len())
            .filter(|&i| self.mains_powered[i] || self.remaining[i] > 0.0)
            .count()
    }

    /// Drain the usage accumulated since the last call.
    ///
    /// Only nodes that spent a non-zero amount are returned, in ascending
    /// index order.  Usage counters are reset to zero.
    pub fn take_round_usage(&mut self) -> Vec<(NodeIndex, f64)> {
        let mut used = Vec::new();
        for (i, joules) in self.round_usage.iter_mut().enumerate() {
            if *joules > 0.0 {
                used.push((NodeIndex(i as u32), *joules));
            }
            *joules = 0.0;
        }
        used
    }

    /// Sum of remaining energy over all nodes.
    pub fn total_remaining(&self) -> f64 {
        self.remaining.iter().sum()
    }

    /// Mean remaining energy over all nodes (base station included);
    /// `0.0` for an empty ledger.
    pub fn average_remaining(&self) -> f64 {
        if self.remaining.is_empty() {
            0.0
        } else {
            self.total_remaining() / self.remaining.len() as f64
        }
    }

    /// `(index, remaining)` for every node in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.remaining
            .iter()
            .enumerate()
            .map(|(i, &joules)| (NodeIndex(i as u32), joules))
    }
}
