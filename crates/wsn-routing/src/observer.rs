//! Run observer trait for playback and data collection.

use crate::{Algorithm, Metrics, RoundResult};

/// Callbacks invoked by [`simulate`][crate::simulate] while a run executes.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.  Hosts that animate playback can either
/// replay `SimulationResult::rounds` afterwards or stream rounds from
/// [`on_round_end`][Self::on_round_end].
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct AlivePrinter;
///
/// impl SimObserver for AlivePrinter {
///     fn on_round_end<T>(&mut self, round: &RoundResult<T>) {
///         println!("round {}: {} alive", round.round_number, round.nodes_alive);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after validation, before round 1.
    fn on_run_start(&mut self, _algorithm: Algorithm, _total_nodes: usize) {}

    /// Called after every round, dormant rounds included.
    fn on_round_end<T>(&mut self, _round: &RoundResult<T>) {}

    /// Called once, in the round where the first node died.
    fn on_network_death(&mut self, _round: u32, _nodes_alive: usize) {}

    /// Called once after the final round.
    fn on_run_end(&mut self, _algorithm: Algorithm, _metrics: &Metrics) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
