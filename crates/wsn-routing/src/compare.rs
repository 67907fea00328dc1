//! Side-by-side LEACH / PEGASIS comparison over one node snapshot.

use wsn_core::{ConfigResult, LeachConfig, Node, PegasisConfig, SimRng};

use crate::{Algorithm, ChainSnapshot, ClusterSnapshot, SimulationResult, run_leach, run_pegasis};

/// Child-seed offsets so each protocol draws from its own stream.
pub(crate) const LEACH_STREAM:   u64 = 1;
pub(crate) const PEGASIS_STREAM: u64 = 2;

/// Results of both protocols run over the same nodes.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub leach:   SimulationResult<ClusterSnapshot>,
    pub pegasis: SimulationResult<ChainSnapshot>,
}

impl Comparison {
    /// The protocol whose network lived longer, or `None` on a tie.
    pub fn longer_lived(&self) -> Option<Algorithm> {
        let l = self.leach.metrics.network_lifetime_rounds;
        let p = self.pegasis.metrics.network_lifetime_rounds;
        match l.cmp(&p) {
            std::cmp::Ordering::Greater => Some(Algorithm::Leach),
            std::cmp::Ordering::Less    => Some(Algorithm::Pegasis),
            std::cmp::Ordering::Equal   => None,
        }
    }
}

/// Run LEACH and PEGASIS over `nodes`, each with an independent ledger and a
/// child RNG derived from `seed`.
///
/// With the `parallel` feature both runs execute via `rayon::join`; the
/// results are identical to the sequential path.
pub fn compare(
    nodes:   &[Node],
    leach:   &LeachConfig,
    pegasis: &PegasisConfig,
    seed:    u64,
) -> ConfigResult<Comparison> {
    let mut root = SimRng::new(seed);
    let mut leach_rng = root.child(LEACH_STREAM);
    let mut pegasis_rng = root.child(PEGASIS_STREAM);

    #[cfg(not(feature = "parallel"))]
    let (leach, pegasis) = (
        run_leach(nodes, leach, &mut leach_rng),
        run_pegasis(nodes, pegasis, &mut pegasis_rng),
    );

    #[cfg(feature = "parallel")]
    let (leach, pegasis) = rayon::join(
        || run_leach(nodes, leach, &mut leach_rng),
        || run_pegasis(nodes, pegasis, &mut pegasis_rng),
    );

    Ok(Comparison {
        leach:   leach?,
        pegasis: pegasis?,
    })
}
