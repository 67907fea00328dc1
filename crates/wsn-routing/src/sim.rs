//! The shared round executor and the per-protocol entry points.

use tracing::{debug, info, info_span};
use wsn_core::{ConfigResult, EnergyLedger, LeachConfig, Node, PegasisConfig, SimRng};

use crate::{
    ChainSnapshot, ClusterSnapshot, Leach, Metrics, Network, NoopObserver, Pegasis, RoundResult,
    RoutingProtocol, SimObserver, SimulationResult,
};

/// Run LEACH over `nodes` for `config.rounds.round_count` rounds.
pub fn run_leach(
    nodes:  &[Node],
    config: &LeachConfig,
    rng:    &mut SimRng,
) -> ConfigResult<SimulationResult<ClusterSnapshot>> {
    simulate(nodes, Leach::new(config.clone()), rng, &mut NoopObserver)
}

/// Run PEGASIS over `nodes` for `config.rounds.round_count` rounds.
pub fn run_pegasis(
    nodes:  &[Node],
    config: &PegasisConfig,
    rng:    &mut SimRng,
) -> ConfigResult<SimulationResult<ChainSnapshot>> {
    simulate(nodes, Pegasis::new(config.clone()), rng, &mut NoopObserver)
}

/// Run `protocol` over `nodes`, reporting to `observer`.
///
/// All validation happens before round 1; once the first round starts the
/// run always completes with exactly `round_count` rounds.  After the first
/// node death every remaining round is appended dormant.
///
/// The run owns its [`EnergyLedger`]; nothing outside `protocol`, `rng` and
/// `observer` is mutated, so independent runs over the same `nodes` may
/// execute concurrently.
pub fn simulate<P, O>(
    nodes:        &[Node],
    mut protocol: P,
    rng:          &mut SimRng,
    observer:     &mut O,
) -> ConfigResult<SimulationResult<P::Snapshot>>
where
    P: RoutingProtocol,
    O: SimObserver,
{
    protocol.validate()?;
    let network = Network::new(nodes)?;

    let algorithm = protocol.algorithm();
    let config = protocol.round_config().clone();
    let total_nodes = network.len();

    let _span = info_span!("simulate", %algorithm, nodes = total_nodes).entered();

    let mut ledger = EnergyLedger::new(nodes.iter().map(|n| n.role), config.initial_energy);
    protocol.prepare(&network, rng);
    observer.on_run_start(algorithm, total_nodes);

    let mut rounds: Vec<RoundResult<P::Snapshot>> = Vec::with_capacity(config.round_count as usize);
    let mut died_in: Option<u32> = None;

    for round in 1..=config.round_count {
        let result = if died_in.is_some() {
            RoundResult {
                round_number:          round,
                topology:              protocol.dormant_snapshot(&network),
                energy_used:           Default::default(),
                nodes_alive:           ledger.alive_count(),
                data_transmitted_bits: 0.0,
                dormant:               true,
            }
        } else {
            let activity = protocol.execute_round(round, &network, &mut ledger, rng);
            let energy_used = ledger
                .take_round_usage()
                .into_iter()
                .map(|(n, joules)| (network.id(n).to_owned(), joules))
                .collect();
            let nodes_alive = ledger.alive_count();

            if nodes_alive < total_nodes {
                died_in = Some(round);
                info!(round, nodes_alive, "network lifetime reached");
                observer.on_network_death(round, nodes_alive);
            }

            RoundResult {
                round_number:          round,
                topology:              activity.snapshot,
                energy_used,
                nodes_alive,
                data_transmitted_bits: activity.data_bits,
                dormant:               false,
            }
        };

        debug!(
            round,
            alive = result.nodes_alive,
            data_bits = result.data_transmitted_bits,
            energy_j = result.total_energy_used(),
            dormant = result.dormant,
            "round complete"
        );
        observer.on_round_end(&result);
        rounds.push(result);
    }

    let metrics = Metrics::aggregate(&rounds, total_nodes, config.round_count, &ledger);
    info!(
        lifetime = metrics.network_lifetime_rounds,
        energy_j = metrics.total_energy_consumed,
        data_bits = metrics.total_data_delivered_bits,
        "run finished"
    );
    observer.on_run_end(algorithm, &metrics);

    let final_energy = ledger
        .iter()
        .map(|(n, joules)| (network.id(n).to_owned(), joules))
        .collect();

    Ok(SimulationResult {
        algorithm,
        total_nodes,
        rounds,
        metrics,
        final_energy,
    })
}
