//! `wsn-routing` — round-based routing-protocol energy simulator.
//!
//! # Round loop
//!
//! ```text
//! validate config + node list          (ConfigError, nothing has run yet)
//! protocol.prepare(network, rng)       PEGASIS builds its chain here
//! for round in 1..=round_count:
//!   if the network already died  → append a dormant round (no activity)
//!   else
//!     ① topology  : LEACH: elect heads, assign members
//!                   PEGASIS: pick the chain leader
//!     ② relay     : member→head / neighbour→neighbour hops
//!     ③ uplink    : head / leader → base station
//!     ④ bookkeep  : drain per-round usage, count alive nodes,
//!                   fix network lifetime on the first death
//! fold the round log into Metrics
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | [`compare`] runs both protocols via `rayon::join`.       |
//! | `fx-hash`  | FxHash for the node-id uniqueness check.                 |
//! | `serde`    | Serialize/Deserialize on results, snapshots, metrics.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wsn_core::{LeachConfig, Node, SimRng};
//! use wsn_routing::run_leach;
//!
//! let nodes = vec![
//!     Node::base("bs", -0.100, 34.750),
//!     Node::sensor("s1", -0.102, 34.752),
//!     Node::sensor("s2", -0.098, 34.747),
//! ];
//! let result = run_leach(&nodes, &LeachConfig::default(), &mut SimRng::new(42))?;
//! println!("lifetime: {} rounds", result.metrics.network_lifetime_rounds);
//! ```

pub mod compare;
pub mod cost;
pub mod leach;
pub mod metrics;
pub mod network;
pub mod observer;
pub mod pegasis;
pub mod protocol;
pub mod round;
pub mod sim;


pub use compare::{Comparison, compare};
pub use leach::{ClusterSnapshot, Leach};
pub use metrics::Metrics;
pub use network::Network;
pub use observer::{NoopObserver, SimObserver};
pub use pegasis::{ChainSnapshot, Pegasis};
pub use protocol::{Algorithm, RoundActivity, RoutingProtocol};
pub use round::{RoundResult, SimulationResult};
pub use sim::{run_leach, run_pegasis, simulate};
