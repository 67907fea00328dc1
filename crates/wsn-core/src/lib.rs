//! `wsn-core` — foundational types for the `wsn_sim` routing simulator.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It has no
//! `wsn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`ids`]      | `NodeIndex`                                               |
//! | [`geo`]      | `Position`, flat-earth kilometre distance                 |
//! | [`node`]     | `Node`, `NodeRole`                                        |
//! | [`config`]   | `RoundConfig`, `LeachConfig`, `PegasisConfig`             |
//! | [`energy`]   | `EnergyLedger` (per-run remaining energy)                 |
//! | [`rng`]      | `SimRng`                                                  |
//! | [`error`]    | `ConfigError`, `ConfigResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to nodes and configs.       |

pub mod config;
pub mod energy;
pub mod error;
pub mod geo;
pub mod ids;
pub mod node;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LeachConfig, LeaderSelection, PegasisConfig, RoundConfig};
pub use energy::EnergyLedger;
pub use error::{ConfigError, ConfigResult};
pub use geo::Position;
pub use ids::NodeIndex;
pub use node::{Node, NodeRole};
pub use rng::SimRng;
