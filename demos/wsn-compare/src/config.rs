//! JSON run file.
//!
//! ```json
//! {
//!   "seed": 7,
//!   "rounds": { "round_count": 50, "initial_energy": 1.5 },
//!   "leach": { "cluster_head_probability": 0.1 },
//!   "pegasis": { "leader_selection": "highestEnergy" }
//! }
//! ```
//!
//! Every field is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use wsn_core::{LeachConfig, LeaderSelection, PegasisConfig, RoundConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFile {
    pub seed:    Option<u64>,
    pub rounds:  RoundConfig,
    pub leach:   LeachSection,
    pub pegasis: PegasisSection,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeachSection {
    pub cluster_head_probability: f64,
}

impl Default for LeachSection {
    fn default() -> Self {
        Self { cluster_head_probability: LeachConfig::default().cluster_head_probability }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PegasisSection {
    pub leader_selection: LeaderSelection,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn leach_config(&self) -> LeachConfig {
        LeachConfig {
            rounds:                   self.rounds.clone(),
            cluster_head_probability: self.leach.cluster_head_probability,
        }
    }

    pub fn pegasis_config(&self) -> PegasisConfig {
        PegasisConfig {
            rounds:           self.rounds.clone(),
            leader_selection: self.pegasis.leader_selection,
        }
    }
}
