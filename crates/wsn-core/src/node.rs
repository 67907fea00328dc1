//! Sensor-network node description supplied by the caller.

use std::str::FromStr;

use crate::{ConfigError, Position};

/// What a node does in the network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeRole {
    /// Battery-powered water-quality sensor.
    #[default]
    Sensor,
    /// The sink.  Mains-powered: never spends energy.
    Base,
    /// Battery-powered relay.  Takes part in LEACH clustering but is not
    /// chained by PEGASIS.
    Relay,
}

impl NodeRole {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Sensor => "sensor",
            NodeRole::Base   => "base",
            NodeRole::Relay  => "relay",
        }
    }

    #[inline]
    pub fn is_base(self) -> bool {
        matches!(self, NodeRole::Base)
    }
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeRole {
    type Err = ConfigError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensor" => Ok(NodeRole::Sensor),
            "base"   => Ok(NodeRole::Base),
            "relay"  => Ok(NodeRole::Relay),
            _        => Err(ConfigError::UnknownRole(s.to_owned())),
        }
    }
}

/// One node of the monitored network.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:       String,
    pub position: Position,
    pub role:     NodeRole,
}

impl Node {
    pub fn new(id: impl Into<String>, position: Position, role: NodeRole) -> Self {
        Self { id: id.into(), position, role }
    }

    pub fn sensor(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(id, Position::new(lat, lon), NodeRole::Sensor)
    }

    pub fn base(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(id, Position::new(lat, lon), NodeRole::Base)
    }

    pub fn relay(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(id, Position::new(lat, lon), NodeRole::Relay)
    }

    #[inline]
    pub fn is_base(&self) -> bool {
        self.role.is_base()
    }
}
