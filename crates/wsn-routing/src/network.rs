//! Validated, read-only view of the caller's node list for one run.

use wsn_core::{ConfigError, ConfigResult, Node, NodeIndex, NodeRole, Position};

#[cfg(feature = "fx-hash")]
type IdSet<'a> = rustc_hash::FxHashSet<&'a str>;
#[cfg(not(feature = "fx-hash"))]
type IdSet<'a> = std::collections::HashSet<&'a str>;

/// The node list of one run with its base station resolved.
///
/// Borrowed, never copied: positions may change between runs but never
/// during one.
#[derive(Clone, Copy, Debug)]
pub struct Network<'a> {
    nodes: &'a [Node],
    base:  NodeIndex,
}

impl<'a> Network<'a> {
    /// Check that ids are unique and that exactly one base station exists.
    pub fn new(nodes: &'a [Node]) -> ConfigResult<Self> {
        let mut seen = IdSet::default();
        let mut base: Option<NodeIndex> = None;

        for (i, node) in nodes.iter().enumerate() {
            if !seen.insert(node.id.as_str()) {
                return Err(ConfigError::DuplicateNodeId(node.id.clone()));
            }
            if node.is_base() {
                if let Some(first) = base {
                    return Err(ConfigError::MultipleBaseStations {
                        first:  nodes[first.index()].id.clone(),
                        second: node.id.clone(),
                    });
                }
                base = Some(NodeIndex(i as u32));
            }
        }

        let base = base.ok_or(ConfigError::MissingBaseStation)?;
        Ok(Self { nodes, base })
    }

    /// Total node count, base station included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a validated network (it always holds a base station).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &'a [Node] {
        self.nodes
    }

    #[inline]
    pub fn node(&self, idx: NodeIndex) -> &'a Node {
        &self.nodes[idx.index()]
    }

    #[inline]
    pub fn id(&self, idx: NodeIndex) -> &'a str {
        &self.nodes[idx.index()].id
    }

    #[inline]
    pub fn position(&self, idx: NodeIndex) -> Position {
        self.nodes[idx.index()].position
    }

    #[inline]
    pub fn base(&self) -> NodeIndex {
        self.base
    }

    /// Distance from `from` to `to` using the first node's latitude scale.
    #[inline]
    pub fn distance_km(&self, from: NodeIndex, to: NodeIndex) -> f64 {
        self.position(from).distance_km(self.position(to))
    }

    #[inline]
    pub fn distance_to_base_km(&self, from: NodeIndex) -> f64 {
        self.distance_km(from, self.base)
    }

    /// Every node index in list order.
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> + 'a {
        (0..self.nodes.len()).map(|i| NodeIndex(i as u32))
    }

    /// Sensors and relays, in list order.
    pub fn non_base(&self) -> impl Iterator<Item = NodeIndex> + 'a {
        let base = self.base;
        self.indices().filter(move |&i| i != base)
    }

    /// Nodes with [`NodeRole::Sensor`], in list order.
    pub fn sensors(&self) -> impl Iterator<Item = NodeIndex> + 'a {
        let nodes = self.nodes;
        self.indices()
            .filter(move |i| nodes[i.index()].role == NodeRole::Sensor)
    }
}
