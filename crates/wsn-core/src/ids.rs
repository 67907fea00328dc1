//! Dense node index used by per-run state.
//!
//! Callers identify nodes by string id; inside one run every node is
//! addressed by its position in the validated node list so ledgers and
//! scratch arrays are plain `Vec`s.

use std::fmt;

/// Position of a node in the node list handed to a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
