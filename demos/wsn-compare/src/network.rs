//! Built-in river-monitoring layout.
//!
//! One shore-side base station and eight water-quality sensors strung along
//! a river mouth near Kisumu.  Used when no `--nodes` CSV is given.

use wsn_core::Node;

/// Build the 9-node layout (base first, then sensors upstream to downstream).
pub fn river_layout() -> Vec<Node> {
    vec![
        Node::base("base-station", -0.0917, 34.7680),
        Node::sensor("inlet-north", -0.0850, 34.7550),
        Node::sensor("inlet-south", -0.0890, 34.7520),
        Node::sensor("bend-east",   -0.0940, 34.7610),
        Node::sensor("bend-west",   -0.0960, 34.7580),
        Node::sensor("weir",        -0.1010, 34.7650),
        Node::sensor("outfall",     -0.1050, 34.7700),
        Node::sensor("delta-north", -0.1100, 34.7760),
        Node::sensor("delta-south", -0.1140, 34.7730),
    ]
}
