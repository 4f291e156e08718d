//! Post-parse unification of `.names`-aliased nets.
//!
//! A 2-argument `.names IN OUT` declares OUT to be a direct copy of IN.
//! The parser queues these as edges; this pass collapses each aliased
//! net onto its driver's representative with an explicit union-find map,
//! then removes the collapsed nets from the model.

use crate::codes;
use std::collections::HashMap;
use weft_diagnostics::Diagnostic;
use weft_netlist::{Model, NetId};
use weft_source::Span;

/// One queued aliasing edge: `driver` feeds `aliased`.
#[derive(Debug, Clone, Copy)]
pub struct UnifyEdge {
    /// The net that keeps its identity.
    pub driver: NetId,
    /// The net whose connections are redirected onto the driver.
    pub aliased: NetId,
    /// The `.names` line that queued this edge, for diagnostics.
    pub span: Span,
}

/// Applies the queued edges in recorded order.
///
/// Representatives are resolved by following the map iteratively to a
/// fixed point, compressing every visited mapping, so pathological alias
/// chains cannot recurse deeply. A net aliased to its own representative
/// is a cycle; a net aliased twice is a driver conflict. Both are fatal.
pub fn apply(model: &mut Model, edges: Vec<UnifyEdge>) -> Result<(), Diagnostic> {
    let mut replacement: HashMap<NetId, NetId> = HashMap::new();
    for edge in edges {
        let mut rep = edge.driver;
        while let Some(&next) = replacement.get(&rep) {
            rep = next;
        }
        let mut walk = edge.driver;
        while walk != rep {
            let next = replacement[&walk];
            replacement.insert(walk, rep);
            walk = next;
        }

        if edge.aliased == rep {
            return Err(Diagnostic::error(codes::NAMES_CYCLE, ".names cycle", edge.span));
        }

        model.replace_net(edge.aliased, rep);

        if replacement.insert(edge.aliased, rep).is_some() {
            return Err(Diagnostic::error(
                codes::CONFLICTING_NAMES,
                "conflicting .names outputs",
                edge.span,
            ));
        }
    }

    // Everything that ended up aliased away disappears from the model.
    for net in replacement.keys() {
        model.remove_net(*net);
    }
    Ok(())
}
