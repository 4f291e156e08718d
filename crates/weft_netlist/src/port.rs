//! Connection points on models and instances.

use crate::ids::{InstanceId, NetId};
use serde::{Deserialize, Serialize};
use weft_common::Ident;

/// The declared direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Data flows into the owning model or instance.
    In,
    /// Data flows out of the owning model or instance.
    Out,
    /// Both directions (a pad or tri-state pin).
    InOut,
}

/// Who a port belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortOwner {
    /// An interface pin of the model itself.
    Model,
    /// A pin binding on an instance inside the model.
    Instance(InstanceId),
}

/// A named, directioned connection point, wired to at most one net.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    /// The port name (a formal pin name for instance pins).
    pub name: Ident,
    /// Declared direction. May be promoted to `InOut` when a name is
    /// used both as input and output; never demoted.
    pub direction: Direction,
    /// Whether this is a model interface pin or an instance pin binding.
    pub owner: PortOwner,
    /// The net this port connects to, if any.
    pub net: Option<NetId>,
}

impl Port {
    /// Returns `true` for bidirectional ports.
    pub fn is_bidir(&self) -> bool {
        self.direction == Direction::InOut
    }

    /// Returns `true` if this port drives the net it is connected to.
    ///
    /// The role flips with ownership: seen from inside a model, the
    /// model's own inputs are sources, while an instance's outputs are
    /// sources. `InOut` ports drive in either position.
    pub fn drives_net(&self) -> bool {
        match self.owner {
            PortOwner::Model => matches!(self.direction, Direction::In | Direction::InOut),
            PortOwner::Instance(_) => matches!(self.direction, Direction::Out | Direction::InOut),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_common::Ident;

    fn port(direction: Direction, owner: PortOwner) -> Port {
        Port {
            name: Ident::from_raw(0),
            direction,
            owner,
            net: None,
        }
    }

    #[test]
    fn model_inputs_drive() {
        assert!(port(Direction::In, PortOwner::Model).drives_net());
        assert!(!port(Direction::Out, PortOwner::Model).drives_net());
        assert!(port(Direction::InOut, PortOwner::Model).drives_net());
    }

    #[test]
    fn instance_outputs_drive() {
        let owner = PortOwner::Instance(InstanceId::from_raw(0));
        assert!(!port(Direction::In, owner).drives_net());
        assert!(port(Direction::Out, owner).drives_net());
        assert!(port(Direction::InOut, owner).drives_net());
    }

    #[test]
    fn bidir_flag() {
        assert!(port(Direction::InOut, PortOwner::Model).is_bidir());
        assert!(!port(Direction::In, PortOwner::Model).is_bidir());
    }
}
