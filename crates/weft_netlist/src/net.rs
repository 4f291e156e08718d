//! Electrical signal nodes.

use crate::ids::PortId;
use serde::{Deserialize, Serialize};
use weft_common::{Bit, Ident};

/// One electrical signal, connecting any number of ports.
///
/// A net may additionally be tied to a constant level; after consistency
/// validation, a net has at most one driver (the constant, or a single
/// driving port) unless it is a chip-boundary net.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Net {
    /// The net name, unique within its model.
    pub name: Ident,
    /// The constant level this net is tied to, if any.
    pub constant: Option<Bit>,
    /// Every port currently connected to this net.
    pub connections: Vec<PortId>,
}

impl Net {
    /// Creates an unconnected, non-constant net.
    pub fn new(name: Ident) -> Self {
        Self {
            name,
            constant: None,
            connections: Vec::new(),
        }
    }

    /// Returns `true` if this net is tied to a constant level.
    pub fn is_constant(&self) -> bool {
        self.constant.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_net_is_floating() {
        let net = Net::new(Ident::from_raw(0));
        assert!(!net.is_constant());
        assert!(net.connections.is_empty());
    }

    #[test]
    fn constant_levels() {
        let mut net = Net::new(Ident::from_raw(0));
        net.constant = Some(Bit::Zero);
        assert!(net.is_constant());
        net.constant = Some(Bit::One);
        assert_eq!(net.constant, Some(Bit::One));
    }
}
