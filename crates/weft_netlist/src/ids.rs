//! Opaque keys for the netlist arenas.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! netlist_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates a key from a raw index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

netlist_id!(
    /// Key of a [`Model`](crate::Model) within a [`Design`](crate::Design).
    ModelId
);

netlist_id!(
    /// Key of a [`Port`](crate::Port) within its model's port arena.
    ///
    /// Both interface ports and instance pin bindings live in the same
    /// arena, so one key type addresses either.
    PortId
);

netlist_id!(
    /// Key of a [`Net`](crate::Net) within its model.
    NetId
);

netlist_id!(
    /// Key of an [`Instance`](crate::Instance) within its parent model.
    InstanceId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn raw_roundtrip() {
        assert_eq!(NetId::from_raw(12).as_raw(), 12);
        assert_eq!(PortId::from_raw(0).as_raw(), 0);
    }

    #[test]
    fn usable_in_sets() {
        let mut seen = HashSet::new();
        seen.insert(NetId::from_raw(1));
        seen.insert(NetId::from_raw(1));
        seen.insert(NetId::from_raw(2));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let id = InstanceId::from_raw(3);
        let json = serde_json::to_string(&id).unwrap();
        let back: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
