//! The netlist graph assembled by the Weft front end.
//!
//! A [`Design`] owns a set of [`Model`]s; the model being compiled is the
//! designated top. Each model owns its interface [`Port`]s, its [`Net`]s,
//! and its [`Instance`]s of other models. Ports reference their net by
//! [`NetId`] and nets list their connected ports by [`PortId`], so the
//! many-to-one port/net edges are plain identifiers into per-model
//! arenas rather than shared pointers.

#![warn(missing_docs)]

mod arena;
mod cells;
mod constant;
mod design;
mod ids;
mod instance;
mod model;
mod net;
mod port;

pub use arena::{Arena, ArenaId};
pub use cells::register_standard_cells;
pub use constant::{Const, ConstKind};
pub use design::Design;
pub use ids::{InstanceId, ModelId, NetId, PortId};
pub use instance::Instance;
pub use model::Model;
pub use net::Net;
pub use port::{Direction, Port, PortOwner};
