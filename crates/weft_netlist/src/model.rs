//! Named modules: the unit of hierarchy in a design.

use crate::arena::Arena;
use crate::ids::{InstanceId, NetId, PortId};
use crate::instance::Instance;
use crate::net::Net;
use crate::port::{Direction, Port, PortOwner};
use crate::ModelId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use weft_common::Ident;

/// A named module: interface ports, nets, and instances of other models.
///
/// The port arena holds both the model's own interface pins and the pin
/// bindings of its instances; `interface` and the per-instance pin maps
/// distinguish them. Net removal is by tombstone, so [`NetId`]s stay
/// stable across unification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// The model name, unique within the design.
    pub name: Ident,
    /// Whether this is a built-in standard cell rather than a user model.
    pub is_primitive: bool,
    ports: Arena<PortId, Port>,
    interface: Vec<PortId>,
    port_names: HashMap<Ident, PortId>,
    nets: Arena<NetId, Net>,
    net_names: HashMap<Ident, NetId>,
    dead_nets: HashSet<NetId>,
    instances: Arena<InstanceId, Instance>,
}

impl Model {
    /// Creates an empty user model.
    pub fn new(name: Ident) -> Self {
        Self {
            name,
            is_primitive: false,
            ports: Arena::new(),
            interface: Vec::new(),
            port_names: HashMap::new(),
            nets: Arena::new(),
            net_names: HashMap::new(),
            dead_nets: HashSet::new(),
            instances: Arena::new(),
        }
    }

    /// Creates an empty primitive (standard-cell) model.
    pub fn primitive(name: Ident) -> Self {
        let mut model = Self::new(name);
        model.is_primitive = true;
        model
    }

    // ------------------------------------------------------------------
    // Ports
    // ------------------------------------------------------------------

    /// Adds an interface port.
    ///
    /// # Panics
    ///
    /// Panics if the model already has an interface port of that name.
    pub fn add_port(&mut self, name: Ident, direction: Direction) -> PortId {
        let id = self.ports.push(Port {
            name,
            direction,
            owner: PortOwner::Model,
            net: None,
        });
        let clash = self.port_names.insert(name, id).is_some();
        assert!(!clash, "duplicate interface port");
        self.interface.push(id);
        id
    }

    /// Looks up an interface port by name.
    pub fn find_port(&self, name: Ident) -> Option<PortId> {
        self.port_names.get(&name).copied()
    }

    /// The model's interface ports, in declaration order.
    pub fn interface(&self) -> &[PortId] {
        &self.interface
    }

    /// Returns the port behind `id` (interface port or instance pin).
    pub fn port(&self, id: PortId) -> &Port {
        &self.ports[id]
    }

    /// Returns the port behind `id` mutably.
    pub fn port_mut(&mut self, id: PortId) -> &mut Port {
        &mut self.ports[id]
    }

    // ------------------------------------------------------------------
    // Nets
    // ------------------------------------------------------------------

    /// Adds a net.
    ///
    /// # Panics
    ///
    /// Panics if a live net of that name already exists.
    pub fn add_net(&mut self, name: Ident) -> NetId {
        let id = self.nets.push(Net::new(name));
        let clash = self.net_names.insert(name, id).is_some();
        assert!(!clash, "duplicate net name");
        id
    }

    /// Looks up a live net by name.
    pub fn find_net(&self, name: Ident) -> Option<NetId> {
        self.net_names.get(&name).copied()
    }

    /// Looks up a net by name, creating it if absent.
    pub fn find_or_add_net(&mut self, name: Ident) -> NetId {
        match self.find_net(name) {
            Some(id) => id,
            None => self.add_net(name),
        }
    }

    /// Returns the net behind `id`, which may already be removed.
    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id]
    }

    /// Returns the net behind `id` mutably.
    pub fn net_mut(&mut self, id: NetId) -> &mut Net {
        &mut self.nets[id]
    }

    /// Removes a net from the model.
    ///
    /// The caller is expected to have redirected its connections first
    /// (see [`replace_net`](Self::replace_net)); the entry is
    /// tombstoned and its name freed.
    pub fn remove_net(&mut self, id: NetId) {
        self.net_names.remove(&self.nets[id].name);
        self.dead_nets.insert(id);
    }

    /// Returns `true` if `id` has been removed.
    pub fn net_is_removed(&self, id: NetId) -> bool {
        self.dead_nets.contains(&id)
    }

    /// Iterates the live nets.
    pub fn nets(&self) -> impl Iterator<Item = (NetId, &Net)> {
        self.nets.iter().filter(|(id, _)| !self.dead_nets.contains(id))
    }

    // ------------------------------------------------------------------
    // Instances
    // ------------------------------------------------------------------

    /// Adds an instance of another model.
    pub fn add_instance(&mut self, instance_of: ModelId) -> InstanceId {
        self.instances.push(Instance::new(instance_of))
    }

    /// Returns the instance behind `id`.
    pub fn instance(&self, id: InstanceId) -> &Instance {
        &self.instances[id]
    }

    /// Returns the instance behind `id` mutably.
    pub fn instance_mut(&mut self, id: InstanceId) -> &mut Instance {
        &mut self.instances[id]
    }

    /// Iterates the instances in creation order.
    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &Instance)> {
        self.instances.iter()
    }

    /// Returns the pin binding of `formal` on `instance`, creating the
    /// pin port (with the given direction) on first connection.
    pub fn bind_pin(&mut self, instance: InstanceId, formal: Ident, direction: Direction) -> PortId {
        if let Some(id) = self.instances[instance].pin(formal) {
            return id;
        }
        let id = self.ports.push(Port {
            name: formal,
            direction,
            owner: PortOwner::Instance(instance),
            net: None,
        });
        self.instances[instance].pins.insert(formal, id);
        id
    }

    // ------------------------------------------------------------------
    // Connectivity
    // ------------------------------------------------------------------

    /// Connects a port to a net, detaching it from any previous net.
    pub fn connect(&mut self, port: PortId, net: NetId) {
        if self.ports[port].net == Some(net) {
            return;
        }
        self.disconnect(port);
        self.ports[port].net = Some(net);
        self.nets[net].connections.push(port);
    }

    /// Detaches a port from its net, if connected.
    pub fn disconnect(&mut self, port: PortId) {
        if let Some(old) = self.ports[port].net.take() {
            self.nets[old].connections.retain(|&p| p != port);
        }
    }

    /// Returns the one other port on the same net as `port`.
    ///
    /// Defined only when the net has exactly two connections; any other
    /// arrangement yields `None`.
    pub fn other_connection(&self, port: PortId) -> Option<PortId> {
        let net = self.ports[port].net?;
        match self.nets[net].connections.as_slice() {
            [a, b] if *a == port => Some(*b),
            [a, b] if *b == port => Some(*a),
            _ => None,
        }
    }

    /// Redirects every connection on `from` onto `to`, leaving `from`
    /// unconnected. The only structural mutation performed after initial
    /// graph construction; used by net unification.
    pub fn replace_net(&mut self, from: NetId, to: NetId) {
        let moved = std::mem::take(&mut self.nets[from].connections);
        for &port in &moved {
            self.ports[port].net = Some(to);
        }
        self.nets[to].connections.extend(moved);
    }
}
