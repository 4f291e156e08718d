//! Gate instances: occurrences of one model inside another.

use crate::constant::Const;
use crate::ids::{ModelId, PortId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use weft_common::Ident;

/// A call of one model inside another.
///
/// Pin bindings are created lazily: only formals that are actually
/// connected get a [`Port`](crate::Port) in the parent model's arena.
/// Attributes and parameters attach to the instance as [`Const`] values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// The model this is an instance of.
    pub instance_of: ModelId,
    /// Connected formal pins, keyed by formal name.
    pub pins: HashMap<Ident, PortId>,
    /// Attributes (`.attr`) on this instance.
    pub attrs: HashMap<Ident, Const>,
    /// Parameters (`.param`) on this instance.
    pub params: HashMap<Ident, Const>,
}

impl Instance {
    /// Creates an instance of `instance_of` with nothing connected.
    pub fn new(instance_of: ModelId) -> Self {
        Self {
            instance_of,
            pins: HashMap::new(),
            attrs: HashMap::new(),
            params: HashMap::new(),
        }
    }

    /// Returns the pin binding for a formal, if that formal is connected.
    pub fn pin(&self, formal: Ident) -> Option<PortId> {
        self.pins.get(&formal).copied()
    }

    /// Sets an attribute, replacing any previous value under the name.
    pub fn set_attr(&mut self, name: Ident, value: Const) {
        self.attrs.insert(name, value);
    }

    /// Sets a parameter, replacing any previous value under the name.
    pub fn set_param(&mut self, name: Ident, value: Const) {
        self.params.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_common::BitVector;
    use weft_source::Span;

    #[test]
    fn new_instance_is_unbound() {
        let inst = Instance::new(ModelId::from_raw(0));
        assert!(inst.pins.is_empty());
        assert_eq!(inst.pin(Ident::from_raw(0)), None);
    }

    #[test]
    fn attrs_and_params_are_separate_namespaces() {
        let mut inst = Instance::new(ModelId::from_raw(0));
        let name = Ident::from_raw(1);
        inst.set_attr(name, Const::text("keep", Span::NONE));
        inst.set_param(name, Const::bits(BitVector::from_u64(1, 1), Span::NONE));
        assert_eq!(inst.attrs[&name].as_text(), Some("keep"));
        assert!(inst.params[&name].as_bits().is_some());
    }

    #[test]
    fn set_overwrites() {
        let mut inst = Instance::new(ModelId::from_raw(0));
        let name = Ident::from_raw(1);
        inst.set_param(name, Const::text("old", Span::NONE));
        inst.set_param(name, Const::text("new", Span::NONE));
        assert_eq!(inst.params[&name].as_text(), Some("new"));
    }
}
