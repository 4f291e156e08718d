//! The top-level container for one parsed input.

use crate::arena::Arena;
use crate::ids::ModelId;
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use weft_common::Ident;

/// A complete design: every model plus the designated top.
///
/// Created once per parse. Standard cells are registered before parsing
/// begins (see [`register_standard_cells`](crate::register_standard_cells)),
/// and `.gate` directives resolve their target through
/// [`find_model`](Self::find_model).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    models: Arena<ModelId, Model>,
    names: HashMap<Ident, ModelId>,
    /// The single top model, once a `.model` directive has been seen.
    pub top: Option<ModelId>,
}

impl Design {
    /// Creates a design with no models.
    pub fn new() -> Self {
        Self {
            models: Arena::new(),
            names: HashMap::new(),
            top: None,
        }
    }

    /// Adds a model.
    ///
    /// # Panics
    ///
    /// Panics if a model of that name already exists.
    pub fn add_model(&mut self, model: Model) -> ModelId {
        let name = model.name;
        let id = self.models.push(model);
        let clash = self.names.insert(name, id).is_some();
        assert!(!clash, "duplicate model name");
        id
    }

    /// Looks up a model by name.
    pub fn find_model(&self, name: Ident) -> Option<ModelId> {
        self.names.get(&name).copied()
    }

    /// Returns the model behind `id`.
    pub fn model(&self, id: ModelId) -> &Model {
        &self.models[id]
    }

    /// Returns the model behind `id` mutably.
    pub fn model_mut(&mut self, id: ModelId) -> &mut Model {
        &mut self.models[id]
    }

    /// Returns the top model, if one has been designated.
    pub fn top_model(&self) -> Option<&Model> {
        self.top.map(|id| &self.models[id])
    }

    /// Iterates all models in registration order.
    pub fn models(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.models.iter()
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_common::Interner;

    #[test]
    fn add_and_find() {
        let interner = Interner::new();
        let mut design = Design::new();
        let name = interner.intern("counter");
        let id = design.add_model(Model::new(name));
        assert_eq!(design.find_model(name), Some(id));
        assert_eq!(design.model(id).name, name);
    }

    #[test]
    fn missing_model() {
        let interner = Interner::new();
        let design = Design::new();
        assert_eq!(design.find_model(interner.intern("nope")), None);
    }

    #[test]
    fn top_designation() {
        let interner = Interner::new();
        let mut design = Design::new();
        assert!(design.top_model().is_none());
        let id = design.add_model(Model::new(interner.intern("top")));
        design.top = Some(id);
        assert_eq!(design.top_model().unwrap().name, interner.intern("top"));
    }

    #[test]
    fn serde_roundtrip() {
        let interner = Interner::new();
        let mut design = Design::new();
        let id = design.add_model(Model::new(interner.intern("t")));
        design.top = Some(id);
        let json = serde_json::to_string(&design).unwrap();
        let back: Design = serde_json::from_str(&json).unwrap();
        assert_eq!(back.top, Some(id));
        assert_eq!(back.models().count(), 1);
    }
}
