//! Interned name identifiers.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// An interned name: a port, net, model, attribute, or parameter name.
///
/// Internally a `u32` key into the session [`Interner`], giving O(1)
/// equality and copy semantics for the name-keyed maps of the netlist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Creates an `Ident` from a raw `u32` key.
    ///
    /// Intended for deserialization and tests; normal code obtains idents
    /// through [`Interner::intern`].
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` key.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `Ident` is a plain `u32` wrapper; every `u32` fits in `usize`
// on the supported platforms, and `try_from_usize` rejects anything that
// does not fit back into a `u32`.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// The session string interner, shared by the parser and the netlist.
///
/// Every name seen during a parse is interned once; the netlist stores
/// only [`Ident`] keys and resolves them back for display.
pub struct Interner {
    names: ThreadedRodeo<Ident>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self {
            names: ThreadedRodeo::new(),
        }
    }

    /// Interns a name, returning its [`Ident`].
    pub fn intern(&self, name: &str) -> Ident {
        self.names.get_or_intern(name)
    }

    /// Returns the [`Ident`] for a name only if it was already interned.
    pub fn get(&self, name: &str) -> Option<Ident> {
        self.names.get(name)
    }

    /// Resolves an [`Ident`] back to its name.
    ///
    /// # Panics
    ///
    /// Panics if the ident did not come from this interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.names.resolve(&ident)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
