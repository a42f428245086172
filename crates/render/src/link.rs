//! Explicit linking of numeric primitives.
//!
//! Each primitive is a named unit with a declared signature and a declared
//! list of the primitives it requires. [`Linker`] resolves a request into a
//! [`Module`] that contains every requirement, ordered so that nothing
//! appears before what it depends on. Asking for `sin` alone therefore yields
//! `cos, sin`.
//!
//! ```
//! use tonefill_render::{Linker, Primitive};
//!
//! let module = Linker::new().include(Primitive::Sin).link();
//! assert_eq!(module.order(), &[Primitive::Cos, Primitive::Sin]);
//!
//! let sin = module.unary("sin").unwrap();
//! assert!(sin(0.0).abs() < 1e-6);
//! ```

use core::fmt;

use crate::error::LinkError;

/// Number of primitives known to the linker.
const PRIMITIVE_COUNT: usize = 4;

/// A linkable numeric primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Truncated remainder, exported as `mod`
    Mod,
    /// Cosine
    Cos,
    /// Sine, requires `cos`
    Sin,
    /// Exponential
    Exp,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; PRIMITIVE_COUNT] =
        [Primitive::Mod, Primitive::Cos, Primitive::Sin, Primitive::Exp];

    /// Exported symbol name.
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Mod => "mod",
            Primitive::Cos => "cos",
            Primitive::Sin => "sin",
            Primitive::Exp => "exp",
        }
    }

    /// Look a primitive up by its exported name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|primitive| primitive.name() == name)
    }

    /// Declared signature.
    pub const fn signature(self) -> Signature {
        match self {
            Primitive::Mod => Signature::Binary,
            Primitive::Cos | Primitive::Sin | Primitive::Exp => Signature::Unary,
        }
    }

    /// Primitives that must be linked alongside this one.
    pub const fn requires(self) -> &'static [Primitive] {
        match self {
            Primitive::Sin => &[Primitive::Cos],
            Primitive::Mod | Primitive::Cos | Primitive::Exp => &[],
        }
    }

    /// The implementation behind this primitive.
    pub fn export(self) -> Export {
        match self {
            Primitive::Mod => Export::Binary(tonefill_math::modulo),
            Primitive::Cos => Export::Unary(tonefill_math::cos),
            Primitive::Sin => Export::Unary(tonefill_math::sin),
            Primitive::Exp => Export::Unary(tonefill_math::exp),
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a primitive's function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {
    /// `(f32) -> f32`
    Unary,
    /// `(f32, f32) -> f32`
    Binary,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signature::Unary => f.write_str("(f32) -> f32"),
            Signature::Binary => f.write_str("(f32, f32) -> f32"),
        }
    }
}

/// A linked function pointer.
#[derive(Debug, Clone, Copy)]
pub enum Export {
    /// `(f32) -> f32`
    Unary(fn(f32) -> f32),
    /// `(f32, f32) -> f32`
    Binary(fn(f32, f32) -> f32),
}

impl Export {
    /// Signature of the exported function.
    pub fn signature(&self) -> Signature {
        match self {
            Export::Unary(_) => Signature::Unary,
            Export::Binary(_) => Signature::Binary,
        }
    }
}

/// Collects requested primitives and resolves them into a [`Module`].
#[derive(Debug, Clone, Default)]
pub struct Linker {
    requested: [bool; PRIMITIVE_COUNT],
}

impl Linker {
    /// Create an empty linker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `primitive`. Its requirements are added at link time.
    pub fn include(&mut self, primitive: Primitive) -> &mut Self {
        self.requested[primitive.slot()] = true;
        self
    }

    /// Request a primitive by its exported name.
    pub fn include_name(&mut self, name: &str) -> Result<&mut Self, LinkError> {
        let primitive = Primitive::from_name(name).ok_or(LinkError::UnknownSymbol)?;
        Ok(self.include(primitive))
    }

    /// Resolve every requested primitive and its requirements.
    pub fn link(&self) -> Module {
        let mut module = Module::default();
        for primitive in Primitive::ALL {
            if self.requested[primitive.slot()] {
                module.resolve(primitive);
            }
        }
        module
    }
}

/// A resolved set of primitives in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    // Only `order[..len]` is meaningful; the tail is padding.
    order: [Primitive; PRIMITIVE_COUNT],
    linked: [bool; PRIMITIVE_COUNT],
    len: usize,
}

impl Default for Module {
    fn default() -> Self {
        Self {
            order: Primitive::ALL,
            linked: [false; PRIMITIVE_COUNT],
            len: 0,
        }
    }
}

impl Module {
    fn resolve(&mut self, primitive: Primitive) {
        if self.contains(primitive) {
            return;
        }
        for &required in primitive.requires() {
            self.resolve(required);
        }
        self.order[self.len] = primitive;
        self.linked[primitive.slot()] = true;
        self.len += 1;
    }

    /// Linked primitives; each appears after everything it requires.
    pub fn order(&self) -> &[Primitive] {
        &self.order[..self.len]
    }

    /// Number of linked primitives.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when nothing was linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `primitive` is part of this module.
    pub fn contains(&self, primitive: Primitive) -> bool {
        self.linked[primitive.slot()]
    }

    /// Look up an exported symbol.
    pub fn export(&self, name: &str) -> Result<Export, LinkError> {
        let primitive = Primitive::from_name(name).ok_or(LinkError::UnknownSymbol)?;
        if !self.contains(primitive) {
            return Err(LinkError::NotLinked(primitive));
        }
        Ok(primitive.export())
    }

    /// Look up a `(f32) -> f32` export.
    pub fn unary(&self, name: &str) -> Result<fn(f32) -> f32, LinkError> {
        match self.export(name)? {
            Export::Unary(f) => Ok(f),
            Export::Binary(_) => Err(self.mismatch(name, Signature::Binary)),
        }
    }

    /// Look up a `(f32, f32) -> f32` export.
    pub fn binary(&self, name: &str) -> Result<fn(f32, f32) -> f32, LinkError> {
        match self.export(name)? {
            Export::Binary(f) => Ok(f),
            Export::Unary(_) => Err(self.mismatch(name, Signature::Unary)),
        }
    }

    fn mismatch(&self, name: &str, actual: Signature) -> LinkError {
        match Primitive::from_name(name) {
            Some(primitive) => LinkError::SignatureMismatch { primitive, actual },
            None => LinkError::UnknownSymbol,
        }
    }
}
