//! DeclRegistry - the declaration graph.
//!
//! This module provides [`DeclRegistry`], central storage for every
//! declaration in a metadata graph. It provides O(1) lookup by [`DeclHash`]
//! and answers the two questions the type-variable resolver asks: "which
//! type parameters does this construct declare?" and "what is its next
//! enclosing construct?".
//!
//! # Thread Safety
//!
//! `DeclRegistry` is **not thread-safe** by design. In the typical usage
//! pattern:
//!
//! - **Registration phase**: the registry is populated single-threaded while
//!   the metadata builder walks generic signatures.
//!
//! - **Query phase**: afterwards the registry is effectively read-only.
//!   Shared references can be handed to any number of threads; the
//!   resolve-once cache inside [`crate::TypeVarRef`] is written atomically
//!   as a whole, so concurrent first-access at worst repeats a walk over
//!   the same immutable chain.
//!
//! # Example
//!
//! ```
//! use reflect_meta::{DeclRegistry, TypeDecl, TypeParamSpec};
//!
//! let mut registry = DeclRegistry::new();
//! let hash = registry
//!     .register_type(TypeDecl::class("Box").with_type_param(TypeParamSpec::new("T")))
//!     .unwrap();
//!
//! assert!(registry.contains(hash));
//! assert_eq!(registry.type_parameters(hash).unwrap().len(), 1);
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{
    CtorDecl, Decl, DeclHash, FieldDecl, MethodDecl, RegistrationError, TypeDecl, TypeVarRef,
};

/// Central storage for the declarations of a metadata graph.
#[derive(Debug, Default)]
pub struct DeclRegistry {
    /// All declarations by hash.
    decls: FxHashMap<DeclHash, Decl>,
}

impl DeclRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type declaration. Returns its hash.
    pub fn register_type(&mut self, decl: TypeDecl) -> Result<DeclHash, RegistrationError> {
        self.register(Decl::Type(decl))
    }

    /// Register a method declaration. Returns its hash.
    pub fn register_method(&mut self, decl: MethodDecl) -> Result<DeclHash, RegistrationError> {
        self.register(Decl::Method(decl))
    }

    /// Register a constructor declaration. Returns its hash.
    pub fn register_constructor(&mut self, decl: CtorDecl) -> Result<DeclHash, RegistrationError> {
        self.register(Decl::Constructor(decl))
    }

    /// Register a field declaration. Returns its hash.
    pub fn register_field(&mut self, decl: FieldDecl) -> Result<DeclHash, RegistrationError> {
        self.register(Decl::Field(decl))
    }

    fn register(&mut self, decl: Decl) -> Result<DeclHash, RegistrationError> {
        let hash = decl.hash();
        if self.decls.contains_key(&hash) {
            return Err(RegistrationError::Duplicate {
                name: decl.name().to_owned(),
                hash,
            });
        }
        self.decls.insert(hash, decl);
        Ok(hash)
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a declaration by hash.
    pub fn get(&self, hash: DeclHash) -> Option<&Decl> {
        self.decls.get(&hash)
    }

    /// Check if a declaration is registered.
    pub fn contains(&self, hash: DeclHash) -> bool {
        self.decls.contains_key(&hash)
    }

    /// Number of registered declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// The formal type parameters of a declaration, if it is registered.
    pub fn type_parameters(&self, hash: DeclHash) -> Option<&[Arc<TypeVarRef>]> {
        self.decls.get(&hash).map(|decl| decl.type_parameters())
    }

    /// The name of a declaration, if it is registered.
    pub fn decl_name(&self, hash: DeclHash) -> Option<&str> {
        self.decls.get(&hash).map(|decl| decl.name())
    }
}
