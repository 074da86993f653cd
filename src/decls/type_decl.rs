//! Class-like type declarations.
//!
//! This module provides `TypeDecl` for the type-like constructs of the graph:
//! classes, interfaces, enums, and records. Type declarations are the only
//! constructs that can be lexically nested inside methods and constructors,
//! which is what makes the enclosing-scope priority matter during
//! type-variable resolution.

use std::sync::Arc;

use crate::{DeclHash, Modifiers, TypeParamSpec, TypeVarRef};

/// The flavor of a type-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDeclKind {
    /// A concrete or abstract class.
    Class,
    /// An interface.
    Interface,
    /// An enumeration.
    Enum,
    /// A record.
    Record,
}

/// Declaration record for a class-like type.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Fully qualified name.
    pub name: String,
    /// Declaration hash for identity.
    pub hash: DeclHash,
    /// Class, interface, enum, or record.
    pub kind: TypeDeclKind,
    /// Access and trait modifiers.
    pub modifiers: Modifiers,

    // === Inheritance ===
    /// Superclass hash, if any.
    pub superclass: Option<DeclHash>,
    /// Implemented interface hashes.
    pub interfaces: Vec<DeclHash>,

    // === Lexical nesting ===
    /// The method that lexically contains this type, for local types.
    pub enclosing_method: Option<DeclHash>,
    /// The constructor that lexically contains this type, for local types.
    pub enclosing_constructor: Option<DeclHash>,
    /// The lexically enclosing type, for nested types.
    pub enclosing_type: Option<DeclHash>,

    // === Generics ===
    /// Formal type parameters in declaration order.
    pub type_params: Vec<Arc<TypeVarRef>>,
}

impl TypeDecl {
    /// Create a new type declaration. The hash is computed from the name.
    pub fn new(name: impl Into<String>, kind: TypeDeclKind) -> Self {
        let name = name.into();
        let hash = DeclHash::from_type_name(&name);
        Self {
            name,
            hash,
            kind,
            modifiers: Modifiers::default(),
            superclass: None,
            interfaces: Vec::new(),
            enclosing_method: None,
            enclosing_constructor: None,
            enclosing_type: None,
            type_params: Vec::new(),
        }
    }

    /// Create a class declaration.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeDeclKind::Class)
    }

    /// Create an interface declaration.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeDeclKind::Interface)
    }

    // === Builder Methods ===

    /// Set the modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the superclass.
    pub fn with_superclass(mut self, superclass: DeclHash) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: DeclHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Mark this type as lexically contained in a method.
    pub fn with_enclosing_method(mut self, method: DeclHash) -> Self {
        self.enclosing_method = Some(method);
        self
    }

    /// Mark this type as lexically contained in a constructor.
    pub fn with_enclosing_constructor(mut self, constructor: DeclHash) -> Self {
        self.enclosing_constructor = Some(constructor);
        self
    }

    /// Set the lexically enclosing type.
    pub fn with_enclosing_type(mut self, outer: DeclHash) -> Self {
        self.enclosing_type = Some(outer);
        self
    }

    /// Declare a formal type parameter on this type.
    ///
    /// The spec becomes a formal [`TypeVarRef`] declared at this type's
    /// hash, so the parameter list never contains unresolved references.
    pub fn with_type_param(mut self, spec: TypeParamSpec) -> Self {
        self.type_params
            .push(Arc::new(TypeVarRef::formal(self.hash, spec.name, spec.bounds)));
        self
    }

    /// Formal type parameters in declaration order.
    pub fn type_parameters(&self) -> &[Arc<TypeVarRef>] {
        &self.type_params
    }

    /// Whether this type declares any type parameters.
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// The next enclosing construct to search during resolution.
    ///
    /// Priority is normative: a type nested inside a generic method must
    /// search the method's parameters before the outer type's.
    pub fn next_enclosing(&self) -> Option<DeclHash> {
        self.enclosing_method
            .or(self.enclosing_constructor)
            .or(self.enclosing_type)
    }
}
