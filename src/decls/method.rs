//! Method declarations.

use std::sync::Arc;

use crate::{DeclHash, Modifiers, TypeParamSpec, TypeUse, TypeVarRef};

/// Declaration record for a method.
///
/// The hash incorporates the declaring type, the name, and the parameter
/// erasures, so overloads are distinct declarations.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Declaration hash for identity.
    pub hash: DeclHash,
    /// The type this method is declared on.
    pub declaring_type: DeclHash,
    /// Access and trait modifiers.
    pub modifiers: Modifiers,
    /// Formal type parameters in declaration order (generic methods).
    pub type_params: Vec<Arc<TypeVarRef>>,
    /// Parameter types as written.
    pub params: Vec<TypeUse>,
    /// Return type as written; `None` for `void`.
    pub return_type: Option<TypeUse>,
}

impl MethodDecl {
    /// Create a new method declaration.
    pub fn new(declaring_type: DeclHash, name: impl Into<String>, params: Vec<TypeUse>) -> Self {
        let name = name.into();
        let erasures: Vec<DeclHash> = params.iter().map(|p| p.erasure_hash()).collect();
        let hash = DeclHash::from_method(declaring_type, &name, &erasures);
        Self {
            name,
            hash,
            declaring_type,
            modifiers: Modifiers::default(),
            type_params: Vec::new(),
            params,
            return_type: None,
        }
    }

    // === Builder Methods ===

    /// Set the modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the return type.
    pub fn with_return_type(mut self, return_type: TypeUse) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// Declare a formal type parameter on this method.
    pub fn with_type_param(mut self, spec: TypeParamSpec) -> Self {
        self.type_params
            .push(Arc::new(TypeVarRef::formal(self.hash, spec.name, spec.bounds)));
        self
    }

    /// Formal type parameters in declaration order.
    pub fn type_parameters(&self) -> &[Arc<TypeVarRef>] {
        &self.type_params
    }

    /// Whether this is a generic method.
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}
