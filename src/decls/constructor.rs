//! Constructor declarations.

use std::sync::Arc;

use crate::{DeclHash, Modifiers, TypeParamSpec, TypeUse, TypeVarRef};

/// Declaration record for a constructor.
///
/// Constructors carry no name of their own; identity comes from the
/// declaring type and the parameter erasures.
#[derive(Debug, Clone)]
pub struct CtorDecl {
    /// Declaration hash for identity.
    pub hash: DeclHash,
    /// The type this constructor is declared on.
    pub declaring_type: DeclHash,
    /// Access and trait modifiers.
    pub modifiers: Modifiers,
    /// Formal type parameters in declaration order (generic constructors).
    pub type_params: Vec<Arc<TypeVarRef>>,
    /// Parameter types as written.
    pub params: Vec<TypeUse>,
}

impl CtorDecl {
    /// Create a new constructor declaration.
    pub fn new(declaring_type: DeclHash, params: Vec<TypeUse>) -> Self {
        let erasures: Vec<DeclHash> = params.iter().map(|p| p.erasure_hash()).collect();
        let hash = DeclHash::from_constructor(declaring_type, &erasures);
        Self {
            hash,
            declaring_type,
            modifiers: Modifiers::default(),
            type_params: Vec::new(),
            params,
        }
    }

    // === Builder Methods ===

    /// Set the modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Declare a formal type parameter on this constructor.
    pub fn with_type_param(mut self, spec: TypeParamSpec) -> Self {
        self.type_params
            .push(Arc::new(TypeVarRef::formal(self.hash, spec.name, spec.bounds)));
        self
    }

    /// Formal type parameters in declaration order.
    pub fn type_parameters(&self) -> &[Arc<TypeVarRef>] {
        &self.type_params
    }

    /// Whether this is a generic constructor.
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}
