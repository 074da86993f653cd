//! Field declarations.

use crate::{DeclHash, Modifiers, TypeUse};

/// Declaration record for a field.
///
/// Fields cannot declare type parameters and cannot serve as a scope in an
/// enclosing chain; a field hash reaching the resolver's enclosing-scope
/// step is a metadata-integrity violation.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declaration hash for identity.
    pub hash: DeclHash,
    /// The type this field is declared on.
    pub declaring_type: DeclHash,
    /// Access and trait modifiers.
    pub modifiers: Modifiers,
    /// The field's type as written. May mention type variables of the
    /// declaring type, each resolved lazily when observed.
    pub field_type: TypeUse,
}

impl FieldDecl {
    /// Create a new field declaration.
    pub fn new(declaring_type: DeclHash, name: impl Into<String>, field_type: TypeUse) -> Self {
        let name = name.into();
        let hash = DeclHash::from_field(declaring_type, &name);
        Self {
            name,
            hash,
            declaring_type,
            modifiers: Modifiers::default(),
            field_type,
        }
    }

    /// Set the modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
