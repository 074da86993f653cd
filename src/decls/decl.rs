//! Unified declaration enum.

use std::sync::Arc;

use crate::{CtorDecl, DeclHash, FieldDecl, MethodDecl, ResolveError, TypeDecl, TypeVarRef};

/// A declaration in the metadata graph.
///
/// A closed set of construct kinds; the resolver dispatches over it
/// exhaustively instead of inspecting runtime types.
#[derive(Debug, Clone)]
pub enum Decl {
    /// A class-like type.
    Type(TypeDecl),
    /// A method.
    Method(MethodDecl),
    /// A constructor.
    Constructor(CtorDecl),
    /// A field. Never a scope for type parameters.
    Field(FieldDecl),
}

impl Decl {
    /// The declaration's identity hash.
    pub fn hash(&self) -> DeclHash {
        match self {
            Decl::Type(decl) => decl.hash,
            Decl::Method(decl) => decl.hash,
            Decl::Constructor(decl) => decl.hash,
            Decl::Field(decl) => decl.hash,
        }
    }

    /// The declaration's name. Constructors report `<init>`.
    pub fn name(&self) -> &str {
        match self {
            Decl::Type(decl) => &decl.name,
            Decl::Method(decl) => &decl.name,
            Decl::Constructor(_) => "<init>",
            Decl::Field(decl) => &decl.name,
        }
    }

    /// Human-readable kind name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Type(_) => "type",
            Decl::Method(_) => "method",
            Decl::Constructor(_) => "constructor",
            Decl::Field(_) => "field",
        }
    }

    /// Formal type parameters declared directly on this construct.
    pub fn type_parameters(&self) -> &[Arc<TypeVarRef>] {
        match self {
            Decl::Type(decl) => decl.type_parameters(),
            Decl::Method(decl) => decl.type_parameters(),
            Decl::Constructor(decl) => decl.type_parameters(),
            Decl::Field(_) => &[],
        }
    }

    /// The next enclosing construct in the scope chain, or `None` at the
    /// outermost type.
    ///
    /// - Types: enclosing method, else enclosing constructor, else
    ///   enclosing type.
    /// - Methods and constructors: the declaring type.
    /// - Fields: cannot participate in a scope chain.
    pub fn next_enclosing(&self) -> Result<Option<DeclHash>, ResolveError> {
        match self {
            Decl::Type(decl) => Ok(decl.next_enclosing()),
            Decl::Method(decl) => Ok(Some(decl.declaring_type)),
            Decl::Constructor(decl) => Ok(Some(decl.declaring_type)),
            Decl::Field(decl) => Err(ResolveError::UnsupportedConstructKind {
                decl: decl.hash,
                kind: "field",
            }),
        }
    }
}

impl From<TypeDecl> for Decl {
    fn from(decl: TypeDecl) -> Self {
        Decl::Type(decl)
    }
}

impl From<MethodDecl> for Decl {
    fn from(decl: MethodDecl) -> Self {
        Decl::Method(decl)
    }
}

impl From<CtorDecl> for Decl {
    fn from(decl: CtorDecl) -> Self {
        Decl::Constructor(decl)
    }
}

impl From<FieldDecl> for Decl {
    fn from(decl: FieldDecl) -> Self {
        Decl::Field(decl)
    }
}
