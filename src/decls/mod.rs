//! Declaration records of the metadata graph.
//!
//! This module provides the declaration types stored in the registry:
//!
//! - [`Decl`] - unified enum wrapping all declaration kinds
//! - [`TypeDecl`] - class-like types (class, interface, enum, record)
//! - [`MethodDecl`] - methods
//! - [`CtorDecl`] - constructors
//! - [`FieldDecl`] - fields
//!
//! Supporting types:
//! - [`TypeParamSpec`] - registration-time type-parameter specification
//! - [`Annotation`] - annotation records

mod common;
mod constructor;
mod decl;
mod field;
mod method;
mod type_decl;

// Common member types
pub use common::{Annotation, TypeParamSpec};

// Individual declaration types
pub use constructor::CtorDecl;
pub use field::FieldDecl;
pub use method::MethodDecl;
pub use type_decl::{TypeDecl, TypeDeclKind};

// Unified declaration enum
pub use decl::Decl;
