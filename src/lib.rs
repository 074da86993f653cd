//! Reflection metadata layer with lazy generic type-variable resolution.
//!
//! This crate models the generic half of a reflection metadata graph:
//! declarations (types, methods, constructors, fields) identified by
//! deterministic hashes, and type-variable references that tie use sites of
//! a type-parameter name back to the formal declaration introducing it.
//!
//! The interesting piece is [`TypeVarRef`]. A reference created at a use
//! site knows only its name and the construct where it appeared; on first
//! demand for its bounds or its declaring construct it walks outward through
//! the enclosing-scope chain (method/constructor → type → outer type) until
//! a construct formally declares a parameter of that name, then caches the
//! match forever. Bounds may themselves mention type variables - including
//! the variable being resolved, as in `<T extends Comparable<T>>` - and each
//! embedded reference resolves lazily and individually, so cyclic bounds
//! never recurse.
//!
//! # Example
//!
//! ```
//! use reflect_meta::{DeclRegistry, MethodDecl, TypeDecl, TypeParamSpec, TypeVarRef};
//!
//! let mut registry = DeclRegistry::new();
//! let class = registry
//!     .register_type(TypeDecl::class("A"))
//!     .unwrap();
//! // A generic method <T> on a non-generic class.
//! let method = registry
//!     .register_method(MethodDecl::new(class, "m", vec![]).with_type_param(TypeParamSpec::new("T")))
//!     .unwrap();
//!
//! // `T` observed inside the method resolves to the method, not the class.
//! let reference = TypeVarRef::use_site(method, "T");
//! assert_eq!(reference.declaring_decl(&registry).unwrap(), method);
//! ```

mod decl_hash;
mod decls;
mod error;
mod modifiers;
mod registry;
mod type_use;
mod type_var;

// Identity
pub use decl_hash::{DeclHash, hash_constants};

// Declarations
pub use decls::{
    Annotation, CtorDecl, Decl, FieldDecl, MethodDecl, TypeDecl, TypeDeclKind, TypeParamSpec,
};

// Errors
pub use error::{MetaError, RegistrationError, ResolveError};

// Modifier flags
pub use modifiers::Modifiers;

// Registry
pub use registry::DeclRegistry;

// Type occurrences and type variables
pub use type_use::TypeUse;
pub use type_var::TypeVarRef;
