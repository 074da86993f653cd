//! Type occurrences in signatures and bounds.
//!
//! This module provides [`TypeUse`], the crate's model of a type as it
//! occurs in a signature: a field type, a parameter type, or a type-variable
//! bound. It captures what was written at the use site - a name, possibly
//! with type arguments or array suffixes - not a resolved type object.
//!
//! A [`TypeUse::Variable`] embeds a [`TypeVarRef`] that resolves lazily and
//! individually. This is what allows self-referential bounds like
//! `T extends Comparable<T>` to be represented without eager recursion: the
//! inner `T` is only resolved when that bound is itself inspected.

use std::fmt;
use std::sync::Arc;

use crate::{DeclHash, TypeVarRef};

/// A type as it occurs in a signature or bound.
#[derive(Debug, Clone)]
pub enum TypeUse {
    /// A non-generic named type, e.g. `java.lang.String`.
    Concrete(String),

    /// A parameterized type, e.g. `Comparable<T>`.
    Parameterized {
        /// The generic type's name, e.g. `Comparable`.
        base: String,
        /// Type arguments in declaration order.
        args: Arc<[TypeUse]>,
    },

    /// An occurrence of a type variable, e.g. the `T` in `Comparable<T>`.
    ///
    /// Resolved lazily when observed, never eagerly during the enclosing
    /// resolution of the variable whose bound contains it.
    Variable(Arc<TypeVarRef>),

    /// An array type, e.g. `T[]` or `String[]`.
    Array(Arc<TypeUse>),
}

impl TypeUse {
    /// Create a concrete named type use.
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeUse::Concrete(name.into())
    }

    /// Create a parameterized type use.
    pub fn parameterized(base: impl Into<String>, args: Vec<TypeUse>) -> Self {
        TypeUse::Parameterized {
            base: base.into(),
            args: Arc::from(args),
        }
    }

    /// Create a type-variable occurrence.
    pub fn variable(var: Arc<TypeVarRef>) -> Self {
        TypeUse::Variable(var)
    }

    /// Create an array type use with the given component type.
    pub fn array(component: TypeUse) -> Self {
        TypeUse::Array(Arc::new(component))
    }

    /// Check if this use is (or contains, for arrays) a type variable.
    pub fn mentions_variable(&self) -> bool {
        match self {
            TypeUse::Concrete(_) => false,
            TypeUse::Parameterized { args, .. } => args.iter().any(|a| a.mentions_variable()),
            TypeUse::Variable(_) => true,
            TypeUse::Array(component) => component.mentions_variable(),
        }
    }

    /// Get the embedded type variable, if this use is one.
    pub fn as_variable(&self) -> Option<&Arc<TypeVarRef>> {
        match self {
            TypeUse::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// The erased identity of this use, for overload-distinguishing hashes.
    ///
    /// Parameterized types erase to their base, variables to their name,
    /// arrays to their component erasure re-marked as an array.
    pub fn erasure_hash(&self) -> DeclHash {
        match self {
            TypeUse::Concrete(name) => DeclHash::from_type_name(name),
            TypeUse::Parameterized { base, .. } => DeclHash::from_type_name(base),
            TypeUse::Variable(var) => DeclHash::from_type_name(var.name()),
            TypeUse::Array(component) => {
                DeclHash(component.erasure_hash().as_u64().rotate_left(1))
            }
        }
    }
}

/// Structural equality on the written form.
///
/// Variables compare by name only; this never triggers resolution. Use
/// [`TypeVarRef::same_variable`] for resolved identity.
impl PartialEq for TypeUse {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeUse::Concrete(a), TypeUse::Concrete(b)) => a == b,
            (
                TypeUse::Parameterized { base: a, args: x },
                TypeUse::Parameterized { base: b, args: y },
            ) => a == b && x == y,
            (TypeUse::Variable(a), TypeUse::Variable(b)) => a.name() == b.name(),
            (TypeUse::Array(a), TypeUse::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TypeUse {}

/// Renders source-like text (`Comparable<T>`, `T[]`) without resolving.
impl fmt::Display for TypeUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeUse::Concrete(name) => f.write_str(name),
            TypeUse::Parameterized { base, args } => {
                f.write_str(base)?;
                f.write_str("<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeUse::Variable(var) => f.write_str(var.name()),
            TypeUse::Array(component) => write!(f, "{}[]", component),
        }
    }
}
