//! Error types for the reflection metadata layer.
//!
//! Two error families exist:
//!
//! - [`ResolveError`] - type-variable resolution failures. These represent
//!   invariant violations in the upstream-supplied metadata graph, not
//!   conditions a caller is expected to recover from. Resolution is
//!   deterministic, so retrying a failed walk cannot succeed.
//! - [`RegistrationError`] - declaration registration failures.
//!
//! [`MetaError`] wraps both for callers that want a single error type.

use thiserror::Error;

use crate::DeclHash;

/// Errors raised by the type-variable scope walk.
///
/// Every variant signals a corrupted or self-inconsistent metadata graph.
/// There is no partial result and no fallback bound set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The walk exhausted the entire enclosing chain without finding a
    /// declaration of the requested type-parameter name.
    #[error("no declaration of type variable '{name}' in the enclosing chain of {anchor}")]
    UnresolvableReference {
        /// The type-parameter name that was searched for.
        name: String,
        /// The construct where the reference was encountered.
        anchor: DeclHash,
    },

    /// The enclosing-scope step reached a declaration kind that cannot
    /// participate in a scope chain (e.g. a field).
    #[error("{kind} declaration {decl} cannot appear in an enclosing-scope chain")]
    UnsupportedConstructKind {
        /// The offending declaration.
        decl: DeclHash,
        /// Human-readable kind name.
        kind: &'static str,
    },

    /// A declaration hash reached by the walk is not present in the registry.
    #[error("declaration {hash} is not registered")]
    UnknownDecl {
        /// The dangling hash.
        hash: DeclHash,
    },

    /// The enclosing chain revisited a declaration. Enclosing chains are
    /// acyclic in any well-formed graph, so the walk would never terminate.
    #[error("enclosing chain of {anchor} cycles back through {decl}")]
    CyclicEnclosingChain {
        /// The declaration the chain revisited.
        decl: DeclHash,
        /// The construct where the reference was encountered.
        anchor: DeclHash,
    },
}

/// Errors raised while registering declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A declaration with the same hash is already registered.
    #[error("declaration '{name}' is already registered as {hash}")]
    Duplicate {
        /// Name of the declaration being registered.
        name: String,
        /// The hash both declarations compute to.
        hash: DeclHash,
    },
}

/// Top-level error wrapper for unified handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaError {
    /// A type-variable resolution failure.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A registration failure.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
