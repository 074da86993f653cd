//! Type-variable references and their lazy resolution.
//!
//! This module provides [`TypeVarRef`], a reference to a generic type
//! parameter such as the `T` in `<T extends Comparable<T>>`. A reference is
//! created in one of two modes:
//!
//! - **Formal**: declared directly at its owner, carrying authoritative
//!   bounds. Born resolved; no walk is ever performed.
//! - **Use-site**: encountered somewhere in a signature, carrying only the
//!   name and the construct where it appeared. On first demand for its
//!   bounds or declaring construct, the reference walks outward through the
//!   enclosing-scope chain until a construct formally declares a parameter
//!   of that name, then caches the match.
//!
//! Resolution happens at most once. The cache ([`std::sync::OnceLock`]) is
//! written as a whole, so concurrent first-access at worst performs a
//! redundant walk over the same immutable chain; readers never observe a
//! half-updated state.
//!
//! Bounds are shared, not copied: two use-site references to the same formal
//! variable hold the same bound sequence after resolution. The public
//! [`TypeVarRef::bounds`] accessor clones at the boundary.

use std::fmt;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashSet;
use xxhash_rust::xxh64::xxh64;

use crate::{Annotation, DeclHash, DeclRegistry, ResolveError, TypeUse};

/// The cached outcome of resolution: the declaring construct together with
/// the declared bounds. Always written together, never field-by-field.
#[derive(Debug, Clone)]
pub(crate) struct FormalBinding {
    /// The construct whose type-parameter list contains this variable.
    pub(crate) declaring: DeclHash,
    /// Declared bounds, shared with every reference that resolved here.
    pub(crate) bounds: Arc<[TypeUse]>,
}

/// How a reference came into existence.
#[derive(Debug)]
enum VarOrigin {
    /// Declared at its owner; the binding is authoritative from birth.
    Formal(FormalBinding),
    /// Encountered at `anchor`; the anchor seeds the outward walk and is
    /// retained afterwards for diagnostics only.
    UseSite { anchor: DeclHash },
}

/// A reference to a generic type parameter.
///
/// # Examples
///
/// ```
/// use reflect_meta::{DeclRegistry, MethodDecl, TypeDecl, TypeParamSpec, TypeVarRef};
///
/// let mut registry = DeclRegistry::new();
/// let class = registry
///     .register_type(TypeDecl::class("Box").with_type_param(TypeParamSpec::new("T")))
///     .unwrap();
/// let method = registry
///     .register_method(MethodDecl::new(class, "get", vec![]))
///     .unwrap();
///
/// // `T` referenced inside the method body resolves to the class.
/// let reference = TypeVarRef::use_site(method, "T");
/// assert_eq!(reference.declaring_decl(&registry).unwrap(), class);
/// ```
#[derive(Debug)]
pub struct TypeVarRef {
    name: String,
    origin: VarOrigin,
    resolved: OnceLock<FormalBinding>,
}

impl TypeVarRef {
    /// Create a formal type variable declared at `declaring` with the given
    /// bounds. Requires no resolution.
    pub fn formal(declaring: DeclHash, name: impl Into<String>, bounds: Vec<TypeUse>) -> Self {
        Self {
            name: name.into(),
            origin: VarOrigin::Formal(FormalBinding {
                declaring,
                bounds: Arc::from(bounds),
            }),
            resolved: OnceLock::new(),
        }
    }

    /// Create an unresolved use-site reference encountered at `anchor`.
    pub fn use_site(anchor: DeclHash, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: VarOrigin::UseSite { anchor },
            resolved: OnceLock::new(),
        }
    }

    /// The type-parameter name. Never triggers resolution, never fails.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this reference is already tied to its formal declaration.
    pub fn is_resolved(&self) -> bool {
        matches!(self.origin, VarOrigin::Formal(_)) || self.resolved.get().is_some()
    }

    /// The construct where this reference was encountered, if it was created
    /// as a use-site reference. Diagnostics only; not consulted after
    /// resolution.
    pub fn use_site_decl(&self) -> Option<DeclHash> {
        match self.origin {
            VarOrigin::UseSite { anchor } => Some(anchor),
            VarOrigin::Formal(_) => None,
        }
    }

    /// The construct that formally declares this variable.
    ///
    /// Triggers resolution on first call.
    pub fn declaring_decl(&self, registry: &DeclRegistry) -> Result<DeclHash, ResolveError> {
        Ok(self.resolve(registry)?.declaring)
    }

    /// The declared bounds of this variable, in declaration order.
    ///
    /// Triggers resolution on first call. Returns a fresh copy: mutating the
    /// returned vector does not affect the cache or later calls.
    pub fn bounds(&self, registry: &DeclRegistry) -> Result<Vec<TypeUse>, ResolveError> {
        Ok(self.resolve(registry)?.bounds.to_vec())
    }

    /// Whether `self` and `other` refer to the same formal declaration:
    /// equal names AND equal declaring constructs. Use-site anchors do not
    /// participate, so references from different signatures to the same
    /// parameter compare equal.
    ///
    /// Resolves both sides; either may fail.
    pub fn same_variable(
        &self,
        other: &TypeVarRef,
        registry: &DeclRegistry,
    ) -> Result<bool, ResolveError> {
        if self.name != other.name {
            // Still resolve both sides so a malformed reference surfaces
            // here rather than comparing unequal silently.
            self.resolve(registry)?;
            other.resolve(registry)?;
            return Ok(false);
        }
        Ok(self.resolve(registry)?.declaring == other.resolve(registry)?.declaring)
    }

    /// Hash consistent with [`same_variable`](Self::same_variable):
    /// `31 * hash(name) + hash(declaring)`.
    pub fn identity_hash(&self, registry: &DeclRegistry) -> Result<u64, ResolveError> {
        let binding = self.resolve(registry)?;
        Ok(xxh64(self.name.as_bytes(), 0)
            .wrapping_mul(31)
            .wrapping_add(binding.declaring.as_u64()))
    }

    /// Annotations on this type parameter.
    ///
    /// Always empty; annotation metadata is not modeled.
    pub fn annotations(&self) -> &[Annotation] {
        &[]
    }

    /// Look up an annotation by name.
    ///
    /// Always `None`; annotation metadata is not modeled.
    pub fn annotation(&self, _name: &str) -> Option<&Annotation> {
        None
    }

    /// The cached binding, if this variable is formal or already resolved.
    pub(crate) fn formal_binding(&self) -> Option<&FormalBinding> {
        match &self.origin {
            VarOrigin::Formal(binding) => Some(binding),
            VarOrigin::UseSite { .. } => self.resolved.get(),
        }
    }

    /// The shared bound sequence. Exposed for sharing-parity checks.
    pub(crate) fn shared_bounds(
        &self,
        registry: &DeclRegistry,
    ) -> Result<Arc<[TypeUse]>, ResolveError> {
        Ok(Arc::clone(&self.resolve(registry)?.bounds))
    }

    /// Ensure this reference is resolved, running the scope walk at most
    /// once, and return the cached binding.
    fn resolve(&self, registry: &DeclRegistry) -> Result<&FormalBinding, ResolveError> {
        if let Some(binding) = self.resolved.get() {
            return Ok(binding);
        }
        let binding = match &self.origin {
            VarOrigin::Formal(binding) => binding.clone(),
            VarOrigin::UseSite { anchor } => walk(registry, &self.name, *anchor)?,
        };
        // A concurrent first-access may have raced us here; the walk is a
        // pure function of the immutable chain, so either result is valid.
        Ok(self.resolved.get_or_init(|| binding))
    }
}

/// Search outward from `anchor` for the construct that formally declares a
/// type parameter named `name`.
///
/// First match during the outward walk wins: the nearest enclosing
/// declaration introducing the name is authoritative, which is exactly the
/// shadowing policy of lexical generic scoping.
fn walk(registry: &DeclRegistry, name: &str, anchor: DeclHash) -> Result<FormalBinding, ResolveError> {
    let mut current = anchor;
    let mut visited = FxHashSet::default();
    loop {
        // Enclosing chains are acyclic in a well-formed graph; a revisited
        // hash means the builder wired the nesting links into a loop.
        if !visited.insert(current) {
            return Err(ResolveError::CyclicEnclosingChain {
                decl: current,
                anchor,
            });
        }
        let decl = registry
            .get(current)
            .ok_or(ResolveError::UnknownDecl { hash: current })?;
        if let Some(formal) = decl.type_parameters().iter().find(|v| v.name == name) {
            // Type-parameter lists only contain formal variables; an
            // unresolved entry means the graph was assembled by hand and
            // is inconsistent.
            return match formal.formal_binding() {
                Some(binding) => Ok(binding.clone()),
                None => Err(ResolveError::UnresolvableReference {
                    name: name.to_owned(),
                    anchor,
                }),
            };
        }
        match decl.next_enclosing()? {
            Some(next) => current = next,
            None => {
                return Err(ResolveError::UnresolvableReference {
                    name: name.to_owned(),
                    anchor,
                });
            }
        }
    }
}

/// Prints the variable name verbatim. Never triggers resolution.
impl fmt::Display for TypeVarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
