//! Common declaration member types.
//!
//! Smaller structures used within the main declaration types: annotation
//! records and type-parameter specifications.

use crate::TypeUse;

/// An annotation attached to a declaration.
///
/// Carried for surface completeness; the resolution core never reads these
/// and [`crate::TypeVarRef`]'s annotation accessors always report none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Annotation type name, e.g. `Deprecated`.
    pub name: String,
    /// Element name/value pairs as written.
    pub elements: Vec<(String, String)>,
}

impl Annotation {
    /// Create a marker annotation with no elements.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Add an element.
    pub fn with_element(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements.push((key.into(), value.into()));
        self
    }
}

/// Specification of a formal type parameter, used at registration time.
///
/// Declaration builders turn a spec into a formal [`crate::TypeVarRef`]
/// declared at the owning construct, so type-parameter lists only ever
/// contain formal variables.
///
/// # Examples
///
/// ```
/// use reflect_meta::{TypeParamSpec, TypeUse};
///
/// // <T extends Comparable>
/// let spec = TypeParamSpec::new("T").with_bound(TypeUse::concrete("Comparable"));
/// assert_eq!(spec.name, "T");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParamSpec {
    /// Parameter name, e.g. `T`.
    pub name: String,
    /// Declared bounds in order.
    pub bounds: Vec<TypeUse>,
}

impl TypeParamSpec {
    /// Create an unbounded type-parameter spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Add a bound.
    pub fn with_bound(mut self, bound: TypeUse) -> Self {
        self.bounds.push(bound);
        self
    }
}
