//! Deterministic hash-based declaration identity.
//!
//! This module provides [`DeclHash`], a 64-bit hash that uniquely identifies
//! the declarations of the metadata graph: types, methods, constructors, and
//! fields. Unlike sequential IDs, hashes are computed deterministically from
//! names and signatures, enabling:
//!
//! - Forward references (hash computed before registration)
//! - No registration order dependencies
//! - Single map lookups (no secondary name→id maps)
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants to prevent collisions
//! between different declaration kinds (types vs methods vs constructors).
//!
//! # Examples
//!
//! ```
//! use reflect_meta::DeclHash;
//!
//! let list = DeclHash::from_type_name("java.util.List");
//! assert_eq!(list, DeclHash::from_type_name("java.util.List"));
//!
//! // Method hashes include parameter erasures, so overloads stay distinct
//! let int32 = DeclHash::from_type_name("int");
//! let m1 = DeclHash::from_method(list, "add", &[int32]);
//! let m2 = DeclHash::from_method(list, "add", &[]);
//! assert_ne!(m1, m2);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// These constants ensure that different declaration kinds produce distinct
/// hashes even when they share a name (a method named like its class, a
/// field named like a method, and so on).
pub mod hash_constants {
    /// Separator constant mixed between signature components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type declaration hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for method declaration hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor declaration hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Domain marker for field declaration hashes.
    pub const FIELD: u64 = 0x5ea77ffbcdf5f302;

    /// Parameter position mixing constants.
    /// Each parameter position gets a unique constant so parameter order matters.
    pub const PARAM_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];
}

/// A deterministic 64-bit hash identifying a declaration.
///
/// Computed from the qualified name (for types) or owner+name+signature (for
/// members). The same input always produces the same hash, so hashes can be
/// referenced before the declaration itself is registered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct DeclHash(pub u64);

impl DeclHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: DeclHash = DeclHash(0);

    /// Create a hash from a qualified type name.
    ///
    /// The same name always produces the same hash.
    ///
    /// # Examples
    ///
    /// ```
    /// use reflect_meta::DeclHash;
    ///
    /// let a = DeclHash::from_type_name("com.example.Outer");
    /// let b = DeclHash::from_type_name("com.example.Outer");
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub fn from_type_name(name: &str) -> Self {
        DeclHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a method hash from owner type, name, and parameter erasure hashes.
    ///
    /// Different parameter lists produce different hashes, so overloads stay
    /// distinct. Parameter order matters.
    #[inline]
    pub fn from_method(owner: DeclHash, name: &str, param_erasures: &[DeclHash]) -> Self {
        let hash = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        DeclHash(mix_params(hash, param_erasures))
    }

    /// Create a constructor hash from owner type and parameter erasure hashes.
    ///
    /// Constructors carry no name of their own, so they are identified by
    /// owner + parameters.
    #[inline]
    pub fn from_constructor(owner: DeclHash, param_erasures: &[DeclHash]) -> Self {
        let hash = hash_constants::CONSTRUCTOR ^ owner.0;
        DeclHash(mix_params(hash, param_erasures))
    }

    /// Create a field hash from owner type and field name.
    #[inline]
    pub fn from_field(owner: DeclHash, name: &str) -> Self {
        DeclHash(hash_constants::FIELD ^ owner.0 ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Fold parameter erasure hashes into `hash` with position markers.
///
/// Uses wrapping_mul so parameter order matters (not commutative like XOR).
#[inline]
fn mix_params(mut hash: u64, params: &[DeclHash]) -> u64 {
    for (i, param) in params.iter().enumerate() {
        let marker = hash_constants::PARAM_MARKERS
            .get(i)
            .copied()
            .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
        hash = hash.wrapping_mul(hash_constants::SEP).wrapping_add(marker ^ param.0);
    }
    hash
}

impl fmt::Debug for DeclHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclHash({:#018x})", self.0)
    }
}

impl fmt::Display for DeclHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
