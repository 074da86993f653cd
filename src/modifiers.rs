//! Declaration modifier flags.

use bitflags::bitflags;

bitflags! {
    /// Access and trait modifiers carried by declarations.
    ///
    /// Purely descriptive metadata - the resolver never consults these.
    ///
    /// # Usage
    ///
    /// ```
    /// use reflect_meta::Modifiers;
    ///
    /// let m = Modifiers::PUBLIC | Modifiers::FINAL;
    /// assert!(m.contains(Modifiers::PUBLIC));
    /// assert!(!m.contains(Modifiers::STATIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        /// Publicly accessible.
        const PUBLIC = 1 << 0;
        /// Accessible only within the declaring construct.
        const PRIVATE = 1 << 1;
        /// Accessible within the declaring construct and its subtypes.
        const PROTECTED = 1 << 2;
        /// Not bound to an instance.
        const STATIC = 1 << 3;
        /// Cannot be overridden or subclassed.
        const FINAL = 1 << 4;
        /// Has no implementation of its own.
        const ABSTRACT = 1 << 5;
        /// Generated by the metadata builder, not present in source.
        const SYNTHETIC = 1 << 6;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::PUBLIC
    }
}
