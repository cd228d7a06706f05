//! String-named identifiers with a precomputed hash

use core::fmt;
use core::hash::{Hash, Hasher};
use alloc::boxed::Box;
use alloc::string::String;

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a over the bytes of `name`
#[inline]
pub fn fnv1a(name: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in name.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// A string-based identifier for named resources
///
/// Equality compares the name; the hash is cached so map lookups never
/// rehash the string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NamedId {
    name: Box<str>,
    hash: u64,
}

impl NamedId {
    /// Create a new named ID
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            hash: fnv1a(name),
        }
    }

    /// Get the name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the precomputed hash
    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl Hash for NamedId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for NamedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamedId({:?})", self.name)
    }
}

impl fmt::Display for NamedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for NamedId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NamedId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<NamedId> for String {
    fn from(id: NamedId) -> Self {
        id.name.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_id_equality() {
        let a = NamedId::new("iron_ore");
        let b = NamedId::from("iron_ore");
        let c = NamedId::new("copper_ore");

        assert_eq!(a, b);
        assert_eq!(a.hash_value(), b.hash_value());
        assert_ne!(a, c);
    }

    #[test]
    fn test_fnv_known_values() {
        assert_eq!(fnv1a(""), FNV_OFFSET);
        assert_eq!(fnv1a("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_named_id_round_trips_to_string() {
        let id = NamedId::new("torch");
        assert_eq!(id.name(), "torch");
        assert_eq!(id.to_string(), "torch");
        assert_eq!(String::from(id), "torch");
    }
}
