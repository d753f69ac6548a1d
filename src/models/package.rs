//! Package declaration value type

use serde::Serialize;

/// A single (name, version) dependency declaration found in a manifest.
///
/// Two packages are equal iff both fields match exactly; no version
/// normalization is performed, so `1.2` and `1.2.0` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Package {
    pub name: String,
    pub version: String,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_requires_both_fields() {
        assert_eq!(Package::new("Foo", "1.0.0"), Package::new("Foo", "1.0.0"));
        assert_ne!(Package::new("Foo", "1.0.0"), Package::new("Foo", "1.0.1"));
        assert_ne!(Package::new("Foo", "1.0.0"), Package::new("Bar", "1.0.0"));
    }

    #[test]
    fn set_deduplicates_identical_pairs() {
        let mut set = HashSet::new();
        set.insert(Package::new("Foo", "1.0.0"));
        set.insert(Package::new("Foo", "1.0.0"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn versions_are_not_normalized() {
        let mut set = HashSet::new();
        set.insert(Package::new("Foo", "1.2"));
        set.insert(Package::new("Foo", "1.2.0"));
        assert_eq!(set.len(), 2);
    }
}
