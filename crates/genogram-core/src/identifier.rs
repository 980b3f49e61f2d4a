//! Identifier management using string interning
//!
//! People and relationships are referenced by string identifiers throughout a
//! dataset. The [`Id`] type interns those strings once so that lookups,
//! hashing and equality checks during layout are plain integer operations.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Interned identifier of a person or relationship.
///
/// # Examples
///
/// ```
/// use genogram_core::identifier::Id;
///
/// let alice = Id::new("alice");
/// let again: Id = "alice".into();
///
/// assert_eq!(alice, again);
/// assert_eq!(alice, "alice");
/// assert_eq!(alice.to_string(), "alice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_interner(|interner| {
            let str_value = interner
                .resolve(self.0)
                .expect("Symbol should exist in interner");
            write!(f, "{str_value}")
        })
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_same_name_same_id() {
        assert_eq!(Id::new("grandma"), Id::new("grandma"));
        assert_ne!(Id::new("grandma"), Id::new("grandpa"));
    }

    #[test]
    fn test_display_round_trips_name() {
        let id = Id::new("uncle_bob");
        assert_eq!(format!("{id}"), "uncle_bob");
    }

    #[test]
    fn test_str_comparison() {
        let id = Id::new("cousin");
        assert!(id == "cousin");
        assert!(id != "niece");
    }

    #[test]
    fn test_hash_set_membership() {
        let mut ids = HashSet::new();
        ids.insert(Id::new("a"));
        ids.insert(Id::new("a"));
        ids.insert(Id::new("b"));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_deserialize_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            id: Id,
        }

        let wrapper: Wrapper = toml::from_str(r#"id = "sister""#).unwrap();
        assert_eq!(wrapper.id, "sister");
    }
}
