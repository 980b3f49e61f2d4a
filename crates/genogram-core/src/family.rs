//! Family data model consumed by the layout engine.
//!
//! A [`GenogramData`] is two ordered sequences: the [`Person`]s of the
//! family and the [`Relationship`]s between them. Both orders matter to the
//! layout. Relationships are processed in sequence to build generation tiers,
//! and people are swept in sequence to place anyone no relationship reached.
//!
//! References between the two (partners and children) are plain [`Id`]s and
//! may dangle. Consumers resolve them through [`GenogramData::people_by_id`]
//! and skip what does not resolve.

use std::collections::HashMap;

use serde::Deserialize;

use crate::identifier::Id;

/// Sex marker of a person, used only to pick the rendered symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// A member of the family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Person {
    id: Id,
    name: String,
    sex: Sex,
}

impl Person {
    /// Creates a new person.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sex,
        }
    }

    /// Returns the unique identifier of this person.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sex marker.
    pub fn sex(&self) -> Sex {
        self.sex
    }
}

/// A partnership between two people together with their children.
///
/// Partner order is arbitrary: partner A is placed first and partner B to
/// its right.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relationship {
    id: Id,
    partner_a: Id,
    partner_b: Id,
    #[serde(default)]
    children: Vec<Id>,
}

impl Relationship {
    /// Creates a new relationship between `partner_a` and `partner_b`.
    pub fn new(id: impl Into<Id>, partner_a: impl Into<Id>, partner_b: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            partner_a: partner_a.into(),
            partner_b: partner_b.into(),
            children: Vec::new(),
        }
    }

    /// Sets the ordered list of children (builder style).
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn partner_a(&self) -> Id {
        self.partner_a
    }

    pub fn partner_b(&self) -> Id {
        self.partner_b
    }

    /// Returns the child references in their declared order, including any
    /// that do not resolve to a person.
    pub fn children(&self) -> &[Id] {
        &self.children
    }
}

/// The full dataset handed to the layout engine.
///
/// # Examples
///
/// ```
/// use genogram_core::family::{GenogramData, Person, Relationship, Sex};
///
/// let data = GenogramData::new(
///     vec![
///         Person::new("a", "Adam", Sex::Male),
///         Person::new("b", "Beth", Sex::Female),
///         Person::new("c", "Cleo", Sex::Female),
///     ],
///     vec![Relationship::new("r1", "a", "b").with_children(["c"])],
/// );
///
/// assert_eq!(data.people().len(), 3);
/// assert!(data.people_by_id().contains_key(&"c".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenogramData {
    #[serde(default)]
    people: Vec<Person>,
    #[serde(default)]
    relationships: Vec<Relationship>,
}

impl GenogramData {
    pub fn new(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self {
            people,
            relationships,
        }
    }

    /// Returns the people in dataset order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the relationships in dataset order.
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Returns `true` if the dataset has no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Builds a lookup table from identifier to person.
    ///
    /// When two people share an identifier the later one wins the lookup.
    pub fn people_by_id(&self) -> HashMap<Id, &Person> {
        self.people.iter().map(|person| (person.id, person)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_defaults_to_no_children() {
        let rel = Relationship::new("r", "a", "b");
        assert!(rel.children().is_empty());
        assert_eq!(rel.partner_a(), "a");
        assert_eq!(rel.partner_b(), "b");
    }

    #[test]
    fn test_relationship_children_keep_order() {
        let rel = Relationship::new("r", "a", "b").with_children(["z", "y", "x"]);
        let names: Vec<String> = rel.children().iter().map(Id::to_string).collect();
        assert_eq!(names, ["z", "y", "x"]);
    }

    #[test]
    fn test_people_by_id_resolves_known_people_only() {
        let data = GenogramData::new(vec![Person::new("p1", "Pat", Sex::Female)], vec![]);
        let index = data.people_by_id();

        assert_eq!(index.get(&Id::new("p1")).map(|p| p.name()), Some("Pat"));
        assert!(!index.contains_key(&Id::new("ghost")));
    }

    #[test]
    fn test_empty_dataset() {
        assert!(GenogramData::default().is_empty());
    }

    #[test]
    fn test_deserialize_dataset() {
        let source = r#"
            [[people]]
            id = "a"
            name = "Adam"
            sex = "male"

            [[people]]
            id = "b"
            name = "Beth"
            sex = "female"

            [[relationships]]
            id = "r1"
            partner_a = "a"
            partner_b = "b"
            children = ["c"]

            [[relationships]]
            id = "r2"
            partner_a = "a"
            partner_b = "x"
        "#;

        let data: GenogramData = toml::from_str(source).unwrap();

        assert_eq!(data.people().len(), 2);
        assert_eq!(data.people()[0].sex(), Sex::Male);
        assert_eq!(data.people()[1].sex(), Sex::Female);
        assert_eq!(data.relationships()[0].children(), &[Id::new("c")]);
        assert!(data.relationships()[1].children().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_sex() {
        let source = r#"
            [[people]]
            id = "a"
            name = "Adam"
            sex = "unknown"
        "#;

        assert!(toml::from_str::<GenogramData>(source).is_err());
    }
}
