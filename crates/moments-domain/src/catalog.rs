//! Static catalogs offered by the form: personality traits and relationship types.

use serde::{Deserialize, Serialize};

/// Icon assigned to relationship types typed in by the user.
pub const CUSTOM_RELATIONSHIP_ICON: &str = "👤";

/// One selectable `{emoji, label}` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub emoji: String,
    pub label: String,
}

impl CatalogEntry {
    pub fn new(emoji: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            label: label.into(),
        }
    }

    pub fn display_label(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipCategory {
    Immediate,
    Extended,
    Close,
}

impl RelationshipCategory {
    pub const ALL: [RelationshipCategory; 3] = [
        RelationshipCategory::Immediate,
        RelationshipCategory::Extended,
        RelationshipCategory::Close,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RelationshipCategory::Immediate => "Immediate Family",
            RelationshipCategory::Extended => "Extended Family",
            RelationshipCategory::Close => "Close Relationships",
        }
    }
}

/// A category of relationship types, kept in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipGroup {
    pub category: RelationshipCategory,
    pub types: Vec<CatalogEntry>,
}

/// Read-only catalogs handed to the core when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub traits: Vec<CatalogEntry>,
    pub relationship_groups: Vec<RelationshipGroup>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The catalog shipped with the intake form.
    pub fn standard() -> Self {
        Self {
            traits: entries(STANDARD_TRAITS),
            relationship_groups: vec![
                RelationshipGroup {
                    category: RelationshipCategory::Immediate,
                    types: entries(IMMEDIATE_FAMILY),
                },
                RelationshipGroup {
                    category: RelationshipCategory::Extended,
                    types: entries(EXTENDED_FAMILY),
                },
                RelationshipGroup {
                    category: RelationshipCategory::Close,
                    types: entries(CLOSE_RELATIONSHIPS),
                },
            ],
        }
    }

    pub fn find_trait(&self, label: &str) -> Option<&CatalogEntry> {
        self.traits
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Iterates every relationship type across all groups, in display order.
    pub fn relationship_types(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.relationship_groups
            .iter()
            .flat_map(|group| group.types.iter())
    }
}

fn entries(pairs: &[(&str, &str)]) -> Vec<CatalogEntry> {
    pairs
        .iter()
        .map(|(emoji, label)| CatalogEntry::new(*emoji, *label))
        .collect()
}

const STANDARD_TRAITS: &[(&str, &str)] = &[
    ("🤔", "Curious"),
    ("🌱", "Resilient"),
    ("💝", "Kind"),
    ("🙌", "Supportive"),
    ("🎯", "Determined"),
    ("🫂", "Empathetic"),
    ("✅", "Responsible"),
    ("⌛", "Patient"),
    ("👑", "Confident"),
    ("🤲", "Generous"),
    ("🤝", "Loyal"),
    ("🙏", "Humble"),
    ("🎨", "Creative"),
    ("📋", "Organized"),
    ("🕊️", "Compassionate"),
    ("💯", "Honest"),
    ("💪", "Hardworking"),
    ("🌞", "Optimistic"),
    ("🧠", "Intelligent"),
];

const IMMEDIATE_FAMILY: &[(&str, &str)] = &[
    ("👩", "Mother"),
    ("👨", "Father"),
    ("👦", "Son"),
    ("👧", "Daughter"),
    ("👭", "Sister"),
    ("👬", "Brother"),
    ("💍", "Spouse"),
    ("💖", "Partner"),
];

const EXTENDED_FAMILY: &[(&str, &str)] = &[
    ("👵", "Grandmother"),
    ("👴", "Grandfather"),
    ("👶", "Grandchild"),
    ("👨", "Uncle"),
    ("👩", "Aunt"),
    ("👦", "Nephew"),
    ("👧", "Niece"),
    ("👨", "Cousin"),
];

const CLOSE_RELATIONSHIPS: &[(&str, &str)] = &[
    ("🤝", "Best Friend"),
    ("👥", "Friend"),
    ("🏆", "Mentor"),
    ("🎓", "Colleague"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_three_groups_in_order() {
        let catalog = Catalog::standard();
        let order: Vec<_> = catalog
            .relationship_groups
            .iter()
            .map(|group| group.category)
            .collect();
        assert_eq!(order, RelationshipCategory::ALL.to_vec());
        assert_eq!(catalog.relationship_types().count(), 20);
    }

    #[test]
    fn custom_icon_is_not_a_catalog_icon() {
        let catalog = Catalog::standard();
        assert!(catalog
            .relationship_types()
            .all(|entry| entry.emoji != CUSTOM_RELATIONSHIP_ICON));
    }

    #[test]
    fn find_trait_ignores_case() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.find_trait("kind").map(|entry| entry.label.as_str()),
            Some("Kind")
        );
        assert!(catalog.find_trait("Grumpy").is_none());
    }
}
