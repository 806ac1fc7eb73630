//! Relationship entries edited in step 3.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, CUSTOM_RELATIONSHIP_ICON};

/// A significant person in the life being remembered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Relationship {
    pub name: String,
    #[serde(rename = "type")]
    pub relationship_type: String,
    #[serde(rename = "emoji")]
    pub icon: String,
    pub deceased: bool,
}

impl Relationship {
    /// A blank row, as produced by "Add family member".
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn has_type(&self) -> bool {
        !self.relationship_type.is_empty()
    }

    /// Assigns a catalog type verbatim.
    pub fn assign_type(&mut self, entry: &CatalogEntry) {
        self.relationship_type = entry.label.clone();
        self.icon = entry.emoji.clone();
    }

    /// Assigns a user-typed type with the generic fallback icon.
    pub fn assign_custom_type(&mut self, label: impl Into<String>) {
        self.relationship_type = label.into();
        self.icon = CUSTOM_RELATIONSHIP_ICON.to_string();
    }

    /// Text shown on the type selector button.
    pub fn type_display(&self) -> Option<String> {
        if self.has_type() {
            Some(format!("{} {}", self.icon, self.relationship_type))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_original_field_names() {
        let mut rel = Relationship::blank();
        rel.name = "Ada".into();
        rel.assign_type(&CatalogEntry::new("👩", "Mother"));
        let json = serde_json::to_value(&rel).expect("serialize");
        assert_eq!(json["type"], "Mother");
        assert_eq!(json["emoji"], "👩");
        assert_eq!(json["deceased"], false);
    }

    #[test]
    fn custom_type_uses_fallback_icon() {
        let mut rel = Relationship::blank();
        rel.assign_custom_type("Godmother");
        assert_eq!(rel.icon, CUSTOM_RELATIONSHIP_ICON);
        assert_eq!(rel.type_display().as_deref(), Some("👤 Godmother"));
    }
}
