//! Step 3 relationship list editing and the searchable type picker.

use moments_domain::{Catalog, CatalogEntry, Relationship, RelationshipCategory};

/// Index-addressed edits over the step 3 relationship list.
///
/// Every operation reports whether it changed anything; out-of-range indices
/// are silently ignored.
pub struct RelationshipEditor<'a> {
    entries: &'a mut Vec<Relationship>,
}

impl<'a> RelationshipEditor<'a> {
    pub fn new(entries: &'a mut Vec<Relationship>) -> Self {
        Self { entries }
    }

    /// Appends a blank entry and returns its index.
    pub fn add(&mut self) -> usize {
        self.entries.push(Relationship::blank());
        self.entries.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_name(&mut self, index: usize, name: &str) -> bool {
        self.with_entry(index, |entry| entry.name = name.to_string())
    }

    pub fn toggle_deceased(&mut self, index: usize) -> bool {
        self.with_entry(index, |entry| entry.deceased = !entry.deceased)
    }

    pub fn assign(&mut self, index: usize, entry: &CatalogEntry) -> bool {
        self.with_entry(index, |rel| rel.assign_type(entry))
    }

    pub fn assign_custom(&mut self, index: usize, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.with_entry(index, |rel| rel.assign_custom_type(label))
    }

    /// Synthesizes the blank placeholder row shown when the list is empty.
    pub fn ensure_placeholder(&mut self) -> bool {
        if self.entries.is_empty() {
            self.entries.push(Relationship::blank());
            true
        } else {
            false
        }
    }

    fn with_entry(&mut self, index: usize, edit: impl FnOnce(&mut Relationship)) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                edit(entry);
                true
            }
            None => false,
        }
    }
}

/// Open type selector, scoped to one relationship row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePicker {
    pub index: usize,
    pub query: String,
}

impl TypePicker {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            query: String::new(),
        }
    }

    pub fn view(&self, catalog: &Catalog) -> TypePickerView {
        TypePickerView::filter(self.index, &self.query, catalog)
    }
}

/// A choice offered by the type picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeOption {
    Catalog(CatalogEntry),
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroupView {
    pub category: RelationshipCategory,
    pub title: &'static str,
    pub entries: Vec<CatalogEntry>,
}

/// Filtered contents of the type picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePickerView {
    pub index: usize,
    pub query: String,
    pub groups: Vec<TypeGroupView>,
    /// Offered only when the query is non-empty and nothing matched.
    pub custom: Option<String>,
}

impl TypePickerView {
    pub fn filter(index: usize, query: &str, catalog: &Catalog) -> Self {
        let needle = query.trim().to_lowercase();
        let groups: Vec<TypeGroupView> = catalog
            .relationship_groups
            .iter()
            .filter_map(|group| {
                let entries: Vec<CatalogEntry> = group
                    .types
                    .iter()
                    .filter(|entry| entry.label.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                (!entries.is_empty()).then(|| TypeGroupView {
                    category: group.category,
                    title: group.category.label(),
                    entries,
                })
            })
            .collect();
        let custom = (groups.is_empty() && !needle.is_empty()).then(|| query.trim().to_string());
        Self {
            index,
            query: query.to_string(),
            groups,
            custom,
        }
    }

    /// Visible options in display order; position `n - 1` is option `n`.
    pub fn options(&self) -> Vec<TypeOption> {
        let mut options: Vec<TypeOption> = self
            .groups
            .iter()
            .flat_map(|group| group.entries.iter().cloned().map(TypeOption::Catalog))
            .collect();
        if let Some(custom) = &self.custom {
            options.push(TypeOption::Custom(custom.clone()));
        }
        options
    }

    /// Resolves a 1-based option number.
    pub fn option(&self, number: usize) -> Option<TypeOption> {
        number
            .checked_sub(1)
            .and_then(|position| self.options().into_iter().nth(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_preserve_order() {
        let mut list = Vec::new();
        let mut editor = RelationshipEditor::new(&mut list);
        assert_eq!(editor.add(), 0);
        editor.add();
        editor.add();
        editor.set_name(0, "Ada");
        editor.set_name(2, "Grace");
        assert!(editor.remove(1));
        assert!(!editor.remove(7));
        let names: Vec<_> = list.iter().map(|rel| rel.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[test]
    fn placeholder_only_when_empty() {
        let mut list = Vec::new();
        let mut editor = RelationshipEditor::new(&mut list);
        assert!(editor.ensure_placeholder());
        assert!(!editor.ensure_placeholder());
        assert_eq!(list, vec![Relationship::blank()]);
    }

    #[test]
    fn toggle_deceased_flips() {
        let mut list = vec![Relationship::blank()];
        let mut editor = RelationshipEditor::new(&mut list);
        assert!(editor.toggle_deceased(0));
        assert!(!editor.toggle_deceased(3));
        assert!(list[0].deceased);
    }

    #[test]
    fn search_is_case_insensitive_and_hides_empty_groups() {
        let catalog = Catalog::standard();
        let view = TypePickerView::filter(0, "MOTH", &catalog);
        assert!(view.custom.is_none());
        assert!(!view.groups.is_empty());
        assert!(view
            .groups
            .iter()
            .all(|group| group.entries.iter().all(|e| e.label.to_lowercase().contains("moth"))));
        assert!(view.groups.len() < catalog.relationship_groups.len());
    }

    #[test]
    fn blank_query_lists_everything_without_custom() {
        let catalog = Catalog::standard();
        let view = TypePickerView::filter(0, "", &catalog);
        assert_eq!(view.groups.len(), 3);
        assert_eq!(view.options().len(), catalog.relationship_types().count());
    }

    #[test]
    fn unmatched_query_offers_custom_type() {
        let catalog = Catalog::standard();
        let view = TypePickerView::filter(0, "Godparent", &catalog);
        assert!(view.groups.is_empty());
        assert_eq!(view.option(1), Some(TypeOption::Custom("Godparent".into())));
        assert_eq!(view.option(0), None);

        let mut list = vec![Relationship::blank()];
        RelationshipEditor::new(&mut list).assign_custom(0, "Godparent");
        assert_eq!(list[0].icon, moments_domain::CUSTOM_RELATIONSHIP_ICON);
    }
}
