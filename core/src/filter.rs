//! Group + free-text filtering over the catalog.

use roster_types::Character;

use crate::catalog::{ALL_GROUP, Catalog, RecordId};

/// Selected group and search query. The visible list is always derived
/// from these two fields and the catalog, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterView {
    selected_role: Option<String>,
    query: String,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_role(&self) -> Option<&str> {
        self.selected_role.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a nav group. "All" clears the role filter. Always clears the query.
    pub fn select_group(&mut self, key: &str) {
        self.selected_role = (key != ALL_GROUP).then(|| key.to_string());
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Whether a record passes both the role and the name filter.
    pub fn matches(&self, record: &Character) -> bool {
        if let Some(role) = &self.selected_role
            && record.role != *role
        {
            return false;
        }
        name_contains(&record.display_name, &self.query)
    }

    /// Records passing the filter, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<(RecordId, &'a Character)> {
        catalog.iter().filter(|(_, r)| self.matches(r)).collect()
    }
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn name_contains(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let records = [
            ("Astra", "Controller"),
            ("Breach", "Initiator"),
            ("Brimstone", "Controller"),
            ("Sage", "Sentinel"),
            ("Skye", "Initiator"),
        ]
        .into_iter()
        .map(|(name, role)| Character {
            display_name: name.to_string(),
            role: role.to_string(),
            ..Default::default()
        })
        .collect();
        Catalog::from_records(records)
    }

    fn visible_names(filter: &FilterView, catalog: &Catalog) -> Vec<String> {
        filter
            .visible(catalog)
            .into_iter()
            .map(|(_, r)| r.display_name.clone())
            .collect()
    }

    #[test]
    fn every_result_contains_query_ignoring_case() {
        let catalog = catalog();
        for query in ["b", "B", "sT", "e", "zzz", "ASTRA"] {
            let mut filter = FilterView::new();
            filter.set_query(query);
            for (_, record) in filter.visible(&catalog) {
                assert!(
                    record.display_name.to_lowercase().contains(&query.to_lowercase()),
                    "{} should contain {query}",
                    record.display_name
                );
            }
        }
    }

    #[test]
    fn query_matches_case_insensitively() {
        let catalog = catalog();
        let mut filter = FilterView::new();
        filter.set_query("BR");
        assert_eq!(visible_names(&filter, &catalog), ["Breach", "Brimstone"]);
    }

    #[test]
    fn all_group_is_the_same_as_no_group() {
        let catalog = catalog();
        let unfiltered = FilterView::new();

        let mut all = FilterView::new();
        all.select_group("Initiator");
        all.select_group(ALL_GROUP);

        assert_eq!(all.selected_role(), None);
        assert_eq!(all, unfiltered);
        assert_eq!(visible_names(&all, &catalog), visible_names(&unfiltered, &catalog));
    }

    #[test]
    fn group_selection_is_subset_of_group() {
        let catalog = catalog();
        for group in catalog.groups() {
            let mut filter = FilterView::new();
            filter.select_group(&group.key);
            filter.set_query("s");
            for (id, _) in filter.visible(&catalog) {
                assert!(group.members.contains(&id));
            }
        }
    }

    #[test]
    fn selecting_group_clears_query() {
        let mut filter = FilterView::new();
        filter.set_query("bri");
        filter.select_group("Controller");
        assert_eq!(filter.query(), "");
        assert_eq!(filter.selected_role(), Some("Controller"));

        filter.set_query("ast");
        filter.select_group(ALL_GROUP);
        assert_eq!(filter.query(), "");
    }

    #[test]
    fn preserves_catalog_order() {
        let catalog = catalog();
        let mut filter = FilterView::new();
        filter.select_group("Initiator");
        assert_eq!(visible_names(&filter, &catalog), ["Breach", "Skye"]);
    }
}
