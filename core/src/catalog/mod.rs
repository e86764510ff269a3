//! Catalog index: the sorted record list plus its role groups.
//!
//! A catalog is built wholesale from one successful load and never mutated
//! afterwards. Records are addressed by [`RecordId`], their position in the
//! sorted list, so two records with the same display name stay distinct.

mod sort;

pub use sort::{locale_cmp, sort_records};

use hashbrown::HashMap;
use roster_types::Character;

/// Synthetic group containing every record.
pub const ALL_GROUP: &str = "All";

/// Position of a record in the sorted catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

/// A bucket of records sharing a role, or the synthetic "All" bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub members: Vec<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Character>,
    /// Role groups in first-seen order, "All" last
    groups: Vec<Group>,
}

impl Catalog {
    /// Catalog with no records and no groups (the state before or after a failed load).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Group already-sorted records by role and append the "All" group.
    ///
    /// A record whose role is literally "All" is only reachable through the
    /// synthetic group.
    pub fn from_records(records: Vec<Character>) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        {
            // Borrows `records`; must be gone before the move below
            let mut by_role: HashMap<&str, usize> = HashMap::new();

            for (idx, record) in records.iter().enumerate() {
                if record.role == ALL_GROUP {
                    continue;
                }
                let slot = *by_role.entry(record.role.as_str()).or_insert_with(|| {
                    groups.push(Group {
                        key: record.role.clone(),
                        members: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[slot].members.push(RecordId(idx));
            }
        }

        groups.push(Group {
            key: ALL_GROUP.to_string(),
            members: (0..records.len()).map(RecordId).collect(),
        });

        Self { records, groups }
    }

    pub fn records(&self) -> &[Character] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Character> {
        self.records.get(id.0)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Records of a group, in display order
    pub fn group_records(&self, key: &str) -> Option<Vec<&Character>> {
        let group = self.group(key)?;
        Some(group.members.iter().filter_map(|id| self.get(*id)).collect())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records with their ids, in display order
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Character)> {
        self.records.iter().enumerate().map(|(i, r)| (RecordId(i), r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, role: &str) -> Character {
        Character {
            display_name: name.to_string(),
            role: role.to_string(),
            ..Default::default()
        }
    }

    fn names(records: &[&Character]) -> Vec<String> {
        records.iter().map(|r| r.display_name.clone()).collect()
    }

    #[test]
    fn groups_by_role_with_all_last() {
        let catalog = Catalog::from_records(vec![
            record("Astra", "Controller"),
            record("Breach", "Initiator"),
            record("Brimstone", "Controller"),
        ]);

        let keys: Vec<_> = catalog.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["Controller", "Initiator", "All"]);

        assert_eq!(names(&catalog.group_records("Controller").unwrap()), ["Astra", "Brimstone"]);
        assert_eq!(names(&catalog.group_records("Initiator").unwrap()), ["Breach"]);
        assert_eq!(
            names(&catalog.group_records(ALL_GROUP).unwrap()),
            ["Astra", "Breach", "Brimstone"]
        );
    }

    #[test]
    fn empty_catalog_has_no_groups() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.groups().is_empty());
    }

    #[test]
    fn loaded_empty_list_still_has_all_group() {
        let catalog = Catalog::from_records(Vec::new());
        assert_eq!(catalog.groups().len(), 1);
        assert_eq!(catalog.groups()[0].key, ALL_GROUP);
        assert!(catalog.groups()[0].members.is_empty());
    }

    #[test]
    fn role_named_all_does_not_shadow_synthetic_group() {
        let catalog = Catalog::from_records(vec![record("Astra", "All"), record("Breach", "Initiator")]);

        let all: Vec<_> = catalog.groups().iter().filter(|g| g.key == ALL_GROUP).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].members, vec![RecordId(0), RecordId(1)]);
    }

    #[test]
    fn duplicate_names_keep_distinct_ids() {
        let catalog = Catalog::from_records(vec![record("Sage", "Sentinel"), record("Sage", "Sentinel")]);
        let group = catalog.group("Sentinel").unwrap();
        assert_eq!(group.members, vec![RecordId(0), RecordId(1)]);
        assert_eq!(catalog.get(RecordId(2)), None);
    }
}
