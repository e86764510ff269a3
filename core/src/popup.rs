//! Detail popup state machine.
//!
//! At most one record is open, and an active ability only exists inside an
//! open record. Modelled as a single enum so those rules hold by construction.

use crate::catalog::{Catalog, RecordId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Popup {
    #[default]
    Closed,
    Open {
        record: RecordId,
        /// Index into the record's ability list
        active_ability: Option<usize>,
    },
}

/// Where a pointer-down landed relative to the popup's rendered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    InsidePopup,
    Outside,
}

impl Popup {
    pub fn is_open(&self) -> bool {
        matches!(self, Popup::Open { .. })
    }

    pub fn record(&self) -> Option<RecordId> {
        match self {
            Popup::Open { record, .. } => Some(*record),
            Popup::Closed => None,
        }
    }

    pub fn active_ability(&self) -> Option<usize> {
        match self {
            Popup::Open { active_ability, .. } => *active_ability,
            Popup::Closed => None,
        }
    }

    /// `Closed -> Open(record)`. Returns false (and changes nothing) if a
    /// popup is already open.
    pub fn open(&mut self, record: RecordId) -> bool {
        match self {
            Popup::Closed => {
                *self = Popup::Open {
                    record,
                    active_ability: None,
                };
                true
            }
            Popup::Open { .. } => false,
        }
    }

    /// Expand `ability`, collapse it if already active, or switch to it from
    /// another one. Ignored while closed or if the open record has no such
    /// ability.
    pub fn toggle_ability(&mut self, catalog: &Catalog, ability: usize) -> bool {
        let Popup::Open {
            record,
            active_ability,
        } = self
        else {
            return false;
        };

        let exists = catalog
            .get(*record)
            .is_some_and(|r| r.ability(ability).is_some());
        if !exists {
            return false;
        }

        *active_ability = match *active_ability {
            Some(current) if current == ability => None,
            _ => Some(ability),
        };
        true
    }

    pub fn close(&mut self) {
        *self = Popup::Closed;
    }

    /// Global pointer-down handler: anything outside the popup closes it.
    pub fn pointer_down(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::{Ability, Character};

    fn catalog() -> Catalog {
        let ability = |name: &str| Ability {
            display_name: name.to_string(),
            ..Default::default()
        };
        Catalog::from_records(vec![
            Character {
                display_name: "Astra".into(),
                role: "Controller".into(),
                abilities: vec![ability("Gravity Well"), ability("Nova Pulse"), ability("Nebula")],
                ..Default::default()
            },
            Character {
                display_name: "Breach".into(),
                role: "Initiator".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn open_from_closed() {
        let mut popup = Popup::default();
        assert!(popup.open(RecordId(0)));
        assert_eq!(popup.record(), Some(RecordId(0)));
        assert_eq!(popup.active_ability(), None);
    }

    #[test]
    fn open_while_open_is_rejected() {
        let mut popup = Popup::default();
        popup.open(RecordId(0));
        assert!(!popup.open(RecordId(1)));
        assert_eq!(popup.record(), Some(RecordId(0)));
    }

    #[test]
    fn toggling_same_ability_twice_clears_it() {
        let catalog = catalog();
        let mut popup = Popup::default();
        popup.open(RecordId(0));

        assert!(popup.toggle_ability(&catalog, 1));
        assert_eq!(popup.active_ability(), Some(1));
        assert!(popup.toggle_ability(&catalog, 1));
        assert_eq!(popup.active_ability(), None);
        assert_eq!(popup.record(), Some(RecordId(0)));
    }

    #[test]
    fn different_ability_replaces_active_one() {
        let catalog = catalog();
        let mut popup = Popup::default();
        popup.open(RecordId(0));
        popup.toggle_ability(&catalog, 0);
        popup.toggle_ability(&catalog, 2);
        assert_eq!(popup.active_ability(), Some(2));
    }

    #[test]
    fn unknown_ability_or_closed_popup_is_ignored() {
        let catalog = catalog();
        let mut popup = Popup::default();
        assert!(!popup.toggle_ability(&catalog, 0));
        assert_eq!(popup, Popup::Closed);

        popup.open(RecordId(1));
        assert!(!popup.toggle_ability(&catalog, 0));
        assert_eq!(popup.active_ability(), None);
    }

    #[test]
    fn outside_pointer_down_always_closes() {
        let catalog = catalog();
        let states = [
            Popup::Closed,
            Popup::Open { record: RecordId(0), active_ability: None },
            Popup::Open { record: RecordId(0), active_ability: Some(2) },
        ];
        for state in states {
            let mut popup = state;
            popup.pointer_down(PointerTarget::Outside);
            assert_eq!(popup, Popup::Closed);
        }

        let mut popup = Popup::default();
        popup.open(RecordId(0));
        popup.toggle_ability(&catalog, 0);
        popup.pointer_down(PointerTarget::InsidePopup);
        assert_eq!(popup.active_ability(), Some(0));
    }

    #[test]
    fn close_returns_to_closed() {
        let mut popup = Popup::default();
        popup.open(RecordId(1));
        popup.close();
        assert!(!popup.is_open());
    }
}
