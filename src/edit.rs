//! Edit Session
//!
//! Local draft of one item's name/description. At most one item is edited
//! at a time; starting a new edit discards the previous drafts.

use crate::store::ListAction;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditSession {
    pub editing_id: Option<u64>,
    pub draft_name: String,
    pub draft_description: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter edit mode for `id`, seeding drafts from the current values
    pub fn start(&mut self, id: u64, name: &str, description: &str) {
        self.editing_id = Some(id);
        self.draft_name = name.to_string();
        self.draft_description = description.to_string();
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.editing_id == Some(id)
    }

    pub fn set_draft_name(&mut self, name: String) {
        self.draft_name = name;
    }

    pub fn set_draft_description(&mut self, description: String) {
        self.draft_description = description;
    }

    /// Close the session and produce the edit for `id`
    pub fn save(&mut self, id: u64) -> ListAction {
        let session = std::mem::take(self);
        ListAction::EditItem {
            id,
            name: session.draft_name,
            description: session.draft_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::store::ListState;

    #[test]
    fn test_start_seeds_drafts() {
        let mut session = EditSession::new();
        session.start(1, "A", "d");

        assert!(session.is_editing(1));
        assert!(!session.is_editing(2));
        assert_eq!(session.draft_name, "A");
        assert_eq!(session.draft_description, "d");
    }

    #[test]
    fn test_start_other_item_discards_drafts() {
        let mut session = EditSession::new();
        session.start(1, "A", "d");
        session.set_draft_name("changed".to_string());
        session.start(2, "B", "e");

        assert!(session.is_editing(2));
        assert!(!session.is_editing(1));
        assert_eq!(session.draft_name, "B");
        assert_eq!(session.draft_description, "e");
    }

    #[test]
    fn test_edit_and_save_scenario() {
        let mut state = ListState::new();
        state.apply(ListAction::AppendPage(vec![Item::new(1, "A", "d", 5)]));

        let mut session = EditSession::new();
        session.start(1, "A", "d");
        session.set_draft_name("B".to_string());
        state.apply(session.save(1));

        assert_eq!(state.items[0].name, "B");
        assert_eq!(state.items[0].description, "d");
        assert_eq!(state.items[0].stars, 5);
        assert_eq!(session.editing_id, None);
        assert_eq!(session, EditSession::new());
    }

    #[test]
    fn test_save_after_item_removed_is_noop() {
        let mut state = ListState::new();
        state.apply(ListAction::AppendPage(vec![Item::new(1, "A", "d", 5)]));

        let mut session = EditSession::new();
        session.start(1, "A", "d");
        session.set_draft_description("gone".to_string());
        state.apply(ListAction::RemoveItem(1));
        state.apply(session.save(1));

        assert!(state.items.is_empty());
        assert_eq!(session.editing_id, None);
    }
}
