use serde::{Deserialize, Serialize};

/// A named, typed request to mutate the store's state.
///
/// Actions are applied atomically by [`super::FriendsState::apply`]; every
/// one is total, and actions referencing an unknown id are silent no-ops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Action {
    /// Insert a new friend at the front of the collection and jump back to
    /// the first page. The name is trimmed but NOT re-validated; callers run
    /// [`crate::validate::validate_name`] first.
    AddFriend { name: String },
    /// Remove the friend with this id, clamping the current page down if it
    /// now points past the last (unfiltered) page.
    DeleteFriend { id: String },
    /// Flip the favorite flag on the friend with this id.
    ToggleFavorite { id: String },
    /// Replace the search term verbatim and jump back to the first page.
    SetSearchTerm { term: String },
    /// Replace the current page verbatim. No bounds check; pagination
    /// controls are expected to offer valid page numbers.
    SetCurrentPage { page: usize },
}

impl Action {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddFriend { .. } => "add_friend",
            Action::DeleteFriend { .. } => "delete_friend",
            Action::ToggleFavorite { .. } => "toggle_favorite",
            Action::SetSearchTerm { .. } => "set_search_term",
            Action::SetCurrentPage { .. } => "set_current_page",
        }
    }
}
