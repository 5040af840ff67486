use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Friend;
use crate::view::total_pages;

use super::Action;

/// Default page size; constant for the lifetime of a store, no action
/// mutates it.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 4;

/// The full store state: the friend collection plus the UI-transient fields
/// (search term, current page, page size).
///
/// `current_page` is 1-based and indexes into the *derived* filtered/sorted
/// view, not the stored order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendsState {
    pub friends: Vec<Friend>,
    pub search_term: String,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for FriendsState {
    fn default() -> Self {
        Self {
            friends: Vec::new(),
            search_term: String::new(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl FriendsState {
    /// Empty state: no friends, empty search, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-entry example collection the application starts with.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut shivangi = Friend::new("Shivangi Sharma".to_string());
        shivangi.is_favorite = true;
        shivangi.date_added = now - Duration::days(2);
        let mut rahul = Friend::new("Rahul Gupta".to_string());
        rahul.date_added = now - Duration::days(1);
        let mut akash = Friend::new("Akash Singh".to_string());
        akash.date_added = now - Duration::days(3);

        Self {
            friends: vec![rahul, shivangi, akash],
            ..Self::default()
        }
    }

    /// Apply one action, producing the next state.
    ///
    /// Pure and total: never fails, never performs I/O, and an action
    /// referencing an unknown id leaves the state untouched.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::AddFriend { name } => {
                self.friends.insert(0, Friend::new(name.trim().to_string()));
                self.current_page = 1;
            }
            Action::DeleteFriend { id } => {
                self.friends.retain(|friend| friend.id != id);
                // Clamp against the unfiltered count, matching the original
                // behavior even when a search term is active.
                let pages = total_pages(self.friends.len(), self.items_per_page);
                if self.current_page > pages && pages > 0 {
                    self.current_page = pages;
                }
            }
            Action::ToggleFavorite { id } => {
                if let Some(friend) = self.friends.iter_mut().find(|friend| friend.id == id) {
                    friend.is_favorite = !friend.is_favorite;
                }
            }
            Action::SetSearchTerm { term } => {
                self.search_term = term;
                self.current_page = 1;
            }
            Action::SetCurrentPage { page } => {
                self.current_page = page;
            }
        }
        self
    }

    /// Case-insensitive exact-name membership check.
    ///
    /// Part of the caller-side contract: the form collaborator uses this to
    /// silently drop duplicate adds. The store itself accepts duplicates.
    pub fn contains_name(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.friends
            .iter()
            .any(|friend| friend.name.to_lowercase() == wanted)
    }
}
