//! The derivation pipeline: filter, sort, paginate.
//!
//! Pure and deterministic. Display order is computed here on every query and
//! never written back to the store.

use serde::{Deserialize, Serialize};

use crate::models::Friend;
use crate::store::FriendsState;

/// One derived page of friends plus pagination metadata.
///
/// `total_count` and `total_pages` describe the *filtered* collection, which
/// is what pagination controls render against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendsView {
    pub page: Vec<Friend>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `count` items at `items_per_page` per page.
///
/// Total for all inputs: zero items (or a zero page size) is zero pages.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    count.div_ceil(items_per_page)
}

/// Derive the currently visible page of friends.
///
/// 1. Filter: case-insensitive substring match of `search_term` against each
///    name; an empty term keeps everything.
/// 2. Sort: favorites first, then `date_added` descending. The sort is
///    stable, so equal keys keep their relative input order.
/// 3. Paginate: the window `[(current_page-1)*items_per_page,
///    current_page*items_per_page)`. A window starting past the end yields
///    an empty page, not an error.
///
/// The input slice is never mutated; sorting operates on a copy.
pub fn derive(
    friends: &[Friend],
    search_term: &str,
    current_page: usize,
    items_per_page: usize,
) -> FriendsView {
    let needle = search_term.to_lowercase();
    let mut matched: Vec<Friend> = friends
        .iter()
        .filter(|friend| needle.is_empty() || friend.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| b.date_added.cmp(&a.date_added))
    });

    let total_count = matched.len();
    let start = current_page.saturating_sub(1).saturating_mul(items_per_page);
    let page = matched
        .into_iter()
        .skip(start)
        .take(items_per_page)
        .collect();

    FriendsView {
        page,
        total_count,
        total_pages: total_pages(total_count, items_per_page),
    }
}

/// Derive against a full state snapshot.
pub fn derive_from(state: &FriendsState) -> FriendsView {
    derive(
        &state.friends,
        &state.search_term,
        state.current_page,
        state.items_per_page,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn friend(id: &str, name: &str, is_favorite: bool, days_ago: i64) -> Friend {
        Friend {
            id: id.to_string(),
            name: name.to_string(),
            is_favorite,
            date_added: Utc::now() - Duration::days(days_ago),
        }
    }

    fn seed() -> Vec<Friend> {
        vec![
            friend("1", "Rahul Gupta", false, 1),
            friend("2", "Shivangi Sharma", true, 2),
            friend("3", "Akash Singh", false, 3),
        ]
    }

    #[test]
    fn test_seed_fits_one_page_favorite_first() {
        let view = derive(&seed(), "", 1, 4);
        assert_eq!(view.page.len(), 3);
        assert_eq!(view.total_count, 3);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page[0].name, "Shivangi Sharma");
        assert_eq!(view.page[1].name, "Rahul Gupta");
        assert_eq!(view.page[2].name, "Akash Singh");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let view = derive(&seed(), "sha", 1, 4);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.page[0].name, "Shivangi Sharma");
    }

    #[test]
    fn test_empty_term_is_identity() {
        let all = derive(&seed(), "", 1, 10);
        assert_eq!(all.total_count, 3);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let friends = seed();
        let first = derive(&friends, "a", 1, 2);
        let second = derive(&friends, "a", 1, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_not_mutated() {
        let friends = seed();
        let before = friends.clone();
        let _ = derive(&friends, "", 1, 2);
        assert_eq!(friends, before);
    }

    #[test]
    fn test_sort_is_stable_on_equal_timestamps() {
        let shared = Utc::now();
        let mut a = friend("a", "First Fav", true, 0);
        let mut b = friend("b", "Second Fav", true, 0);
        a.date_added = shared;
        b.date_added = shared;

        let view = derive(&[a, b], "", 1, 4);
        assert_eq!(view.page[0].id, "a");
        assert_eq!(view.page[1].id, "b");
    }

    #[test]
    fn test_pagination_windows() {
        let friends: Vec<Friend> = (0..10)
            .map(|i| friend(&i.to_string(), &format!("Friend {i}"), false, i))
            .collect();

        let first = derive(&friends, "", 1, 4);
        assert_eq!(first.page.len(), 4);
        assert_eq!(first.total_pages, 3);

        let last = derive(&friends, "", 3, 4);
        assert_eq!(last.page.len(), 2);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let view = derive(&seed(), "", 7, 4);
        assert!(view.page.is_empty());
        assert_eq!(view.total_count, 3);
    }

    #[test]
    fn test_total_pages_math() {
        assert_eq!(total_pages(0, 4), 0);
        assert_eq!(total_pages(3, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(5, 0), 0);
    }
}
