use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// `id` and `date_added` are assigned at creation and never change; display
/// order is always derived from `is_favorite` and `date_added`, never from
/// the stored position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub is_favorite: bool,
    pub date_added: DateTime<Utc>,
}

impl Friend {
    /// Create a new friend with a generated UUID, favorited off.
    pub fn new(name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            is_favorite: false,
            date_added: Utc::now(),
        }
    }

    /// Create a friend with a specific ID (for testing or seeding)
    pub fn with_id(id: String, name: String) -> Self {
        Self {
            id,
            name,
            is_favorite: false,
            date_added: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_creation() {
        let friend = Friend::new("Rahul Gupta".to_string());
        assert_eq!(friend.name, "Rahul Gupta");
        assert!(!friend.id.is_empty());
        assert!(!friend.is_favorite);
    }

    #[test]
    fn test_friend_with_id() {
        let friend = Friend::with_id("friend-1".to_string(), "Akash Singh".to_string());
        assert_eq!(friend.id, "friend-1");
        assert_eq!(friend.name, "Akash Singh");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Friend::new("A B".to_string());
        let b = Friend::new("A B".to_string());
        assert_ne!(a.id, b.id);
    }
}
