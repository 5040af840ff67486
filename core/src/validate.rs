//! Caller-side name validation.
//!
//! The store never validates: the presentation collaborator runs this before
//! dispatching `AddFriend` and shows the error message to the user on
//! failure. Duplicate names are a separate, silent check — callers consult
//! [`crate::store::FriendsState::contains_name`] and simply skip the
//! dispatch on a match.

use crate::{Error, Result};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// Validate a raw name input, returning the trimmed name on success.
///
/// Rejects empty/whitespace-only input and names shorter than
/// [`NAME_MIN_CHARS`] or longer than [`NAME_MAX_CHARS`] after trimming.
/// Both boundaries are inclusive: exactly 2 and exactly 50 characters pass.
pub fn validate_name(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyName);
    }

    let chars = trimmed.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(Error::NameTooShort(NAME_MIN_CHARS));
    }
    if chars > NAME_MAX_CHARS {
        return Err(Error::NameTooLong(NAME_MAX_CHARS));
    }

    Ok(trimmed.to_string())
}
