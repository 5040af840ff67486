use thiserror::Error;

/// Errors produced by the caller-side validation contract.
///
/// The store itself has no failure paths: every transition is total, unknown
/// ids are silent no-ops, and out-of-range pages derive to empty slices.
/// These variants only surface from [`crate::validate`], before an
/// `AddFriend` action is ever dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter a friend's name")]
    EmptyName,

    #[error("Name must be at least {0} characters long")]
    NameTooShort(usize),

    #[error("Name must be less than {0} characters")]
    NameTooLong(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
