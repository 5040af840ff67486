//! roster-core: state management for a client-side friend list.
//!
//! The crate owns a normalized collection of [`models::Friend`] records and
//! exposes three surfaces to the presentation layer:
//!
//! - a dispatch surface ([`store::Action`] applied through [`store::Store`]),
//! - a read surface ([`store::Store::snapshot`] and the pure
//!   [`view::derive`] pipeline),
//! - the caller-side validation contract ([`validate::validate_name`]).
//!
//! Everything in-memory, single-threaded, no persistence.

pub mod error;
pub mod models;
pub mod store;
pub mod validate;
pub mod view;

pub use error::{Error, Result};
pub use models::Friend;
pub use store::{Action, FriendsState, Store, SubscriptionId};
pub use view::{derive, FriendsView};
