mod actions;
mod dispatcher;
mod state;

pub use actions::Action;
pub use dispatcher::{Store, SubscriptionId};
pub use state::FriendsState;
