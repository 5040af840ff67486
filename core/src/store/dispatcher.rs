use log::debug;

use crate::view::{self, FriendsView};

use super::{Action, FriendsState};

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FriendsState)>;

/// Owns the state and serializes all mutation through [`Store::dispatch`].
///
/// There is no global instance; whoever composes the application constructs
/// one store and threads it through. Observers register a callback with
/// [`Store::subscribe`] and are pushed the new snapshot after every applied
/// action, replacing the original's framework-driven re-render.
pub struct Store {
    state: FriendsState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Store {
    pub fn new(state: FriendsState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// A store seeded with the three-entry example collection.
    pub fn seeded() -> Self {
        Self::new(FriendsState::seeded())
    }

    /// Apply one action and notify subscribers with the new snapshot.
    ///
    /// Transitions are serialized by construction: each completes fully
    /// before the next is accepted.
    pub fn dispatch(&mut self, action: Action) {
        debug!(
            "dispatch {}: {} friends, page {}",
            action.kind(),
            self.state.friends.len(),
            self.state.current_page
        );
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &FriendsState {
        &self.state
    }

    /// Run the derivation pipeline against the current snapshot.
    pub fn view(&self) -> FriendsView {
        view::derive_from(&self.state)
    }

    /// Register an observer; it is called with the new snapshot after every
    /// dispatched action.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&FriendsState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a previously registered observer. Returns false if the id was
    /// already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(FriendsState::default())
    }
}
