//! Mounted group detail screen.
//!
//! DESIGN
//! ======
//! `mount` spawns the two fetches back to back as independent tasks. Each
//! task sends its result over an unbounded channel; the screen applies
//! events one at a time from whichever task owns it, so state updates are
//! serialized without a lock. Completion order is not guaranteed.
//!
//! LIFECYCLE
//! =========
//! Nothing is cancelled on unmount. Dropping the screen drops the receiver,
//! and a fetch that resolves afterwards finds the channel closed and its
//! result is discarded.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::render::{Screen, render};
use super::state::{FetchEvent, GroupDetailState};
use crate::store::TableStore;

/// Fetch the group row and wrap the outcome as a screen event.
pub async fn fetch_group_details(store: &dyn TableStore, group_id: &str) -> FetchEvent {
    FetchEvent::Group(store.fetch_group(group_id).await)
}

/// Fetch the member rows and wrap the outcome as a screen event.
pub async fn fetch_group_members(store: &dyn TableStore, group_id: &str) -> FetchEvent {
    FetchEvent::Members(store.fetch_members(group_id).await)
}

pub struct GroupDetailsScreen {
    state: GroupDetailState,
    events: mpsc::UnboundedReceiver<FetchEvent>,
}

impl GroupDetailsScreen {
    /// Activate the screen for `group_id` and issue both fetches.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(store: Arc<dyn TableStore>, group_id: impl Into<String>) -> Self {
        let state = GroupDetailState::new(group_id);
        let (tx, events) = mpsc::unbounded_channel();

        spawn_fetch(tx.clone(), {
            let store = Arc::clone(&store);
            let group_id = state.group_id.clone();
            async move { fetch_group_details(store.as_ref(), &group_id).await }
        });
        spawn_fetch(tx, {
            let group_id = state.group_id.clone();
            async move { fetch_group_members(store.as_ref(), &group_id).await }
        });

        Self { state, events }
    }

    #[must_use]
    pub fn state(&self) -> &GroupDetailState {
        &self.state
    }

    #[must_use]
    pub fn render(&self) -> Screen {
        render(&self.state)
    }

    /// Wait for the next fetch to resolve, apply it, and return the new render.
    /// Returns `None` once both fetches have reported.
    pub async fn next_update(&mut self) -> Option<Screen> {
        let event = self.events.recv().await?;
        self.state.apply(event);
        Some(self.render())
    }

    /// Drive the screen until both fetches have reported and return the final state.
    pub async fn settle(mut self) -> GroupDetailState {
        while self.next_update().await.is_some() {}
        self.state
    }

    /// Tear the screen down. In-flight fetches keep running; their results are dropped.
    pub fn unmount(self) {
        debug!(group_id = %self.state.group_id, settled = self.state.is_settled(), "group details unmounted");
    }
}

fn spawn_fetch<F>(tx: mpsc::UnboundedSender<FetchEvent>, fetch: F)
where
    F: Future<Output = FetchEvent> + Send + 'static,
{
    tokio::spawn(async move {
        let event = fetch.await;
        if tx.send(event).is_err() {
            debug!("fetch resolved after unmount; result dropped");
        }
    });
}
