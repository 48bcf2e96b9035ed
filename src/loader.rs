//! Combined loader: both queries behind one future that resolves once.
//!
//! The mounted screen renders each fetch as it lands. Callers that want a
//! single consistent snapshot (pre-rendering, JSON output) use this instead.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::store::TableStore;
use crate::view::state::{FetchEvent, GroupDetailState};
use crate::view::{fetch_group_details, fetch_group_members};

/// Run both fetches concurrently and return the settled state.
pub async fn load_group_detail(store: &dyn TableStore, group_id: &str) -> GroupDetailState {
    let (group, members): (FetchEvent, FetchEvent) =
        tokio::join!(fetch_group_details(store, group_id), fetch_group_members(store, group_id));

    let mut state = GroupDetailState::new(group_id);
    state.apply(members);
    state.apply(group);
    state
}
