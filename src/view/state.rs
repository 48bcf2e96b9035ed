#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use tracing::{debug, error};

use crate::store::StoreError;
use crate::types::{Group, Member};

/// What the screen knows about the group row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GroupSlot {
    /// The group fetch has not resolved yet.
    #[default]
    Loading,
    /// The store answered, but no row matched.
    NotFound,
    /// The group fetch failed; the reason is the error's display text.
    Failed(String),
    Loaded(Group),
}

/// Result of one of the two fetches, delivered to the screen's event loop.
#[derive(Debug)]
pub enum FetchEvent {
    Group(Result<Option<Group>, StoreError>),
    Members(Result<Vec<Member>, StoreError>),
}

/// Local view state for one mount of the group detail screen.
///
/// The group slot and the member list are updated independently; a member
/// list may arrive before, after, or without the group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupDetailState {
    pub group_id: String,
    pub group: GroupSlot,
    pub members: Vec<Member>,
    pub members_settled: bool,
}

impl GroupDetailState {
    #[must_use]
    pub fn new(group_id: impl Into<String>) -> Self {
        Self { group_id: group_id.into(), group: GroupSlot::Loading, members: Vec::new(), members_settled: false }
    }

    /// True until the group fetch resolves. The member fetch never affects it.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.group, GroupSlot::Loading)
    }

    /// True once both fetches have resolved, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_loading() && self.members_settled
    }

    /// Fold a fetch result into the state. Errors are logged and otherwise
    /// absorbed: a failed group fetch leaves the group absent, a failed
    /// member fetch leaves the previous member list in place.
    pub fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Group(Ok(Some(group))) => {
                debug!(group_id = %self.group_id, "group details loaded");
                self.group = GroupSlot::Loaded(group);
            }
            FetchEvent::Group(Ok(None)) => {
                debug!(group_id = %self.group_id, "group not found");
                self.group = GroupSlot::NotFound;
            }
            FetchEvent::Group(Err(e)) => {
                error!(group_id = %self.group_id, error = %e, "failed to fetch group details");
                self.group = GroupSlot::Failed(e.to_string());
            }
            FetchEvent::Members(Ok(members)) => {
                debug!(group_id = %self.group_id, count = members.len(), "group members loaded");
                self.members = members;
                self.members_settled = true;
            }
            FetchEvent::Members(Err(e)) => {
                error!(group_id = %self.group_id, error = %e, "failed to fetch group members");
                self.members_settled = true;
            }
        }
    }
}
