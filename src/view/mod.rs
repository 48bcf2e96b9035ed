//! Group detail view — state machine, render model, and mounted screen.

pub mod render;
pub mod screen;
pub mod state;

pub use render::{Screen, render};
pub use screen::{GroupDetailsScreen, fetch_group_details, fetch_group_members};
pub use state::{FetchEvent, GroupDetailState, GroupSlot};
