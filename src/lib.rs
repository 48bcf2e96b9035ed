//! # group-details
//!
//! Group detail screen backed by a PostgREST-style table store.
//!
//! The screen fetches one row from `grupos` and the matching rows from
//! `alunos`, keeps them in local view state, and renders a loading
//! indicator, a "not found" message, or the group with its member list.
//!
//! The crate is UI-framework agnostic: `view` produces a render model that
//! hosts draw however they like. The bundled binary prints it to a terminal.

pub mod config;
pub mod loader;
pub mod store;
pub mod types;
pub mod view;
