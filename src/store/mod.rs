//! Table store — the remote backend the screen reads from.
//!
//! DESIGN
//! ======
//! The screen never reaches for an ambient client. It receives an
//! `Arc<dyn TableStore>`, so the REST implementation can be swapped for an
//! in-memory fake in tests. Both reads are idempotent selects; there are no
//! writes.

pub mod rest;

use crate::types::{Group, Member};
pub use rest::RestStore;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by table store reads.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("store request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body did not match the expected row shape.
    #[error("store response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Fetch the single `grupos` row whose `id` equals `group_id`.
    /// `Ok(None)` means the store has no such row.
    async fn fetch_group(&self, group_id: &str) -> Result<Option<Group>, StoreError>;

    /// Fetch every `alunos` row whose `grupo_id` equals `group_id`, in store order.
    async fn fetch_members(&self, group_id: &str) -> Result<Vec<Member>, StoreError>;
}

// =============================================================================
// TEST HELPERS
// =============================================================================
