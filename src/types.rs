//! Wire records for the `grupos` and `alunos` tables.
//!
//! Column names are Portuguese in the store; Rust fields are renamed via
//! serde so the rest of the crate reads naturally.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Snapshot of one `grupos` row. Extra columns from `select=*` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "lider_id", default)]
    pub leader_id: Option<String>,
}

/// One `alunos` row, as selected by `select=id,nome`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}
