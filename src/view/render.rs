//! Render model for the group detail screen.
//!
//! `render` turns view state into a `Screen` value following a fixed
//! priority: loading, then not-found, then the detail layout. Hosts draw the
//! `Screen` however they like; `Display` gives a plain terminal rendering.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt;

use serde::Serialize;

use super::state::{GroupDetailState, GroupSlot};

pub const LOADING_INDICATOR: &str = "Carregando...";
pub const NOT_FOUND_MESSAGE: &str = "Grupo não encontrado.";
pub const MEMBERS_LABEL: &str = "Membros do Grupo:";

/// One member line, keyed by member id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberRow {
    pub key: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Screen {
    Loading,
    NotFound {
        message: &'static str,
        /// Present when the group fetch failed rather than matching nothing.
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    Detail {
        title: String,
        description: String,
        members_label: &'static str,
        rows: Vec<MemberRow>,
    },
}

#[must_use]
pub fn render(state: &GroupDetailState) -> Screen {
    match &state.group {
        GroupSlot::Loading => Screen::Loading,
        GroupSlot::NotFound => Screen::NotFound { message: NOT_FOUND_MESSAGE, reason: None },
        GroupSlot::Failed(reason) => Screen::NotFound { message: NOT_FOUND_MESSAGE, reason: Some(reason.clone()) },
        GroupSlot::Loaded(group) => Screen::Detail {
            title: group.name.clone(),
            description: group.description.clone().unwrap_or_default(),
            members_label: MEMBERS_LABEL,
            rows: state
                .members
                .iter()
                .map(|m| MemberRow { key: m.id.clone(), text: m.name.clone() })
                .collect(),
        },
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => writeln!(f, "{LOADING_INDICATOR}"),
            // The failure reason goes to logs, not to the user.
            Self::NotFound { message, .. } => writeln!(f, "{message}"),
            Self::Detail { title, description, members_label, rows } => {
                writeln!(f, "{title}")?;
                writeln!(f, "{description}")?;
                writeln!(f)?;
                writeln!(f, "{members_label}")?;
                for row in rows {
                    writeln!(f, "  {}", row.text)?;
                }
                Ok(())
            }
        }
    }
}
