//! PostgREST client for the hosted table store.
//!
//! Thin HTTP wrapper over `/rest/v1/{table}`. Request building and response
//! parsing are plain functions so they can be tested without a network.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use std::time::Duration;

use super::{StoreError, TableStore};
use crate::config::StoreConfig;
use crate::types::{Group, Member};

const GROUPS_TABLE: &str = "grupos";
const MEMBERS_TABLE: &str = "alunos";
const MEMBER_COLUMNS: &str = "id,nome";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
/// PostgREST code for "singular response requested, row count was not 1".
const NOT_SINGULAR_CODE: &str = "PGRST116";

// =============================================================================
// CLIENT
// =============================================================================

pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    /// Build a store client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), api_key: config.api_key.clone() })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn get(&self, table: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn group_request(&self, group_id: &str) -> reqwest::RequestBuilder {
        self.get(GROUPS_TABLE)
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{group_id}"))])
    }

    fn members_request(&self, group_id: &str) -> reqwest::RequestBuilder {
        self.get(MEMBERS_TABLE)
            .query(&[("select", MEMBER_COLUMNS.to_string()), ("grupo_id", format!("eq.{group_id}"))])
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<(u16, String), StoreError> {
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;
    Ok((status, text))
}

#[async_trait::async_trait]
impl TableStore for RestStore {
    async fn fetch_group(&self, group_id: &str) -> Result<Option<Group>, StoreError> {
        let (status, body) = send(self.group_request(group_id)).await?;
        parse_group_response(status, &body)
    }

    async fn fetch_members(&self, group_id: &str) -> Result<Vec<Member>, StoreError> {
        let (status, body) = send(self.members_request(group_id)).await?;
        parse_members_response(status, &body)
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_group_response(status: u16, body: &str) -> Result<Option<Group>, StoreError> {
    if is_success(status) {
        let group: Group = serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;
        return Ok(Some(group));
    }

    // `id` is the primary key, so a non-singular result can only mean zero rows.
    if status == 406 {
        let code = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.code);
        if code.as_deref() == Some(NOT_SINGULAR_CODE) {
            return Ok(None);
        }
    }

    Err(StoreError::Response { status, body: body.to_string() })
}

fn parse_members_response(status: u16, body: &str) -> Result<Vec<Member>, StoreError> {
    if !is_success(status) {
        return Err(StoreError::Response { status, body: body.to_string() });
    }
    serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))
}
