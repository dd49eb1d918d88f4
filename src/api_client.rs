use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

use crate::client::Client;
use crate::error::{Error, InternalError};
use crate::types::{
    FactionInfos, FactionSearchResult, PlayerInfos, PlayerSearchResult, RankingInfos,
};

const API_URL: &str = "https://www.pactify.fr/api";

/// Upper bound on `{"date": ...}` hops while resolving a ranking month.
/// A healthy upstream answers `latest` in one hop.
const MAX_RANKING_INDIRECTIONS: usize = 5;

/// HTTP implementation of [`Client`] against the public statistics API.
///
/// Cheap to clone; safe to share across tasks.
#[derive(Clone, Debug)]
pub struct PactifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl PactifyClient {
    /// Client against the fixed upstream base URL.
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    /// Client against a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        Self {
            http: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    /// One GET, decoded to JSON with the envelope status fields stripped.
    /// The taxonomy is decided by body shape, not the HTTP status line.
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let mut body: Value = request.send().await?.json().await?;
        if let Some(object) = body.as_object_mut() {
            object.remove("statusCode");
            object.remove("error");
        }
        Ok(body)
    }
}

impl Default for PactifyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Client for PactifyClient {
    async fn search_player(&self, name: &str) -> Result<PlayerSearchResult, Error> {
        let name = name.to_lowercase();
        let body = self
            .get_json("/player/search", &[("name", name.as_str())])
            .await?;
        if body.get("current").is_none() {
            return Err(Error::UnknownPlayer);
        }
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_player(&self, id: &str) -> Result<PlayerInfos, Error> {
        let body = self.get_json(&format!("/player/{id}"), &[]).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn search_faction(&self, name: &str) -> Result<FactionSearchResult, Error> {
        let name = name.to_lowercase();
        let body = self
            .get_json("/faction/search", &[("name", name.as_str())])
            .await?;
        if body.get("current").is_none() {
            return Err(Error::UnknownFaction);
        }
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_faction(&self, id: &str) -> Result<FactionInfos, Error> {
        let body = self.get_json(&format!("/faction/{id}"), &[]).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_ranking(&self, month: &str) -> Result<RankingInfos, Error> {
        let mut month = month.to_owned();
        for _ in 0..MAX_RANKING_INDIRECTIONS {
            let body = self.get_json(&format!("/ranking/{month}"), &[]).await?;
            match body.get("date").and_then(Value::as_str) {
                Some(next) => {
                    tracing::debug!(from = %month, to = %next, "following ranking indirection");
                    month = next.to_owned();
                }
                None => return Ok(serde_json::from_value(body)?),
            }
        }
        tracing::warn!(%month, "ranking indirection never settled");
        Err(InternalError::RankingIndirection(MAX_RANKING_INDIRECTIONS).into())
    }
}
