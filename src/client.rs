use async_trait::async_trait;

use crate::error::Error;
use crate::types::{
    FactionInfos, FactionSearchResult, PlayerInfos, PlayerSearchResult, RankingInfos,
};

/// Query operations of the statistics API. [`PactifyClient`] is the HTTP
/// implementation; tests substitute scripted ones.
///
/// Every operation is one GET. Search operations resolve a display name
/// (case-insensitively) to a current identifier and fail with
/// [`Error::UnknownPlayer`] / [`Error::UnknownFaction`] when the response
/// carries none; fetch operations return the full detail payload with all
/// date-like strings already converted. Transport failures and undecodable
/// bodies fail with [`Error::Internal`]. A failed operation never leaves a
/// half-decoded result behind.
///
/// [`PactifyClient`]: crate::api_client::PactifyClient
#[async_trait]
pub trait Client {
    async fn search_player(&self, name: &str) -> Result<PlayerSearchResult, Error>;
    async fn fetch_player(&self, id: &str) -> Result<PlayerInfos, Error>;
    async fn search_faction(&self, name: &str) -> Result<FactionSearchResult, Error>;
    async fn fetch_faction(&self, id: &str) -> Result<FactionInfos, Error>;
    /// `month` is a `YYYY-MM` key or the sentinel `latest`; indirection
    /// responses are followed before the payload is returned.
    async fn fetch_ranking(&self, month: &str) -> Result<RankingInfos, Error>;
}
