//! Wire-level payloads of the statistics API, one struct per response
//! shape. Identifiers are the only required fields; everything else is
//! optional and parsed defensively. Keys the structs don't know about are
//! kept verbatim in each `extra` map.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dates;

/// Body of `GET /player/search?name=` once the `current` identifier has
/// been checked for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchResult {
    /// Identifier currently attached to the searched name.
    pub current: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /faction/search?name=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionSearchResult {
    /// Identifier currently attached to the searched name.
    pub current: String,
    /// Factions that carried the name over time, most recent last.
    #[serde(default)]
    pub history: Vec<FactionHistoryEntry>,
    /// Summary of every faction referenced by `history`.
    #[serde(default)]
    pub factions_ref: HashMap<String, FactionRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One name-change record from a faction search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionHistoryEntry {
    pub faction_id: String,
    /// Day the faction took the name.
    #[serde(default, deserialize_with = "dates::optional")]
    pub from: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Summary reference to a faction (ally lists, search `factionsRef`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionRef {
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Summary reference to a faction member inside a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub id: String,
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /player/{id}`, also the value shape of a faction's
/// `membersRef` mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfos {
    pub id: String,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub registration_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub last_activity_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub faction_last_activity_date: Option<DateTime<Utc>>,
    pub activity_time: Option<f64>,
    pub rank: Option<String>,
    pub power: Option<f64>,
    pub role: Option<String>,
    /// Present when the player belongs to a faction; summary detail only
    /// (no snapshot history, no member mapping).
    pub faction: Option<FactionInfos>,
    pub online: Option<bool>,
    /// Server the player is connected to, when online.
    pub online_server: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /faction/{id}`, also the shape of a player's embedded
/// faction and of a ranking entry's faction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionInfos {
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Creation date rounded to the day.
    #[serde(default, deserialize_with = "dates::optional")]
    pub first_day: Option<DateTime<Utc>>,
    /// Last day the faction was active.
    #[serde(default, deserialize_with = "dates::optional")]
    pub last_day: Option<DateTime<Utc>>,
    #[serde(default)]
    pub states_history: Vec<FactionSnapshot>,
    /// Full detail for every member referenced by the snapshots, keyed by
    /// player identifier.
    #[serde(default)]
    pub members_ref: HashMap<String, PlayerInfos>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One daily recorded state of a faction's statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactionSnapshot {
    #[serde(default, deserialize_with = "dates::optional")]
    pub day: Option<DateTime<Utc>>,
    /// Name the faction carried that day.
    pub name: Option<String>,
    pub power: Option<f64>,
    /// Lowest power reached during the day.
    pub power_low: Option<f64>,
    pub max_power: Option<f64>,
    pub claims_count: Option<u32>,
    pub claims_count_low: Option<u32>,
    pub claims_count_high: Option<u32>,
    pub claims_ap_count: Option<u32>,
    pub claims_ap_count_low: Option<u32>,
    pub claims_ap_count_high: Option<u32>,
    pub members_count: Option<u32>,
    #[serde(default)]
    pub members: Vec<MemberRef>,
    pub allies_count: Option<u32>,
    #[serde(default)]
    pub allies: Vec<FactionRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /ranking/{month}` once any `{"date": ...}` indirection has
/// been followed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingInfos {
    /// Concrete month the entries belong to (`YYYY-MM`).
    pub month: Option<String>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub update_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "dates::optional")]
    pub next_update_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entries: Vec<RankingEntry>,
    /// First month the service has statistics for.
    pub first: Option<String>,
    /// Most recent month the service has statistics for.
    pub latest: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One ranked faction in a monthly ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub faction: FactionInfos,
    pub points: Option<f64>,
    pub position: Option<u32>,
    pub ranking: Option<RankingScores>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-category breakdown of a ranking entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingScores {
    pub members: Option<ScorePair>,
    pub claims: Option<ScorePair>,
    pub claims_ap: Option<ScorePair>,
    pub event_points: Option<ScorePair>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A measured value and the ranking points it was worth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub value: Option<f64>,
    pub points: Option<f64>,
}
