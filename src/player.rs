use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::Error;
use crate::faction::Faction;
use crate::types::{MemberRef, PlayerInfos};

/// A player store. Freshly constructed it is partial (identifier only);
/// a successful [`fetch`](Player::fetch) populates every documented field
/// and clears the flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: String,
    /// Whether only identifying/summary data is populated so far.
    pub partial: bool,
    pub name: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
    pub last_activity_date: Option<DateTime<Utc>>,
    pub faction_last_activity_date: Option<DateTime<Utc>>,
    pub activity_time: Option<f64>,
    pub rank: Option<String>,
    pub power: Option<f64>,
    pub role: Option<String>,
    /// The player's faction, as a partial store, when they belong to one.
    pub faction: Option<Faction>,
    pub online: Option<bool>,
    pub online_server: Option<String>,
    /// Payload fields this crate doesn't model, kept verbatim.
    pub extra: Map<String, Value>,
}

impl Player {
    /// Partial store for a known player identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Player {
            id: id.into(),
            partial: true,
            name: None,
            registration_date: None,
            last_activity_date: None,
            faction_last_activity_date: None,
            activity_time: None,
            rank: None,
            power: None,
            role: None,
            faction: None,
            online: None,
            online_server: None,
            extra: Map::new(),
        }
    }

    /// Partial store carrying whatever detail a payload supplied, with the
    /// embedded faction (if any) materialized as a partial [`Faction`].
    pub fn from_infos(infos: PlayerInfos) -> Self {
        Player {
            id: infos.id,
            partial: true,
            name: infos.name,
            registration_date: infos.registration_date,
            last_activity_date: infos.last_activity_date,
            faction_last_activity_date: infos.faction_last_activity_date,
            activity_time: infos.activity_time,
            rank: infos.rank,
            power: infos.power,
            role: infos.role,
            faction: infos.faction.map(Faction::from_infos),
            online: infos.online,
            online_server: infos.online_server,
            extra: infos.extra,
        }
    }

    /// Partial store from a snapshot member reference (identifier and
    /// role only).
    pub fn from_ref(member: MemberRef) -> Self {
        let mut player = Player::new(member.id);
        player.role = member.role;
        player.extra = member.extra;
        player
    }

    /// Fetch full player detail and replace this store with it. On failure
    /// the store is left exactly as it was.
    pub async fn fetch(&mut self, client: &impl Client) -> Result<(), Error> {
        let infos = client.fetch_player(&self.id).await?;
        let mut fetched = Player::from_infos(infos);
        fetched.partial = false;
        *self = fetched;
        Ok(())
    }

    /// Resolve a display name (case-insensitively) and fetch the full,
    /// non-partial store for it.
    pub async fn from_name(client: &impl Client, name: &str) -> Result<Self, Error> {
        let search = client.search_player(name).await?;
        let mut player = Player::new(search.current);
        player.fetch(client).await?;
        Ok(player)
    }
}
