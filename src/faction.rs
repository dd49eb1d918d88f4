use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::Error;
use crate::player::Player;
use crate::types::{FactionInfos, FactionRef, FactionSnapshot};

/// A faction store. Freshly constructed it is partial (identifier only);
/// a successful [`fetch`](Faction::fetch) populates the full detail,
/// including the daily snapshot history, and clears the flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Faction {
    pub id: String,
    /// Whether only identifying/summary data is populated so far.
    pub partial: bool,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub first_day: Option<DateTime<Utc>>,
    pub last_day: Option<DateTime<Utc>>,
    /// Daily history, oldest first, as the service reports it.
    pub states_history: Vec<Snapshot>,
    /// Current members keyed by player identifier, each a partial store.
    pub members_ref: HashMap<String, Player>,
    /// Payload fields this crate doesn't model, kept verbatim.
    pub extra: Map<String, Value>,
}

/// One day of a faction's history, with member and ally references
/// materialized into partial stores.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub day: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub power: Option<f64>,
    pub power_low: Option<f64>,
    pub max_power: Option<f64>,
    pub claims_count: Option<u32>,
    pub claims_count_low: Option<u32>,
    pub claims_count_high: Option<u32>,
    pub claims_ap_count: Option<u32>,
    pub claims_ap_count_low: Option<u32>,
    pub claims_ap_count_high: Option<u32>,
    pub members_count: Option<u32>,
    pub members: Vec<Player>,
    pub allies_count: Option<u32>,
    pub allies: Vec<Faction>,
    pub extra: Map<String, Value>,
}

impl Snapshot {
    fn from_infos(snapshot: FactionSnapshot) -> Self {
        Snapshot {
            day: snapshot.day,
            name: snapshot.name,
            power: snapshot.power,
            power_low: snapshot.power_low,
            max_power: snapshot.max_power,
            claims_count: snapshot.claims_count,
            claims_count_low: snapshot.claims_count_low,
            claims_count_high: snapshot.claims_count_high,
            claims_ap_count: snapshot.claims_ap_count,
            claims_ap_count_low: snapshot.claims_ap_count_low,
            claims_ap_count_high: snapshot.claims_ap_count_high,
            members_count: snapshot.members_count,
            members: snapshot.members.into_iter().map(Player::from_ref).collect(),
            allies_count: snapshot.allies_count,
            allies: snapshot.allies.into_iter().map(Faction::from_ref).collect(),
            extra: snapshot.extra,
        }
    }
}

impl Faction {
    /// Partial store for a known faction identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Faction {
            id: id.into(),
            partial: true,
            name: None,
            icon: None,
            description: None,
            creation_date: None,
            first_day: None,
            last_day: None,
            states_history: Vec::new(),
            members_ref: HashMap::new(),
            extra: Map::new(),
        }
    }

    /// Partial store carrying whatever detail a payload supplied. Snapshot
    /// members and allies, and the current member references, become
    /// partial stores of their own.
    pub fn from_infos(infos: FactionInfos) -> Self {
        Faction {
            id: infos.id,
            partial: true,
            name: infos.name,
            icon: infos.icon,
            description: infos.description,
            creation_date: infos.creation_date,
            first_day: infos.first_day,
            last_day: infos.last_day,
            states_history: infos
                .states_history
                .into_iter()
                .map(Snapshot::from_infos)
                .collect(),
            members_ref: infos
                .members_ref
                .into_iter()
                .map(|(id, member)| (id, Player::from_infos(member)))
                .collect(),
            extra: infos.extra,
        }
    }

    /// Partial store from an ally reference (identifier, name and icon).
    pub fn from_ref(ally: FactionRef) -> Self {
        let mut faction = Faction::new(ally.id);
        faction.name = ally.name;
        faction.icon = ally.icon;
        faction.extra = ally.extra;
        faction
    }

    /// Fetch full faction detail and replace this store with it. On failure
    /// the store is left exactly as it was.
    pub async fn fetch(&mut self, client: &impl Client) -> Result<(), Error> {
        let infos = client.fetch_faction(&self.id).await?;
        let mut fetched = Faction::from_infos(infos);
        fetched.partial = false;
        *self = fetched;
        Ok(())
    }

    /// Resolve a display name (case-insensitively) and fetch the full,
    /// non-partial store for it.
    pub async fn from_name(client: &impl Client, name: &str) -> Result<Self, Error> {
        let search = client.search_faction(name).await?;
        let mut faction = Faction::new(search.current);
        faction.fetch(client).await?;
        Ok(faction)
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::api_client::PactifyClient;
    use crate::error::Error;
    use crate::player::Player;
    use crate::types::FactionInfos;

    use super::Faction;

    const FACTION_BODY: &str = r###"
        {
          "id": "42",
          "name": "Example",
          "icon": "minecraft:shield",
          "creationDate": "2022-11-10T16:00:00Z",
          "firstDay": "2022-11-11",
          "lastDay": "2023-01-01",
          "statesHistory": [
            {
              "day": "2023-01-01",
              "name": "Example",
              "power": 24.0,
              "claimsCount": 12,
              "membersCount": 1,
              "members": [{ "id": "7", "role": "LEADER" }],
              "alliesCount": 0,
              "allies": []
            }
          ],
          "membersRef": {
            "7": { "id": "7", "name": "Aerin", "lastActivityDate": "2023-01-01T09:30:00Z" }
          }
        }
    "###;

    #[tokio::test]
    async fn test_from_name_resolves_and_fetches() {
        let mut server = mockito::Server::new_async().await;
        let client = PactifyClient::with_base_url(server.url());

        let search = server
            .mock("GET", "/faction/search?name=example")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current":"42"}"#)
            .create_async()
            .await;
        let detail = server
            .mock("GET", "/faction/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FACTION_BODY)
            .create_async()
            .await;

        let faction = Faction::from_name(&client, "Example").await.unwrap();
        search.assert();
        detail.assert();

        assert!(!faction.partial);
        assert_eq!(faction.id, "42");
        assert_eq!(faction.name.as_deref(), Some("Example"));

        let snapshot = &faction.states_history[0];
        assert_eq!(
            snapshot.day,
            Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(snapshot.claims_count, Some(12));

        let member = &snapshot.members[0];
        assert!(member.partial);
        assert_eq!(member.id, "7");
        assert_eq!(member.role.as_deref(), Some("LEADER"));
        assert!(snapshot.allies.is_empty());

        let aerin = &faction.members_ref["7"];
        assert!(aerin.partial);
        assert_eq!(aerin.name.as_deref(), Some("Aerin"));
    }

    #[tokio::test]
    async fn test_from_name_matches_direct_fetch() {
        let mut server = mockito::Server::new_async().await;
        let client = PactifyClient::with_base_url(server.url());

        let search = server
            .mock("GET", "/faction/search?name=example")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current":"42"}"#)
            .create_async()
            .await;
        let detail = server
            .mock("GET", "/faction/42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FACTION_BODY)
            .expect(2)
            .create_async()
            .await;

        let by_name = Faction::from_name(&client, "Example").await.unwrap();
        search.assert();

        let mut by_id = Faction::new("42");
        by_id.fetch(&client).await.unwrap();
        detail.assert();

        assert_eq!(by_name, by_id);
    }

    #[tokio::test]
    async fn test_from_name_propagates_search_miss() {
        let mut server = mockito::Server::new_async().await;
        let client = PactifyClient::with_base_url(server.url());

        let mock = server
            .mock("GET", "/faction/search?name=ghosts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create_async()
            .await;

        let error = Faction::from_name(&client, "Ghosts").await.unwrap_err();
        mock.assert();

        assert!(matches!(error, Error::UnknownFaction));
        assert_eq!(error.status_code(), 3);
    }

    #[test]
    fn test_from_infos_materializes_nested_stores() {
        let infos: FactionInfos = serde_json::from_str(FACTION_BODY).unwrap();
        let faction = Faction::from_infos(infos);

        assert!(faction.partial);
        assert_eq!(faction.states_history.len(), 1);
        assert_eq!(
            faction.states_history[0].members,
            vec![{
                let mut player = Player::new("7");
                player.role = Some("LEADER".into());
                player
            }]
        );
        assert_eq!(faction.members_ref.len(), 1);
    }

    #[test]
    fn test_from_ref_keeps_summary_fields() {
        let ally =
            serde_json::from_value(json!({"id": "9", "name": "Allies", "icon": "minecraft:bell"}))
                .unwrap();
        let faction = Faction::from_ref(ally);

        assert!(faction.partial);
        assert_eq!(faction.id, "9");
        assert_eq!(faction.name.as_deref(), Some("Allies"));
        assert_eq!(faction.icon.as_deref(), Some("minecraft:bell"));
        assert_eq!(faction.description, None);
    }
}
