use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::Error;
use crate::faction::Faction;
use crate::types::RankingScores;

/// Month key the service resolves to the most recent ranking.
const LATEST: &str = "latest";

/// A monthly faction ranking store, keyed by `YYYY-MM` month (or
/// [`latest`](Ranking::latest)). Freshly constructed it is partial; a
/// successful [`fetch`](Ranking::fetch) populates the ordered entries and
/// clears the flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Ranking {
    pub month: String,
    /// Whether only the month key is populated so far.
    pub partial: bool,
    pub update_date: Option<DateTime<Utc>>,
    pub next_update_date: Option<DateTime<Utc>>,
    /// Ranked factions in the order the service reports them.
    pub entries: Vec<Entry>,
    /// Earliest month the service has a ranking for.
    pub first: Option<String>,
    /// Most recent month the service has a ranking for.
    pub latest: Option<String>,
    /// Payload fields this crate doesn't model, kept verbatim.
    pub extra: Map<String, Value>,
}

/// One ranked faction with its points and per-category score breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The ranked faction, as a partial store.
    pub faction: Faction,
    pub points: Option<f64>,
    pub position: Option<u32>,
    pub ranking: Option<RankingScores>,
    pub extra: Map<String, Value>,
}

impl Ranking {
    /// Partial store for a `YYYY-MM` month.
    pub fn new(month: impl Into<String>) -> Self {
        Ranking {
            month: month.into(),
            partial: true,
            update_date: None,
            next_update_date: None,
            entries: Vec::new(),
            first: None,
            latest: None,
            extra: Map::new(),
        }
    }

    /// Partial store for whichever month is currently the most recent.
    /// After a fetch the store's month is the concrete `YYYY-MM` the
    /// service resolved it to.
    pub fn latest() -> Self {
        Ranking::new(LATEST)
    }

    /// Fetch the ranking for this store's month and replace the store with
    /// it. On failure the store is left exactly as it was.
    pub async fn fetch(&mut self, client: &impl Client) -> Result<(), Error> {
        let infos = client.fetch_ranking(&self.month).await?;
        *self = Ranking {
            month: infos.month.unwrap_or_else(|| self.month.clone()),
            partial: false,
            update_date: infos.update_date,
            next_update_date: infos.next_update_date,
            entries: infos
                .entries
                .into_iter()
                .map(|entry| Entry {
                    faction: Faction::from_infos(entry.faction),
                    points: entry.points,
                    position: entry.position,
                    ranking: entry.ranking,
                    extra: entry.extra,
                })
                .collect(),
            first: infos.first,
            latest: infos.latest,
            extra: infos.extra,
        };
        Ok(())
    }
}
