//! Client for the Pactify statistics API (`https://www.pactify.fr/api`):
//! players, factions and monthly faction rankings.
//!
//! Entities are exposed as stores that start out `partial` (identifier
//! only) and fill themselves in with an async `fetch`. References between
//! entities stay navigable: a fetched player carries its faction as a
//! partial [`Faction`], a faction's snapshots carry their members as
//! partial [`Player`]s, and so on. Feeding any of those back into `fetch`
//! upgrades them to full stores.
//!
//! ```no_run
//! use pactify_api::{PactifyClient, Player};
//!
//! # async fn run() -> Result<(), pactify_api::Error> {
//! let client = PactifyClient::new();
//!
//! let player = Player::from_name(&client, "Aerin").await?;
//! println!("{:?} last seen {:?}", player.name, player.last_activity_date);
//!
//! if let Some(mut faction) = player.faction {
//!     faction.fetch(&client).await?;
//!     println!("{:?} holds {} members", faction.name, faction.members_ref.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod client;
mod dates;
pub mod error;
pub mod faction;
pub mod player;
pub mod ranking;
pub mod types;

pub use api_client::PactifyClient;
pub use client::Client;
pub use error::{Error, InternalError};
pub use faction::{Faction, Snapshot};
pub use player::Player;
pub use ranking::{Entry, Ranking};
