//! ESPN Fantasy Football v3 API client.
//!
//! [`LeagueClient`] is an explicit value built from a [`LeagueConfig`] and
//! handed to every report builder. Requests are sent one at a time; there is
//! no retry and no timeout beyond reqwest's defaults.

use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;

use crate::{
    cli::types::{LeagueId, PlayerId, Season, Week},
    core::{
        filters::{free_agents_filter, player_cards_filter, recent_activity_filter},
        league_header_map, FantasyFilter, IntoHeaderValue, LeagueConfig, FANTASY_FILTER,
    },
    espn::types::{Communication, League, PlayerPoolEntry, PlayersEnvelope, Topic},
    Result,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// League views used by the reports.
pub mod views {
    pub const TEAM: &str = "mTeam";
    pub const ROSTER: &str = "mRoster";
    pub const MATCHUP_SCORE: &str = "mMatchupScore";
    pub const SETTINGS: &str = "mSettings";
    pub const PLAYER_INFO: &str = "kona_player_info";
    pub const PLAYER_CARD: &str = "kona_playercard";
    pub const COMMUNICATION: &str = "kona_league_communication";
}

/// Client for one league and season.
#[derive(Debug, Clone)]
pub struct LeagueClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
    league_id: LeagueId,
    season: Season,
}

impl LeagueClient {
    pub fn new(config: &LeagueConfig) -> Result<Self> {
        Self::with_base_url(config, FFL_BASE_URL)
    }

    /// Point the client at another API root (used by tests against a mock server).
    pub fn with_base_url(config: &LeagueConfig, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("ffl-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: league_header_map(config)?,
            league_id: config.league_id,
            season: config.season,
        })
    }

    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    pub fn season(&self) -> Season {
        self.season
    }

    fn league_url(&self) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, self.season, self.league_id
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        filter: Option<&FantasyFilter>,
    ) -> Result<T> {
        let mut builder = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .query(params);

        if let Some(filter) = filter {
            builder = builder.header(FANTASY_FILTER, filter.to_header_value()?);
        }

        log::debug!("GET {} {:?}", url, params);

        let res = builder
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// Fetch the league with the given views, optionally for one scoring period.
    pub async fn league(&self, views: &[&str], scoring_period: Option<Week>) -> Result<League> {
        let mut params: Vec<(&str, String)> =
            views.iter().map(|v| ("view", v.to_string())).collect();
        if let Some(week) = scoring_period {
            params.push(("scoringPeriodId", week.to_string()));
        }

        self.get_json(&self.league_url(), &params, None).await
    }

    /// Free agents and waiver players for `week`, most owned first.
    pub async fn free_agents(&self, week: Week, size: u32) -> Result<Vec<PlayerPoolEntry>> {
        let params = [
            ("view", views::PLAYER_INFO.to_string()),
            ("scoringPeriodId", week.to_string()),
        ];
        let filter = free_agents_filter(size);

        let envelope: PlayersEnvelope = self
            .get_json(&self.league_url(), &params, Some(&filter))
            .await?;
        Ok(envelope.players)
    }

    /// Player cards (with weekly stats through `through_week`) for `ids`.
    pub async fn player_cards(
        &self,
        ids: &[PlayerId],
        through_week: Week,
    ) -> Result<Vec<PlayerPoolEntry>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(|id| id.as_i64()).collect();
        let params = [("view", views::PLAYER_CARD.to_string())];
        let filter = player_cards_filter(&raw, self.season, through_week.as_u16().max(1));

        let envelope: PlayersEnvelope = self
            .get_json(&self.league_url(), &params, Some(&filter))
            .await?;
        Ok(envelope.players)
    }

    /// The `size` most recent transaction topics.
    pub async fn recent_activity(&self, size: u32) -> Result<Vec<Topic>> {
        let url = format!("{}/communication/", self.league_url());
        let params = [("view", views::COMMUNICATION.to_string())];
        let filter = recent_activity_filter(size, 0);

        let communication: Communication = self.get_json(&url, &params, Some(&filter)).await?;
        Ok(communication.topics)
    }
}
