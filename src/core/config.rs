//! League configuration resolved from the environment.

use crate::{
    cli::types::{LeagueId, Season},
    FflError, Result, ESPN_S2_ENV_VAR, ESPN_SWID_ENV_VAR, LEAGUE_ID_ENV_VAR,
};

/// Everything needed to talk to one private ESPN league.
#[derive(Clone, PartialEq, Eq)]
pub struct LeagueConfig {
    pub league_id: LeagueId,
    pub season: Season,
    pub swid: String,
    pub espn_s2: String,
}

// Cookies stay out of debug output.
impl std::fmt::Debug for LeagueConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeagueConfig")
            .field("league_id", &self.league_id)
            .field("season", &self.season)
            .finish_non_exhaustive()
    }
}

impl LeagueConfig {
    /// Resolve from process environment. `league_id` overrides `ESPN_FFL_LEAGUE_ID`.
    pub fn from_env(league_id: Option<LeagueId>, season: Season) -> Result<Self> {
        Self::from_lookup(league_id, season, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for variable access. Blank values count as unset.
    pub fn from_lookup<F>(league_id: Option<LeagueId>, season: Season, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| FflError::MissingConfig {
                    env_var: key.to_string(),
                })
        };

        let league_id = match league_id {
            Some(id) => id,
            None => require(LEAGUE_ID_ENV_VAR)?.parse::<LeagueId>()?,
        };

        Ok(Self {
            league_id,
            season,
            swid: require(ESPN_SWID_ENV_VAR)?,
            espn_s2: require(ESPN_S2_ENV_VAR)?,
        })
    }
}
