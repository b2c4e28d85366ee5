//! HTTP utilities for ESPN API communication

use crate::{core::config::LeagueConfig, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, COOKIE};

/// Header ESPN reads server-side player/topic filters from.
pub const FANTASY_FILTER: HeaderName = HeaderName::from_static("x-fantasy-filter");

/// Build the default headers for a private league: JSON accept plus the
/// `SWID`/`espn_s2` cookie pair.
pub fn league_header_map(config: &LeagueConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let cookie = format!("SWID={}; espn_s2={}", config.swid, config.espn_s2);
    let mut cookie = HeaderValue::from_str(&cookie)?;
    cookie.set_sensitive(true);
    h.insert(COOKIE, cookie);
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LeagueId, Season};

    fn config(swid: &str, s2: &str) -> LeagueConfig {
        LeagueConfig {
            league_id: LeagueId::new(12345),
            season: Season::new(2024),
            swid: swid.to_string(),
            espn_s2: s2.to_string(),
        }
    }

    #[test]
    fn test_league_header_map() {
        let headers = league_header_map(&config("{SWID-1}", "abc%2Fdef")).unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(
            headers.get(COOKIE).unwrap(),
            "SWID={SWID-1}; espn_s2=abc%2Fdef"
        );
        assert!(headers.get(COOKIE).unwrap().is_sensitive());
    }

    #[test]
    fn test_league_header_map_rejects_newlines() {
        assert!(league_header_map(&config("bad\nswid", "s2")).is_err());
    }
}
