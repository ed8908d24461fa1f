use anyhow::{bail, Context, Result};
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use auth::AccessToken;

pub mod auth;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Playback {
    Nothing,
    MissingItem,
    Playing(Track),
}

#[derive(Deserialize)]
struct Item {
    name: String,
    artists: Vec<Artist>,
}

#[derive(Deserialize)]
struct Artist {
    name: String,
}

pub async fn currently_playing(
    client: &reqwest::Client,
    api_url: &str,
    token: &AccessToken,
) -> Result<Playback> {
    let url = format!("{api_url}/me/player/currently-playing");
    debug!(%url, "requesting now playing");

    let response = client
        .get(url)
        .header(AUTHORIZATION, token.bearer()?)
        .send()
        .await
        .context("send now playing request")?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Playback::Nothing);
    }

    // Error objects such as `{"error": {...}}` carry no item and fall through
    // to MissingItem. Only non-JSON error bodies are faults.
    let status = response.status();
    let body = response
        .text()
        .await
        .context("read now playing response")?;

    if !status.is_success() && serde_json::from_str::<serde_json::Value>(&body).is_err() {
        bail!("now playing request rejected: {status}");
    }

    parse_playback(&body)
}

fn parse_playback(body: &str) -> Result<Playback> {
    if body.trim().is_empty() {
        return Ok(Playback::Nothing);
    }

    let value: serde_json::Value =
        serde_json::from_str(body).context("parse now playing response")?;

    if value.as_object().is_some_and(|o| o.is_empty()) {
        return Ok(Playback::Nothing);
    }

    let item = match value.get("item") {
        None => return Ok(Playback::MissingItem),
        Some(serde_json::Value::Null) => bail!(Error::MissingField("item.name")),
        Some(i) => i,
    };

    let item: Item =
        serde_json::from_value(item.clone()).context("parse now playing item")?;
    let artist = item
        .artists
        .into_iter()
        .next()
        .ok_or(Error::MissingField("item.artists"))?;

    Ok(Playback::Playing(Track {
        name: item.name,
        artist: artist.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bodies_mean_nothing_playing() {
        assert_eq!(parse_playback("").unwrap(), Playback::Nothing);
        assert_eq!(parse_playback("{}").unwrap(), Playback::Nothing);
    }

    #[test]
    fn absent_item_is_missing() {
        assert_eq!(
            parse_playback(r#"{"is_playing": false}"#).unwrap(),
            Playback::MissingItem
        );
        assert_eq!(
            parse_playback(r#"{"error": {"status": 401, "message": "Unauthorized"}}"#).unwrap(),
            Playback::MissingItem
        );
    }

    #[test]
    fn null_item_is_an_error() {
        let err = parse_playback(r#"{"item": null}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingField("item.name"))
        ));
    }

    #[test]
    fn first_artist_is_primary() {
        let body = r#"{
            "is_playing": true,
            "item": {
                "name": "Teardrop",
                "artists": [{"name": "Massive Attack"}, {"name": "Elizabeth Fraser"}]
            }
        }"#;
        assert_eq!(
            parse_playback(body).unwrap(),
            Playback::Playing(Track {
                name: "Teardrop".to_string(),
                artist: "Massive Attack".to_string(),
            })
        );
    }

    #[test]
    fn item_without_artists_is_an_error() {
        let err = parse_playback(r#"{"item": {"name": "x", "artists": []}}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingField("item.artists"))
        ));
    }
}
