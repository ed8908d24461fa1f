//! Genius API: song search and canonical lyrics page lookup.

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::spotify::{auth::bearer, Track};

pub mod scrape;

#[derive(Deserialize)]
struct Envelope<T> {
    response: T,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    result: HitResult,
}

#[derive(Deserialize)]
struct HitResult {
    id: u64,
}

#[derive(Deserialize)]
struct SongResponse {
    song: Song,
}

#[derive(Deserialize)]
struct Song {
    url: String,
}

#[derive(Serialize)]
struct SearchQuery {
    q: String,
}

impl SearchQuery {
    fn new(track: &Track) -> SearchQuery {
        SearchQuery {
            q: format!("{} {}", track.name, track.artist),
        }
    }
}

fn search_url(api_url: &str, track: &Track) -> Result<Url> {
    let params = serde_urlencoded::to_string(SearchQuery::new(track))
        .context("encode search query")?;
    Url::parse(&format!("{api_url}/search?{params}")).context("parse search url")
}

async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
    token: &str,
) -> Result<T> {
    let envelope: Envelope<T> = client
        .get(url)
        .header(AUTHORIZATION, bearer(token)?)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(envelope.response)
}

/// Id of the first search hit, if any. No ranking is applied.
pub async fn search(
    client: &reqwest::Client,
    api_url: &str,
    token: &str,
    track: &Track,
) -> Result<Option<u64>> {
    let url = search_url(api_url, track)?;
    debug!(%url, "searching genius");

    let response: SearchResponse = get_json(client, url, token)
        .await
        .context("genius search")?;

    Ok(response.hits.into_iter().next().map(|h| h.result.id))
}

pub async fn song_url(
    client: &reqwest::Client,
    api_url: &str,
    token: &str,
    id: u64,
) -> Result<String> {
    let url = Url::parse(&format!("{api_url}/songs/{id}")).context("parse song url")?;
    let response: SongResponse = get_json(client, url, token)
        .await
        .with_context(|| format!("genius song {id}"))?;
    Ok(response.song.url)
}
