use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod genius;
pub mod readme;
pub mod spotify;

pub use config::Config;
pub use error::Error;
use spotify::{Playback, Track};

#[derive(Debug)]
pub enum Outcome {
    NothingPlaying,
    MissingItem,
    LyricsNotFound,
    Rendered { track: Track, document: String },
    Written { track: Track, path: PathBuf },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NothingPlaying => write!(f, "No song currently playing"),
            Outcome::MissingItem => write!(f, "No 'item' key in response"),
            Outcome::LyricsNotFound => write!(f, "Lyrics not found"),
            Outcome::Rendered { document, .. } => write!(f, "{document}"),
            Outcome::Written { track, path } => write!(
                f,
                "Wrote {} by {} to {}",
                track.name,
                track.artist,
                path.display()
            ),
        }
    }
}

/// Runs the whole chain and overwrites `config.output` on success.
pub async fn run(config: &Config, client: &reqwest::Client) -> Result<Outcome> {
    let (track, document) = match render(config, client).await? {
        Outcome::Rendered { track, document } => (track, document),
        other => return Ok(other),
    };

    readme::write(&config.output, &document)?;
    info!(path = %config.output.display(), "document written");

    Ok(Outcome::Written {
        track,
        path: config.output.clone(),
    })
}

/// Same chain as [`run`], stopping before the write.
pub async fn render(config: &Config, client: &reqwest::Client) -> Result<Outcome> {
    let token = spotify::auth::request_token(client, &config.accounts_url, &config.credentials)
        .await
        .context("request spotify access token")?;
    info!("spotify access token acquired");

    let track = match spotify::currently_playing(client, &config.spotify_api_url, &token)
        .await
        .context("fetch now playing")?
    {
        Playback::Nothing => return Ok(Outcome::NothingPlaying),
        Playback::MissingItem => return Ok(Outcome::MissingItem),
        Playback::Playing(track) => track,
    };
    info!(track = %track.name, artist = %track.artist, "now playing");

    let genius_token = config.genius_token()?;
    let id = match genius::search(client, &config.genius_api_url, genius_token, &track)
        .await
        .context("search lyrics")?
    {
        Some(id) => id,
        None => return Ok(Outcome::LyricsNotFound),
    };
    debug!(id, "first search hit");

    let url = genius::song_url(client, &config.genius_api_url, genius_token, id)
        .await
        .context("resolve lyrics page")?;
    let page = genius::scrape::fetch_lyrics(client, &url)
        .await
        .context("scrape lyrics")?;
    info!(url = %page.url, "lyrics scraped");

    let document = readme::render(&track, &page.text, &config.widget_uid);
    Ok(Outcome::Rendered { track, document })
}
