use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::error::Error;
use crate::spotify::auth::Credentials;

const SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
const GENIUS_API_URL: &str = "https://api.genius.com";
const SPOTIFY_PROFILE_UID: &str = "31z4hwucc4g3x3klr2ezheobh2ee";

/// Everything a single run needs, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// Only required once a track is known to be playing.
    pub genius_token: Option<String>,
    pub accounts_url: String,
    pub spotify_api_url: String,
    pub genius_api_url: String,
    pub widget_uid: String,
    pub output: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenvy::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(Error::MissingVar(key));
        let base_url = |key: &str, default: &str| {
            lookup(key)
                .unwrap_or_else(|| default.to_string())
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Config {
            credentials: Credentials::new(
                &required("SPOTIFY_CLIENT_ID")?,
                &required("SPOTIFY_CLIENT_SECRET")?,
            ),
            genius_token: lookup("GENIUS_TOKEN"),
            accounts_url: base_url("SPOTIFY_ACCOUNTS_URL", SPOTIFY_ACCOUNTS_URL),
            spotify_api_url: base_url("SPOTIFY_API_URL", SPOTIFY_API_URL),
            genius_api_url: base_url("GENIUS_API_URL", GENIUS_API_URL),
            widget_uid: lookup("SPOTIFY_PROFILE_UID")
                .unwrap_or_else(|| SPOTIFY_PROFILE_UID.to_string()),
            output: PathBuf::from("README.md"),
        })
    }

    pub fn genius_token(&self) -> Result<&str> {
        Ok(self
            .genius_token
            .as_deref()
            .ok_or(Error::MissingVar("GENIUS_TOKEN"))?)
    }
}
