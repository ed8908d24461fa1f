use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as b64, Engine};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::Deserialize;

use crate::error::Error;

#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: &str, client_secret: &str) -> Credentials {
        Credentials {
            client_id: String::from(client_id),
            client_secret: String::from(client_secret),
        }
    }

    fn basic_header(&self) -> Result<HeaderValue> {
        Ok(HeaderValue::from_str(&format!(
            "Basic {}",
            b64.encode(format!("{}:{}", self.client_id, self.client_secret))
        ))?)
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    #[cfg(test)]
    pub fn new(token: &str) -> AccessToken {
        AccessToken(token.to_string())
    }

    pub fn bearer(&self) -> Result<HeaderValue> {
        bearer(&self.0)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

pub(crate) fn bearer(token: &str) -> Result<HeaderValue> {
    Ok(HeaderValue::from_str(&format!("Bearer {token}"))?)
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Client-credentials grant against `{accounts_url}/api/token`.
pub async fn request_token(
    client: &reqwest::Client,
    accounts_url: &str,
    creds: &Credentials,
) -> Result<AccessToken> {
    let response = client
        .post(format!("{accounts_url}/api/token"))
        .header(AUTHORIZATION, creds.basic_header()?)
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .context("send access token request")?
        .error_for_status()
        .context("access token request rejected")?;

    let token: TokenResponse = response
        .json()
        .await
        .context("parse access token response")?;

    let token = token
        .access_token
        .ok_or(Error::MissingField("access_token"))?;

    Ok(AccessToken(token))
}
