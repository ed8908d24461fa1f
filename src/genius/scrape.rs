use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::error::Error;

const LYRICS_SELECTOR: &str = "div.lyrics";
const CONTAINER_SELECTOR: &str = r#"div[data-lyrics-container="true"]"#;

#[derive(Debug, Clone)]
pub struct LyricsPage {
    pub url: String,
    pub text: String,
}

pub async fn fetch_lyrics(client: &reqwest::Client, url: &str) -> Result<LyricsPage> {
    debug!(url, "fetching lyrics page");
    let html = client
        .get(url)
        .send()
        .await
        .context("send lyrics page request")?
        .error_for_status()
        .context("lyrics page request rejected")?
        .text()
        .await
        .context("read lyrics page")?;

    let text = extract_lyrics(&html)?.ok_or_else(|| Error::LyricsContainerMissing {
        url: url.to_string(),
    })?;

    Ok(LyricsPage {
        url: url.to_string(),
        text,
    })
}

fn selector(s: &str) -> Result<Selector> {
    Ok(Selector::parse(s).map_err(|e| Error::Selector(format!("{s}: {e}")))?)
}

/// Text of the first `div.lyrics`, falling back to the newer
/// `data-lyrics-container` blocks. `None` when the page has neither.
pub fn extract_lyrics(html: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);

    if let Some(div) = document.select(&selector(LYRICS_SELECTOR)?).next() {
        return Ok(Some(div.text().collect()));
    }

    let containers: Vec<String> = document
        .select(&selector(CONTAINER_SELECTOR)?)
        .map(container_text)
        .collect();

    if containers.is_empty() {
        return Ok(None);
    }
    Ok(Some(containers.join("\n")))
}

fn container_text(container: ElementRef) -> String {
    let mut text = String::new();
    for node in container.descendants() {
        match node.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if e.name() == "br" => text.push('\n'),
            _ => {}
        }
    }
    text
}
