use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::spotify::Track;

const WIDGET_BASE_URL: &str = "https://spotify-github-profile.vercel.app/api/view";
const WIDGET_STYLE: &str = "cover_image=true&theme=natemoo-re&show_offline=true&background_color=121212&interchange=true&bar_color=53b14f&bar_color_cover=false";

fn widget(uid: &str) -> String {
    format!(
        r#"
<div align="center">
  <a href="{WIDGET_BASE_URL}?uid={uid}&redirect=true">
    <img align="center" src="{WIDGET_BASE_URL}?uid={uid}&{WIDGET_STYLE}" alt="Spotify Now Playing" width="400">
  </a>
</div>
"#
    )
}

pub fn render(track: &Track, lyrics: &str, widget_uid: &str) -> String {
    format!(
        "\n{}\n\n### Now Playing 🎧\n**{}** by **{}**\n\n#### Lyrics:\n{}\n",
        widget(widget_uid),
        track.name,
        track.artist,
        lyrics
    )
}

/// Replaces whatever is at `path`.
pub fn write(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).with_context(|| format!("write {}", path.display()))
}
