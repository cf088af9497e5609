//! YouTube URL → thumbnail image resolution
//!
//! The id is the first run of 11 `[0-9A-Za-z_-]` characters that directly
//! follows `v=` or a `/`. Nothing checks that YouTube actually generated a
//! maxres image for that id.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `watch?v=<id>`, `youtu.be/<id>`, `/embed/<id>`, `/shorts/<id>`, ...
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11}).*").expect("invalid video id regex")
});

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Extract the 11-character video id from the first match in `url`.
///
/// # Example
/// ```
/// use thumbboard_core::extract_video_id;
///
/// assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
/// assert_eq!(extract_video_id("not a video"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the maxres thumbnail URL for `url`, or `None` if no id is present.
pub fn extract_thumbnail_url(url: &str) -> Option<String> {
    extract_video_id(url).map(|id| format!("{THUMBNAIL_HOST}/{id}/maxresdefault.jpg"))
}

/// Resolve `url` to a thumbnail URL, falling back to the input verbatim.
pub fn resolve_thumbnail_url(url: &str) -> String {
    match extract_thumbnail_url(url) {
        Some(resolved) => resolved,
        None => {
            tracing::debug!(url, "no video id found, keeping submitted url");
            url.to_owned()
        }
    }
}
