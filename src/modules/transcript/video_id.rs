use std::sync::LazyLock;

use regex::Regex;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid video id pattern"));

/// Extract the 11-character video identifier from a free-form URL.
/// First match wins; the id is not verified to exist upstream.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .map(|caps| caps[1].to_string())
}
