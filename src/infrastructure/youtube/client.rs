use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::modules::transcript::error::TranscriptError;
use crate::modules::transcript::fetcher::TranscriptFetcher;
use crate::modules::transcript::model::TranscriptSegment;

const PLAYER_URL: &str = "https://www.youtube.com/youtubei/v1/player";

// The Android client gets caption tracks without consent cookies or an API key.
const CLIENT_NAME: &str = "ANDROID";
const CLIENT_VERSION: &str = "20.10.38";

/// Caption client against YouTube's InnerTube player endpoint.
///
/// One player call resolves playability and the caption track list, then the
/// selected track is downloaded in `json3` format. Every request is a fresh
/// upstream call; no retry or caching.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
}

impl YouTubeClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    async fn player_response(&self, video_id: &str) -> Result<PlayerResponse, TranscriptError> {
        let body = json!({
            "context": {
                "client": {
                    "clientName": CLIENT_NAME,
                    "clientVersion": CLIENT_VERSION,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .http
            .post(PLAYER_URL)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn download_track(&self, track: &CaptionTrack) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let url = if track.base_url.contains('?') {
            format!("{}&fmt=json3", track.base_url)
        } else {
            format!("{}?fmt=json3", track.base_url)
        };

        let transcript: Json3Transcript = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(segments_from_json3(transcript))
    }
}

#[async_trait]
impl TranscriptFetcher for YouTubeClient {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let player = self.player_response(video_id).await?;

        let playability = player.playability_status.unwrap_or_default();
        match playability.status.as_deref() {
            Some("OK") | None => {}
            Some("ERROR") => return Err(TranscriptError::VideoUnavailable),
            Some(status) => {
                if player.captions.is_none() {
                    let reason = playability
                        .reason
                        .unwrap_or_else(|| format!("video is not playable ({status})"));
                    return Err(TranscriptError::Other(reason));
                }
            }
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .and_then(|r| r.caption_tracks)
            .unwrap_or_default();

        let Some(track) = pick_track(&tracks) else {
            return Err(TranscriptError::SubtitlesDisabled);
        };

        debug!(video_id, language = ?track.language_code, "downloading caption track");
        self.download_track(track).await
    }
}

/// Manually-authored English first, then any English, then the first track.
fn pick_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    let is_english =
        |t: &&CaptionTrack| t.language_code.as_deref().is_some_and(|l| l.starts_with("en"));

    tracks
        .iter()
        .filter(|t| t.kind.as_deref() != Some("asr"))
        .find(is_english)
        .or_else(|| tracks.iter().find(is_english))
        .or_else(|| tracks.first())
}

fn segments_from_json3(transcript: Json3Transcript) -> Vec<TranscriptSegment> {
    transcript
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs?.into_iter().filter_map(|s| s.utf8).collect();
            let text = text.replace('\n', " ").trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text,
                start: event.t_start_ms.unwrap_or(0) as f64 / 1000.0,
                duration: event.d_duration_ms.unwrap_or(0) as f64 / 1000.0,
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayabilityStatus {
    status: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: Option<String>,
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Json3Transcript {
    events: Option<Vec<Json3Event>>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    t_start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    d_duration_ms: Option<u64>,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    utf8: Option<String>,
}
