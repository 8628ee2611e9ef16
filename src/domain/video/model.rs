use super::status::PublicStatus;
use serde::{Deserialize, Serialize};

/// Voice engine used for every script
pub const VOICE_PROVIDER: &str = "microsoft";
pub const DEFAULT_VOICE_ID: &str = "en-US-JennyNeural";

/// Body of `POST /talks`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTalkRequest {
    pub script: TalkScript,
    pub source_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TalkScript {
    #[serde(rename = "type")]
    pub kind: String,
    pub input: String,
    pub provider: VoiceProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceProvider {
    #[serde(rename = "type")]
    pub kind: String,
    pub voice: String,
}

impl CreateTalkRequest {
    pub fn text(input: String, voice: &str, source_url: &str) -> Self {
        Self {
            script: TalkScript {
                kind: "text".to_string(),
                input,
                provider: VoiceProvider {
                    kind: VOICE_PROVIDER.to_string(),
                    voice: voice.to_string(),
                },
            },
            source_url: source_url.to_string(),
        }
    }
}

/// Provider answer to `POST /talks`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTalk {
    pub id: String,
    #[serde(default)]
    pub status: String,
}

/// Fields we read out of `GET /talks/{id}`; the full payload is passed through untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalkState {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVideo {
    pub video_id: String,
    pub native_status: String,
}

#[derive(Debug, Clone)]
pub struct VideoStatusReport {
    pub video_id: String,
    pub status: PublicStatus,
    pub native_status: String,
    pub result_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub raw: serde_json::Value,
}
