use serde::{Deserialize, Serialize};
use std::fmt;

/// Job state exposed to our callers, independent of the provider's vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicStatus {
    Queued,
    Processing,
    Ready,
    Failed,
    Unknown,
}

impl PublicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicStatus::Queued => "queued",
            PublicStatus::Processing => "processing",
            PublicStatus::Ready => "ready",
            PublicStatus::Failed => "failed",
            PublicStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PublicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a provider job state to the public vocabulary.
///
/// Anything outside the four known states becomes [`PublicStatus::Unknown`]; callers keep the
/// raw value next to it for diagnostics.
pub fn translate(native_status: &str) -> PublicStatus {
    match native_status {
        "created" => PublicStatus::Queued,
        "started" => PublicStatus::Processing,
        "done" => PublicStatus::Ready,
        "error" => PublicStatus::Failed,
        other => {
            tracing::warn!(native_status = %other, "Unmapped provider status");
            PublicStatus::Unknown
        }
    }
}
