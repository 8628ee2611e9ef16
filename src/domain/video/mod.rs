pub mod error;
pub mod model;
pub mod service;
pub mod status;

pub use error::VideoServiceError;
pub use model::{
    CreateTalkRequest, CreatedTalk, GeneratedVideo, TalkState, VideoStatusReport, DEFAULT_VOICE_ID,
};
pub use service::{VideoService, VideoServiceApi};
pub use status::{translate, PublicStatus};
