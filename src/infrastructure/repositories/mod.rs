pub mod did_talks_repository;
pub mod talks_repository;

pub use did_talks_repository::{DidTalksRepository, DID_API_URL};
pub use talks_repository::{TalksRepository, TalksRepositoryError};
