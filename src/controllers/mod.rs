pub mod conversation;
pub mod health;
pub mod presenters;
pub mod video;
