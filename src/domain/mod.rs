pub mod credentials;
pub mod presenter;
pub mod video;
