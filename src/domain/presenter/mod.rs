use serde::{Deserialize, Serialize};

/// A named source image the provider animates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Presenter {
    pub name: String,
    pub image_url: String,
}

pub mod catalog;
pub use catalog::{PresenterCatalog, DEFAULT_PRESENTER};
