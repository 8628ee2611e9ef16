pub mod error;
pub mod key_pool;

pub use error::KeyPoolError;
pub use key_pool::{Credential, KeyPool};
