use super::error::KeyPoolError;
use parking_lot::Mutex;
use std::fmt;

/// Number of trailing characters shown when a credential is logged
const FINGERPRINT_LEN: usize = 4;

/// A single provider API key.
///
/// The raw value only leaves this type through [`Credential::expose`]; `Debug` and `Display`
/// print a masked fingerprint so keys never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw key, for building the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form of the key. Keys too short to hide most of their length are masked whole.
    pub fn fingerprint(&self) -> String {
        if self.0.chars().count() <= FINGERPRINT_LEN * 2 {
            return "****".to_string();
        }
        let tail: Vec<char> = self.0.chars().rev().take(FINGERPRINT_LEN).collect();
        let tail: String = tail.into_iter().rev().collect();
        format!("****{}", tail)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.fingerprint())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fingerprint())
    }
}

/// Round-robin pool of provider API keys.
///
/// The key list is fixed at construction. The cursor is the only mutable state and is read and
/// advanced under one lock, so every call to [`KeyPool::next`] consumes exactly one position
/// even under concurrent load. The lock is never held across I/O: callers get an owned
/// [`Credential`] back before they talk to the provider.
pub struct KeyPool {
    keys: Vec<Credential>,
    cursor: Mutex<usize>,
}

impl KeyPool {
    pub fn new(keys: Vec<Credential>) -> Self {
        Self {
            keys,
            cursor: Mutex::new(0),
        }
    }

    /// Build the pool from the configured sources.
    ///
    /// `multi` is a comma-separated list and wins when it yields at least one key; `single` is
    /// the fallback. Blank entries are ignored. With neither present the pool is empty and
    /// every draw fails with [`KeyPoolError::NoCredentialsConfigured`].
    pub fn from_sources(multi: Option<&str>, single: Option<&str>) -> Self {
        let mut keys: Vec<Credential> = multi
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(Credential::new)
                    .collect()
            })
            .unwrap_or_default();

        if keys.is_empty() {
            if let Some(key) = single.map(str::trim).filter(|key| !key.is_empty()) {
                keys.push(Credential::new(key));
            }
        }

        if keys.is_empty() {
            tracing::warn!("No provider API keys configured, video requests will fail");
        } else {
            tracing::info!(
                key_count = keys.len(),
                keys = ?keys,
                "Provider API key pool loaded"
            );
        }

        Self::new(keys)
    }

    /// Take the key under the cursor and move the cursor one position forward
    pub fn next(&self) -> Result<Credential, KeyPoolError> {
        if self.keys.is_empty() {
            return Err(KeyPoolError::NoCredentialsConfigured);
        }

        let index = {
            let mut cursor = self.cursor.lock();
            let index = *cursor;
            *cursor = (index + 1) % self.keys.len();
            index
        };

        let credential = self.keys[index].clone();
        tracing::debug!(
            key_index = index,
            key = %credential,
            pool_size = self.keys.len(),
            "API key selected"
        );

        Ok(credential)
    }

    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Debug for KeyPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPool")
            .field("keys", &self.keys)
            .field("cursor", &*self.cursor.lock())
            .finish()
    }
}
