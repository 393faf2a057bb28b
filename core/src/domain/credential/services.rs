use rand::{Rng, seq::SliceRandom};

use crate::domain::{common::entities::app_errors::CoreError, credential::value_objects::Credential};

/// Fixed set of provider credentials. Every call draws one independently and
/// uniformly at random; there is no round-robin or health tracking.
#[derive(Debug, Clone)]
pub struct ProviderKeyRing {
    credentials: Vec<Credential>,
}

impl ProviderKeyRing {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Credential>,
    {
        Self {
            credentials: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Startup check: the ring must hold at least one key and no blank entries.
    pub fn ensure_usable(&self) -> Result<(), CoreError> {
        if self.credentials.is_empty() || self.credentials.iter().any(Credential::is_blank) {
            return Err(CoreError::NoCredentialAvailable);
        }

        Ok(())
    }

    pub fn pick(&self) -> Result<Credential, CoreError> {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn pick_with<R>(&self, rng: &mut R) -> Result<Credential, CoreError>
    where
        R: Rng + ?Sized,
    {
        let credential = self
            .credentials
            .choose(rng)
            .ok_or(CoreError::NoCredentialAvailable)?;

        if credential.is_blank() {
            tracing::warn!("selected provider credential is empty");
            return Err(CoreError::NoCredentialAvailable);
        }

        Ok(credential.clone())
    }
}
