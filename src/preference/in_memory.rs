//! InMemoryPreferenceStore - HashMap-backed preference lists.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::candidate::Candidate;
use crate::error::StoreError;
use crate::identity::UserId;

use super::PreferenceStore;

/// In-memory preference store keyed by user id.
///
/// Each entry holds the serialized full list, so every append is a single
/// whole-value replacement, the same write shape a remote keyed store
/// would see. Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryPreferenceStore {
    storage: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryPreferenceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn decode(bytes: &[u8]) -> Result<Vec<Candidate>, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    async fn append(&self, user: &UserId, pet: Candidate) -> Result<usize, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        let mut pets = match storage.get(user.as_str()) {
            Some(bytes) => Self::decode(bytes)?,
            None => Vec::new(),
        };
        pets.push(pet);

        let bytes = serde_json::to_vec(&pets).map_err(|e| StoreError::Serde(e.to_string()))?;
        storage.insert(user.as_str().to_string(), bytes);

        Ok(pets.len())
    }

    async fn list(&self, user: &UserId) -> Result<Vec<Candidate>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        match storage.get(user.as_str()) {
            Some(bytes) => Self::decode(bytes),
            None => Ok(Vec::new()),
        }
    }
}
