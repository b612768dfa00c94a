//! InMemoryPopulation - Vec-backed population for testing and development.

use std::sync::Arc;

use crate::candidate::{AttrValue, Attribute, Candidate};
use crate::error::StoreError;

use super::PopulationStore;

/// In-memory population backed by a shared immutable record list.
///
/// Records never change after loading, so clones share the same `Arc`.
#[derive(Clone)]
pub struct InMemoryPopulation {
    records: Arc<Vec<Candidate>>,
}

impl InMemoryPopulation {
    /// Build a population from loaded records.
    pub fn from_records(records: Vec<Candidate>) -> Self {
        InMemoryPopulation {
            records: Arc::new(records),
        }
    }

    /// Number of candidates in the population.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PopulationStore for InMemoryPopulation {
    async fn read_value(
        &self,
        index: usize,
        attribute: Attribute,
    ) -> Result<Option<AttrValue>, StoreError> {
        Ok(self.records.get(index).map(|pet| pet.value_of(attribute)))
    }

    async fn read_candidate(&self, index: usize) -> Result<Option<Candidate>, StoreError> {
        Ok(self.records.get(index).cloned())
    }
}
