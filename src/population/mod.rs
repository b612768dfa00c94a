//! Read-only access to the candidate population.
//!
//! The population lives in an external keyed store; this crate only needs
//! single-shot reads of one attribute value or one full record by index.

mod in_memory;

use std::future::Future;

use crate::candidate::{AttrValue, Attribute, Candidate};
use crate::error::StoreError;

pub use in_memory::InMemoryPopulation;

/// Keyed read access to candidate records.
///
/// `None` means the index (or its value for that attribute) has no data;
/// the engine recovers from that locally by resampling.
pub trait PopulationStore: Send + Sync {
    /// Read one attribute value of the candidate at `index`.
    fn read_value(
        &self,
        index: usize,
        attribute: Attribute,
    ) -> impl Future<Output = Result<Option<AttrValue>, StoreError>> + Send;

    /// Read the full record of the candidate at `index`.
    fn read_candidate(
        &self,
        index: usize,
    ) -> impl Future<Output = Result<Option<Candidate>, StoreError>> + Send;
}
