//! Per-user preference lists: the accumulated sequence of winning records.
//!
//! One list per user, created lazily on the first win, appended to once per
//! completed round, and written through on every append. Appends from
//! different sessions for the same user are last-writer-wins; the write is
//! always the previous list plus one element, never a partial value.

mod in_memory;

use std::future::Future;

use crate::candidate::{Candidate, PetSummary};
use crate::error::StoreError;
use crate::identity::UserId;

pub use in_memory::InMemoryPreferenceStore;

/// How many winning pets the shortlist screen renders. The stored list is
/// never truncated; capping happens at presentation.
pub const SHORTLIST_LIMIT: usize = 2;

/// Durable storage for user preference lists.
pub trait PreferenceStore: Send + Sync {
    /// Append one winning record to `user`'s list and persist the whole
    /// list. Returns the new list length. Duplicates are allowed.
    fn append(
        &self,
        user: &UserId,
        pet: Candidate,
    ) -> impl Future<Output = Result<usize, StoreError>> + Send;

    /// The user's current list, oldest win first. Empty when the user has
    /// no list yet.
    fn list(&self, user: &UserId) -> impl Future<Output = Result<Vec<Candidate>, StoreError>> + Send;
}

/// Presentation view of a user's list, truncated to `limit` summaries.
pub async fn shortlist<S: PreferenceStore>(
    store: &S,
    user: &UserId,
    limit: usize,
) -> Result<Vec<PetSummary>, StoreError> {
    let pets = store.list(user).await?;
    Ok(pets.iter().take(limit).map(Candidate::summary).collect())
}
