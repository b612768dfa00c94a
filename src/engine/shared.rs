//! Shared session handle with the one-in-flight-decision latch.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::population::PopulationStore;
use crate::preference::PreferenceStore;
use crate::sampler::Sampler;

use super::{EngineError, Progress, QuizSession, Round, SessionState, Side};

/// Clonable handle to a session shared across tasks (UI callbacks, timers).
///
/// Decisions go through a try-lock: submitting one while a previous append
/// is still in flight fails fast with `DecisionInFlight` instead of queuing,
/// so interleaved read-then-write races on the user's list cannot happen.
pub struct SharedSession<P, S, G> {
    inner: Arc<Mutex<QuizSession<P, S, G>>>,
}

impl<P, S, G> Clone for SharedSession<P, S, G> {
    fn clone(&self) -> Self {
        SharedSession {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P, S, G> SharedSession<P, S, G>
where
    P: PopulationStore,
    S: PreferenceStore,
    G: Sampler,
{
    pub fn new(session: QuizSession<P, S, G>) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Record a decision, or fail with `DecisionInFlight` if another one is
    /// still being processed.
    pub async fn choose(&self, side: Side) -> Result<Progress, EngineError> {
        let mut session = self
            .inner
            .try_lock()
            .map_err(|_| EngineError::DecisionInFlight)?;
        session.choose(side).await
    }

    /// Re-present the pending round, or fail with `DecisionInFlight` if a
    /// decision is being processed.
    pub async fn resume(&self) -> Result<(), EngineError> {
        let mut session = self
            .inner
            .try_lock()
            .map_err(|_| EngineError::DecisionInFlight)?;
        session.resume().await
    }

    /// Snapshot of the round awaiting a decision.
    pub async fn round(&self) -> Option<Round> {
        self.inner.lock().await.round().cloned()
    }

    /// Current session state.
    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state()
    }
}
