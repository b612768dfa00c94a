//! The comparison engine: forced binary choices over sampled candidates.
//!
//! One [`QuizSession`] per active quiz owns all round state. Each round
//! compares a single attribute between two sampled candidates; the user's
//! pick resolves the winning side's full record (by identifier, never by
//! display label) and appends it to the preference store before the next
//! round is presented.

mod error;
mod io;
mod shared;

use std::time::Duration;

use tracing::debug;

use crate::candidate::{AttrValue, Attribute, PetSummary};
use crate::identity::{IdentityProvider, UserId};
use crate::population::PopulationStore;
use crate::preference::{self, PreferenceStore, SHORTLIST_LIMIT};
use crate::sampler::Sampler;

pub use error::EngineError;
pub use shared::SharedSession;

/// Which side of the forced choice the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Session state: either awaiting the decision for one round, or done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingChoice(usize),
    Complete,
}

/// One side of the current round: the sampled candidate's identifier and
/// its display-transformed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceCard {
    pub candidate: usize,
    pub label: String,
}

/// The current forced-choice round, transient per-session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub index: usize,
    pub attribute: Attribute,
    pub left: ChoiceCard,
    pub right: ChoiceCard,
}

impl Round {
    /// The question the UI shows for this round.
    pub fn prompt(&self) -> &'static str {
        self.attribute.prompt()
    }
}

/// Outcome of one recorded decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// The round the decision belonged to.
    pub round: usize,
    /// Identifier of the appended candidate.
    pub chosen: usize,
    /// Length of the user's preference list after the append.
    pub list_len: usize,
    /// Session state after advancing.
    pub state: SessionState,
}

/// Tunables for one quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Number of candidates in the population, fixed at startup.
    pub population_size: usize,
    /// Attribute compared per round, in order. Defaults to the full
    /// thirteen-attribute sequence.
    pub attributes: Vec<Attribute>,
    /// Bound on each store call.
    pub io_timeout: Duration,
    /// Pause before the single retry of a failed store call.
    pub retry_backoff: Duration,
    /// How many candidate pairs to try per round before giving up.
    pub max_sample_attempts: u32,
    /// Presentation cap for the shortlist view.
    pub shortlist_limit: usize,
}

impl QuizConfig {
    pub fn new(population_size: usize) -> Self {
        QuizConfig {
            population_size,
            attributes: Attribute::SEQUENCE.to_vec(),
            io_timeout: Duration::from_secs(5),
            retry_backoff: Duration::from_millis(250),
            max_sample_attempts: 8,
            shortlist_limit: SHORTLIST_LIMIT,
        }
    }

    /// Override the compared attribute sequence.
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the per-call I/O timeout.
    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// Set the backoff before the single retry.
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Set the resampling attempt cap per round.
    pub fn with_max_sample_attempts(mut self, attempts: u32) -> Self {
        self.max_sample_attempts = attempts;
        self
    }

    /// Set the shortlist presentation cap.
    pub fn with_shortlist_limit(mut self, limit: usize) -> Self {
        self.shortlist_limit = limit;
        self
    }
}

/// State machine for one user's quiz session.
///
/// Owns the round cursor and collaborators outright; no state is shared
/// across sessions, so concurrent sessions can never bleed into each other.
pub struct QuizSession<P, S, G> {
    user: UserId,
    config: QuizConfig,
    population: P,
    preferences: S,
    sampler: G,
    state: SessionState,
    round: Option<Round>,
}

impl<P, S, G> QuizSession<P, S, G>
where
    P: PopulationStore,
    S: PreferenceStore,
    G: Sampler,
{
    /// Start a session for the currently signed-in user and present round 0.
    ///
    /// With nobody signed in this refuses to enter the engine; the only
    /// observable effect is the `NoIdentity` signal.
    pub async fn start<I: IdentityProvider>(
        identity: &I,
        population: P,
        preferences: S,
        sampler: G,
        config: QuizConfig,
    ) -> Result<Self, EngineError> {
        let user = identity.current_user().ok_or(EngineError::NoIdentity)?;
        if config.population_size == 0 {
            return Err(EngineError::EmptyPopulation);
        }

        debug!(user = %user, rounds = config.attributes.len(), "starting quiz session");
        let mut session = QuizSession {
            user,
            config,
            population,
            preferences,
            sampler,
            state: SessionState::AwaitingChoice(0),
            round: None,
        };
        if session.config.attributes.is_empty() {
            session.state = SessionState::Complete;
        } else {
            session.present_round(0).await?;
        }
        Ok(session)
    }

    /// Current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The round awaiting a decision, or `None` once complete.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The user this session records preferences for.
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Record the user's decision for the current round.
    ///
    /// Resolves the chosen side's full record, appends it to the user's
    /// preference list (exactly one append per decision, awaited before the
    /// next round is presented), then advances to the next round, or to
    /// `Complete` once the attribute sequence is exhausted.
    ///
    /// If the append succeeds but presenting the next round fails, the
    /// decision still stands: the session sits at the next round with no
    /// view, and [`resume`](Self::resume) retries the presentation. The
    /// decided round is never offered again.
    pub async fn choose(&mut self, side: Side) -> Result<Progress, EngineError> {
        let round = match (&self.state, &self.round) {
            (SessionState::Complete, _) => return Err(EngineError::QuizComplete),
            (SessionState::AwaitingChoice(_), None) => {
                return Err(EngineError::RoundNotPresented)
            }
            (SessionState::AwaitingChoice(_), Some(round)) => round,
        };
        let round_index = round.index;
        let chosen_index = match side {
            Side::Left => round.left.candidate,
            Side::Right => round.right.candidate,
        };

        let chosen = io::with_retry(self.config.io_timeout, self.config.retry_backoff, || {
            self.population.read_candidate(chosen_index)
        })
        .await?
        .ok_or(EngineError::MissingCandidate {
            index: chosen_index,
        })?;

        let list_len = io::with_retry(self.config.io_timeout, self.config.retry_backoff, || {
            self.preferences.append(&self.user, chosen.clone())
        })
        .await?;

        debug!(
            user = %self.user,
            round = round_index,
            chosen = chosen_index,
            list_len,
            "decision recorded"
        );

        // The append is durable at this point. Drop the decided round before
        // presenting the next one, so a presentation failure can never leave
        // it behind to be decided (and appended) a second time.
        self.round = None;
        let next = round_index + 1;
        if next < self.config.attributes.len() {
            self.state = SessionState::AwaitingChoice(next);
            self.present_round(next).await?;
        } else {
            self.state = SessionState::Complete;
        }

        Ok(Progress {
            round: round_index,
            chosen: chosen_index,
            list_len,
            state: self.state,
        })
    }

    /// Re-present the pending round after a failed presentation.
    ///
    /// No-op when a round is already showing or the session is complete.
    pub async fn resume(&mut self) -> Result<(), EngineError> {
        match self.state {
            SessionState::Complete => Ok(()),
            SessionState::AwaitingChoice(index) => {
                if self.round.is_none() {
                    self.present_round(index).await?;
                }
                Ok(())
            }
        }
    }

    /// The user's winning pets as presentation summaries, capped to the
    /// configured shortlist limit.
    pub async fn shortlist(&self) -> Result<Vec<PetSummary>, EngineError> {
        let summaries = io::with_retry(self.config.io_timeout, self.config.retry_backoff, || {
            preference::shortlist(&self.preferences, &self.user, self.config.shortlist_limit)
        })
        .await?;
        Ok(summaries)
    }

    /// Sample a candidate pair for round `index` and build its view.
    ///
    /// An absent value or empty string counts as missing; the pair is
    /// resampled up to the configured attempt cap before surfacing
    /// `NoUsableCandidates`.
    async fn present_round(&mut self, index: usize) -> Result<(), EngineError> {
        let attribute = self.config.attributes[index];

        for attempt in 1..=self.config.max_sample_attempts {
            let (a, b) = self.sampler.sample(self.config.population_size);
            let left = self.read_usable_value(a, attribute).await?;
            let right = self.read_usable_value(b, attribute).await?;

            match (left, right) {
                (Some(left), Some(right)) => {
                    debug!(round = index, attribute = %attribute, left = a, right = b, "round presented");
                    self.round = Some(Round {
                        index,
                        attribute,
                        left: ChoiceCard {
                            candidate: a,
                            label: left.label(),
                        },
                        right: ChoiceCard {
                            candidate: b,
                            label: right.label(),
                        },
                    });
                    return Ok(());
                }
                _ => {
                    debug!(round = index, attribute = %attribute, attempt, "missing value, resampling");
                }
            }
        }

        Err(EngineError::NoUsableCandidates {
            attribute,
            attempts: self.config.max_sample_attempts,
        })
    }

    async fn read_usable_value(
        &self,
        index: usize,
        attribute: Attribute,
    ) -> Result<Option<AttrValue>, EngineError> {
        let value = io::with_retry(self.config.io_timeout, self.config.retry_backoff, || {
            self.population.read_value(index, attribute)
        })
        .await?;
        Ok(value.filter(|v| !v.is_empty_text()))
    }
}
