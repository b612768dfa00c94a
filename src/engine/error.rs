//! Error types for the comparison engine.

use std::error::Error;
use std::fmt;

use crate::candidate::Attribute;
use crate::error::StoreError;

/// Error type for quiz session operations.
#[derive(Debug)]
pub enum EngineError {
    /// No user is signed in; the quiz cannot be entered.
    NoIdentity,
    /// The session already ran all rounds; no further decisions accepted.
    QuizComplete,
    /// A previous decision's append is still in flight.
    DecisionInFlight,
    /// The pending round has no presented view to decide on; the session
    /// must be resumed first.
    RoundNotPresented,
    /// The population holds no candidates to compare.
    EmptyPopulation,
    /// Resampling exhausted its attempt cap without finding a pair with
    /// usable values for this attribute.
    NoUsableCandidates { attribute: Attribute, attempts: u32 },
    /// The chosen candidate's record vanished between sampling and lookup.
    MissingCandidate { index: usize },
    /// Store I/O failed after the retry policy ran out.
    Store(StoreError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoIdentity => write!(f, "no signed-in user"),
            EngineError::QuizComplete => write!(f, "quiz already complete"),
            EngineError::DecisionInFlight => {
                write!(f, "a decision is already in flight for this session")
            }
            EngineError::RoundNotPresented => {
                write!(f, "no round presented; resume the session before deciding")
            }
            EngineError::EmptyPopulation => write!(f, "candidate population is empty"),
            EngineError::NoUsableCandidates { attribute, attempts } => write!(
                f,
                "no usable candidate pair for {} after {} attempts",
                attribute, attempts
            ),
            EngineError::MissingCandidate { index } => {
                write!(f, "candidate {} has no record", index)
            }
            EngineError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::Store(err)
    }
}
