mod candidate;
mod engine;
mod error;
mod identity;
mod population;
mod preference;
mod sampler;

pub use candidate::{parse_export, AttrValue, Attribute, Candidate, PetSummary};
pub use engine::{
    ChoiceCard, EngineError, Progress, QuizConfig, QuizSession, Round, SessionState,
    SharedSession, Side,
};
pub use error::StoreError;
pub use identity::{IdentityProvider, StaticIdentity, UserId};
pub use population::{InMemoryPopulation, PopulationStore};
pub use preference::{shortlist, InMemoryPreferenceStore, PreferenceStore, SHORTLIST_LIMIT};
pub use sampler::{DistinctSampler, Sampler, UniformSampler};
