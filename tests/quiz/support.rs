//! Test doubles for quiz scenarios.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;

use pawmatch::{
    AttrValue, Attribute, Candidate, InMemoryPopulation, InMemoryPreferenceStore,
    PopulationStore, PreferenceStore, Sampler, StoreError, UserId,
};

/// Sampler replaying a fixed script of pairs.
pub struct ScriptedSampler {
    pairs: Vec<(usize, usize)>,
    next: usize,
}

impl ScriptedSampler {
    pub fn new(pairs: Vec<(usize, usize)>) -> Self {
        ScriptedSampler { pairs, next: 0 }
    }
}

impl Sampler for ScriptedSampler {
    fn sample(&mut self, _population_size: usize) -> (usize, usize) {
        let pair = self.pairs[self.next % self.pairs.len()];
        self.next += 1;
        pair
    }
}

/// Population that fails its first `failures` reads, then delegates.
#[derive(Clone)]
pub struct FlakyPopulation {
    inner: InMemoryPopulation,
    remaining_failures: Arc<AtomicU32>,
}

impl FlakyPopulation {
    pub fn new(inner: InMemoryPopulation, failures: u32) -> Self {
        FlakyPopulation {
            inner,
            remaining_failures: Arc::new(AtomicU32::new(failures)),
        }
    }

    fn should_fail(&self) -> bool {
        self.remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl PopulationStore for FlakyPopulation {
    async fn read_value(
        &self,
        index: usize,
        attribute: Attribute,
    ) -> Result<Option<AttrValue>, StoreError> {
        if self.should_fail() {
            return Err(StoreError::Unavailable("flaky".into()));
        }
        self.inner.read_value(index, attribute).await
    }

    async fn read_candidate(&self, index: usize) -> Result<Option<Candidate>, StoreError> {
        if self.should_fail() {
            return Err(StoreError::Unavailable("flaky".into()));
        }
        self.inner.read_candidate(index).await
    }
}

/// Population whose attribute-value reads can be switched to fail while
/// full-record reads keep working.
#[derive(Clone)]
pub struct TogglingPopulation {
    inner: InMemoryPopulation,
    value_reads_fail: Arc<AtomicBool>,
}

impl TogglingPopulation {
    pub fn new(inner: InMemoryPopulation) -> Self {
        TogglingPopulation {
            inner,
            value_reads_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn fail_value_reads(&self, fail: bool) {
        self.value_reads_fail.store(fail, Ordering::SeqCst);
    }
}

impl PopulationStore for TogglingPopulation {
    async fn read_value(
        &self,
        index: usize,
        attribute: Attribute,
    ) -> Result<Option<AttrValue>, StoreError> {
        if self.value_reads_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Serde("corrupt value".into()));
        }
        self.inner.read_value(index, attribute).await
    }

    async fn read_candidate(&self, index: usize) -> Result<Option<Candidate>, StoreError> {
        self.inner.read_candidate(index).await
    }
}

/// Preference store counting appends, with an optional gate that holds
/// appends until the test releases them.
#[derive(Clone)]
pub struct ObservedPreferenceStore {
    inner: InMemoryPreferenceStore,
    appends: Arc<AtomicUsize>,
    gate: Option<Arc<Semaphore>>,
}

impl ObservedPreferenceStore {
    pub fn new() -> Self {
        ObservedPreferenceStore {
            inner: InMemoryPreferenceStore::new(),
            appends: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    /// Appends block until a permit is added to the returned gate.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let store = ObservedPreferenceStore {
            inner: InMemoryPreferenceStore::new(),
            appends: Arc::new(AtomicUsize::new(0)),
            gate: Some(Arc::clone(&gate)),
        };
        (store, gate)
    }

    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }
}

impl PreferenceStore for ObservedPreferenceStore {
    async fn append(&self, user: &UserId, pet: Candidate) -> Result<usize, StoreError> {
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| StoreError::Unavailable("gate closed".into()))?;
            permit.forget();
        }
        let len = self.inner.append(user, pet).await?;
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(len)
    }

    async fn list(&self, user: &UserId) -> Result<Vec<Candidate>, StoreError> {
        self.inner.list(user).await
    }
}

/// The three-pet reference population from the scripted scenario.
pub fn scripted_population() -> InMemoryPopulation {
    InMemoryPopulation::from_records(vec![
        Candidate::new("Dog", "Rex"),
        Candidate::new("Cat", "Mia"),
        Candidate::new("Dog", "Fido"),
    ])
}
