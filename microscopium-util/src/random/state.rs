//! Shared, seedable generator handle.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Handle to a pseudo-random generator.
///
/// Cloning a `RandomState` does not copy the generator: every clone draws
/// from the same state, and [`RandomState::same_instance`] reports `true`
/// between them. Use [`RandomState::from_seed`] to get an independent,
/// reproducible generator.
///
/// Uses ChaCha8Rng so a given seed produces the same sequence on every
/// platform.
#[derive(Clone)]
pub struct RandomState {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl RandomState {
    /// Create a new generator seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a new generator seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::from_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Whether `self` and `other` are handles to the same generator.
    pub fn same_instance(&self, other: &RandomState) -> bool {
        Arc::ptr_eq(&self.rng, &other.rng)
    }

    /// Run `f` with exclusive access to the underlying generator.
    ///
    /// Other handles to the same generator block until `f` returns. The
    /// lock is not reentrant: drawing through this handle or any clone of it
    /// from inside `f` deadlocks. Draw from the `rng` argument instead.
    pub fn with_rng<R>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> R) -> R {
        f(&mut self.lock())
    }

    // A panic while sampling cannot leave ChaCha8Rng half-updated, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, ChaCha8Rng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for RandomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomState")
            .field("instance", &Arc::as_ptr(&self.rng))
            .finish()
    }
}

impl RngCore for RandomState {
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.lock().fill_bytes(dst)
    }
}
