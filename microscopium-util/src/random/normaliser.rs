//! Turning seeds into random states.

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::{RandomStateError, RandomStateResult};

use super::{RandomState, RandomStateConfiguration, Seed};

static GLOBAL: OnceLock<RandomStateNormaliser> = OnceLock::new();

/// Owner of the default [`RandomState`] handed out for absent seeds.
///
/// The process-wide instance behind [`normalise_random_state`] is created
/// once, on first use, from [`RandomStateConfiguration::from_env`]. It is
/// never reset or torn down. Code that needs a controlled default, such as
/// tests, builds its own normaliser with [`RandomStateNormaliser::new`] or
/// installs one with [`RandomStateNormaliser::install_global`] before the
/// first absent-seed call.
///
/// Draws on the shared default from several call sites interleave in no
/// particular order. Callers that need reproducible or isolated draws pass
/// an integer seed or their own handle.
#[derive(Debug, Clone)]
pub struct RandomStateNormaliser {
    default: RandomState,
}

impl RandomStateNormaliser {
    /// Create a normaliser that hands out `default` for absent seeds.
    pub fn new(default: RandomState) -> Self {
        Self { default }
    }

    /// Create a normaliser whose default is built from `config`.
    pub fn from_config(config: &RandomStateConfiguration) -> Self {
        Self::new(config.build_default())
    }

    /// The process-wide normaliser.
    pub fn global() -> &'static RandomStateNormaliser {
        GLOBAL.get_or_init(|| Self::from_config(&RandomStateConfiguration::from_env()))
    }

    /// Make `normaliser` the process-wide instance.
    ///
    /// Fails, handing `normaliser` back, if the global instance already
    /// exists.
    pub fn install_global(
        normaliser: RandomStateNormaliser,
    ) -> Result<(), RandomStateNormaliser> {
        GLOBAL.set(normaliser)
    }

    /// The handle returned for absent seeds.
    pub fn default_state(&self) -> &RandomState {
        &self.default
    }

    /// Turn `seed` into a random state.
    ///
    /// - [`Seed::Default`] returns this normaliser's default handle.
    /// - [`Seed::Value`] returns a new generator seeded with that value.
    /// - [`Seed::State`] returns the given handle itself.
    ///
    /// # Errors
    ///
    /// [`RandomStateError::InvalidSeed`] if an integer seed is outside
    /// `0..=u32::MAX`.
    pub fn normalise(&self, seed: impl Into<Seed>) -> RandomStateResult<RandomState> {
        match seed.into() {
            Seed::Default => {
                trace!("Using shared default random state");
                Ok(self.default.clone())
            }
            Seed::Value(value) => {
                let seed = u32::try_from(value).map_err(|_| {
                    debug!(%value, "Rejecting out-of-range seed");
                    RandomStateError::invalid_seed(value)
                })?;
                debug!(seed, "Seeding new random state");
                Ok(RandomState::from_seed(u64::from(seed)))
            }
            Seed::State(state) => Ok(state),
        }
    }
}

/// Turn `seed` into a random state using the process-wide normaliser.
///
/// See [`RandomStateNormaliser::normalise`].
///
/// ```rust
/// use microscopium_util::{normalise_random_state, RandomProvider, Seed};
///
/// let shared = normalise_random_state(Seed::Default).unwrap();
/// assert!(shared.same_instance(&normalise_random_state(None::<u32>).unwrap()));
///
/// let mine = normalise_random_state(7).unwrap();
/// let still_mine = normalise_random_state(&mine).unwrap();
/// assert!(mine.same_instance(&still_mine));
///
/// assert!(normalise_random_state(-1).is_err());
/// ```
pub fn normalise_random_state(seed: impl Into<Seed>) -> RandomStateResult<RandomState> {
    RandomStateNormaliser::global().normalise(seed)
}
