//! # Shared Default Configuration
//!
//! Controls how the process-wide default [`RandomState`] is created the
//! first time a caller normalises an absent seed.
//!
//! | Parameter | Config Field | Default | Environment |
//! |-----------|--------------|---------|-------------|
//! | Default seed | `default_seed` | `None` (OS entropy) | `MICROSCOPIUM_SEED` |
//!
//! ```rust
//! use microscopium_util::RandomStateConfiguration;
//!
//! // Reproducible runs: every absent seed draws from one seeded generator.
//! let config = RandomStateConfiguration::seeded(2024);
//! let default_state = config.build_default();
//! ```

use tracing::{debug, warn};

use super::RandomState;

/// Environment variable read by [`RandomStateConfiguration::from_env`].
pub const SEED_ENV_VAR: &str = "MICROSCOPIUM_SEED";

/// Configuration for the shared default random state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomStateConfiguration {
    /// Seed for the shared default generator.
    ///
    /// `None` seeds it from entropy, so absent-seed callers are
    /// nondeterministic across runs.
    pub default_seed: Option<u64>,
}

impl RandomStateConfiguration {
    /// Configuration whose default generator is seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            default_seed: Some(seed),
        }
    }

    /// Read the configuration from [`SEED_ENV_VAR`].
    ///
    /// An unset or blank variable means entropy. A value that is not an
    /// unsigned integer is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    pub(crate) fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };
        match raw.parse::<u64>() {
            Ok(seed) => Self::seeded(seed),
            Err(e) => {
                warn!(
                    "Ignoring {}={:?}: {}; seeding from entropy",
                    SEED_ENV_VAR, raw, e
                );
                Self::default()
            }
        }
    }

    /// Create the default generator described by this configuration.
    pub fn build_default(&self) -> RandomState {
        match self.default_seed {
            Some(seed) => {
                debug!(seed, "Building default random state from configured seed");
                RandomState::from_seed(seed)
            }
            None => {
                debug!("Building default random state from entropy");
                RandomState::from_entropy()
            }
        }
    }
}
