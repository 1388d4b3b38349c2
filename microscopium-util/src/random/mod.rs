//! Random state normalisation.
//!
//! Callers accept a single seed-like parameter and turn it into a
//! [`RandomState`] handle with [`normalise_random_state`]:
//!
//! - no seed uses the process-wide shared handle (nondeterministic unless
//!   [`SEED_ENV_VAR`] is set),
//! - an integer builds a fresh handle that is reproducible for that integer,
//! - an existing handle is passed through, so draws stay shared.
//!
//! ## Submodules
//!
//! - `state` - The [`RandomState`] handle
//! - `seed` - The [`Seed`] input type
//! - `config` - Configuration of the shared default handle
//! - `normaliser` - [`RandomStateNormaliser`] and the process singleton
//! - `provider` - The [`RandomProvider`] sampling trait

mod config;
mod normaliser;
mod provider;
mod seed;
mod state;

pub use config::{RandomStateConfiguration, SEED_ENV_VAR};
pub use normaliser::{normalise_random_state, RandomStateNormaliser};
pub use provider::RandomProvider;
pub use seed::Seed;
pub use state::RandomState;
