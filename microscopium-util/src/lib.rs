//! # microscopium-util
//!
//! Small helpers shared by the microscopium image-analysis pipeline.
//!
//! - [`group`]: partition a sequence into ordered buckets keyed by a function
//! - [`random`]: turn a seed-like input into a reusable [`RandomState`] handle
//! - [`coerce`]: coerce an optional value into an optional integer
//!
//! ## Quick Start
//!
//! ```rust
//! use microscopium_util::{group_by_with, int_or_none, normalise_random_state, RandomProvider};
//!
//! let grouped = group_by_with(|x: &u32| x % 2, 0..6, |x| x * x);
//! assert_eq!(grouped[&0], vec![0, 4, 16]);
//! assert_eq!(grouped[&1], vec![1, 9, 25]);
//!
//! let a = normalise_random_state(42).unwrap();
//! let b = normalise_random_state(42).unwrap();
//! assert!(!a.same_instance(&b));
//! assert_eq!(a.random::<u64>(), b.random::<u64>());
//!
//! assert_eq!(int_or_none(Some(3.0)), Ok(Some(3)));
//! assert_eq!(int_or_none(None::<f64>), Ok(None));
//! ```
//!
//! ## Seeding
//!
//! | Input | Result |
//! |-------|--------|
//! | [`Seed::Default`] / `None` | the process-wide shared handle |
//! | [`Seed::Value`] in `0..=u32::MAX` | a fresh handle, deterministic for that value |
//! | [`Seed::State`] | the same handle, aliased |
//! | anything else | [`RandomStateError::InvalidSeed`] |

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Grouping of sequences into keyed buckets.
pub mod group;

/// Seeds, generator handles and the random state normaliser.
pub mod random;

/// Optional integer coercion.
pub mod coerce;

mod error;

pub use coerce::{int_or_none, ToInt};
pub use error::{FloatToIntError, RandomStateError, RandomStateResult};
pub use group::{group_by, group_by_with, identity, try_group_by_with, GroupByExt};
pub use random::{
    normalise_random_state, RandomProvider, RandomState, RandomStateConfiguration,
    RandomStateNormaliser, Seed, SEED_ENV_VAR,
};
