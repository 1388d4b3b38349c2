//! Seed normalisation through the public API.

use microscopium_util::{
    normalise_random_state, RandomProvider, RandomState, RandomStateError, Seed,
};
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .try_init();
}

fn draws(state: &RandomState, n: usize) -> Vec<u64> {
    (0..n).map(|_| state.random()).collect()
}

#[test]
fn test_integer_seeds_are_reproducible() {
    init_tracing();

    let a = normalise_random_state(42).unwrap();
    let b = normalise_random_state(42).unwrap();

    assert!(!a.same_instance(&b));
    assert_eq!(draws(&a, 32), draws(&b, 32));
}

#[test]
fn test_different_integer_seeds_differ() {
    let a = normalise_random_state(1).unwrap();
    let b = normalise_random_state(2).unwrap();
    assert_ne!(draws(&a, 8), draws(&b, 8));
}

#[test]
fn test_handle_passes_through() {
    let mine = RandomState::from_seed(77);
    let via_owned = normalise_random_state(mine.clone()).unwrap();
    let via_ref = normalise_random_state(&mine).unwrap();
    let via_option = normalise_random_state(Some(mine.clone())).unwrap();

    assert!(via_owned.same_instance(&mine));
    assert!(via_ref.same_instance(&mine));
    assert!(via_option.same_instance(&mine));
}

#[test]
fn test_shared_handle_shares_draws() {
    let reference = RandomState::from_seed(13);
    let expected = draws(&reference, 4);

    let mine = normalise_random_state(13).unwrap();
    let alias = normalise_random_state(&mine).unwrap();

    let interleaved = vec![
        mine.random::<u64>(),
        alias.random::<u64>(),
        mine.random::<u64>(),
        alias.random::<u64>(),
    ];
    assert_eq!(interleaved, expected);
}

#[test]
fn test_text_seeds() {
    init_tracing();

    let parsed: Seed = "42".parse().unwrap();
    let from_text = normalise_random_state(parsed).unwrap();
    let from_int = normalise_random_state(42).unwrap();
    assert_eq!(draws(&from_text, 4), draws(&from_int, 4));

    let err = "abc".parse::<Seed>().unwrap_err();
    assert_eq!(
        err,
        RandomStateError::InvalidSeed {
            input: "abc".to_string()
        }
    );
    assert_eq!(err.to_string(), "invalid input abc to generate random state");
}

#[test]
fn test_blank_or_none_text_is_not_the_shared_default() {
    for text in ["", "   ", "none", "NONE"] {
        match text.parse::<Seed>() {
            Err(RandomStateError::InvalidSeed { input }) => assert_eq!(input, text),
            Ok(seed) => panic!("{text:?} parsed as {seed:?}"),
        }
    }
}

#[test]
fn test_unsigned_and_pointer_sized_seeds() {
    let from_u64 = normalise_random_state(9_u64).unwrap();
    let from_usize = normalise_random_state(9_usize).unwrap();
    assert_eq!(draws(&from_u64, 4), draws(&from_usize, 4));

    assert!(normalise_random_state(u64::MAX).is_err());
}

#[test]
fn test_out_of_range_integers_are_invalid() {
    init_tracing();

    for bad in [-1_i64, i64::MIN, i64::from(u32::MAX) + 1, i64::MAX] {
        match normalise_random_state(bad) {
            Err(RandomStateError::InvalidSeed { input }) => assert_eq!(input, bad.to_string()),
            Ok(state) => panic!("seed {bad} accepted as {state:?}"),
        }
    }

    let negative: Seed = "-12".parse().unwrap();
    assert!(normalise_random_state(negative).is_err());
}
