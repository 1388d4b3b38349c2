//! Grouping of sequences into keyed buckets.
//!
//! Every function here makes a single pass over its input. Each element
//! lands in the bucket for its key, and buckets keep the relative input
//! order of their elements. Nothing is sorted or deduplicated, and the
//! iteration order over keys is unspecified.
//!
//! ```rust
//! use microscopium_util::group::GroupByExt;
//!
//! let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
//! let by_letter = words.into_iter().group_by(|w| w.as_bytes()[0]);
//! assert_eq!(by_letter[&b'a'], vec!["apple", "avocado"]);
//! assert_eq!(by_letter[&b'c'], vec!["cherry"]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

/// The transform used when the caller supplies none.
pub fn identity<T>(item: T) -> T {
    item
}

/// Group items of `iter` by `key`, storing the items unchanged.
pub fn group_by<K, T, I, F>(key: F, iter: I) -> HashMap<K, Vec<T>>
where
    K: Hash + Eq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    group_by_with(key, iter, identity)
}

/// Group items of `iter` by `key`, storing `transform(item)` in each bucket.
///
/// The result has the form `{key(elem): [transform(elem), ...]}`, with each
/// bucket ordered as its elements appeared in `iter`.
///
/// ```rust
/// use microscopium_util::group_by_with;
///
/// let grouped = group_by_with(|x: &u32| x % 2, 0..6, |x| x.pow(2));
/// assert_eq!(grouped[&0], vec![0, 4, 16]);
/// assert_eq!(grouped[&1], vec![1, 9, 25]);
/// ```
pub fn group_by_with<K, T, U, I, F, G>(
    mut key: F,
    iter: I,
    mut transform: G,
) -> HashMap<K, Vec<U>>
where
    K: Hash + Eq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    G: FnMut(T) -> U,
{
    let mut grouped: HashMap<K, Vec<U>> = HashMap::new();
    for item in iter {
        grouped.entry(key(&item)).or_default().push(transform(item));
    }
    grouped
}

/// Group with fallible key and transform functions.
///
/// Stops at the first error and returns it unchanged. Elements after the
/// failing one are not consumed.
pub fn try_group_by_with<K, T, U, E, I, F, G>(
    mut key: F,
    iter: I,
    mut transform: G,
) -> Result<HashMap<K, Vec<U>>, E>
where
    K: Hash + Eq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<K, E>,
    G: FnMut(T) -> Result<U, E>,
{
    let mut grouped: HashMap<K, Vec<U>> = HashMap::new();
    for item in iter {
        let bucket = key(&item)?;
        grouped.entry(bucket).or_default().push(transform(item)?);
    }
    Ok(grouped)
}

/// Method-call form of [`group_by`] and [`group_by_with`] for iterators.
pub trait GroupByExt: Iterator + Sized {
    /// Consume the iterator and group its items by `key`.
    fn group_by<K, F>(self, key: F) -> HashMap<K, Vec<Self::Item>>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        group_by(key, self)
    }

    /// Consume the iterator, grouping `transform(item)` by `key(&item)`.
    fn group_by_with<K, U, F, G>(self, key: F, transform: G) -> HashMap<K, Vec<U>>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item) -> U,
    {
        group_by_with(key, self, transform)
    }
}

impl<I: Iterator> GroupByExt for I {}
