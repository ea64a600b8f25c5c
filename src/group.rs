// =============================================================================
// Grouped-collection utilities — group-by-key, then reduce per group
// =============================================================================
//
// Grouping is kept separate from any reduction policy so that the signal
// threshold table can be swapped and tested in isolation.

use std::collections::HashMap;
use std::hash::Hash;

/// Partition `items` into groups keyed by `key_fn`.
///
/// Within each group the original insertion order of `items` is preserved.
/// The map itself carries no iteration-order guarantee.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_fn: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

/// Group `items` by `key_fn`, then map each group through `reduce_fn`.
///
/// `reduce_fn` receives the key and the group's members in insertion order.
/// Every group passed to `reduce_fn` is non-empty.
pub fn group_reduce<T, K, R, F, G>(
    items: impl IntoIterator<Item = T>,
    key_fn: F,
    mut reduce_fn: G,
) -> HashMap<K, R>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    G: FnMut(&K, Vec<T>) -> R,
{
    group_by(items, key_fn)
        .into_iter()
        .map(|(key, members)| {
            let reduced = reduce_fn(&key, members);
            (key, reduced)
        })
        .collect()
}
