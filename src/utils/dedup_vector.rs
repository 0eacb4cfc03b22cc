use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicates a vector by key while maintaining the original order.
///
/// # Arguments
/// * `vec` - A vector containing elements to deduplicate.
/// * `key` - Extracts the value two elements are compared by.
///
/// # Returns
/// A new vector holding the first element seen for every key, in the original order.
pub fn dedup_vector<T, K, F>(vec: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    vec.into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
