use crate::types::{WordFrequencyMap, WordRef};

/// Increments the frequency of `word`, starting it at 1 if it has not been seen yet.
pub fn increment_count(frequencies: &mut WordFrequencyMap, word: &WordRef) {
    match frequencies.get_mut(word) {
        Some(frequency) => *frequency += 1,
        None => {
            frequencies.insert(word.to_string(), 1);
        }
    }
}
