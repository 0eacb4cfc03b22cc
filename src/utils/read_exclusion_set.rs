use crate::types::ExclusionSet;
use crate::Error;
use log::info;
use std::fs;
use std::path::Path;

/// Parses an exclusion word list, one word per line.
///
/// Duplicate and blank lines are absorbed. Words are otherwise kept verbatim, including
/// their case.
pub fn read_exclusion_set_from_string(text: &str) -> ExclusionSet {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

pub fn read_exclusion_set_from_path<P: AsRef<Path>>(path: P) -> Result<ExclusionSet, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        Error::Other(format!(
            "Failed to read excluded words {}: {}",
            path.display(),
            e
        ))
    })?;

    let exclusions = read_exclusion_set_from_string(&text);
    info!(
        "Loaded {} excluded word(s) from {}",
        exclusions.len(),
        path.display()
    );

    Ok(exclusions)
}
