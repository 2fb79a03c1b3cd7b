use log::{debug, warn};

/// Turn raw number entries into solver input.
///
/// Entries are trimmed; blank entries are skipped silently and entries that
/// are not non-negative integers are skipped with a warning.
pub fn parse_numbers<S: AsRef<str>>(entries: &[S]) -> Vec<u64> {
    let numbers: Vec<u64> = entries
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<u64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping entry that is not a non-negative integer: '{}'", entry);
                None
            }
        })
        .collect();

    debug!("Parsed {} of {} entries", numbers.len(), entries.len());
    numbers
}
