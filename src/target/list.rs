//! Reading the line-delimited target list

use crate::target::Target;
use crate::PriceFinderError;
use std::collections::HashSet;
use std::path::Path;

/// Loads the target list from a file
///
/// # Arguments
///
/// * `path` - Path to a text file with one URL per line
///
/// # Returns
///
/// * `Ok(Vec<Target>)` - Targets in file order
/// * `Err(PriceFinderError)` - The file could not be read
pub fn load_targets(path: &Path) -> crate::Result<Vec<Target>> {
    let content =
        std::fs::read_to_string(path).map_err(|source| PriceFinderError::TargetList {
            path: path.display().to_string(),
            source,
        })?;

    Ok(parse_targets(&content))
}

/// Parses target list text
///
/// Each line is trimmed; blank lines are skipped. URLs are not validated
/// here, malformed entries surface later as fetch failures.
pub fn parse_targets(content: &str) -> Vec<Target> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Target::from)
        .collect()
}

/// Removes repeated targets, keeping the first occurrence of each
///
/// # Returns
///
/// The unique targets in their original order, and the number removed
pub fn dedupe_targets(targets: Vec<Target>) -> (Vec<Target>, usize) {
    let total = targets.len();
    let mut seen = HashSet::new();
    let unique: Vec<Target> = targets
        .into_iter()
        .filter(|target| seen.insert(target.clone()))
        .collect();
    let removed = total - unique.len();

    (unique, removed)
}
