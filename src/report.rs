use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FetchError;
use crate::util::rule;

/// Minimum number of non-empty dataset directories for a go judgement in the
/// combined flow.
pub const COMBINED_THRESHOLD: usize = 3;

/// Minimum total dataset count for the selector's inventory judgement.
pub const SELECTOR_THRESHOLD: usize = 3;

/// Corpora acquired by earlier project phases, counted by the inventory.
pub const PREEXISTING_DATASETS: usize = 2;

/// Advertised example counts used by the inventory statistics.
const EXAMPLE_COUNTS: [(&str, usize); 4] = [
    ("Stack Overflow", 100_000),
    ("Code Alpaca", 20_000),
    ("Python Instructions", 18_000),
    ("MBPP", 1_000),
];

/// Sum of all file sizes below `path`.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// A directory counts as available when it exists and holds at least one
/// entry. Content is not validated.
pub fn is_available(path: &Path) -> bool {
    path.is_dir()
        && fs::read_dir(path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
}

/// Availability and size of one named dataset directory.
pub struct DatasetStatus {
    pub name: &'static str,
    pub available: bool,
    pub size_bytes: u64,
}

/// Survey the given `(name, relative path)` dataset directories under `root`.
pub fn survey(root: &Path, datasets: &[(&'static str, &str)]) -> Vec<DatasetStatus> {
    datasets
        .iter()
        .map(|&(name, rel)| {
            let path = root.join(rel);
            let available = is_available(&path);
            DatasetStatus {
                name,
                available,
                size_bytes: if available { dir_size(&path) } else { 0 },
            }
        })
        .collect()
}

/// Print the final verification table and return the go/no-go judgement:
/// true exactly when at least `threshold` sources are available.
pub fn print_verification(statuses: &[DatasetStatus], threshold: usize) -> bool {
    let mut available = 0;
    let mut total_bytes = 0u64;

    for status in statuses {
        if status.available {
            available += 1;
            total_bytes += status.size_bytes;
            println!("  ok      {}: {}", status.name, format_size(status.size_bytes));
        } else {
            println!("  missing {}", status.name);
        }
    }

    rule();
    println!("Total available: {}/{}", available, statuses.len());
    println!(
        "Total size: {:.2} GB",
        total_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    );

    available >= threshold
}

/// Result of one acquisition attempt, kept only for the end-of-run summary.
pub struct Outcome {
    pub name: &'static str,
    pub result: Result<PathBuf, FetchError>,
}

/// Print the download summary and return the number of successes.
pub fn print_outcomes(outcomes: &[Outcome]) -> usize {
    let mut successful = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(path) => {
                successful += 1;
                println!("  ok      {} ({})", outcome.name, path.display());
            }
            Err(e) => println!("  failed  {}: {}", outcome.name, e),
        }
    }
    println!("\nSuccessfully downloaded: {}/{}", successful, outcomes.len());
    successful
}

/// The selector's inventory judgement: the two pre-existing corpora plus
/// this run's successes must reach the threshold.
pub fn selector_success(successful: usize) -> bool {
    PREEXISTING_DATASETS + successful >= SELECTOR_THRESHOLD
}

/// Print the complete corpus inventory and the closing judgement.
pub fn print_inventory(outcomes: &[Outcome]) -> bool {
    println!("\nPreviously downloaded:");
    println!("  Stack Overflow (100,000 examples)");
    println!("  PyTorch documentation");

    println!("\nJust downloaded:");
    for outcome in outcomes {
        if outcome.result.is_ok() {
            println!("  {}", outcome.name);
        }
    }

    let successful = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let total = PREEXISTING_DATASETS + successful;
    println!("\nTotal datasets: {total}");

    if !selector_success(successful) {
        println!("\nYou have {total} datasets; try downloading more options");
        return false;
    }

    let total_examples: usize = EXAMPLE_COUNTS
        .iter()
        .filter(|(name, _)| {
            *name == "Stack Overflow"
                || outcomes.iter().any(|o| o.name == *name && o.result.is_ok())
        })
        .map(|(_, count)| count)
        .sum();

    rule();
    println!("SUCCESS! You have enough datasets.");
    rule();
    println!("\nDataset statistics:");
    println!("  Total datasets: {total}");
    println!("  Total examples: {total_examples}");
    println!("  Code examples: {}", total_examples - 100_000);
    println!("\nNext steps:");
    println!("  1. Verify the downloads under the data root");
    println!("  2. Start preprocessing");
    true
}

/// Human-readable size, megabytes below one gigabyte.
pub fn format_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    const GB: f64 = 1024.0 * MB;
    let b = bytes as f64;
    if b >= GB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.1} MB", b / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.0 MB");
        assert_eq!(format_size(52_428_800), "50.0 MB");
        assert_eq!(format_size(2 * 1024 * 1024 * 1024), "2.00 GB");
    }

    #[test]
    fn test_selector_success_boundary() {
        assert!(!selector_success(0));
        assert!(selector_success(1));
        assert!(selector_success(3));
    }
}
