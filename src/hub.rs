use std::fs;
use std::path::{Path, PathBuf};

use hf_hub::api::sync::ApiBuilder;
use serde::Serialize;

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::warn;

/// One dataset retrievable from the hub by repository id.
pub struct HubDataset {
    /// Display name used in menus and summaries.
    pub name: &'static str,
    /// Hub repository id.
    pub repo: &'static str,
    /// Destination subdirectory under the data root.
    pub subdir: &'static str,
    /// Candidate data files, tried in order. Repositories differ in which
    /// layout they actually ship, so the first file the hub serves wins.
    pub files: &'static [&'static str],
    /// Record fields shown in the post-download preview.
    pub preview_fields: &'static [&'static str],
}

/// Code Alpaca: 20K instruction/code pairs.
pub const CODE_ALPACA: HubDataset = HubDataset {
    name: "Code Alpaca",
    repo: "sahil2801/CodeAlpaca-20k",
    subdir: "code_alpaca",
    files: &["code_alpaca_20k.json"],
    preview_fields: &["instruction", "output"],
};

/// Python code instructions: 18K alpaca-style examples.
pub const PYTHON_INSTRUCTIONS: HubDataset = HubDataset {
    name: "Python Instructions",
    repo: "Iamtarun/python_code_instructions_18k_alpaca",
    subdir: "python_instructions",
    files: &[
        "python_code_instructions_18k_alpaca.json",
        "data/train-00000-of-00001-8b6e212f3e1ece96.parquet",
    ],
    preview_fields: &["instruction", "prompt"],
};

/// MBPP: 1,000 Python programming problems, sanitized split preferred.
pub const MBPP: HubDataset = HubDataset {
    name: "MBPP",
    repo: "google-research-datasets/mbpp",
    subdir: "mbpp",
    files: &["sanitized-mbpp.json", "mbpp.jsonl"],
    preview_fields: &["text", "code"],
};

/// Map one trimmed menu line to the datasets it selects.
///
/// `1`..`3` pick a single dataset, `4` picks all three; anything else is an
/// invalid choice and selects nothing.
pub fn select(choice: &str) -> Option<Vec<&'static HubDataset>> {
    match choice {
        "1" => Some(vec![&CODE_ALPACA]),
        "2" => Some(vec![&PYTHON_INSTRUCTIONS]),
        "3" => Some(vec![&MBPP]),
        "4" => Some(vec![&CODE_ALPACA, &PYTHON_INSTRUCTIONS, &MBPP]),
        _ => None,
    }
}

/// Written next to the fetched file so later pipeline stages know what they
/// got without re-querying the hub.
#[derive(Serialize)]
struct DatasetInfo<'a> {
    repo: &'a str,
    file: &'a str,
    bytes: u64,
}

/// Fetch one hub dataset and persist it under the data root.
///
/// The hub client keeps its own cache under `<data_root>/.hub-cache`; the
/// chosen data file is copied into `<data_root>/<subdir>/` together with a
/// small `dataset_info.json`.
pub fn fetch_hub_dataset(config: &FetchConfig, ds: &HubDataset) -> FetchResult<PathBuf> {
    println!("Loading dataset {}...", ds.repo);

    let api = ApiBuilder::new()
        .with_cache_dir(config.data_root.join(".hub-cache"))
        .with_progress(true)
        .build()?;
    let repo = api.dataset(ds.repo.to_string());

    let mut cached = None;
    let mut chosen = "";
    for &file in ds.files {
        match repo.get(file) {
            Ok(path) => {
                cached = Some(path);
                chosen = file;
                break;
            }
            Err(e) => warn!("{}: no {} ({})", ds.repo, file, e),
        }
    }
    let cached = cached.ok_or_else(|| {
        FetchError::MissingData(format!("no data file of {} could be fetched", ds.repo))
    })?;

    let dir = config.dataset_dir(ds.subdir);
    fs::create_dir_all(&dir)?;
    let file_name = chosen.rsplit('/').next().unwrap_or(chosen);
    let dest = dir.join(file_name);
    fs::copy(&cached, &dest)?;
    let bytes = fs::metadata(&dest)?.len();

    let info = DatasetInfo {
        repo: ds.repo,
        file: file_name,
        bytes,
    };
    fs::write(
        dir.join("dataset_info.json"),
        serde_json::to_string_pretty(&info)?,
    )?;

    println!("Saved {} ({} bytes) to {}", file_name, bytes, dir.display());
    print_preview(&dest, ds.preview_fields);
    Ok(dir)
}

/// Print a truncated preview of the first record when the payload is JSON.
pub fn print_preview(path: &Path, fields: &[&str]) {
    let Some(record) = first_record(path) else {
        return;
    };
    println!("\nSample:");
    for field in fields {
        if let Some(text) = record.get(field).and_then(|v| v.as_str()) {
            println!("  {}: {}...", field, truncate(text, 100));
        }
    }
}

fn first_record(path: &Path) -> Option<serde_json::Value> {
    let ext = path.extension()?.to_str()?;
    let content = fs::read_to_string(path).ok()?;
    match ext {
        "json" => {
            let value: serde_json::Value = serde_json::from_str(&content).ok()?;
            match value {
                serde_json::Value::Array(mut items) if !items.is_empty() => Some(items.remove(0)),
                serde_json::Value::Array(_) => None,
                other => Some(other),
            }
        }
        "jsonl" => serde_json::from_str(content.lines().next()?).ok(),
        _ => None,
    }
}

/// Cut `s` after at most `max` characters, on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
