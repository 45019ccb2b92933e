use std::cell::RefCell;
use std::fs;
use std::path::Path;

use corpusfetch::download::Fetcher;
use corpusfetch::error::{FetchError, FetchResult};
use corpusfetch::{sources, synthetic, FetchConfig};

/// Records every URL it is asked for; optionally fails every request.
struct RecordingFetcher {
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingFetcher {
    fn new(fail: bool) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail,
        }
    }
}

impl Fetcher for RecordingFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> FetchResult<u64> {
        self.calls.borrow_mut().push(url.to_string());
        if self.fail {
            Err(FetchError::MissingData(format!("simulated failure for {url}")))
        } else {
            fs::write(dest, b"{}")?;
            Ok(2)
        }
    }
}

fn config_at(root: &Path) -> FetchConfig {
    FetchConfig {
        data_root: root.to_path_buf(),
        ..FetchConfig::default()
    }
}

#[test]
fn existing_files_are_skipped_without_network() {
    let root = tempfile::tempdir().unwrap();
    let config = config_at(root.path());
    let dir = root.path().join("conala");
    fs::create_dir_all(&dir).unwrap();
    for (file, _) in sources::CONALA_FILES {
        fs::write(dir.join(file), b"cached").unwrap();
    }

    let fetcher = RecordingFetcher::new(true);
    sources::fetch_conala(&config, &fetcher).unwrap();

    assert!(fetcher.calls.borrow().is_empty());
    // Skips count as fetched, so no synthetic substitute appears.
    assert!(!dir.join("conala-synthetic.json").exists());
}

#[test]
fn total_failure_produces_synthetic_dataset() {
    let root = tempfile::tempdir().unwrap();
    let config = config_at(root.path());

    let fetcher = RecordingFetcher::new(true);
    sources::fetch_conala(&config, &fetcher).unwrap();

    // Primary and mirror URL tried once per file, nothing more.
    assert_eq!(
        fetcher.calls.borrow().len(),
        2 * sources::CONALA_FILES.len()
    );

    let content =
        fs::read_to_string(root.path().join("conala/conala-synthetic.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        records.as_array().unwrap().len(),
        synthetic::CONALA_SYNTHETIC_RECORDS
    );
}

#[test]
fn successful_fetch_skips_mirror_and_synthetic() {
    let root = tempfile::tempdir().unwrap();
    let config = config_at(root.path());

    let fetcher = RecordingFetcher::new(false);
    sources::fetch_conala(&config, &fetcher).unwrap();

    // Primary URL only, once per file.
    assert_eq!(fetcher.calls.borrow().len(), sources::CONALA_FILES.len());
    let dir = root.path().join("conala");
    for (file, _) in sources::CONALA_FILES {
        assert!(dir.join(file).exists());
    }
    assert!(!dir.join("conala-synthetic.json").exists());
}

#[test]
fn docs_fallback_note_written_when_archive_fails() {
    let root = tempfile::tempdir().unwrap();
    let config = config_at(root.path());

    let fetcher = RecordingFetcher::new(true);
    sources::fetch_python_docs(&config, &fetcher).unwrap();

    let note = fs::read_to_string(root.path().join("python_docs/README.txt")).unwrap();
    assert!(note.contains("inspect"));
    assert!(!root.path().join("python_docs/python-docs.zip").exists());
}

#[test]
fn existing_docs_are_not_refetched() {
    let root = tempfile::tempdir().unwrap();
    let config = config_at(root.path());
    let extract_dir = root.path().join("python_docs/python-3.11");
    fs::create_dir_all(&extract_dir).unwrap();
    fs::write(extract_dir.join("index.html"), "cached").unwrap();

    let fetcher = RecordingFetcher::new(true);
    sources::fetch_python_docs(&config, &fetcher).unwrap();

    assert!(fetcher.calls.borrow().is_empty());
}
