use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Fetch configuration loaded from a TOML or JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Root directory every dataset subdirectory is created under.
    pub data_root: PathBuf,
    /// Timeout applied to each HTTP request, in seconds.
    pub timeout_secs: u64,
    /// Python documentation version used to build the archive URL.
    pub docs_version: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("data/raw"),
            timeout_secs: 30,
            docs_version: "3.11".to_string(),
        }
    }
}

impl FetchConfig {
    /// Load configuration from the given path.  Supports TOML or JSON based on
    /// the file extension. Returns `None` if parsing fails.
    pub fn from_path(path: &str) -> Option<Self> {
        let Ok(content) = fs::read_to_string(path) else {
            return None;
        };
        if path.ends_with(".json") {
            serde_json::from_str(&content).ok()
        } else {
            toml::from_str(&content).ok()
        }
    }

    /// Path of one dataset's directory under the data root.
    pub fn dataset_dir(&self, name: &str) -> PathBuf {
        self.data_root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::default();
        assert_eq!(config.data_root, PathBuf::from("data/raw"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.docs_version, "3.11");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();
        let config = FetchConfig::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.docs_version, "3.11");
    }

    #[test]
    fn test_unreadable_path_is_none() {
        assert!(FetchConfig::from_path("no/such/config.toml").is_none());
    }
}
