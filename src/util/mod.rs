pub mod log;

use crate::config::FetchConfig;
use crate::warn;

/// Width of the separator rules in the console output.
const RULE_WIDTH: usize = 70;

/// Print a separator rule.
pub fn rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print a section banner framed by separator rules.
pub fn banner(title: &str) {
    rule();
    println!("{title}");
    rule();
}

/// Parses the small CLI surface shared by both binaries.
///
/// Recognizes `--config <path>` and `--quiet`; anything else is reported and
/// ignored. Returns the effective configuration.
pub fn config_from_args<I>(mut args: I) -> FetchConfig
where
    I: Iterator<Item = String>,
{
    let mut config = FetchConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if let Some(path) = args.next() {
                    match FetchConfig::from_path(&path) {
                        Some(c) => config = c,
                        None => warn!("could not read config {path}, using defaults"),
                    }
                }
            }
            "--quiet" => log::set_log_level(log::LogLevel::Warn),
            other => warn!("ignoring unknown argument {other}"),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_yields_defaults() {
        let config = config_from_args(std::iter::empty());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_unknown_args_are_ignored() {
        let args = ["--frobnicate", "now"].iter().map(|s| s.to_string());
        let config = config_from_args(args);
        assert_eq!(config.docs_version, "3.11");
    }

    #[test]
    fn test_missing_config_file_falls_back() {
        let args = ["--config", "does/not/exist.toml"]
            .iter()
            .map(|s| s.to_string());
        let config = config_from_args(args);
        assert_eq!(config.timeout_secs, 30);
    }
}
