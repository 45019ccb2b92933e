use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::error::{FetchError, FetchResult};
use crate::info;

/// Abstraction over "bring the bytes at `url` to `dest`".
///
/// The multi-file and archive routines take this instead of a concrete
/// client so tests can substitute a fetcher that never touches the network.
pub trait Fetcher {
    /// Fetch `url` into `dest`, returning the number of bytes written.
    fn fetch(&self, url: &str, dest: &Path) -> FetchResult<u64>;
}

/// Blocking HTTP downloader with a byte-level progress readout.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    /// Create a downloader whose requests time out after `timeout_secs`.
    pub fn new(timeout_secs: u64) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for Downloader {
    fn fetch(&self, url: &str, dest: &Path) -> FetchResult<u64> {
        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                code: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let pb = match response.content_length() {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        if let Some(name) = dest.file_name().and_then(|n| n.to_str()) {
            pb.set_message(name.to_string());
        }

        // Stream into a .part file and rename once complete; `dest` only
        // ever holds a finished transfer.
        let part = dest.with_extension("part");
        let mut file = File::create(&part)?;
        let mut buf = [0u8; 8192];
        let mut written = 0u64;
        loop {
            let n = response.read(&mut buf)?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n])?;
            written += n as u64;
            pb.inc(n as u64);
        }
        file.flush()?;
        drop(file);
        fs::rename(&part, dest)?;
        pb.finish_and_clear();

        info!("fetched {url} ({written} bytes)");
        Ok(written)
    }
}
