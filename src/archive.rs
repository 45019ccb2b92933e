use std::fs::{self, File};
use std::path::Path;

use crate::error::FetchResult;

/// Extract a zip archive into `dest`, creating the directory first.
pub fn extract_zip(archive: &Path, dest: &Path) -> FetchResult<()> {
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    fs::create_dir_all(dest)?;
    zip.extract(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_extracts_entries() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("docs.zip");

        let mut writer = zip::ZipWriter::new(File::create(&archive).unwrap());
        writer
            .start_file("index.html", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<html></html>").unwrap();
        writer.finish().unwrap();

        let out = dir.path().join("out");
        extract_zip(&archive, &out).unwrap();
        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            "<html></html>"
        );
    }

    #[test]
    fn test_rejects_garbage_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("broken.zip");
        fs::write(&archive, b"not a zip").unwrap();
        assert!(extract_zip(&archive, &dir.path().join("out")).is_err());
    }
}
