use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::api::PdfDownload;

/// Writes a downloaded PDF into `out_dir` under its negotiated filename and
/// returns the written path.
pub fn save_pdf(download: &PdfDownload, out_dir: &Path) -> Result<PathBuf, io::Error> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(&download.filename);
    fs::write(&path, &download.bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_pdf_writes_under_filename() {
        let dir = tempfile::tempdir().unwrap();
        let download = PdfDownload {
            filename: "scorecard_7.pdf".to_string(),
            bytes: b"%PDF-1.4 stub".to_vec(),
        };
        let path = save_pdf(&download, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("scorecard_7.pdf"));
        assert_eq!(fs::read(&path).unwrap(), download.bytes);
    }

    #[test]
    fn test_save_pdf_creates_missing_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports").join("2024");
        let download = PdfDownload {
            filename: "scorecard_1.pdf".to_string(),
            bytes: vec![1, 2, 3],
        };
        let path = save_pdf(&download, &out).unwrap();
        assert!(path.exists());
    }
}
