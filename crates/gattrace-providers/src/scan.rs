use crate::detect::CaptureFormat;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One analyzable file found under a scan root.
#[derive(Debug, Clone)]
pub struct CaptureIndex {
    pub path: PathBuf,
    pub format: CaptureFormat,
    pub size: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// Walk a directory for captures and exports, most recently modified first.
pub fn scan_captures(root: &Path) -> Result<Vec<CaptureIndex>> {
    if !root.exists() {
        return Err(Error::SourceNotFound(root.to_path_buf()));
    }

    let mut captures = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable subtrees shouldn't kill the listing.
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(format) = CaptureFormat::from_extension(entry.path()) else {
            continue;
        };

        let metadata = entry.metadata().ok();
        captures.push(CaptureIndex {
            path: entry.path().to_path_buf(),
            format,
            size: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
            modified: metadata
                .and_then(|m| m.modified().ok())
                .map(DateTime::<Utc>::from),
        });
    }

    captures.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.path.cmp(&b.path))
    });
    Ok(captures)
}
