use crate::error::{Error, Result};
use crate::export::parse_export_str;
use gattrace_types::AttRecord;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable naming the tshark binary to use.
pub const TSHARK_ENV: &str = "GATTRACE_TSHARK";

/// Runs tshark over a capture file and parses its JSON output.
///
/// This is the external decode collaborator: gattrace never dissects raw
/// packets itself, it consumes `tshark -r <capture> -Y btatt -T json`.
#[derive(Debug, Clone)]
pub struct TsharkDecoder {
    binary: PathBuf,
}

impl TsharkDecoder {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate the tshark binary: an explicit hint (flag or config file)
    /// wins, then the `GATTRACE_TSHARK` environment variable, then `PATH`.
    pub fn locate(hint: Option<&Path>) -> Result<Self> {
        if let Some(path) = hint {
            return Ok(Self::new(path));
        }
        if let Some(path) = std::env::var_os(TSHARK_ENV) {
            return Ok(Self::new(PathBuf::from(path)));
        }
        Self::search_path().map(Self::new).ok_or(Error::TsharkNotFound)
    }

    fn search_path() -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        std::env::split_paths(&path_var)
            .map(|dir| dir.join("tshark"))
            .find(|candidate| candidate.is_file())
    }

    /// Decode a capture file into ATT records.
    ///
    /// The `-Y btatt` display filter drops non-ATT packets inside tshark,
    /// so only frames relevant to the analysis cross the process boundary.
    pub fn decode(&self, capture: &Path) -> Result<Vec<AttRecord>> {
        if !capture.exists() {
            return Err(Error::SourceNotFound(capture.to_path_buf()));
        }

        let output = Command::new(&self.binary)
            .arg("-r")
            .arg(capture)
            .args(["-Y", "btatt", "-T", "json"])
            .output()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => Error::TsharkNotFound,
                _ => Error::Io(err),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Tshark(stderr.trim().to_string()));
        }

        parse_export_str(&String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_prefers_explicit_hint() {
        let decoder = TsharkDecoder::locate(Some(Path::new("/opt/wireshark/tshark"))).unwrap();
        assert_eq!(decoder.binary, PathBuf::from("/opt/wireshark/tshark"));
    }

    #[test]
    fn test_decode_missing_capture_is_source_not_found() {
        let decoder = TsharkDecoder::new("tshark");
        let err = decoder.decode(Path::new("/nonexistent/capture.pcapng")).unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }

    #[test]
    fn test_decode_missing_binary_is_tshark_not_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let decoder = TsharkDecoder::new("/nonexistent/bin/tshark");
        let err = decoder.decode(file.path()).unwrap_err();
        assert!(matches!(err, Error::TsharkNotFound));
    }
}
