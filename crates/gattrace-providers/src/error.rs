use std::fmt;
use std::path::PathBuf;

/// Result type for gattrace-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the capture/decode boundary
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// The named capture/input source does not exist
    SourceNotFound(PathBuf),

    /// No tshark binary could be located
    TsharkNotFound,

    /// tshark ran but exited unsuccessfully
    Tshark(String),

    /// The decoder produced structurally unusable output
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::SourceNotFound(path) => {
                write!(f, "capture source '{}' not found", path.display())
            }
            Error::TsharkNotFound => write!(
                f,
                "tshark not found; install Wireshark or point GATTRACE_TSHARK at the binary"
            ),
            Error::Tshark(stderr) => write!(f, "tshark failed: {}", stderr),
            Error::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::SourceNotFound(_)
            | Error::TsharkNotFound
            | Error::Tshark(_)
            | Error::Decode(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
