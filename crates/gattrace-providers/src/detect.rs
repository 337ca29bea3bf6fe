use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

// pcap/pcapng magic numbers
const PCAP_MAGIC_BE: [u8; 4] = [0xa1, 0xb2, 0xc3, 0xd4];
const PCAP_MAGIC_LE: [u8; 4] = [0xd4, 0xc3, 0xb2, 0xa1];
const PCAPNG_MAGIC: [u8; 4] = [0x0a, 0x0d, 0x0d, 0x0a];

/// How an input file should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFormat {
    /// A tshark `-T json` export, read directly.
    JsonExport,
    /// A raw capture, decoded through tshark.
    Capture,
}

impl CaptureFormat {
    /// Classify an input file by extension, falling back to its leading
    /// bytes. Unknown input defaults to `Capture`: tshark reads far more
    /// formats than we can fingerprint here.
    pub fn detect(path: &Path) -> Result<CaptureFormat> {
        if !path.exists() {
            return Err(Error::SourceNotFound(path.to_path_buf()));
        }

        if let Some(format) = Self::from_extension(path) {
            return Ok(format);
        }

        let mut head = [0u8; 4];
        let mut file = std::fs::File::open(path)?;
        let read = file.read(&mut head)?;
        let head = &head[..read];

        if head == PCAP_MAGIC_BE || head == PCAP_MAGIC_LE || head == PCAPNG_MAGIC {
            return Ok(CaptureFormat::Capture);
        }
        if matches!(head.iter().find(|b| !b.is_ascii_whitespace()), Some(&b'[')) {
            return Ok(CaptureFormat::JsonExport);
        }
        Ok(CaptureFormat::Capture)
    }

    pub(crate) fn from_extension(path: &Path) -> Option<CaptureFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(CaptureFormat::JsonExport),
            "pcap" | "pcapng" | "cap" => Some(CaptureFormat::Capture),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaptureFormat::JsonExport => "json export",
            CaptureFormat::Capture => "capture",
        }
    }
}
