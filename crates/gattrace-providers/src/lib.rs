mod detect;
mod error;
mod export;
mod scan;
mod schema;
mod tshark;

pub use detect::CaptureFormat;
pub use error::{Error, Result};
pub use export::parse_export_file;
pub use scan::{CaptureIndex, scan_captures};
pub use tshark::{TSHARK_ENV, TsharkDecoder};

use gattrace_types::AttRecord;
use std::path::Path;

/// Decode any supported input into ATT records (convenience entry point).
///
/// Routes on the detected format: a tshark `-T json` export is read directly,
/// anything else goes through the tshark decoder. `tshark_hint` is an
/// explicit binary path taking precedence over the `PATH` search.
pub fn decode_capture(path: &Path, tshark_hint: Option<&Path>) -> Result<Vec<AttRecord>> {
    match CaptureFormat::detect(path)? {
        CaptureFormat::JsonExport => parse_export_file(path),
        CaptureFormat::Capture => TsharkDecoder::locate(tshark_hint)?.decode(path),
    }
}
