use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Standard ATT opcode table, keyed by the lowercase hexadecimal string form
/// decoders present (Bluetooth Core spec, Vol 3 Part F).
const STANDARD_OPCODES: &[(&str, &str)] = &[
    ("0x01", "Error Response"),
    ("0x02", "Exchange MTU Request"),
    ("0x03", "Exchange MTU Response"),
    ("0x04", "Find Information Request"),
    ("0x05", "Find Information Response"),
    ("0x06", "Find By Type Value Request"),
    ("0x07", "Find By Type Value Response"),
    ("0x08", "Read By Type Request"),
    ("0x09", "Read By Type Response"),
    ("0x0a", "Read Request"),
    ("0x0b", "Read Response"),
    ("0x0c", "Read Blob Request"),
    ("0x0d", "Read Blob Response"),
    ("0x0e", "Read Multiple Request"),
    ("0x0f", "Read Multiple Response"),
    ("0x10", "Read By Group Type Request"),
    ("0x11", "Read By Group Type Response"),
    ("0x12", "Write Request"),
    ("0x13", "Write Response"),
    ("0x16", "Prepare Write Request"),
    ("0x17", "Prepare Write Response"),
    ("0x18", "Execute Write Request"),
    ("0x19", "Execute Write Response"),
    ("0x1b", "Handle Value Notification"),
    ("0x1d", "Handle Value Indication"),
    ("0x1e", "Handle Value Confirmation"),
    ("0x52", "Write Command"),
    ("0xd2", "Signed Write Command"),
];

/// Process-wide standard registry for callers that don't inject their own.
pub static STANDARD_REGISTRY: Lazy<OpcodeRegistry> = Lazy::new(OpcodeRegistry::standard);

/// Immutable mapping from ATT opcode string to operation name.
///
/// Constructed once per run (or borrowed from [`STANDARD_REGISTRY`]) and
/// passed by reference into extraction; it is never mutated.
#[derive(Debug, Clone)]
pub struct OpcodeRegistry {
    names: HashMap<&'static str, &'static str>,
}

impl OpcodeRegistry {
    /// Build the registry covering the standard ATT opcode set.
    pub fn standard() -> Self {
        Self {
            names: STANDARD_OPCODES.iter().copied().collect(),
        }
    }

    /// Resolve an opcode to its operation name.
    ///
    /// Total and deterministic: lookup is case-insensitive over the decoder's
    /// hexadecimal string form, and unmapped values yield
    /// `"Unknown Operation (<opcode>)"` with the input echoed verbatim.
    pub fn resolve(&self, opcode: &str) -> String {
        let key = opcode.trim().to_ascii_lowercase();
        match self.names.get(key.as_str()) {
            Some(name) => (*name).to_string(),
            None => format!("Unknown Operation ({})", opcode),
        }
    }

    /// Registry entries sorted by opcode, for table dumps.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self.names.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable_by_key(|(opcode, _)| *opcode);
        entries
    }
}

impl Default for OpcodeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
