use serde::{Deserialize, Serialize};

/// One classified ATT exchange event.
///
/// Built once per decoded record by the extraction layer and never mutated
/// afterwards: the run owns a single `Vec<GattOperation>`, and both report
/// views (timeline, handle groups) are read-only projections over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GattOperation {
    /// Capture-relative epoch seconds. Input order is capture order; the
    /// collection is only time-ordered after the timeline's explicit sort.
    pub time: f64,

    /// Decoder frame number, opaque ordinal.
    pub frame: String,

    /// Raw opcode string as presented by the decoder. `"Unknown"` when the
    /// record carried no opcode field.
    pub opcode: String,

    /// Resolved operation name. Never empty: unmapped opcodes resolve to
    /// `"Unknown Operation (<opcode>)"`.
    pub operation_name: String,

    /// Resolved attribute handle. `0` when the record had no handle-bearing
    /// field, so grouping needs no null handling.
    pub handle: u16,

    /// Semantic payload: raw value text, `"UUID: <uuid>"`, or
    /// `"Range: <start>-<end>"`. At most one of the three.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Link-layer connection handle. `None` when the packet had no link-layer
    /// context at all; `"Unknown"` when the context existed without the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let operation = GattOperation {
            time: 12.25,
            frame: "42".to_string(),
            opcode: "0x1b".to_string(),
            operation_name: "Handle Value Notification".to_string(),
            handle: 0x0015,
            data: Some("0a:0b".to_string()),
            connection: None,
        };

        let json = serde_json::to_string(&operation).unwrap();
        assert!(!json.contains("connection"));

        let deserialized: GattOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, operation);
    }
}
