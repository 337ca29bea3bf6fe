use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Explicit optionality: every protocol field a decoder may or may not emit
//    is an Option here. Downstream code resolves presence with ordinary
//    pattern matching instead of runtime attribute probing.
//
// 2. String fidelity: handle and opcode fields keep the decoder's hexadecimal
//    string form. Interpretation (hex parsing, opcode naming) happens in the
//    extraction layer, so a record survives round-tripping unchanged.
//
// 3. Pre-filtered input: packets without an ATT layer never become records.
//    The providers layer applies that filter, which is why `opcode` is the
//    only ATT field that is almost always present.

/// One decoded packet that carried an ATT layer.
///
/// Produced by the capture/decode boundary in extraction (capture) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttRecord {
    /// Capture-relative epoch seconds (`frame.time_epoch`).
    pub time: f64,

    /// Decoder frame number. Opaque ordinal, kept only for cross-reference
    /// back to the raw capture.
    pub frame: String,

    /// ATT opcode as presented by the decoder (e.g. `"0x12"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opcode: Option<String>,

    /// Single attribute handle, hexadecimal string form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Start of a handle range (find/read-by-type style requests).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_handle: Option<String>,

    /// End of a handle range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_handle: Option<String>,

    /// Raw attribute value as decoder text. Treated as opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Attribute type UUID string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Link-layer context, present iff the packet carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkContext>,
}

/// Link-layer sub-structure of a decoded packet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_handle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_skips_absent_fields() {
        let record = AttRecord {
            time: 10.5,
            frame: "7".to_string(),
            opcode: Some("0x12".to_string()),
            ..AttRecord::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("starting_handle"));
        assert!(!json.contains("link"));

        let deserialized: AttRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
