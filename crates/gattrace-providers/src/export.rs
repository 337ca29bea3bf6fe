use crate::error::{Error, Result};
use crate::schema::ExportPacket;
use gattrace_types::AttRecord;
use std::path::Path;

/// Parse a tshark `-T json` export file into ATT records, in capture order.
///
/// Packets without an ATT layer are filtered here and never reach the
/// extraction layer. A missing file is a distinct not-found condition.
pub fn parse_export_file(path: &Path) -> Result<Vec<AttRecord>> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_export_str(&text)
}

pub(crate) fn parse_export_str(text: &str) -> Result<Vec<AttRecord>> {
    let packets: Vec<ExportPacket> = serde_json::from_str(text)?;

    let mut records = Vec::new();
    for packet in packets {
        if let Some(record) = packet.source.layers.into_att_record()? {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"[
      {
        "_index": "packets-2026-08-01",
        "_type": "doc",
        "_source": {
          "layers": {
            "frame": { "frame.number": "1", "frame.time_epoch": "10.000000000" },
            "btle": { "btle.connection_handle": "0x0040" },
            "btatt": {
              "btatt.opcode": "0x12",
              "btatt.handle": "0x0001",
              "btatt.value": "01"
            }
          }
        }
      },
      {
        "_index": "packets-2026-08-01",
        "_type": "doc",
        "_source": {
          "layers": {
            "frame": { "frame.number": "2", "frame.time_epoch": "10.250000000" },
            "ip": { "ip.src": "10.0.0.1" }
          }
        }
      },
      {
        "_index": "packets-2026-08-01",
        "_type": "doc",
        "_source": {
          "layers": {
            "frame": { "frame.number": "3", "frame.time_epoch": "10.500000000" },
            "btle": {},
            "btatt": {
              "btatt.opcode": "0x08",
              "btatt.starting_handle": "0x0001",
              "btatt.ending_handle": "0xffff",
              "btatt.uuid16": "0x2a00"
            }
          }
        }
      }
    ]"#;

    #[test]
    fn test_parse_export_filters_packets_without_att_layer() {
        let records = parse_export_str(EXPORT).unwrap();
        assert_eq!(records.len(), 2);
        let frames: Vec<_> = records.iter().map(|r| r.frame.as_str()).collect();
        assert_eq!(frames, ["1", "3"]);
    }

    #[test]
    fn test_parse_export_maps_fields() {
        let records = parse_export_str(EXPORT).unwrap();

        let write = &records[0];
        assert_eq!(write.time, 10.0);
        assert_eq!(write.opcode.as_deref(), Some("0x12"));
        assert_eq!(write.handle.as_deref(), Some("0x0001"));
        assert_eq!(write.value.as_deref(), Some("01"));
        assert_eq!(
            write.link.as_ref().unwrap().connection_handle.as_deref(),
            Some("0x0040")
        );

        let read_by_type = &records[1];
        assert_eq!(read_by_type.time, 10.5);
        assert_eq!(read_by_type.handle, None);
        assert_eq!(read_by_type.starting_handle.as_deref(), Some("0x0001"));
        assert_eq!(read_by_type.ending_handle.as_deref(), Some("0xffff"));
        assert_eq!(read_by_type.uuid.as_deref(), Some("0x2a00"));
        // Link context present but without a connection handle.
        assert_eq!(
            read_by_type.link.as_ref().unwrap().connection_handle,
            None
        );
    }

    #[test]
    fn test_parse_export_rejects_malformed_json() {
        assert!(matches!(
            parse_export_str("{ not json").unwrap_err(),
            Error::Json(_)
        ));
    }

    #[test]
    fn test_parse_export_rejects_unparseable_epoch() {
        let text = r#"[
          {
            "_source": {
              "layers": {
                "frame": { "frame.number": "1", "frame.time_epoch": "not-a-number" },
                "btatt": { "btatt.opcode": "0x12" }
              }
            }
          }
        ]"#;
        assert!(matches!(
            parse_export_str(text).unwrap_err(),
            Error::Decode(_)
        ));
    }
}
