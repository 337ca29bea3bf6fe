use gattrace_types::{AttRecord, GattOperation, OpcodeRegistry, parse_hex_u16};
use std::fmt;

/// What to do with a record whose handle field is not valid hexadecimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Record the error and continue with the remaining records.
    #[default]
    Skip,
    /// Fail the whole run on the first malformed record (legacy behavior).
    Abort,
}

/// Extraction failure for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The chosen handle field's string is not parseable hexadecimal.
    MalformedHandle {
        frame: String,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MalformedHandle {
                frame,
                field,
                value,
            } => write!(
                f,
                "frame {}: {} \"{}\" is not valid hexadecimal",
                frame, field, value
            ),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Result of a batch extraction pass.
///
/// `operations` is the run's single owned collection; both report views
/// borrow it. `skipped` holds the per-record errors tolerated under
/// [`RecoveryPolicy::Skip`] so callers can report them - skips are
/// observable, never silent.
#[derive(Debug, Default)]
pub struct Extraction {
    pub operations: Vec<GattOperation>,
    pub skipped: Vec<ExtractError>,
}

/// Convert one decoded record into a classified operation.
///
/// Field resolution, first match wins:
/// 1. handle: explicit `handle`, else `starting_handle`, else `0`
/// 2. data: `value` verbatim, else `"UUID: <uuid>"`, else `"Range: <start>-<end>"`
///    when both range bounds exist
/// 3. connection: the link-layer handle, `"Unknown"` when the link context
///    exists without one, absent without link context
pub fn extract_operation(
    record: &AttRecord,
    registry: &OpcodeRegistry,
) -> Result<GattOperation, ExtractError> {
    let (field, raw_handle) = match (&record.handle, &record.starting_handle) {
        (Some(handle), _) => ("handle", Some(handle)),
        (None, Some(start)) => ("starting_handle", Some(start)),
        (None, None) => ("handle", None),
    };

    let handle = match raw_handle {
        Some(raw) => parse_hex_u16(raw).map_err(|_| ExtractError::MalformedHandle {
            frame: record.frame.clone(),
            field,
            value: raw.clone(),
        })?,
        None => 0,
    };

    let data = if let Some(value) = &record.value {
        Some(value.clone())
    } else if let Some(uuid) = &record.uuid {
        Some(format!("UUID: {}", uuid))
    } else if let (Some(start), Some(end)) = (&record.starting_handle, &record.ending_handle) {
        Some(format!("Range: {}-{}", start, end))
    } else {
        None
    };

    let connection = record.link.as_ref().map(|link| {
        link.connection_handle
            .clone()
            .unwrap_or_else(|| "Unknown".to_string())
    });

    let opcode = record
        .opcode
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    let operation_name = registry.resolve(&opcode);

    Ok(GattOperation {
        time: record.time,
        frame: record.frame.clone(),
        opcode,
        operation_name,
        handle,
        data,
        connection,
    })
}

/// Extract all records sequentially, in capture order.
pub fn extract_operations(
    records: &[AttRecord],
    registry: &OpcodeRegistry,
    policy: RecoveryPolicy,
) -> Result<Extraction, ExtractError> {
    let mut extraction = Extraction {
        operations: Vec::with_capacity(records.len()),
        skipped: Vec::new(),
    };

    for record in records {
        match extract_operation(record, registry) {
            Ok(operation) => extraction.operations.push(operation),
            Err(err) => match policy {
                RecoveryPolicy::Skip => extraction.skipped.push(err),
                RecoveryPolicy::Abort => return Err(err),
            },
        }
    }

    Ok(extraction)
}
