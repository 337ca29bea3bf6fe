use gattrace_types::GattOperation;
use serde::Serialize;
use std::collections::BTreeMap;

/// The per-handle report view: handle -> operation type -> bucket.
///
/// `BTreeMap` ordering gives the presentation order directly: handles
/// ascending, operation types lexical. Buckets borrow the run's operation
/// collection and are populated in original extraction order, not time order.
pub type HandleReport<'a> = BTreeMap<u16, BTreeMap<String, TypeBucket<'a>>>;

/// All operations of one type addressed to one handle.
#[derive(Debug, Default, Serialize)]
pub struct TypeBucket<'a> {
    pub operations: Vec<&'a GattOperation>,
    /// Reassembled payload for fragmented write/notification sequences:
    /// the in-order concatenation of every non-empty `data` field. Only set
    /// for buckets with more than one operation whose type is a write or
    /// notification variant, and only when the concatenation is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_data: Option<String>,
}

/// Build the per-handle view and reassemble multi-frame payloads.
pub fn group_by_handle(operations: &[GattOperation]) -> HandleReport<'_> {
    let mut report: HandleReport = BTreeMap::new();

    for op in operations {
        report
            .entry(op.handle)
            .or_default()
            .entry(op.operation_name.clone())
            .or_default()
            .operations
            .push(op);
    }

    for buckets in report.values_mut() {
        for (type_name, bucket) in buckets.iter_mut() {
            if bucket.operations.len() > 1 && is_fragmented_type(type_name) {
                let combined: String = bucket
                    .operations
                    .iter()
                    .filter_map(|op| op.data.as_deref())
                    .collect();
                if !combined.is_empty() {
                    bucket.combined_data = Some(combined);
                }
            }
        }
    }

    report
}

/// Only write and notification sequences carry payload fragments worth
/// reassembling; requests/responses address distinct attributes.
fn is_fragmented_type(type_name: &str) -> bool {
    type_name.contains("Write") || type_name.contains("Notification")
}
