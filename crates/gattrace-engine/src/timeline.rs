use gattrace_types::GattOperation;
use serde::Serialize;

/// Payloads longer than this are truncated in timeline summaries.
pub const DATA_SUMMARY_MAX: usize = 30;

/// One event of the chronological report view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Seconds since the previous event (`0.0` for the first).
    pub rel_time: f64,
    pub frame: String,
    pub handle: u16,
    pub operation_name: String,
    /// Payload shown verbatim up to [`DATA_SUMMARY_MAX`] characters, then
    /// truncated with a `...` marker. Absent for events without data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_summary: Option<String>,
}

/// Build the chronological view: all operations sorted by timestamp with
/// inter-event deltas.
///
/// The sort is stable, so operations with equal timestamps keep their
/// extraction order. The input is borrowed read-only and left untouched.
pub fn build_timeline(operations: &[GattOperation]) -> Vec<TimelineEntry> {
    let mut ordered: Vec<&GattOperation> = operations.iter().collect();
    ordered.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut entries = Vec::with_capacity(ordered.len());
    let mut last_time = None;
    for op in ordered {
        let rel_time = match last_time {
            Some(previous) => op.time - previous,
            None => 0.0,
        };
        last_time = Some(op.time);

        entries.push(TimelineEntry {
            rel_time,
            frame: op.frame.clone(),
            handle: op.handle,
            operation_name: op.operation_name.clone(),
            data_summary: op.data.as_deref().and_then(summarize),
        });
    }
    entries
}

fn summarize(data: &str) -> Option<String> {
    if data.is_empty() {
        return None;
    }
    if data.chars().count() <= DATA_SUMMARY_MAX {
        Some(data.to_string())
    } else {
        let head: String = data.chars().take(DATA_SUMMARY_MAX).collect();
        Some(format!("{}...", head))
    }
}
