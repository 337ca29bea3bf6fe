use anyhow::Result;
use gattrace_engine::{Extraction, HandleReport, TimelineEntry};
use gattrace_types::GattOperation;
use serde::Serialize;
use std::path::Path;

pub const REPORT_VERSION: u32 = 1;

// The JSON output is the full view model, not the text rendering: raw
// timestamps, untruncated payloads, and per-bucket operation lists, so it
// can serve as a stable machine-readable API for the analysis.

#[derive(Serialize)]
pub struct AnalysisViewModel<'a> {
    pub report_version: u32,
    pub source: SourceInfo,
    pub timeline: &'a [TimelineEntry],
    pub handles: Vec<HandleGroupViewModel<'a>>,
}

#[derive(Serialize)]
pub struct SourceInfo {
    pub path: String,
    pub records: usize,
    pub operations: usize,
    pub skipped: usize,
}

#[derive(Serialize)]
pub struct HandleGroupViewModel<'a> {
    pub handle: u16,
    pub types: Vec<TypeBucketViewModel<'a>>,
}

#[derive(Serialize)]
pub struct TypeBucketViewModel<'a> {
    pub operation: String,
    pub count: usize,
    pub operations: Vec<&'a GattOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_data: Option<&'a str>,
}

pub fn print_analysis(
    input: &Path,
    records: usize,
    extraction: &Extraction,
    timeline: &[TimelineEntry],
    report: &HandleReport<'_>,
) -> Result<()> {
    let handles = report
        .iter()
        .map(|(handle, buckets)| HandleGroupViewModel {
            handle: *handle,
            types: buckets
                .iter()
                .map(|(type_name, bucket)| TypeBucketViewModel {
                    operation: type_name.clone(),
                    count: bucket.operations.len(),
                    operations: bucket.operations.clone(),
                    combined_data: bucket.combined_data.as_deref(),
                })
                .collect(),
        })
        .collect();

    let view = AnalysisViewModel {
        report_version: REPORT_VERSION,
        source: SourceInfo {
            path: input.display().to_string(),
            records,
            operations: extraction.operations.len(),
            skipped: extraction.skipped.len(),
        },
        timeline,
        handles,
    };

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
