use crate::args::OutputFormat;
use crate::config::Config;
use crate::output;
use anyhow::Result;
use gattrace_engine::{RecoveryPolicy, build_timeline, extract_operations, group_by_handle};
use gattrace_providers::{TSHARK_ENV, decode_capture};
use gattrace_types::STANDARD_REGISTRY;
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

pub fn handle(
    input: &Path,
    strict: bool,
    tshark: Option<PathBuf>,
    no_color: bool,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let tshark_hint = tshark
        .or_else(|| std::env::var_os(TSHARK_ENV).map(PathBuf::from))
        .or_else(|| config.tshark_path.clone().map(PathBuf::from));

    let records = decode_capture(input, tshark_hint.as_deref())?;

    let policy = if strict {
        RecoveryPolicy::Abort
    } else {
        RecoveryPolicy::Skip
    };
    let extraction = extract_operations(&records, &STANDARD_REGISTRY, policy)?;

    for skip in &extraction.skipped {
        eprintln!("Warning: skipping record: {}", skip);
    }

    let timeline = build_timeline(&extraction.operations);
    let report = group_by_handle(&extraction.operations);

    match format {
        OutputFormat::Plain => {
            let enable_color = !no_color && std::io::stdout().is_terminal();
            output::report::print_report(&timeline, &report, enable_color);
        }
        OutputFormat::Json => {
            output::json::print_analysis(input, records.len(), &extraction, &timeline, &report)?;
        }
    }

    Ok(())
}
