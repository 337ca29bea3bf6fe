use crate::args::OutputFormat;
use anyhow::Result;
use gattrace_providers::scan_captures;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CaptureViewModel {
    path: String,
    format: &'static str,
    size: u64,
    modified: Option<String>,
}

pub fn handle(dir: &Path, format: OutputFormat) -> Result<()> {
    let captures = scan_captures(dir)?;

    match format {
        OutputFormat::Json => {
            let view: Vec<CaptureViewModel> = captures
                .iter()
                .map(|capture| CaptureViewModel {
                    path: capture.path.display().to_string(),
                    format: capture.format.label(),
                    size: capture.size,
                    modified: capture.modified.map(|m| m.to_rfc3339()),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => {
            if captures.is_empty() {
                println!("No captures found under {}", dir.display());
                return Ok(());
            }
            for capture in &captures {
                let modified = capture
                    .modified
                    .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:16}  {:>10}  {:<11}  {}",
                    modified,
                    capture.size,
                    capture.format.label(),
                    capture.path.display()
                );
            }
        }
    }

    Ok(())
}
