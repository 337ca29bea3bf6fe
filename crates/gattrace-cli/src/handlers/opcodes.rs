use crate::args::OutputFormat;
use anyhow::Result;
use gattrace_types::STANDARD_REGISTRY;
use serde::Serialize;

#[derive(Serialize)]
struct OpcodeViewModel {
    opcode: &'static str,
    name: &'static str,
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let entries = STANDARD_REGISTRY.entries();

    match format {
        OutputFormat::Json => {
            let view: Vec<OpcodeViewModel> = entries
                .into_iter()
                .map(|(opcode, name)| OpcodeViewModel { opcode, name })
                .collect();
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Plain => {
            println!("ATT opcodes:");
            for (opcode, name) in entries {
                println!("  {}  {}", opcode, name);
            }
        }
    }

    Ok(())
}
