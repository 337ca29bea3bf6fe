use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = expand_tilde(&cli.config_dir);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Analyze {
            input,
            strict,
            tshark,
            no_color,
        } => {
            let config = Config::load_from(&config_dir.join("config.toml"))?;
            handlers::analyze::handle(
                Path::new(&input),
                strict,
                tshark.map(PathBuf::from),
                no_color,
                cli.format,
                &config,
            )
        }

        Commands::Captures { dir } => {
            handlers::captures::handle(Path::new(dir.as_deref().unwrap_or(".")), cli.format)
        }

        Commands::Opcodes => handlers::opcodes::handle(cli.format),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

fn show_guidance() {
    println!("gattrace - BLE ATT/GATT capture analyzer\n");
    println!("Quick commands:");
    println!("  gattrace analyze <capture.pcapng>   # Decode via tshark and report");
    println!("  gattrace analyze <export.json>      # Analyze a tshark -T json export");
    println!("  gattrace captures [<dir>]           # List analyzable files");
    println!("  gattrace opcodes                    # Show the ATT opcode table\n");
    println!("For more commands:");
    println!("  gattrace --help");
}
