use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "gattrace")]
#[command(about = "Analyze BLE ATT/GATT conversations from capture files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = "~/.gattrace", global = true)]
    pub config_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a capture and print the GATT analysis report
    Analyze {
        /// Capture file (pcap/pcapng) or tshark -T json export
        input: String,

        /// Abort on the first malformed record instead of skipping it
        #[arg(long)]
        strict: bool,

        /// tshark binary to use (overrides GATTRACE_TSHARK and the config file)
        #[arg(long)]
        tshark: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List analyzable captures and exports under a directory
    Captures {
        /// Directory to scan (defaults to the current directory)
        dir: Option<String>,
    },

    /// Print the ATT opcode table
    Opcodes,
}
