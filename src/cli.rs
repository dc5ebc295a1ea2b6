//! CLI argument parsing for Rellenar

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rellenar")]
#[command(version)]
#[command(about = "Populate a fixed 10-element array, print it, add an offset to the last element", long_about = None)]
pub struct Cli {
    /// Offset added to the array's last element (reference run uses 2)
    #[arg(
        long = "offset",
        value_name = "N",
        default_value = "2",
        allow_hyphen_values = true
    )]
    pub offset: i32,

    /// Enable debug tracing on stderr
    #[arg(short, long)]
    pub debug: bool,
}
