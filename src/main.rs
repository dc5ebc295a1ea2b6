use anyhow::Result;
use clap::Parser;
use rellenar::{cli::Cli, runner};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::run(&mut out, args.offset)?;

    Ok(())
}
