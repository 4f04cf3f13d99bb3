use anyhow::Result;
use clap::Parser;
use omod_scout::Scout;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for
    // command output and the generator stream.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Scout::parse();
    cli.command.execute()
}
