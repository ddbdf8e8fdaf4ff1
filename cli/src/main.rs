use clap::Parser;
use presentation::cli::{Cli, CliApp};
use shared::telemetry::{self, Telemetry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();
    let session = Telemetry::new();

    let cli = Cli::parse();
    let mut app = CliApp::new();
    app.run(cli)?;

    tracing::debug!(elapsed = ?session.elapsed(), "session finished");
    Ok(())
}
