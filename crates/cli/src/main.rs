//! Shoe inventory menu entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Context;

use stockroom_cli::{AppConfig, Console, Session};
use stockroom_infra::FlatFileSource;

fn main() -> ExitCode {
    stockroom_observability::init();

    match run(AppConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!(path = %config.inventory_path.display(), "starting inventory session");

    let source = FlatFileSource::new(&config.inventory_path);
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(source, console);

    session.run().context("terminal input/output failed")?;
    Ok(())
}
