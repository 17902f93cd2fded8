use colored::*;
use std::io::{self, Write};
use userdb::dispatch;
use userdb::error::{Result, UserDbError};

mod cli;
use cli::setup::Cli;

fn main() {
    let cli = Cli::parse_normalized(std::env::args_os());
    cli::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config();
    tracing::debug!(?config, "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch::run(&config, &mut out)?;
    out.flush()
        .map_err(|e| UserDbError::io("failed to write output", e))
}
