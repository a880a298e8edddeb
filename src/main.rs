use anyhow::Result;
use clap::Parser;
use eight_puzzle::cli::{execute, Cli};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    execute(&cli, &mut stdout.lock(), color)
}
