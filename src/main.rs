//! vterm CLI entry point.

use clap::Parser;

use vterm::cli::commands::{exec, load_config, render, repl};
use vterm::cli::{Cli, Commands};
use vterm::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.adapter) {
        Ok(config) => config,
        Err(err) => vterm::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => vterm::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Repl(args) => repl::execute(args, &config).await,
        Commands::Exec(args) => exec::execute(args, &config, cli.json).await,
        Commands::Render(args) => render::execute(args, &config, cli.json).await,
    };

    if let Err(err) = result {
        vterm::cli::handle_error(err, cli.json);
    }
}
