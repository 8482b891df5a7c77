//! Vela CLI entry point

use std::process::ExitCode;

use clap::Parser;

use vela::cli::{
    app::{run_record, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use vela::infrastructure::{Paths, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Record(args) => run_record(args).await,
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new(&Paths::from_env());
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}
