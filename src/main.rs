mod cli;
mod db;
mod error;
mod fmt;
mod importer;
mod models;
mod rows;
mod settings;
mod stores;

use clap::Parser;

use cli::{AccountsCommands, Cli, Commands, SegmentsCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import { file } => cli::import::run(&file),
        Commands::Accounts { command } => match command {
            AccountsCommands::Add { code, name } => cli::accounts::add(&code, &name),
            AccountsCommands::List => cli::accounts::list(),
        },
        Commands::Segments { command } => match command {
            SegmentsCommands::Add { code, name } => cli::segments::add(&code, name.as_deref()),
            SegmentsCommands::List => cli::segments::list(),
        },
        Commands::Movements { account, segment } => {
            cli::movements::list(account.as_deref(), segment.as_deref())
        }
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
