use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate category counts and render the state map.
    Map(cmd::map::MapArgs),
    /// List the states that can be selected.
    States(cmd::states::StatesArgs),
    /// Average negotiated rate for one state.
    Rate(cmd::rate::RateArgs),
    /// Render the map, then pick states interactively.
    Explore(cmd::explore::ExploreArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Map(args) => cmd::map::run(args),
        Commands::States(args) => cmd::states::run(args),
        Commands::Rate(args) => cmd::rate::run(args),
        Commands::Explore(args) => cmd::explore::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
