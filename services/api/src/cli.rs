use crate::demo::{run_demo, run_roster_import, DemoArgs, RosterImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shelter_hub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Shelter Hub",
    about = "Demonstrate and run the Shelter Hub adoption service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with shelter pet-roster CSV exports
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Run an end-to-end CLI demo covering the adopter workflow
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// List a roster export under a seeded shelter and print the result
    Import(RosterImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster {
            command: RosterCommand::Import(args),
        } => run_roster_import(args),
        Command::Demo(args) => run_demo(args),
    }
}
