use crate::demo::{run_demo, run_suggest, DemoArgs, SuggestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gather::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Gather Scheduling Service",
    about = "Run and exercise the Gather volunteer scheduling service from the command line",
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
    /// Work with volunteer scheduling from the command line
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Run an end-to-end demo: suggestions, commit, and the run sheet
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScheduleCommand {
    /// Generate a suggestion batch for the demo roster or a CSV export
    Suggest(SuggestArgs),
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
        Command::Schedule {
            command: ScheduleCommand::Suggest(args),
        } => run_suggest(args),
        Command::Demo(args) => run_demo(args),
    }
}
