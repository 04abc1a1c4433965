use crate::demo::{run_demo, run_fine_compute, DemoArgs, FineComputeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use traffic_watch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Traffic Watch",
    about = "Run the traffic-watch fine and scoring engine from the command line",
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
    /// Fine computation utilities
    Fine {
        #[command(subcommand)]
        command: FineCommand,
    },
    /// Run an end-to-end CLI demo covering fines, approvals, and the leaderboard
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FineCommand {
    /// Compute a fine breakdown for a single violation
    Compute(FineComputeArgs),
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
        Command::Fine {
            command: FineCommand::Compute(args),
        } => run_fine_compute(args),
        Command::Demo(args) => run_demo(args),
    }
}
