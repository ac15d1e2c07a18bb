use crate::demo::{run_diagnose, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use plant_diag::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Plant Diagnosis Service",
    about = "Run the plant diagnosis service or score a single diagnosis from the command line",
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
    /// Score one diagnosis against the bundled knowledge base and print the
    /// ranked candidates
    Diagnose(DiagnoseArgs),
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
        Command::Diagnose(args) => run_diagnose(args),
    }
}
