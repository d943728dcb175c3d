use crate::demo::{run_demo, run_positions, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use meridian_site::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Meridian Site Service",
    about = "Serve the Meridian marketing-site backend or exercise its pipelines from the command line",
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
    /// Run both form pipelines offline against a recording mailer
    Demo(DemoArgs),
    /// Print the open positions the application endpoint currently accepts
    Positions,
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
        Command::Demo(args) => run_demo(args).await,
        Command::Positions => run_positions().await,
    }
}
