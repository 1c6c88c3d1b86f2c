use crate::demo::{run_demo, DemoArgs};
use crate::guide::{run_guide, run_validate, GuideArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deed_guidance::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Deed Guidance",
    about = "Classify property owners and list the documents a notarised transfer needs",
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
    /// Produce guidance for a JSON fact sheet
    Guide(GuideArgs),
    /// Check a JSON fact sheet for missing facts
    Validate(ValidateArgs),
    /// Print guidance for a set of built-in sample households
    Demo(DemoArgs),
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
        Command::Guide(args) => run_guide(args),
        Command::Validate(args) => run_validate(args),
        Command::Demo(args) => run_demo(args),
    }
}
