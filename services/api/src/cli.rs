use crate::demo::{run_demo, run_evaluate, run_programs, DemoArgs, EvaluateArgs};
use crate::server;
use casework::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Casework Eligibility",
    about = "Evaluate client intake records against benefit program rules",
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
    /// Evaluate intake records or inspect the program table
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
    /// Evaluate a set of sample intake records and print the matches
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Evaluate an intake JSON document
    Evaluate(EvaluateArgs),
    /// List the supported programs and their ids
    Programs,
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
        Command::Eligibility {
            command: EligibilityCommand::Evaluate(args),
        } => run_evaluate(args),
        Command::Eligibility {
            command: EligibilityCommand::Programs,
        } => {
            run_programs();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
