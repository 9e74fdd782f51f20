use crate::console::{run_classify, run_recommend, ClassifyArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hospital_referral::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hospital Referral Desk",
    about = "Recommend the best-suited hospital for a patient referral",
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
    /// Rank the hospital network for a patient complaint
    Recommend(RecommendArgs),
    /// Print the triage severity of a complaint
    Classify(ClassifyArgs),
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
        Command::Recommend(args) => run_recommend(args),
        Command::Classify(args) => run_classify(args),
    }
}
