use crate::report::{run_analyze, run_breakdown, run_rank, run_score, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Questionnaire Scoring",
    about = "Serve and inspect questionnaire scores, candidate rankings and question analysis",
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
    /// Print the total, maximum and percentage for one application
    Score {
        /// Application identifier
        application_id: u64,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Print the per-question breakdown for one application
    Breakdown {
        /// Application identifier
        application_id: u64,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Print the ranked candidates for a position
    Rank {
        /// Position identifier
        position_id: u64,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// Print the score distribution for a question across all applicants
    Analyze {
        /// Question identifier
        question_id: u64,
        #[command(flatten)]
        report: ReportArgs,
    },
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
        Command::Score {
            application_id,
            report,
        } => run_score(application_id, report),
        Command::Breakdown {
            application_id,
            report,
        } => run_breakdown(application_id, report),
        Command::Rank {
            position_id,
            report,
        } => run_rank(position_id, report),
        Command::Analyze {
            question_id,
            report,
        } => run_analyze(question_id, report).await,
    }
}
