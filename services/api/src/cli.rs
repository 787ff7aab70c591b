use crate::render::{run_report_insights, ReportInsightsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use report_insight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Report Insight Service",
    about = "Classify extracted medical-report data into risk, specialist, and lifestyle insights",
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
    /// Work with report JSON from the command line
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Classify a report and print its overview
    Insights(ReportInsightsArgs),
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
        Command::Report {
            command: ReportCommand::Insights(args),
        } => run_report_insights(args),
    }
}
