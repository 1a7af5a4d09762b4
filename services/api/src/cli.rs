use crate::demo::{run_demo, run_quote, run_trend_aggregate, DemoArgs, QuoteArgs, TrendAggregateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use studio_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Studio Desk",
    about = "Price freelance offers and roll up social media trends from the command line",
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
    /// Price an offer from a JSON pricing form
    Quote(QuoteArgs),
    /// Social trend rollups
    Trends {
        #[command(subcommand)]
        command: TrendsCommand,
    },
    /// Walk through sample offers and a sample monthly trend rollup
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum TrendsCommand {
    /// Aggregate imported samples into top tags per platform for a month
    Aggregate(TrendAggregateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Trend samples CSV to preload into the in-memory store
    #[arg(long)]
    pub(crate) samples: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Trends {
            command: TrendsCommand::Aggregate(args),
        } => run_trend_aggregate(args),
        Command::Demo(args) => run_demo(args),
    }
}
