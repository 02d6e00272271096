use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sentiment",
    version,
    about = "Lexicon-based review sentiment scoring CLI and HTTP service"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Load this config file instead of discovering sentiment.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single text
    Predict(PredictCommand),
    /// Score every review file in a directory
    Batch(BatchCommand),
    /// Serve the scorer over HTTP
    Serve(ServeCommand),
    /// Write the default keyword model artifact
    ExportModel(ExportModelCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EngineArg {
    Lexicon,
    Keyword,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args, Clone, Debug)]
pub struct EngineArgs {
    /// Scoring engine (defaults to model.engine from config, then lexicon)
    #[arg(long, value_enum)]
    pub engine: Option<EngineArg>,

    /// Keyword model artifact to load when the keyword engine is selected
    #[arg(long)]
    pub model_path: Option<PathBuf>,
}

#[derive(Args)]
pub struct PredictCommand {
    /// Text to score; read from --file or stdin when omitted
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub path: PathBuf,

    /// File extension of review files
    #[arg(long, default_value = "txt")]
    pub ext: String,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ServeCommand {
    /// Listen address (defaults to server.addr from config)
    #[arg(long)]
    pub addr: Option<String>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

#[derive(Args)]
pub struct ExportModelCommand {
    pub path: PathBuf,
}
