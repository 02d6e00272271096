mod cli;
mod config;
mod error;
mod report;
mod scan;
mod scoring;
mod server;
mod types;

use crate::error::{Result, SentimentError};
use crate::types::config::{Engine, Format, ModelSettings, SentimentConfig};
use clap::Parser;
use std::io::Read;
use tracing_subscriber::{fmt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &cli::Cli) -> Result<SentimentConfig> {
    if let Some(path) = &cli.config {
        return config::load_config_file(path);
    }
    let root = std::env::current_dir()?;
    match config::load_config(&root)? {
        Some(cfg) => Ok(cfg),
        None => {
            tracing::info!("no {} found; using defaults", config::DEFAULT_CONFIG_FILE);
            Ok(SentimentConfig::default())
        }
    }
}

/// CLI flags win over config. `--model-path` implies the keyword engine
/// unless `--engine` says otherwise.
fn resolve_model(cfg: &SentimentConfig, args: &cli::EngineArgs) -> ModelSettings {
    let mut settings = cfg.model_settings();
    if let Some(path) = &args.model_path {
        settings.engine = Engine::Keyword;
        settings.keyword_path = Some(path.clone());
    }
    match args.engine {
        Some(cli::EngineArg::Lexicon) => settings.engine = Engine::Lexicon,
        Some(cli::EngineArg::Keyword) => settings.engine = Engine::Keyword,
        None => {}
    }
    settings
}

fn resolve_format(cfg: &SentimentConfig, arg: Option<cli::ReportFormat>) -> report::OutputFormat {
    match arg {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match cfg.report_format() {
            Format::Json => report::OutputFormat::Json,
            Format::Md => report::OutputFormat::Md,
        },
    }
}

fn read_input(cmd: &cli::PredictCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.file {
        if !path.exists() {
            return Err(SentimentError::PathNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        return String::from_utf8(bytes)
            .map_err(|_| SentimentError::InvalidInput(path.display().to_string()));
    }

    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| SentimentError::InvalidInput("stdin".to_string()))
}

fn run(cli: cli::Cli) -> Result<i32> {
    let cfg = load_settings(&cli)?;
    match cli.command {
        cli::Commands::Predict(cmd) => {
            let scorer = scoring::build_scorer(&resolve_model(&cfg, &cmd.engine))?;
            let text = read_input(&cmd)?;
            let result = scorer.predict(&text);
            tracing::info!(
                engine = scorer.name(),
                sentiment = %result.sentiment,
                confidence = result.confidence,
                "scored input"
            );
            let rendered = report::render(&result, resolve_format(&cfg, cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let scorer = scoring::build_scorer(&resolve_model(&cfg, &cmd.engine))?;
            let documents = scan::collect_documents(&cmd.path, &cmd.ext)?;
            let batch = scan::score_documents(&cmd.path, &documents, scorer.as_ref());
            let rendered = report::render_batch(&batch, resolve_format(&cfg, cmd.format))?;
            println!("{rendered}");

            if batch.documents.is_empty() {
                eprintln!(
                    "warning: no .{} files found in {}",
                    cmd.ext.trim_start_matches('.'),
                    cmd.path.display()
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Serve(cmd) => {
            let scorer = scoring::build_scorer(&resolve_model(&cfg, &cmd.engine))?;
            let mut settings = cfg.server_settings();
            if let Some(addr) = cmd.addr {
                settings.addr = addr;
            }
            server::Server::new(scorer.as_ref(), settings).serve()?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::ExportModel(cmd) => {
            scoring::keyword::KeywordModel::default().save(&cmd.path)?;
            println!("model file: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
