//! CLI entrypoint for Interview Coach
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use coach_application::{
    ConversationLogger, LlmGateway, GenerateReportUseCase, InterviewController, NoConversationLogger,
};
use coach_domain::{InterviewDomain, Model};
use coach_infrastructure::{
    ConfigLoader, FileConfig, GeminiLlmGateway, JsonlConversationLogger, PdfReportRenderer,
};
use coach_presentation::{Cli, ConsoleFormatter, InterviewRepl};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "interview-coach.log";

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    if cli.list_domains {
        print!("{}", ConsoleFormatter::format_domains(None));
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.dir.clone());
    let _log_guard = init_logging(cli.verbose, log_dir)?;

    info!("Starting Interview Coach");

    for issue in config.validate() {
        warn!("Config: {}", issue);
        eprintln!("{}", ConsoleFormatter::warning(&issue.to_string()));
    }

    InterviewDomain::validate_catalog()?;

    let domain = resolve_domain(&cli, &config)?;
    let model = match cli.model.as_deref() {
        Some(name) => name.parse::<Model>()?,
        None => config.gemini.parse_model(),
    };
    let candidate_name = cli
        .name
        .clone()
        .or_else(|| config.interview.candidate_name.clone())
        .unwrap_or_default();
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.report.output_dir.clone());
    let logo = cli
        .logo
        .clone()
        .unwrap_or_else(|| config.report.logo_path.clone());

    info!(
        "Domain: {}, model: {}, output: {}",
        domain,
        model,
        output_dir.display()
    );

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiLlmGateway::from_config(&config.gemini)?);
    if !gateway.has_api_key() {
        eprintln!(
            "{}",
            ConsoleFormatter::warning(&format!(
                "No API key found: set {} (or gemini.api_key) before submitting answers",
                config.gemini.api_key_env
            ))
        );
    }
    if let Ok(models) = gateway.available_models().await
        && !models.contains(&model)
    {
        warn!("{} is not a known Gemini model; using it as given", model);
    }

    let transcript: Arc<dyn ConversationLogger> = match config
        .logging
        .transcript
        .as_ref()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => {
            info!("Transcript: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let controller = InterviewController::new(gateway, model, domain)
        .with_candidate_name(candidate_name)
        .with_conversation_logger(Arc::clone(&transcript));
    let reports = GenerateReportUseCase::new(Arc::new(PdfReportRenderer::with_logo(logo)))
        .with_conversation_logger(transcript);

    let history = config
        .repl
        .history_path()
        .or_else(ConfigLoader::default_history_path);

    let mut repl = InterviewRepl::new(controller, reports, output_dir)
        .with_progress(config.repl.show_progress && !cli.quiet)
        .with_history_file(history);

    repl.run().await?;

    Ok(())
}

/// `--domain` wins over `[interview] default_domain`; an invalid config
/// value was already reported by validation and falls back to the default.
fn resolve_domain(cli: &Cli, config: &FileConfig) -> Result<InterviewDomain> {
    if let Some(name) = cli.domain.as_deref() {
        return match name.parse::<InterviewDomain>() {
            Ok(domain) => Ok(domain),
            Err(e) => bail!("{}\n\n{}", e, ConsoleFormatter::format_domains(None)),
        };
    }

    Ok(config
        .interview
        .parse_default_domain()
        .ok()
        .flatten()
        .unwrap_or_default())
}

/// Initialize tracing. Verbosity comes from `-v`; `RUST_LOG` overrides it.
///
/// With a log directory, output goes to a file through a non-blocking
/// writer so it never interleaves with the prompt. The returned guard must
/// stay alive until exit to flush it.
fn init_logging(verbose: u8, log_dir: Option<PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .map_err(|e| anyhow!("Cannot create log directory {}: {}", dir.display(), e))?;
            let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
