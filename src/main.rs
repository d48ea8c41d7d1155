//! Main entry point for the translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloud_translate::cli::commands::{self, Commands};
use cloud_translate::{ClientConfig, TranslateClient};

/// Translate CLI - call the translation service from the shell
#[derive(Parser, Debug)]
#[command(name = "translate-cli", version, about, long_about = None)]
struct Args {
    /// JSON config file layered under TRANSLATE_* env vars
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service endpoint URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Service region (overrides config)
    #[arg(long)]
    region: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn build_client(args: &Args) -> anyhow::Result<TranslateClient> {
    let mut config = ClientConfig::load(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(region) = &args.region {
        config = config.with_region(region);
    }
    Ok(TranslateClient::new(config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let mut args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", crate_name, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(command) = args.command.take() else {
        println!("Please specify a command. Use --help for more information.");
        return Ok(());
    };

    // Only commands that talk to the service need a client.
    let client = || build_client(&args);

    match command {
        Commands::Text {
            text,
            file,
            source_lang,
            target_lang,
            terminologies,
            formality,
            mask_profanity,
            brief,
        } => {
            commands::handle_text(
                &client()?,
                text,
                file,
                source_lang,
                target_lang,
                terminologies,
                formality,
                mask_profanity,
                brief,
            )
            .await?;
        }
        Commands::Document {
            file,
            output,
            content_type,
            source_lang,
            target_lang,
        } => {
            commands::handle_document(&client()?, file, output, content_type, source_lang, target_lang)
                .await?;
        }
        Commands::Languages { display_language } => {
            commands::handle_languages(&client()?, display_language).await?;
        }
        Commands::Terminologies { name, max_results } => {
            commands::handle_terminologies(&client()?, name, max_results).await?;
        }
        Commands::ParallelData { name, max_results } => {
            commands::handle_parallel_data(&client()?, name, max_results).await?;
        }
        Commands::DescribeJob { job_id } => {
            commands::handle_describe_job(&client()?, job_id).await?;
        }
        Commands::ListJobs { status, max_results } => {
            commands::handle_list_jobs(&client()?, status, max_results).await?;
        }
        Commands::StopJob { job_id } => {
            commands::handle_stop_job(&client()?, job_id).await?;
        }
        Commands::Validate { operation, file } => {
            commands::handle_validate(operation, file)?;
        }
    }

    Ok(())
}
