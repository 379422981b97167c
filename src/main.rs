//! Main entry point for the multi-language translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multilang_translator::cli::commands::{self, Commands};
use multilang_translator::core::config::{ProviderChoice, TranslatorConfig};
use multilang_translator::core::handler::TranslationRequestHandler;
use multilang_translator::core::selector::build_provider;
use multilang_translator::core::transport::ReqwestTransport;

/// Translate short texts between Turkish, English, German and French
#[derive(Parser, Debug)]
#[command(name = "multilang-translator", version, about, long_about = None)]
struct Args {
    /// Provider to use: auto, offline, deepl, azure or mymemory
    #[arg(long)]
    provider: Option<ProviderChoice>,

    /// Offline dictionary file (JSON). Defaults to OFFLINE_DICTIONARY_PATH,
    /// then Data/OfflineDictionary.json beside the executable or in the
    /// working directory; the built-in phrase list is used if none load
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// JSON configuration file, used instead of environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("multilang_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::from_env()?,
    };

    // Override config with CLI args if provided
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if let Some(dictionary) = args.dictionary {
        config.dictionary_path = Some(dictionary);
    }
    config.validate()?;

    let transport = Arc::new(ReqwestTransport::new(config.timeout())?);
    let handler = TranslationRequestHandler::new(build_provider(&config, transport)?);

    // Execute command
    match args.command {
        Some(Commands::Translate { text, from, to }) => {
            commands::handle_translate(&handler, text, from, to).await?;
        }
        Some(Commands::Languages) => commands::handle_languages(&handler),
        Some(Commands::Interactive) => commands::handle_interactive(&handler).await?,
        Some(Commands::Serve { host, port }) => {
            commands::handle_serve(handler, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
