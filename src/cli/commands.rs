//! CLI command definitions and handlers

use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::core::handler::TranslationRequestHandler;
use crate::core::language::Language;
use crate::core::models::TranslationPanel;

/// Commands for the translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a piece of text
    Translate {
        /// Text to translate
        text: String,

        /// Source language (default: Türkçe)
        #[arg(short, long, default_value = "Türkçe")]
        from: String,

        /// Target language (default: İngilizce)
        #[arg(short, long, default_value = "İngilizce")]
        to: String,
    },

    /// List the languages offered for selection
    Languages,

    /// Translate line by line from standard input
    Interactive,

    /// Start HTTP API server
    Serve {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle translate command; Ctrl+C abandons the request
pub async fn handle_translate(
    handler: &TranslationRequestHandler,
    text: String,
    from: String,
    to: String,
) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    match handler
        .translate_with_cancel(&text, Some(&from), Some(&to), &cancel)
        .await
    {
        Some(result) => println!("{}", result),
        None => info!("Translation cancelled"),
    }

    Ok(())
}

/// Handle languages command
pub fn handle_languages(handler: &TranslationRequestHandler) {
    println!("Provider: {}", handler.provider_name());
    for name in handler.supported_languages() {
        match Language::from_name(name) {
            Some(lang) => println!("  {:<10} {:<8} {}", name, lang.english_name(), lang.iso_code()),
            None => println!("  {}", name),
        }
    }
}

/// One line of interactive input
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Swap,
    Show,
    From(&'a str),
    To(&'a str),
    Text(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed.split_once(' ') {
        Some((":from", lang)) => Input::From(lang.trim()),
        Some((":to", lang)) => Input::To(lang.trim()),
        _ => match trimmed {
            ":quit" | ":q" => Input::Quit,
            ":swap" => Input::Swap,
            ":show" => Input::Show,
            _ => Input::Text(line),
        },
    }
}

fn print_panel(panel: &TranslationPanel) {
    println!(
        "[{} -> {}]",
        panel.source_language.as_deref().unwrap_or("?"),
        panel.target_language.as_deref().unwrap_or("?")
    );
}

/// Handle interactive command
pub async fn handle_interactive(handler: &TranslationRequestHandler) -> anyhow::Result<()> {
    let mut panel = TranslationPanel::new();

    println!("Provider: {}", handler.provider_name());
    println!("Commands: :from <lang>, :to <lang>, :swap, :show, :quit");
    print_panel(&panel);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::Swap => {
                panel.swap();
                print_panel(&panel);
                if !panel.source_text.is_empty() {
                    println!("{}", panel.source_text);
                }
            }
            Input::Show => print_panel(&panel),
            Input::From(lang) => {
                panel.source_language = Some(lang.to_string());
                print_panel(&panel);
            }
            Input::To(lang) => {
                panel.target_language = Some(lang.to_string());
                print_panel(&panel);
            }
            Input::Text(text) => {
                panel.source_text = text.to_string();
                panel.translated_text = handler
                    .translate(
                        &panel.source_text,
                        panel.source_language.as_deref(),
                        panel.target_language.as_deref(),
                    )
                    .await;
                println!("{}", panel.translated_text);
            }
        }
    }

    Ok(())
}

/// Handle serve command
pub async fn handle_serve(
    handler: TranslationRequestHandler,
    host: String,
    port: u16,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(handler, host, port).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(":quit"), Input::Quit);
        assert_eq!(parse_input(" :swap "), Input::Swap);
        assert_eq!(parse_input(":from  Almanca "), Input::From("Almanca"));
        assert_eq!(parse_input(":to fr"), Input::To("fr"));
        assert_eq!(parse_input("good night"), Input::Text("good night"));
        assert_eq!(parse_input(":fromage"), Input::Text(":fromage"));
    }
}
