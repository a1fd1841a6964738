// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! tutor - chat with your AI tutor from the terminal
//!
//! Entry point for the tutor CLI application.

use std::sync::Arc;

use clap::Parser;

use tutor::cli::{Cli, Commands};
use tutor::config::Settings;
use tutor::error::Result;
use tutor::service::{HttpTutorService, TutorService};

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{run_ask, run_courses};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing. The TUI owns the terminal, so chat mode stays
    // silent unless RUST_LOG or -v asks for output.
    let tui_mode = matches!(cli.command, None | Some(Commands::Chat));
    let quiet = tui_mode && cli.verbose == 0 && std::env::var_os("RUST_LOG").is_none();
    let mut env_filter = if quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::WARN.into())
    };

    // `-v` enables conversation and service diagnostics without requiring
    // users to know target names up front. `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        for directive in [
            "tutor.conversation=debug",
            "tutor.service=debug",
            "tutor.config=debug",
            "tutor.tui=debug",
        ] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    // Stdout belongs to the TUI and to command output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let endpoint = settings.resolve_endpoint(cli.endpoint.as_deref())?;
    let service: Arc<dyn TutorService> = Arc::new(HttpTutorService::with_timeout(
        endpoint,
        settings.service.request_timeout(),
    )?);

    tracing::debug!(
        target: "tutor.config",
        endpoint = service.endpoint(),
        "resolved tutoring service"
    );

    match cli.command {
        None | Some(Commands::Chat) => {
            tutor::tui::run_chat_tui(service, &settings).await?;
        }
        Some(Commands::Ask(args)) => {
            run_ask(&args.message, service.as_ref()).await?;
        }
        Some(Commands::Courses) => {
            run_courses(service.as_ref()).await?;
        }
    }

    Ok(())
}
