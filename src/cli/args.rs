// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for tutor.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tutor - chat with your AI tutor from the terminal
#[derive(Parser, Debug)]
#[command(name = "tutor")]
#[command(version, about = "Chat with your AI tutor from the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Tutoring service base URL (overrides settings and TUTOR_ENDPOINT)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session (default when no command given)
    Chat,

    /// Send a single message and print the reply
    Ask(AskArgs),

    /// List the courses offered by the tutoring service
    Courses,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// Message to send
    pub message: String,
}
