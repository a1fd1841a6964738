// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! tutor - terminal client for a conversational tutoring service.
//!
//! This crate exposes the shared runtime used by:
//! - the `tutor` CLI (`src/main.rs`)
//! - the interactive TUI chat
//!
//! Architecture highlights:
//! - `conversation`: append-only turns, the submit cycle, presentation classification
//! - `service`: the tutoring service abstraction with HTTP and scripted implementations
//! - `config`: settings file and endpoint resolution
//! - `tui`: terminal presentation layer

pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod service;
pub mod tui;

pub use error::{Result, TutorError};
