// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat TUI module
//!
//! Terminal interface for a tutoring session:
//! - scrolling transcript with per-category styling
//! - single-line input with history recall
//! - non-blocking dispatch of each message to the tutoring service

pub mod app;
pub mod events;
pub mod scroll;
pub mod ui;
pub mod widgets;

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::error::{Result, TutorError};
use crate::service::TutorService;

pub use app::{ChatApp, TickResult};
pub use events::{ChatEvent, EventSender};

/// Run the chat TUI until the user quits
pub async fn run_chat_tui(service: Arc<dyn TutorService>, settings: &Settings) -> Result<()> {
    // Setup terminal with panic hook to restore terminal on crash
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    or_restore(enable_raw_mode(), restore_terminal)?;
    let mut stdout = io::stdout();
    or_restore(
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste),
        restore_terminal,
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(Terminal::new(backend), restore_terminal)?;

    let mut app = ChatApp::new(service, settings);
    tracing::info!(
        target: "tutor.tui",
        session = %app.session_id,
        endpoint = app.endpoint(),
        "chat session started"
    );

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    let _ = std::panic::take_hook();

    disable_raw_mode().map_err(|e| TutorError::Tui(e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .map_err(|e| TutorError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| TutorError::Tui(e.to_string()))?;

    tracing::info!(
        target: "tutor.tui",
        session = %app.session_id,
        turns = app.conversation.turns().len(),
        "chat session ended"
    );

    result
}

/// Map a failed setup step to a TUI error after undoing partial setup
fn or_restore<T>(result: io::Result<T>, restore: impl FnOnce()) -> Result<T> {
    result.map_err(|e| {
        restore();
        TutorError::Tui(e.to_string())
    })
}

/// Best-effort undo of terminal setup, including the panic hook
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    let _ = std::panic::take_hook();
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut ChatApp) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| TutorError::Tui(e.to_string()))?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}
