// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat application state
//!
//! Owns the conversation and routes key presses and background events into
//! it. Submitting spawns the service call on a tokio task so the input box
//! stays editable while a reply is outstanding.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use uuid::Uuid;

use crate::config::Settings;
use crate::conversation::{Conversation, InputState};
use crate::error::Result;
use crate::service::TutorService;

use super::events::{self, ChatEvent, EventReceiver, EventSender};
use super::scroll::ScrollState;

/// Result of a tick (event loop iteration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Continue running
    Continue,
    /// User wants to quit
    Quit,
}

/// Main application state for the chat TUI
pub struct ChatApp {
    pub session_id: Uuid,
    pub conversation: Conversation,
    pub scroll_state: ScrollState,
    pub should_quit: bool,

    tick_rate: Duration,
    event_tx: EventSender,
    event_rx: EventReceiver,
    service: Arc<dyn TutorService>,
}

impl ChatApp {
    pub fn new(service: Arc<dyn TutorService>, settings: &Settings) -> Self {
        let (event_tx, event_rx) = events::channel();
        Self {
            session_id: Uuid::new_v4(),
            conversation: Conversation::with_input(InputState::with_history_limit(
                settings.ui.history_size,
            )),
            scroll_state: ScrollState::new(),
            should_quit: false,
            tick_rate: Duration::from_millis(settings.ui.tick_ms.max(1)),
            event_tx,
            event_rx,
            service,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.service.endpoint()
    }

    /// One iteration of the event loop
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        tokio::select! {
            Some(event) = self.event_rx.recv() => {
                self.handle_event(event);
            }
            _ = tokio::time::sleep(self.tick_rate) => {}
        }

        // Check terminal input (non-blocking)
        if crossterm::event::poll(Duration::from_millis(0))? {
            self.handle_terminal_event(crossterm::event::read()?);
        }

        Ok(if self.should_quit {
            TickResult::Quit
        } else {
            TickResult::Continue
        })
    }

    /// Wait for the next background event and apply it.
    ///
    /// Returns false once no sender can produce another event.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::ReplyReceived(outcome) => {
                self.conversation.complete(outcome);
            }
        }
    }

    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => {
                // Pasted newlines would otherwise act as Enter
                let flattened = text.replace(['\r', '\n'], " ");
                self.conversation.input_mut().insert_str(&flattened);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let input = self.conversation.input_mut();

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                self.submit();
            }

            KeyCode::Char('a') if ctrl => input.move_home(),
            KeyCode::Char('e') if ctrl => input.move_end(),
            KeyCode::Char('u') if ctrl => input.clear(),
            KeyCode::Char('w') if ctrl => input.delete_word(),
            KeyCode::Char(c) if !ctrl => input.insert_char(c),

            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Up => input.history_prev(),
            KeyCode::Down => input.history_next(),

            KeyCode::PageUp => self.scroll_state.page_up(),
            KeyCode::PageDown => self.scroll_state.page_down(),
            _ => {}
        }
    }

    /// Submit the input buffer and dispatch the request in the background.
    ///
    /// Returns true when a request was started.
    pub fn submit(&mut self) -> bool {
        let Some(message) = self.conversation.begin_submit() else {
            return false;
        };
        self.scroll_state.follow_bottom();

        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = service.send_message(&message).await;
            // The receiver is gone only when the UI has already exited
            let _ = tx.send(ChatEvent::ReplyReceived(outcome));
        });
        true
    }
}
