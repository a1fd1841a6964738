// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversation controller
//!
//! Owns the turn sequence, the input buffer and the in-flight flag, and runs
//! the submit cycle. The cycle is split at its single suspension point:
//! [`Conversation::begin_submit`] records the user turn and hands back the
//! outbound message, [`Conversation::complete`] applies the outcome. The
//! TUI drives the two halves from separate events; [`Conversation::submit`]
//! runs both around one service call.

use crate::error::CommunicationFailure;
use crate::service::TutorService;

use super::classify::{classify, Presentation};
use super::input::InputState;
use super::turn::Turn;

/// Seeded assistant turn shown at session start
pub const WELCOME_TEXT: &str = "Hello! I'm your AI tutor. Please type the name of the course you'd like to study. Available courses: Python, Excel, C++";

/// Assistant turn appended in place of a reply when the call fails
pub const COMMUNICATION_ERROR_TEXT: &str = "⚠️ Error communicating with the server";

/// Session-level state of the dispatch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No request outstanding; submits are accepted
    Idle,
    /// One request outstanding; submits are rejected
    AwaitingReply,
}

/// Session-scoped conversation state
#[derive(Debug, Clone)]
pub struct Conversation {
    turns: Vec<Turn>,
    input: InputState,
    phase: Phase,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a session with the welcome turn
    pub fn new() -> Self {
        Self::with_input(InputState::new())
    }

    /// Start a session with a preconfigured input buffer
    pub fn with_input(input: InputState) -> Self {
        Self {
            turns: vec![Turn::assistant(WELCOME_TEXT)],
            input,
            phase: Phase::Idle,
        }
    }

    /// All turns, oldest first
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns paired with their presentation category
    pub fn presented(&self) -> impl Iterator<Item = (&Turn, Presentation)> {
        self.turns.iter().map(|turn| (turn, classify(turn)))
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Input editing stays available while a reply is pending
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.phase == Phase::AwaitingReply
    }

    /// First half of the submit cycle.
    ///
    /// Returns the message to send, or `None` when the input is blank or a
    /// reply is still pending. A `None` leaves every part of the state,
    /// including the input buffer, untouched.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.phase == Phase::AwaitingReply {
            tracing::debug!(
                target: "tutor.conversation",
                "submit rejected: reply pending"
            );
            return None;
        }
        if self.input.is_blank() {
            return None;
        }

        let message = self.input.take_trimmed();
        self.turns.push(Turn::user(message.clone()));
        self.phase = Phase::AwaitingReply;

        tracing::debug!(
            target: "tutor.conversation",
            turns = self.turns.len(),
            chars = message.chars().count(),
            "submit accepted"
        );

        Some(message)
    }

    /// Second half of the submit cycle.
    ///
    /// Appends the reply, or the sentinel on failure, and returns to
    /// [`Phase::Idle`]. Ignored when no request is outstanding.
    pub fn complete(&mut self, outcome: Result<String, CommunicationFailure>) {
        if self.phase != Phase::AwaitingReply {
            tracing::warn!(
                target: "tutor.conversation",
                "completion received with no request outstanding"
            );
            return;
        }

        let text = match outcome {
            Ok(reply) => reply,
            Err(failure) => {
                tracing::warn!(
                    target: "tutor.conversation",
                    error = %failure,
                    "tutoring service call failed"
                );
                COMMUNICATION_ERROR_TEXT.to_string()
            }
        };

        self.turns.push(Turn::assistant(text));
        self.phase = Phase::Idle;

        tracing::debug!(
            target: "tutor.conversation",
            turns = self.turns.len(),
            "reply applied"
        );
    }

    /// Run a whole submit cycle against `service` using the input buffer.
    ///
    /// Never fails: communication problems become the sentinel turn.
    pub async fn submit(&mut self, service: &dyn TutorService) {
        let Some(message) = self.begin_submit() else {
            return;
        };
        let outcome = service.send_message(&message).await;
        self.complete(outcome);
    }

    /// Put `text` in the input buffer and submit it
    pub async fn submit_text(&mut self, text: &str, service: &dyn TutorService) {
        if self.is_awaiting_reply() {
            return;
        }
        self.input.set_buffer(text);
        self.submit(service).await;
    }

    /// The most recent assistant turn
    pub fn last_reply(&self) -> Option<&Turn> {
        self.turns.iter().rev().find(|turn| !turn.is_user())
    }
}
