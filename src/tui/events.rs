// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the chat TUI
//!
//! The outbound call runs on its own task; its outcome comes back to the
//! UI loop through an unbounded tokio channel so rendering never blocks on
//! the network.

use tokio::sync::mpsc;

use crate::error::CommunicationFailure;

/// Events delivered to the UI loop from background tasks
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The outstanding request finished, successfully or not
    ReplyReceived(Result<String, CommunicationFailure>),
}

pub type EventSender = mpsc::UnboundedSender<ChatEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;

/// Create the channel connecting background tasks to the UI loop
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
