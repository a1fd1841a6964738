// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversation state and the message-dispatch cycle
//!
//! - `turn`: immutable chat turns
//! - `input`: the editable input buffer with recall history
//! - `controller`: the idle/awaiting-reply cycle around one service call
//! - `classify`: pure mapping from a turn to its presentation category

pub mod classify;
pub mod controller;
pub mod input;
pub mod turn;

#[cfg(test)]
mod proptests;

pub use classify::{classify, classify_assistant_text, Presentation};
pub use controller::{Conversation, Phase, COMMUNICATION_ERROR_TEXT, WELCOME_TEXT};
pub use input::InputState;
pub use turn::{Speaker, Turn};
