// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Custom widgets for the chat TUI

pub mod input_area;
pub mod message;
pub mod status_bar;

pub use input_area::InputArea;
pub use message::{conversation_lines, render_lines, turn_lines, wrap_text};
pub use status_bar::StatusBar;
