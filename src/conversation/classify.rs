// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Presentation categories for turns
//!
//! The tutoring service announces structural events inline, using fixed
//! emoji markers at the start of (or inside) its reply text. Classification
//! only looks at assistant text; user turns are always plain bubbles.

use super::turn::{Speaker, Turn};

/// Prefix of a module announcement
pub const MODULE_MARKER: &str = "📘 Module";

/// Prefix of a course selection confirmation
pub const SELECTION_MARKER: &str = "✅ Selected";

/// Substring announcing the end of a course
pub const COMPLETION_MARKER: &str = "🎉 Course completed";

/// How a turn should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Anything the user typed
    UserBubble,
    /// Assistant text starting with [`MODULE_MARKER`]
    ModuleInfo,
    /// Assistant text starting with [`SELECTION_MARKER`]
    SelectionConfirmed,
    /// Assistant text containing [`COMPLETION_MARKER`]
    CourseComplete,
    /// Any other assistant text
    Plain,
}

impl Presentation {
    pub fn label(&self) -> &'static str {
        match self {
            Presentation::UserBubble => "user",
            Presentation::ModuleInfo => "module",
            Presentation::SelectionConfirmed => "selected",
            Presentation::CourseComplete => "complete",
            Presentation::Plain => "plain",
        }
    }

    /// Whether the category is drawn as a highlighted block
    pub fn is_highlighted(&self) -> bool {
        matches!(
            self,
            Presentation::ModuleInfo
                | Presentation::SelectionConfirmed
                | Presentation::CourseComplete
        )
    }
}

/// Classify a turn. First match wins for assistant text.
pub fn classify(turn: &Turn) -> Presentation {
    match turn.speaker() {
        Speaker::User => Presentation::UserBubble,
        Speaker::Assistant => classify_assistant_text(turn.text()),
    }
}

/// Classify text authored by the assistant
pub fn classify_assistant_text(text: &str) -> Presentation {
    if text.starts_with(MODULE_MARKER) {
        Presentation::ModuleInfo
    } else if text.starts_with(SELECTION_MARKER) {
        Presentation::SelectionConfirmed
    } else if text.contains(COMPLETION_MARKER) {
        Presentation::CourseComplete
    } else {
        Presentation::Plain
    }
}
