// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input area widget for the chat TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::conversation::InputState;

pub const PLACEHOLDER: &str = "Type your message or course name...";

/// Widget for rendering the single-line input box
pub struct InputArea<'a> {
    input: &'a InputState,
    placeholder: Option<&'a str>,
    awaiting: bool,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            placeholder: None,
            awaiting: false,
        }
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Editing stays enabled while a reply is outstanding; only the border changes
    pub fn awaiting(mut self, awaiting: bool) -> Self {
        self.awaiting = awaiting;
        self
    }

    /// First visible character when the text is wider than the box
    fn scroll_start(&self, text_width: usize) -> usize {
        let column = self.input.cursor_column();
        (column + 1).saturating_sub(text_width)
    }

    /// Calculate cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Account for border (1) and prompt "> " (2)
        let text_width = area.width.saturating_sub(4) as usize;
        let column = self.input.cursor_column() - self.scroll_start(text_width.max(1));
        let x = area.x + 1 + 2 + column as u16;
        let y = area.y + 1;
        (
            x.min((area.x + area.width).saturating_sub(1)),
            y.min((area.y + area.height).saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.awaiting {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.awaiting {
            block = block
                .title(" Waiting for reply ")
                .title_style(Style::default().fg(Color::Yellow).bold());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(Color::Cyan).bold(),
        );

        let text_x = inner.x + 2;
        let text_width = inner.width.saturating_sub(2) as usize;

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_stringn(
                    text_x,
                    inner.y,
                    placeholder,
                    text_width,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
            return;
        }

        let visible: String = self
            .input
            .text()
            .chars()
            .skip(self.scroll_start(text_width))
            .take(text_width)
            .collect();
        buf.set_stringn(
            text_x,
            inner.y,
            &visible,
            text_width,
            Style::default().fg(Color::White),
        );
    }
}
