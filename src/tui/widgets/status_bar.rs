// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Status bar widget for the chat TUI

use ratatui::prelude::*;

/// Widget for rendering the title/status bar
pub struct StatusBar<'a> {
    title: &'a str,
    endpoint: &'a str,
    session_id: &'a str,
    awaiting: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, endpoint: &'a str, session_id: &'a str) -> Self {
        Self {
            title,
            endpoint,
            session_id,
            awaiting: false,
        }
    }

    pub fn awaiting(mut self, awaiting: bool) -> Self {
        self.awaiting = awaiting;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bg_style = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let right_edge = area.x + area.width;
        let mut x = area.x + 1;

        let title_style = Style::default().fg(Color::White).bold().bg(Color::DarkGray);
        buf.set_string(x, area.y, self.title, title_style);
        x += self.title.chars().count() as u16 + 1;

        buf.set_string(
            x,
            area.y,
            "─",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );
        x += 2;

        if x < right_edge {
            buf.set_stringn(
                x,
                area.y,
                self.endpoint,
                (right_edge - x) as usize,
                Style::default().fg(Color::Cyan).bg(Color::DarkGray),
            );
        }
        x = x.saturating_add(self.endpoint.chars().count() as u16 + 2);

        // Session ID (short)
        let session_short: String = self.session_id.chars().take(8).collect();
        if x.saturating_add(8) < right_edge {
            buf.set_string(
                x,
                area.y,
                &session_short,
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            );
            x += session_short.len() as u16 + 2;
        }

        let (indicator, style) = if self.awaiting {
            (
                "● Thinking...",
                Style::default().fg(Color::Green).bg(Color::DarkGray),
            )
        } else {
            (
                "Esc quit",
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            )
        };
        let indicator_width = indicator.chars().count() as u16;
        if let Some(indicator_x) = right_edge.checked_sub(indicator_width + 1) {
            if indicator_x > x {
                buf.set_string(indicator_x, area.y, indicator, style);
            }
        }
    }
}
