// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI rendering for the chat TUI

use ratatui::prelude::*;

use super::app::ChatApp;
use super::widgets::{
    conversation_lines, input_area::PLACEHOLDER, render_lines, InputArea, StatusBar,
};

/// Layout regions
#[derive(Clone, Copy, Debug)]
pub struct ChatLayout {
    pub title_bar: Rect,
    pub chat: Rect,
    pub input: Rect,
}

/// Title bar: 1 line, input area: 3 lines, chat: remaining space
pub fn calculate_layout(area: Rect) -> ChatLayout {
    let title_height = 1u16.min(area.height);
    let input_height = 3u16.min(area.height.saturating_sub(title_height));
    let chat_height = area
        .height
        .saturating_sub(title_height)
        .saturating_sub(input_height);

    ChatLayout {
        title_bar: Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: title_height,
        },
        chat: Rect {
            x: area.x,
            y: area.y + title_height,
            width: area.width,
            height: chat_height,
        },
        input: Rect {
            x: area.x,
            y: area.y + title_height + chat_height,
            width: area.width,
            height: input_height,
        },
    }
}

/// Draw the whole chat screen
pub fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let layout = calculate_layout(frame.area());
    let awaiting = app.conversation.is_awaiting_reply();

    let session_id = app.session_id.to_string();
    let status = StatusBar::new("tutor", app.endpoint(), &session_id).awaiting(awaiting);
    frame.render_widget(status, layout.title_bar);

    let lines = conversation_lines(&app.conversation, layout.chat.width);
    app.scroll_state
        .update_dimensions(layout.chat.height, lines.len());
    render_lines(
        &lines,
        app.scroll_state.visible_offset(),
        layout.chat,
        frame.buffer_mut(),
    );

    if layout.input.height >= 3 {
        let input = InputArea::new(app.conversation.input())
            .placeholder(PLACEHOLDER)
            .awaiting(awaiting);
        let cursor = input.cursor_position(layout.input);
        frame.render_widget(input, layout.input);
        frame.set_cursor_position(cursor);
    }
}
