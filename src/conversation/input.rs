// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input buffer for the conversation
//!
//! Manages the editable line, cursor position, and recall of previously
//! submitted inputs. The cursor is a byte offset that always sits on a
//! character boundary.

const DEFAULT_MAX_HISTORY: usize = 100;

/// The user's pending input
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input buffer
    buffer: String,
    /// Cursor position (byte offset into `buffer`)
    cursor: usize,
    /// Previously submitted inputs, oldest first
    history: Vec<String>,
    /// Current history index (None = new input, Some(i) = browsing history)
    history_index: Option<usize>,
    /// Saved buffer when browsing history
    saved_buffer: Option<String>,
    /// Maximum history entries to keep
    max_history: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_MAX_HISTORY)
    }

    pub fn with_history_limit(max_history: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            saved_buffer: None,
            max_history,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the buffer holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position counted in characters, for screen placement
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor position
    pub fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) {
        let before = &self.buffer[..self.cursor];
        let trimmed = before.trim_end_matches(char::is_whitespace);
        let start = trimmed
            .rfind(char::is_whitespace)
            .map(|pos| pos + trimmed[pos..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Replace the buffer content, cursor at the end
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
        self.history_index = None;
        self.saved_buffer = None;
    }

    /// Clear the input buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;
    }

    /// Take the trimmed buffer, leaving it empty, and remember it for recall.
    pub fn take_trimmed(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer).trim().to_string();
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;

        if !text.is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        text
    }

    /// Navigate to previous history entry
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                self.saved_buffer = Some(self.buffer.clone());
                self.history_index = Some(self.history.len() - 1);
                self.buffer = self.history[self.history.len() - 1].clone();
                self.cursor = self.buffer.len();
            }
            Some(0) => {}
            Some(i) => {
                self.history_index = Some(i - 1);
                self.buffer = self.history[i - 1].clone();
                self.cursor = self.buffer.len();
            }
        }
    }

    /// Navigate to next history entry
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 >= self.history.len() => {
                // Past the newest entry: restore what was being typed
                self.history_index = None;
                if let Some(saved) = self.saved_buffer.take() {
                    self.buffer = saved;
                    self.cursor = self.buffer.len();
                }
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                self.buffer = self.history[i + 1].clone();
                self.cursor = self.buffer.len();
            }
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }
}
