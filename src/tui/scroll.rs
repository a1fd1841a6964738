// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scroll state management for the chat TUI

/// Viewport position over the rendered conversation
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Scroll position in lines from the top, used when not following
    offset: usize,
    /// Height of the viewport in lines
    viewport_height: u16,
    /// Total rendered height from the last frame
    total_height: usize,
    /// Stick to the newest line as content grows
    follow: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            viewport_height: 20,
            total_height: 0,
            follow: true,
        }
    }

    /// Record the frame's dimensions (called on every draw)
    pub fn update_dimensions(&mut self, viewport_height: u16, total_height: usize) {
        self.viewport_height = viewport_height;
        self.total_height = total_height;
    }

    fn max_offset(&self) -> usize {
        self.total_height
            .saturating_sub(self.viewport_height as usize)
    }

    /// The first visible line for the current frame
    pub fn visible_offset(&self) -> usize {
        if self.follow {
            self.max_offset()
        } else {
            self.offset.min(self.max_offset())
        }
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.visible_offset().saturating_sub(lines);
        self.follow = false;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let target = self.visible_offset() + lines;
        if target >= self.max_offset() {
            self.follow = true;
        } else {
            self.offset = target;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    /// Jump back to the newest content and keep following it
    pub fn follow_bottom(&mut self) {
        self.follow = true;
    }

    fn page_size(&self) -> usize {
        (self.viewport_height as usize).saturating_sub(2).max(1)
    }
}
