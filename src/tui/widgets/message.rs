// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message rendering
//!
//! Turns are flattened into styled lines once per frame; the chat area then
//! shows a window of those lines starting at the scroll offset.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::conversation::{Conversation, Presentation, Turn};

/// Left rule drawn beside highlighted tutor replies
const RULE: &str = "▌ ";

/// Shown while a reply is outstanding
pub const THINKING_TEXT: &str = "Thinking...";

/// Colors and decorations for one presentation category
struct TurnStyle {
    header: &'static str,
    color: Color,
}

fn turn_style(presentation: Presentation) -> TurnStyle {
    match presentation {
        Presentation::UserBubble => TurnStyle {
            header: "you",
            color: Color::Cyan,
        },
        Presentation::ModuleInfo | Presentation::SelectionConfirmed => TurnStyle {
            header: "📖 tutor",
            color: Color::Green,
        },
        Presentation::CourseComplete => TurnStyle {
            header: "🎓 tutor",
            color: Color::Yellow,
        },
        Presentation::Plain => TurnStyle {
            header: "tutor",
            color: Color::White,
        },
    }
}

/// Render one turn into lines for a chat area `width` columns wide.
///
/// User turns are right aligned and capped at 70% of the width; tutor
/// turns are left aligned, with a colored rule when highlighted.
pub fn turn_lines(turn: &Turn, presentation: Presentation, width: u16) -> Vec<Line<'static>> {
    let style = turn_style(presentation);
    let text_style = Style::default().fg(style.color);
    let mut lines = Vec::new();

    if presentation == Presentation::UserBubble {
        let content_width = (width as usize * 7 / 10).max(1);
        lines.push(
            Line::from(Span::styled(format!("{}  ", style.header), text_style.bold()))
                .alignment(Alignment::Right),
        );
        for row in wrap_text(turn.text(), content_width) {
            lines.push(
                Line::from(Span::styled(format!("{}  ", row), text_style))
                    .alignment(Alignment::Right),
            );
        }
    } else {
        let content_width = (width as usize).saturating_sub(4).max(1);
        lines.push(Line::from(Span::styled(
            format!("  {}", style.header),
            text_style.bold(),
        )));
        for row in wrap_text(turn.text(), content_width) {
            let lead = if presentation.is_highlighted() {
                Span::styled(format!("  {}", RULE), text_style)
            } else {
                Span::raw("    ")
            };
            lines.push(Line::from(vec![lead, Span::styled(row, text_style)]));
        }
    }

    // Spacing between turns
    lines.push(Line::default());
    lines
}

/// All lines for the conversation, with the thinking indicator last
pub fn conversation_lines(conversation: &Conversation, width: u16) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = conversation
        .presented()
        .flat_map(|(turn, presentation)| turn_lines(turn, presentation, width))
        .collect();

    if conversation.is_awaiting_reply() {
        lines.push(Line::from(Span::styled(
            format!("  {}", THINKING_TEXT),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    lines
}

/// Draw the window of `lines` that starts at `offset`
pub fn render_lines(lines: &[Line<'static>], offset: usize, area: Rect, buf: &mut Buffer) {
    let visible: Vec<Line<'static>> = lines
        .iter()
        .skip(offset)
        .take(area.height as usize)
        .cloned()
        .collect();
    Paragraph::new(visible).render(area, buf);
}

/// Wrap text to `width` display columns, breaking on whitespace where
/// possible. Explicit newlines are kept and blank lines survive.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for source_line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in source_line.split(' ') {
            let word_width = display_width(word);
            let gap = usize::from(!row.is_empty());

            if row_width + gap + word_width <= width {
                if gap == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += gap + word_width;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            if word_width <= width {
                row.push_str(word);
                row_width = word_width;
            } else {
                // Hard-split words longer than a row
                for c in word.chars() {
                    let w = display_width(c.encode_utf8(&mut [0; 4]));
                    if row_width + w > width && !row.is_empty() {
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                    }
                    row.push(c);
                    row_width += w;
                }
            }
        }

        rows.push(row);
    }

    rows
}

fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{classify, COMMUNICATION_ERROR_TEXT};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_newlines_and_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_multibyte_text() {
        let rows = wrap_text("héllo wörld", 6);
        assert_eq!(rows, vec!["héllo", "wörld"]);
    }

    #[test]
    fn test_user_turn_is_right_aligned() {
        let turn = Turn::user("Python");
        let lines = turn_lines(&turn, classify(&turn), 40);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(lines[1].alignment, Some(Alignment::Right));
        assert!(line_text(&lines[1]).contains("Python"));
    }

    #[test]
    fn test_highlighted_turn_has_rule() {
        let turn = Turn::assistant("✅ Selected Python");
        let lines = turn_lines(&turn, classify(&turn), 40);
        assert!(line_text(&lines[0]).contains("📖 tutor"));
        assert!(line_text(&lines[1]).starts_with("  ▌ "));
        assert_eq!(lines[1].spans[1].style.fg, Some(Color::Green));
    }

    #[test]
    fn test_completion_turn_is_yellow() {
        let turn = Turn::assistant("🎉 Course completed!");
        let lines = turn_lines(&turn, classify(&turn), 40);
        assert!(line_text(&lines[0]).contains("🎓 tutor"));
        assert_eq!(lines[1].spans[1].style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_error_sentinel_renders_plain() {
        let turn = Turn::assistant(COMMUNICATION_ERROR_TEXT);
        let lines = turn_lines(&turn, classify(&turn), 60);
        assert_eq!(line_text(&lines[0]), "  tutor");
        assert!(!line_text(&lines[1]).contains(RULE));
    }

    #[test]
    fn test_conversation_lines_include_thinking_while_awaiting() {
        let mut conversation = Conversation::new();
        let idle = conversation_lines(&conversation, 60);
        assert!(!idle.iter().any(|l| line_text(l).contains(THINKING_TEXT)));

        conversation.input_mut().insert_str("Python");
        conversation.begin_submit();
        let awaiting = conversation_lines(&conversation, 60);
        assert!(line_text(awaiting.last().unwrap()).contains(THINKING_TEXT));
    }
}
