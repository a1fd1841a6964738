// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use tutor::conversation::{classify, Conversation, Presentation};
use tutor::error::{Result, TutorError};
use tutor::service::TutorService;

/// One submit cycle against a fresh conversation.
///
/// Communication failures are not errors here: the reply is the sentinel
/// turn, printed like any other.
pub(super) async fn run_ask(message: &str, service: &dyn TutorService) -> Result<()> {
    if message.trim().is_empty() {
        return Err(TutorError::InvalidInput(
            "message must not be blank".to_string(),
        ));
    }

    let mut conversation = Conversation::new();
    conversation.submit_text(message, service).await;

    if let Some(reply) = conversation.last_reply() {
        print_reply(classify(reply), reply.text())?;
    }
    Ok(())
}

/// Print the courses offered by the service
pub(super) async fn run_courses(service: &dyn TutorService) -> Result<()> {
    let courses = service.list_courses().await?;
    let mut stdout = io::stdout();

    if courses.is_empty() {
        writeln!(stdout, "No courses available.")?;
        return Ok(());
    }

    stdout.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stdout, "Available courses:")?;
    stdout.execute(ResetColor)?;
    for course in &courses {
        writeln!(stdout, "  • {}", course)?;
    }
    Ok(())
}

fn print_reply(presentation: Presentation, text: &str) -> Result<()> {
    let mut stdout = io::stdout();

    stdout.execute(SetForegroundColor(presentation_color(presentation)))?;
    write!(stdout, "{}", reply_header(presentation))?;
    stdout.execute(ResetColor)?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

fn reply_header(presentation: Presentation) -> String {
    match presentation {
        Presentation::Plain | Presentation::UserBubble => "tutor".to_string(),
        other => format!("tutor [{}]", other.label()),
    }
}

fn presentation_color(presentation: Presentation) -> Color {
    match presentation {
        Presentation::UserBubble => Color::Cyan,
        Presentation::ModuleInfo | Presentation::SelectionConfirmed => Color::Green,
        Presentation::CourseComplete => Color::Yellow,
        Presentation::Plain => Color::White,
    }
}
