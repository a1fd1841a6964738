// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tutoring service abstraction
//!
//! The conversation only ever sees [`TutorService`]: send a string, get a
//! string back or a [`CommunicationFailure`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CommunicationFailure;

pub mod http;
pub mod mock;

pub use http::HttpTutorService;
pub use mock::MockTutorService;

/// Remote tutoring backend
#[async_trait]
pub trait TutorService: Send + Sync {
    /// Where requests go, for display
    fn endpoint(&self) -> &str;

    /// Send one user message and return the tutor's reply text
    async fn send_message(&self, message: &str) -> Result<String, CommunicationFailure>;

    /// Fetch the names of the courses the service offers
    async fn list_courses(&self) -> Result<Vec<String>, CommunicationFailure>;
}

/// Body of `POST /message`
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest<'a> {
    pub message: &'a str,
}

/// Successful body of `POST /message`
#[derive(Debug, Clone, Deserialize)]
pub struct MessageReply {
    pub response: String,
}

/// Body of `GET /courses`
#[derive(Debug, Clone, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub courses: Vec<String>,
}

/// Parse a `/message` body into the reply text
pub fn parse_reply(body: &str) -> Result<String, CommunicationFailure> {
    serde_json::from_str::<MessageReply>(body)
        .map(|reply| reply.response)
        .map_err(|e| CommunicationFailure::InvalidResponse(e.to_string()))
}

/// Parse a `/courses` body into course names
pub fn parse_course_list(body: &str) -> Result<Vec<String>, CommunicationFailure> {
    serde_json::from_str::<CourseList>(body)
        .map(|list| list.courses)
        .map_err(|e| CommunicationFailure::InvalidResponse(e.to_string()))
}
