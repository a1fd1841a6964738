// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock tutoring service for testing
//!
//! Replays a scripted list of outcomes in order and records every message
//! it receives, so tests can assert on exactly which calls were made.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::CommunicationFailure;

use super::TutorService;

/// A scripted tutoring service
#[derive(Clone, Default)]
pub struct MockTutorService {
    /// Outcomes handed out one per call
    script: Arc<Mutex<VecDeque<Result<String, CommunicationFailure>>>>,
    /// Courses returned by `list_courses`
    courses: Vec<String>,
    /// Call counter for `send_message`
    call_count: Arc<AtomicUsize>,
    /// Messages received, in order
    recorded: Arc<Mutex<Vec<String>>>,
}

impl MockTutorService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failure
    pub fn with_failure(self, failure: CommunicationFailure) -> Self {
        self.push(Err(failure));
        self
    }

    /// Set the course list
    pub fn with_courses(mut self, courses: &[&str]) -> Self {
        self.courses = courses.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn recorded_messages(&self) -> Vec<String> {
        self.recorded
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }

    fn push(&self, outcome: Result<String, CommunicationFailure>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
    }
}

#[async_trait]
impl TutorService for MockTutorService {
    fn endpoint(&self) -> &str {
        "mock://tutor"
    }

    async fn send_message(&self, message: &str) -> Result<String, CommunicationFailure> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(message.to_string());
        }

        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| {
                Err(CommunicationFailure::Network(
                    "no scripted reply left".to_string(),
                ))
            })
    }

    async fn list_courses(&self) -> Result<Vec<String>, CommunicationFailure> {
        Ok(self.courses.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let service = MockTutorService::new()
            .with_reply("first")
            .with_failure(CommunicationFailure::InvalidResponse("bad".to_string()))
            .with_reply("third");

        assert_eq!(service.send_message("a").await.unwrap(), "first");
        assert!(service.send_message("b").await.is_err());
        assert_eq!(service.send_message("c").await.unwrap(), "third");
        assert_eq!(service.call_count(), 3);
        assert_eq!(service.recorded_messages(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_mock_exhausted_script_fails() {
        let service = MockTutorService::new();
        let err = service.send_message("a").await.unwrap_err();
        assert!(matches!(err, CommunicationFailure::Network(_)));
    }

    #[tokio::test]
    async fn test_mock_clones_share_state() {
        let service = MockTutorService::new().with_reply("shared");
        let clone = service.clone();
        clone.send_message("x").await.unwrap();
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_courses() {
        let service = MockTutorService::new().with_courses(&["Python", "Excel"]);
        assert_eq!(service.list_courses().await.unwrap(), vec!["Python", "Excel"]);
    }
}
