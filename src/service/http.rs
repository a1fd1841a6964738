// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP implementation of the tutoring service

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{CommunicationFailure, Result, TutorError};

use super::{parse_course_list, parse_reply, MessageRequest, TutorService};

/// Tutoring service reached over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpTutorService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTutorService {
    /// Create a client for `base_url` with no request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client for `base_url`, optionally bounding each request
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TutorError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Read the body, turning a non-success status into a failure
    async fn read_body(response: reqwest::Response) -> std::result::Result<String, CommunicationFailure> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CommunicationFailure::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl TutorService for HttpTutorService {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn send_message(&self, message: &str) -> std::result::Result<String, CommunicationFailure> {
        let url = self.url("message");
        tracing::debug!(target: "tutor.service", url = %url, "sending message");

        let response = self
            .client
            .post(&url)
            .json(&MessageRequest { message })
            .send()
            .await?;

        let body = Self::read_body(response).await?;
        parse_reply(&body)
    }

    async fn list_courses(&self) -> std::result::Result<Vec<String>, CommunicationFailure> {
        let url = self.url("courses");
        tracing::debug!(target: "tutor.service", url = %url, "listing courses");

        let response = self.client.get(&url).send().await?;
        let body = Self::read_body(response).await?;
        parse_course_list(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let service = HttpTutorService::new("http://localhost:8000/").unwrap();
        assert_eq!(service.endpoint(), "http://localhost:8000");
        assert_eq!(service.url("message"), "http://localhost:8000/message");
    }

    #[tokio::test]
    async fn test_send_message_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"message": "Python"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"response": "✅ Selected Python"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = HttpTutorService::new(mock_server.uri()).unwrap();
        let reply = service.send_message("Python").await.unwrap();
        assert_eq!(reply, "✅ Selected Python");
    }

    #[tokio::test]
    async fn test_send_message_error_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"detail": "Empty message"})),
            )
            .mount(&mock_server)
            .await;

        let service = HttpTutorService::new(mock_server.uri()).unwrap();
        let err = service.send_message("x").await.unwrap_err();
        match err {
            CommunicationFailure::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Empty message"));
            }
            other => panic!("Expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_message_non_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let service = HttpTutorService::new(mock_server.uri()).unwrap();
        let err = service.send_message("x").await.unwrap_err();
        assert!(matches!(err, CommunicationFailure::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_send_message_connection_refused() {
        // Bind to learn a free port, then release it.
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let service = HttpTutorService::new(uri).unwrap();
        let err = service.send_message("x").await.unwrap_err();
        assert!(matches!(err, CommunicationFailure::Network(_)));
    }

    #[tokio::test]
    async fn test_send_message_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/message"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"response": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let service =
            HttpTutorService::with_timeout(mock_server.uri(), Some(Duration::from_millis(50)))
                .unwrap();
        let err = service.send_message("x").await.unwrap_err();
        assert!(matches!(err, CommunicationFailure::Network(_)));
    }

    #[tokio::test]
    async fn test_list_courses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"courses": ["Python", "Excel", "C++"]})),
            )
            .mount(&mock_server)
            .await;

        let service = HttpTutorService::new(mock_server.uri()).unwrap();
        let courses = service.list_courses().await.unwrap();
        assert_eq!(courses, vec!["Python", "Excel", "C++"]);
    }

    #[tokio::test]
    async fn test_list_courses_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let service = HttpTutorService::new(mock_server.uri()).unwrap();
        let err = service.list_courses().await.unwrap_err();
        assert!(matches!(err, CommunicationFailure::Status { status: 500, .. }));
    }
}
