// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for tutor
//!
//! Handles loading and saving settings from ~/.tutor/settings.json

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TutorError};

mod io;

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "TUTOR_ENDPOINT";

/// Main settings structure, stored in ~/.tutor/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Tutoring service connection
    #[serde(default)]
    pub service: ServiceConfig,

    /// Terminal UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection to the tutoring service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Base URL; `/message` and `/courses` are resolved against it
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Transport timeout per request. Unset means wait for the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Terminal UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Submitted inputs kept for Up/Down recall
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8000".to_string()
}

fn default_history_size() -> usize {
    100
}

fn default_tick_ms() -> u64 {
    50
}

impl Settings {
    /// Resolve the endpoint to use.
    ///
    /// Priority: command line > `TUTOR_ENDPOINT` > settings file.
    pub fn resolve_endpoint(&self, cli_endpoint: Option<&str>) -> Result<String> {
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        self.endpoint_with_overrides(cli_endpoint, env_endpoint.as_deref())
    }

    /// Endpoint resolution without reading the process environment
    pub fn endpoint_with_overrides(
        &self,
        cli_endpoint: Option<&str>,
        env_endpoint: Option<&str>,
    ) -> Result<String> {
        let endpoint = cli_endpoint
            .or(env_endpoint)
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(self.service.endpoint.as_str());
        validate_endpoint(endpoint)?;
        Ok(endpoint.trim_end_matches('/').to_string())
    }
}

/// Only absolute http(s) URLs are accepted
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let rest = endpoint
        .strip_prefix("http://")
        .or_else(|| endpoint.strip_prefix("https://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(TutorError::Config(format!(
            "endpoint must be an http:// or https:// URL, got '{}'",
            endpoint
        ))),
    }
}
