// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed HTTP client for the FitTrack activity service
//!
//! The transport contract is deliberately thin: JSON in, JSON out, bearer
//! token plus a user-id header on every request. Responses are assumed
//! well-formed once they decode; validation lives on the server side.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::models::{Activity, ActivityType};

/// Header carrying the acting user's identifier, set by the API gateway
/// contract
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Errors surfaced by the activity service boundary
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service has no record with the requested id
    #[error("activity not found")]
    NotFound,
    /// The service answered with a non-success status
    #[error("activity service returned status {0}")]
    Status(StatusCode),
    /// The request never completed (connection, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the JSON shape we expect
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Request body for logging a new activity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(rename = "duration")]
    pub duration_minutes: f64,
    pub calories_burned: f64,
    /// Provider-specific extras (distance, heart rate, ...) passed through
    /// untouched
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub additional_metrics: HashMap<String, serde_json::Value>,
}

/// Boundary trait for everything the views need from the activity service
#[async_trait]
pub trait ActivityService: Send + Sync {
    /// List the acting user's activities, newest first
    async fn get_activities(&self) -> Result<Vec<Activity>, ApiError>;

    /// Fetch the authoritative record for one activity
    async fn get_activity(&self, id: &str) -> Result<Activity, ApiError>;

    /// Log a new activity and return the stored record
    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, ApiError>;
}

/// [`ActivityService`] implementation over plain HTTP/JSON
pub struct HttpActivityService {
    client: Client,
    base_url: String,
    user_id: String,
    access_token: Option<String>,
}

impl HttpActivityService {
    /// Create a service client for the given API base URL (no trailing slash)
    ///
    /// `access_token` is attached as a bearer token when present; unauthenticated
    /// use is allowed for local development setups.
    pub fn new(base_url: String, user_id: String, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
            access_token,
        }
    }

    /// Replace the bearer token, e.g. after an OAuth2 refresh
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(USER_ID_HEADER, &self.user_id);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ActivityService for HttpActivityService {
    async fn get_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let url = self.url("/activities");
        debug!(%url, "fetching activity list");

        let response = self.with_auth(self.client.get(&url)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        response.json().await.map_err(ApiError::Decode)
    }

    async fn get_activity(&self, id: &str) -> Result<Activity, ApiError> {
        let url = self.url(&format!("/activities/{id}"));
        debug!(%url, "fetching activity detail");

        let response = self.with_auth(self.client.get(&url)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        response.json().await.map_err(ApiError::Decode)
    }

    async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, ApiError> {
        let url = self.url("/activities");
        debug!(%url, "logging new activity");

        let response = self
            .with_auth(self.client.post(&url))
            .json(activity)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        response.json().await.map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_activity_wire_format() {
        let mut metrics = HashMap::new();
        metrics.insert("distance".to_string(), serde_json::json!(5.2));
        let body = NewActivity {
            activity_type: ActivityType::Running,
            duration_minutes: 30.0,
            calories_burned: 300.0,
            additional_metrics: metrics,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "RUNNING");
        assert_eq!(json["duration"], 30.0);
        assert_eq!(json["caloriesBurned"], 300.0);
        assert_eq!(json["additionalMetrics"]["distance"], 5.2);
    }

    #[test]
    fn test_empty_metrics_are_omitted() {
        let body = NewActivity {
            activity_type: ActivityType::Walking,
            duration_minutes: 20.0,
            calories_burned: 90.0,
            additional_metrics: HashMap::new(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("additionalMetrics").is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let service = HttpActivityService::new(
            "http://localhost:8080/api/".to_string(),
            "user-1".to_string(),
            None,
        );
        assert_eq!(service.url("/activities"), "http://localhost:8080/api/activities");
    }
}
