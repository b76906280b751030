// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based client configuration
//!
//! All settings come from environment variables (with a `.env` file honored
//! for local development) and carry defaults that point at a locally running
//! gateway.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

use crate::oauth2_client::OAuth2Config;

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_AUTH_URL: &str = "http://localhost:8181/realms/fittrack/protocol/openid-connect/auth";
const DEFAULT_TOKEN_URL: &str =
    "http://localhost:8181/realms/fittrack/protocol/openid-connect/token";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:5173/callback";

/// Complete configuration for one client instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the activity service gateway, no trailing slash
    pub api_base_url: String,
    /// Identifier sent in the `X-User-ID` header
    pub user_id: String,
    /// Log level passed to the logging setup
    pub log_level: String,
    /// OAuth2 settings for the login flow
    pub oauth: OAuth2Config,
}

impl ClientConfig {
    /// Load configuration from the environment
    ///
    /// Missing variables fall back to local-development defaults; a missing
    /// user id is tolerated with a warning so that read-only exploration
    /// against a permissive gateway still works.
    pub fn from_env() -> Self {
        // A missing .env file is fine; variables may come from the shell.
        dotenv::dotenv().ok();

        let user_id = env::var("FITTRACK_USER_ID").unwrap_or_else(|_| {
            warn!("FITTRACK_USER_ID not set, requests will carry an empty user id");
            String::new()
        });

        Self {
            api_base_url: env::var("FITTRACK_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            user_id,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            oauth: OAuth2Config {
                client_id: env::var("FITTRACK_OAUTH_CLIENT_ID")
                    .unwrap_or_else(|_| "fittrack-web".to_string()),
                client_secret: env::var("FITTRACK_OAUTH_CLIENT_SECRET").ok(),
                auth_url: env::var("FITTRACK_OAUTH_AUTH_URL")
                    .unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string()),
                token_url: env::var("FITTRACK_OAUTH_TOKEN_URL")
                    .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
                redirect_uri: env::var("FITTRACK_OAUTH_REDIRECT_URI")
                    .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
                scopes: vec!["openid".to_string(), "profile".to_string()],
            },
        }
    }
}
