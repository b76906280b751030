// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! OAuth2 authorization-code client with PKCE
//!
//! The FitTrack gateway delegates login to an OAuth2 identity provider. This
//! client builds the authorization URL, exchanges the returned code for
//! tokens, and refreshes them. PKCE (S256) is always applied; the service
//! rejects plain code flows.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    pub client_id: String,
    /// Optional for public clients using PKCE only
    pub client_secret: Option<String>,
    pub auth_url: String,
    pub token_url: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
}

impl OAuth2Token {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= Utc::now(),
            None => false,
        }
    }

    /// True when the token expires within the next five minutes, the window
    /// in which a refresh should be issued proactively
    pub fn will_expire_soon(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= Utc::now() + Duration::minutes(5),
            None => false,
        }
    }
}

/// Proof-key pair for one authorization attempt
#[derive(Debug, Clone)]
pub struct PkceParams {
    pub code_verifier: String,
    pub code_challenge: String,
    pub code_challenge_method: String,
}

impl PkceParams {
    /// Generate a fresh random verifier and its S256 challenge
    pub fn generate() -> Self {
        let mut verifier_bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut verifier_bytes);
        let code_verifier = URL_SAFE_NO_PAD.encode(verifier_bytes);

        let digest = Sha256::digest(code_verifier.as_bytes());
        let code_challenge = URL_SAFE_NO_PAD.encode(digest);

        Self {
            code_verifier,
            code_challenge,
            code_challenge_method: "S256".to_string(),
        }
    }
}

/// Generate an unguessable `state` parameter for one authorization attempt
pub fn generate_state() -> String {
    Uuid::new_v4().to_string()
}

pub struct OAuth2Client {
    config: OAuth2Config,
    client: reqwest::Client,
}

impl OAuth2Client {
    pub fn new(config: OAuth2Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build the URL the user's browser is sent to for login
    pub fn authorization_url(&self, state: &str, pkce: &PkceParams) -> Result<String> {
        let mut url = Url::parse(&self.config.auth_url).context("Invalid auth URL")?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.config.scopes.join(" "))
            .append_pair("state", state)
            .append_pair("code_challenge", &pkce.code_challenge)
            .append_pair("code_challenge_method", &pkce.code_challenge_method);

        Ok(url.to_string())
    }

    /// Exchange the authorization code returned to the redirect URI
    pub async fn exchange_code(&self, code: &str, pkce: &PkceParams) -> Result<OAuth2Token> {
        let mut params = vec![
            ("client_id", self.config.client_id.clone()),
            ("code", code.to_string()),
            ("grant_type", "authorization_code".to_string()),
            ("redirect_uri", self.config.redirect_uri.clone()),
            ("code_verifier", pkce.code_verifier.clone()),
        ];
        if let Some(secret) = &self.config.client_secret {
            params.push(("client_secret", secret.clone()));
        }

        let response: TokenResponse = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .context("Token endpoint unreachable")?
            .error_for_status()
            .context("Code exchange rejected")?
            .json()
            .await
            .context("Malformed token response")?;

        Ok(self.token_from_response(response))
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<OAuth2Token> {
        let mut params = vec![
            ("client_id", self.config.client_id.clone()),
            ("refresh_token", refresh_token.to_string()),
            ("grant_type", "refresh_token".to_string()),
        ];
        if let Some(secret) = &self.config.client_secret {
            params.push(("client_secret", secret.clone()));
        }

        let response: TokenResponse = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .context("Token endpoint unreachable")?
            .error_for_status()
            .context("Token refresh rejected")?
            .json()
            .await
            .context("Malformed token response")?;

        Ok(self.token_from_response(response))
    }

    fn token_from_response(&self, response: TokenResponse) -> OAuth2Token {
        let expires_at = response
            .expires_in
            .map(|seconds| Utc::now() + Duration::seconds(seconds as i64));

        OAuth2Token {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_at,
            refresh_token: response.refresh_token,
            scope: response.scope,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: Option<u64>,
    refresh_token: Option<String>,
    scope: Option<String>,
}
