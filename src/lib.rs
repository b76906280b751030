// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # FitTrack Client
//!
//! A client library for the FitTrack fitness-tracking service. The service
//! stores user activities (runs, walks, rides, swims) and asynchronously
//! enriches them with AI-generated recommendation text and structured
//! improvement/suggestion/safety lists.
//!
//! ## Features
//!
//! - **Record reconciliation**: merge an optimistically-held activity from a
//!   list view with the authoritative server record under field-level
//!   precedence rules
//! - **Recommendation segmentation**: parse free-form recommendation text into
//!   ordered, titled sections using a fixed header vocabulary
//! - **Typed HTTP API**: activity CRUD over JSON with structured errors
//! - **OAuth2 authentication**: authorization-code flow with PKCE
//!
//! ## Architecture
//!
//! The library follows a modular architecture:
//! - **Models**: view-model data structures for activities and sections
//! - **Reconcile**: pure field-precedence merge of local and remote records
//! - **Segment**: pure scanner turning recommendation text into sections
//! - **Detail**: the detail-view activation flow tying fetch, merge and
//!   segmentation together
//! - **Api**: thin typed HTTP client for the activity service
//! - **OAuth2**: authentication client for secure API access
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fittrack_client::api::HttpActivityService;
//! use fittrack_client::detail::ActivityDetail;
//! use fittrack_client::config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::from_env();
//!     let service = HttpActivityService::new(
//!         config.api_base_url.clone(),
//!         config.user_id.clone(),
//!         None,
//!     );
//!
//!     // Open a detail view without a locally-known copy
//!     let detail = ActivityDetail::load(&service, "abc123", None).await?;
//!     for section in &detail.sections {
//!         println!(
//!             "{}: {}",
//!             section.title.as_deref().unwrap_or("Analysis"),
//!             section.content
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

/// View-model data structures for activities and recommendation sections
pub mod models;

/// Field-precedence reconciliation of local and remote activity records
pub mod reconcile;

/// Recommendation text segmentation into titled sections
pub mod segment;

/// Detail-view activation flow combining fetch, reconcile and segment
pub mod detail;

/// Typed HTTP client for the activity service
pub mod api;

/// OAuth2 client with PKCE for secure API authentication
pub mod oauth2_client;

/// Environment-based client configuration
pub mod config;

/// Structured logging setup
pub mod logging;
