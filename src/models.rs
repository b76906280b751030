// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Data Models
//!
//! Core view-model structures for the FitTrack client. Records arrive from the
//! activity service as JSON and are held only for the lifetime of a single
//! view; nothing here is persisted by the client.
//!
//! ## Design Principles
//!
//! - **Partiality tolerant**: a locally-known record passed from a list view
//!   may be missing fields the server will supply; everything but `id` is
//!   optional
//! - **Never rejects**: unrecognized activity categories map to
//!   [`ActivityType::Other`] rather than failing deserialization
//! - **Serializable**: all models round-trip through JSON
//!
//! ## Core Models
//!
//! - [`Activity`]: a single logged activity plus its AI enrichment fields
//! - [`ActivityType`]: closed category set with a catch-all variant
//! - [`TextBlock`]: a single string or an ordered list of strings
//! - [`RecommendationSection`]: one titled segment of recommendation text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single fitness activity as held by the client
///
/// Combines the fields the user entered (type, duration, calories) with the
/// fields the server derives asynchronously (recommendation text and the
/// structured advice lists). A record passed along from a list view may carry
/// only a subset of these; see [`crate::reconcile`] for how such a partial
/// record is merged with the authoritative one.
///
/// # Examples
///
/// ```rust
/// use fittrack_client::models::{Activity, ActivityType};
/// use chrono::Utc;
///
/// let activity = Activity {
///     id: "abc123".to_string(),
///     activity_type: Some(ActivityType::Running),
///     duration_minutes: Some(30.0),
///     calories_burned: Some(300.0),
///     created_at: Some(Utc::now()),
///     recommendation: Some("Overall: Nice job.".to_string()),
///     improvements: None,
///     suggestions: None,
///     safety: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque identifier assigned by the activity service
    pub id: String,
    /// Activity category; unrecognized values become [`ActivityType::Other`]
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,
    /// Duration in minutes (positive)
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
    /// Estimated energy expenditure in kcal (positive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    /// When the activity was logged (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Free-text AI recommendation; parsed by [`crate::segment`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    /// Suggested improvements from the enrichment service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvements: Option<TextBlock>,
    /// Follow-up workout suggestions from the enrichment service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<TextBlock>,
    /// Safety guidelines from the enrichment service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety: Option<TextBlock>,
}

impl Activity {
    /// Minimal record with only an identifier, all other fields unset
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            activity_type: None,
            duration_minutes: None,
            calories_burned: None,
            created_at: None,
            recommendation: None,
            improvements: None,
            suggestions: None,
            safety: None,
        }
    }
}

/// Closed set of activity categories tracked by the service
///
/// The `Other` variant preserves unrecognized wire values so that a newer
/// server vocabulary never breaks an older client; rendering falls back to
/// the default category's styling for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "WALKING")]
    Walking,
    #[serde(rename = "CYCLING")]
    Cycling,
    #[serde(rename = "SWIMMING")]
    Swimming,
    /// Any category this client version does not know about
    #[serde(untagged)]
    Other(String),
}

impl ActivityType {
    /// Category used for display when the value is unrecognized
    pub const DEFAULT_DISPLAY: ActivityType = ActivityType::Running;

    /// Human-readable name for this category
    pub fn display_name(&self) -> &str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Walking => "Walking",
            ActivityType::Cycling => "Cycling",
            ActivityType::Swimming => "Swimming",
            ActivityType::Other(name) => name,
        }
    }

    /// The category a renderer should style this value as
    pub fn display_category(&self) -> &ActivityType {
        match self {
            ActivityType::Other(_) => &Self::DEFAULT_DISPLAY,
            known => known,
        }
    }
}

/// A field that the enrichment service returns as either a bare string or an
/// ordered list of strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextBlock {
    Single(String),
    List(Vec<String>),
}

impl TextBlock {
    /// View the block as an ordered slice of items
    pub fn items(&self) -> Vec<&str> {
        match self {
            TextBlock::Single(text) => vec![text.as_str()],
            TextBlock::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// One segment of recommendation text produced by [`crate::segment::segment`]
///
/// `title` is the header word as captured from the source text (original
/// casing), or `None` for the untitled fallback section. `content` may be
/// empty when a header had no trailing text; renderers must tolerate that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSection {
    /// Recognized header word, as it appeared in the source
    pub title: Option<String>,
    /// Text belonging to this section, trimmed of surrounding whitespace
    pub content: String,
}
