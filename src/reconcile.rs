// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Record Reconciliation
//!
//! When a detail view opens, the caller may already hold a copy of the
//! activity from a prior list fetch. That copy is trusted for the fields the
//! user just entered (the server response may not yet reflect them while the
//! enrichment pipeline catches up), while the derived fields must come from
//! the server. [`reconcile`] merges the two records under those per-field
//! precedence rules.
//!
//! The rules are declared once in [`FIELD_RULES`]; adding a field to
//! [`Activity`](crate::models::Activity) means adding one table entry, and the
//! generic table-driven test covers it without a new hand-written case.

use crate::models::Activity;

/// Precedence rule applied to one activity field during reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The local record's value wins whenever the local record defines it
    LocalFirst,
    /// The remote record's value is taken unconditionally
    RemoteOnly,
}

/// Wire-level field names paired with their reconciliation rule
///
/// `LocalFirst` covers exactly the fields the user enters in the activity
/// form; everything the server derives is `RemoteOnly`.
pub const FIELD_RULES: &[(&str, FieldRule)] = &[
    ("id", FieldRule::RemoteOnly),
    ("type", FieldRule::LocalFirst),
    ("duration", FieldRule::LocalFirst),
    ("caloriesBurned", FieldRule::LocalFirst),
    ("createdAt", FieldRule::LocalFirst),
    ("recommendation", FieldRule::RemoteOnly),
    ("improvements", FieldRule::RemoteOnly),
    ("suggestions", FieldRule::RemoteOnly),
    ("safety", FieldRule::RemoteOnly),
];

/// Merge a locally-known activity with the authoritative server record
///
/// For the `LocalFirst` fields in [`FIELD_RULES`], the result takes the local
/// value when the local record is present and defines the field, otherwise the
/// remote value. All other fields come from the remote record unconditionally.
///
/// Pure and total: no I/O, same inputs always produce the same output. When
/// the remote fetch failed entirely, do not call this; the caller shows the
/// local record unmodified instead (see [`crate::detail`]).
pub fn reconcile(local: Option<&Activity>, remote: &Activity) -> Activity {
    let Some(local) = local else {
        return remote.clone();
    };

    Activity {
        id: remote.id.clone(),
        activity_type: local
            .activity_type
            .clone()
            .or_else(|| remote.activity_type.clone()),
        duration_minutes: local.duration_minutes.or(remote.duration_minutes),
        calories_burned: local.calories_burned.or(remote.calories_burned),
        created_at: local.created_at.or(remote.created_at),
        recommendation: remote.recommendation.clone(),
        improvements: remote.improvements.clone(),
        suggestions: remote.suggestions.clone(),
        safety: remote.safety.clone(),
    }
}
