// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Detail-view activation flow
//!
//! Opening an activity's detail view combines three steps: fetch the
//! authoritative record, reconcile it with the copy the caller may already
//! hold from a list view, and segment the resulting recommendation text for
//! display. A failed fetch degrades to the local copy when one exists; only
//! when neither source is available does the view surface an error.

use tracing::warn;

use crate::api::{ActivityService, ApiError};
use crate::models::{Activity, RecommendationSection};
use crate::reconcile::reconcile;
use crate::segment::segment;

/// Everything the presentation layer needs to render one activity
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDetail {
    /// The reconciled record (or the local copy when the fetch failed)
    pub activity: Activity,
    /// Ordered titled sections of the recommendation text
    pub sections: Vec<RecommendationSection>,
    /// Whether the server fetch succeeded; `false` means the view is showing
    /// the possibly-stale local copy only
    pub authoritative: bool,
}

impl ActivityDetail {
    /// Build the detail view state for one activity
    ///
    /// `local` is the optimistically-passed record from a prior list fetch,
    /// if any. One outstanding request per activation; no retries.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error only when no local record is available to
    /// fall back to.
    pub async fn load<S: ActivityService + ?Sized>(
        service: &S,
        id: &str,
        local: Option<Activity>,
    ) -> Result<Self, ApiError> {
        match service.get_activity(id).await {
            Ok(remote) => {
                let activity = reconcile(local.as_ref(), &remote);
                let sections = segment(activity.recommendation.as_deref());
                Ok(Self {
                    activity,
                    sections,
                    authoritative: true,
                })
            }
            Err(err) => match local {
                Some(activity) => {
                    warn!(activity_id = %id, error = %err, "fetch failed, showing local copy");
                    let sections = segment(activity.recommendation.as_deref());
                    Ok(Self {
                        activity,
                        sections,
                        authoritative: false,
                    })
                }
                None => Err(err),
            },
        }
    }
}
