// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for the detail-view flow against a mocked activity
//! service
//!
//! These verify record reconciliation, recommendation segmentation and the
//! fetch-failure fallback end to end over HTTP.

use anyhow::Result;
use mockito::Server;
use serde_json::json;

use fittrack_client::api::{ActivityService, ApiError, HttpActivityService, USER_ID_HEADER};
use fittrack_client::detail::ActivityDetail;
use fittrack_client::models::{Activity, ActivityType, TextBlock};

/// Canonical record as the enrichment pipeline returns it
fn mock_activity_response() -> serde_json::Value {
    json!({
        "id": "abc123",
        "type": "RUNNING",
        "duration": 25,
        "caloriesBurned": 280,
        "createdAt": "2024-01-15T08:00:00Z",
        "recommendation": "Overall: Nice job. Pace: Could improve. Calories: On target.",
        "improvements": ["Increase cadence", "Add strides"],
        "suggestions": "Try a tempo run next week",
        "safety": ["Hydrate before long runs"]
    })
}

fn service_for(server: &Server) -> HttpActivityService {
    HttpActivityService::new(
        server.url(),
        "user-1".to_string(),
        Some("test-token".to_string()),
    )
}

#[tokio::test]
async fn test_detail_flow_merges_and_segments() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/activities/abc123")
        .match_header(USER_ID_HEADER, "user-1")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_activity_response().to_string())
        .create_async()
        .await;

    // The list view passed along the record the user just created.
    let mut local = Activity::with_id("abc123");
    local.activity_type = Some(ActivityType::Running);
    local.duration_minutes = Some(30.0);
    local.calories_burned = Some(300.0);

    let service = service_for(&server);
    let detail = ActivityDetail::load(&service, "abc123", Some(local)).await?;

    mock.assert_async().await;
    assert!(detail.authoritative);

    // User-entered fields kept from the local copy, derived fields from the
    // server.
    assert_eq!(detail.activity.duration_minutes, Some(30.0));
    assert_eq!(detail.activity.calories_burned, Some(300.0));
    assert_eq!(
        detail.activity.improvements,
        Some(TextBlock::List(vec![
            "Increase cadence".to_string(),
            "Add strides".to_string(),
        ]))
    );
    assert_eq!(
        detail.activity.suggestions,
        Some(TextBlock::Single("Try a tempo run next week".to_string()))
    );

    let titles: Vec<_> = detail
        .sections
        .iter()
        .map(|s| s.title.as_deref().unwrap())
        .collect();
    assert_eq!(titles, vec!["Overall", "Pace", "Calories"]);
    assert_eq!(detail.sections[0].content, "Nice job.");
    assert_eq!(detail.sections[1].content, "Could improve.");
    assert_eq!(detail.sections[2].content, "On target.");

    Ok(())
}

#[tokio::test]
async fn test_detail_flow_without_local_copy_returns_remote() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/activities/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_activity_response().to_string())
        .create_async()
        .await;

    let service = service_for(&server);
    let detail = ActivityDetail::load(&service, "abc123", None).await?;

    assert_eq!(detail.activity.duration_minutes, Some(25.0));
    assert_eq!(detail.activity.calories_burned, Some(280.0));
    assert_eq!(detail.sections.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_server_error_falls_back_to_local_copy() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/activities/abc123")
        .with_status(500)
        .create_async()
        .await;

    let mut local = Activity::with_id("abc123");
    local.activity_type = Some(ActivityType::Cycling);
    local.duration_minutes = Some(45.0);
    local.recommendation = Some("ride more hills".to_string());

    let service = service_for(&server);
    let detail = ActivityDetail::load(&service, "abc123", Some(local.clone())).await?;

    assert!(!detail.authoritative);
    assert_eq!(detail.activity, local);
    assert_eq!(detail.sections.len(), 1);
    assert_eq!(detail.sections[0].title, None);
    assert_eq!(detail.sections[0].content, "ride more hills");

    Ok(())
}

#[tokio::test]
async fn test_missing_activity_without_local_copy_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/activities/nope")
        .with_status(404)
        .create_async()
        .await;

    let service = service_for(&server);
    let result = ActivityDetail::load(&service, "nope", None).await;

    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn test_unrecognized_activity_type_is_tolerated() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/activities/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "abc123",
                "type": "ROWING",
                "duration": 20
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server);
    let detail = ActivityDetail::load(&service, "abc123", None).await?;

    let activity_type = detail.activity.activity_type.unwrap();
    assert_eq!(activity_type, ActivityType::Other("ROWING".to_string()));
    assert_eq!(activity_type.display_category(), &ActivityType::Running);
    // No recommendation text yet: nothing to segment.
    assert!(detail.sections.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_activity_list_round_trip() -> Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/activities")
        .match_header(USER_ID_HEADER, "user-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"id": "a1", "type": "RUNNING", "duration": 30, "caloriesBurned": 300},
                {"id": "a2", "type": "SWIMMING", "duration": 40, "caloriesBurned": 350}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server);
    let activities = service.get_activities().await?;

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].id, "a1");
    assert_eq!(activities[1].activity_type, Some(ActivityType::Swimming));

    Ok(())
}

#[tokio::test]
async fn test_create_activity_posts_form_fields() -> Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/activities")
        .match_header(USER_ID_HEADER, "user-1")
        .match_body(mockito::Matcher::PartialJson(json!({
            "type": "WALKING",
            "duration": 20.0,
            "caloriesBurned": 90.0
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "new-1",
                "type": "WALKING",
                "duration": 20,
                "caloriesBurned": 90,
                "createdAt": "2024-01-16T07:30:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server);
    let created = service
        .create_activity(&fittrack_client::api::NewActivity {
            activity_type: ActivityType::Walking,
            duration_minutes: 20.0,
            calories_burned: 90.0,
            additional_metrics: Default::default(),
        })
        .await?;

    mock.assert_async().await;
    assert_eq!(created.id, "new-1");
    assert_eq!(created.activity_type, Some(ActivityType::Walking));

    Ok(())
}
