//! Reset, backup, and health operations over a live server.

use axum::http::StatusCode;
use serde_json::json;
use uas_api::demo::demo_users;

use crate::common::TestEnv;

#[tokio::test]
async fn reset_wipes_accounts_and_seeds_demo_tenants() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    env.register("Elisa Gomes", "elisa@example.com").await?;

    let (status, body) = env.post("/api/v1/reset/user?demo=true", json!({})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "Ok" }));

    // The registered account is gone; the demo fixtures are in.
    let (status, _) = env
        .post("/api/v1/users/detail", json!({ "email": "elisa@example.com" }))
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let first = &demo_users()[0];
    let path = format!("/api/v1/users/{}/{}", first.client_id, first.id);
    let (status, body) = env.get(&path).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], first.name);
    assert_eq!(body["email"], first.email);

    // Without the exact flag the reset only wipes.
    let (status, body) = env.post("/api/v1/reset/user", json!({})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "Ok" }));

    let (status, _) = env.get(&path).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    env.teardown().await
}

#[tokio::test]
async fn backup_posts_the_export_request() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    let (status, body) = env.post("/api/v1/backup/user", json!({})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "Ok" }));

    let requests = env.export_requests();
    assert_eq!(requests.len(), 1);
    let snapshot = requests[0]["snapshotTime"].as_str().unwrap();
    assert!(snapshot.ends_with("T07:00:00Z"), "snapshot was {snapshot}");
    assert_eq!(
        requests[0]["outputUriPrefix"],
        format!("gs://uas-backups/users/{snapshot}")
    );

    env.teardown().await
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    let (status, body) = env.get("/api/v1/health/user").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "Ok" }));

    env.teardown().await
}
