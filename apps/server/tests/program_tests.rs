#[allow(unused)]
mod support;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use breeding_api::{
    config::Config,
    db::SeedData,
    models::{ProgramFilter, Project},
    services::ProgramService,
    Error,
};
use std::sync::Arc;
use support::*;
use uuid::Uuid;

struct UnreachableMiddleware;

#[async_trait]
impl ProgramService for UnreachableMiddleware {
    async fn list_projects(&self, _filter: &ProgramFilter) -> breeding_api::Result<Vec<Project>> {
        Err(Error::Query("connection refused".to_string()))
    }

    async fn get_project(&self, _program_uuid: Uuid) -> breeding_api::Result<Option<Project>> {
        Err(Error::Query("connection refused".to_string()))
    }
}

#[tokio::test]
async fn program_list_preserves_source_order() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) =
                app.request(Method::GET, "/program/list", None).await?;
            assert_status(status, StatusCode::OK, "program list");

            let programs = json(&body)?;
            let names: Vec<&str> = programs
                .as_array()
                .unwrap()
                .iter()
                .map(|p| p["programName"].as_str().unwrap())
                .collect();
            assert_eq!(names, vec!["Drought tolerance", "Rust resistance", "Heat stress"]);

            assert_eq!(programs[0]["programUuid"], PROGRAM_A);
            assert_eq!(programs[0]["cropName"], "maize");
            assert_eq!(programs[0]["startDate"], "2023-02-01");
            assert!(programs[2]["startDate"].is_null());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn program_list_filters_by_crop() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request(Method::GET, "/program/list?cropName=WHEAT", None)
                .await?;
            assert_status(status, StatusCode::OK, "wheat programs");

            let programs = json(&body)?;
            assert_eq!(programs.as_array().unwrap().len(), 1);
            assert_eq!(programs[0]["programUuid"], PROGRAM_B);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn empty_middleware_lists_no_programs() -> anyhow::Result<()> {
    let app = TestApp::seeded(Config::default(), SeedData::default())?;
    let (status, _headers, body) = app.request(Method::GET, "/program/list", None).await?;
    assert_status(status, StatusCode::OK, "empty program list");
    assert_eq!(&body[..], b"[]");
    Ok(())
}

#[tokio::test]
async fn program_by_uuid() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app
                .request(Method::GET, &format!("/program/{}", PROGRAM_B), None)
                .await?;
            assert_status(status, StatusCode::OK, "program by uuid");
            assert_eq!(json(&body)?["programName"], "Rust resistance");

            let (status, _headers, body) = app
                .request(Method::GET, &format!("/program/{}", Uuid::new_v4()), None)
                .await?;
            assert_status(status, StatusCode::NOT_FOUND, "unknown program");
            assert_eq!(error_codes(&body)?, vec!["not.found"]);

            let (status, _headers, body) = app
                .request(Method::GET, "/program/not-a-uuid", None)
                .await?;
            assert_status(status, StatusCode::BAD_REQUEST, "malformed uuid");
            assert_eq!(error_codes(&body)?, vec!["request.path.invalid"]);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn middleware_failure_surfaces_as_query_failure() -> anyhow::Result<()> {
    let seeded = TestApp::seeded(Config::default(), fixture_seed())?;
    let mut state = seeded.state.clone();
    state.programs = Arc::new(UnreachableMiddleware);
    let app = TestApp::from_state(state);

    let (status, _headers, body) = app.request(Method::GET, "/program/list", None).await?;
    assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "failing middleware");

    let value = json(&body)?;
    assert_eq!(value["errors"][0]["code"], "query.failed");
    assert!(!value["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
    Ok(())
}
