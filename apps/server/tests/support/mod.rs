//! Shared harness for the HTTP integration tests.
//!
//! Builds the full router over an in-memory middleware seeded from
//! `tests/fixtures/seed.json` and drives it with `tower::ServiceExt::oneshot`.

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use breeding_api::{
    api::create_router,
    config::Config,
    db::{InMemoryMiddleware, SeedData},
    state::AppState,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::{future::Future, pin::Pin, sync::Arc};
use tower::ServiceExt;

pub const SEED_JSON: &str = include_str!("../fixtures/seed.json");

/// Program that owns location 3 and has location 1 as a favorite.
pub const PROGRAM_A: &str = "4b1d2c1e-8c4a-4f0a-9a55-2d7f5c0c9e11";
pub const PROGRAM_B: &str = "9e0c5a7b-1f3d-4e2a-8b6c-0d4f2e1a3b5c";

pub type TestFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn from_state(state: AppState) -> Self {
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub fn seeded(config: Config, seed: SeedData) -> anyhow::Result<Self> {
        let middleware = InMemoryMiddleware::from_seed(seed)?;
        Ok(Self::from_state(AppState::with_middleware(
            config,
            Arc::new(middleware),
        )))
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await?.to_bytes();
        Ok((status, headers, body))
    }
}

pub fn fixture_seed() -> SeedData {
    SeedData::from_json(SEED_JSON).expect("fixture seed must parse")
}

pub async fn with_test_app<F>(f: F) -> anyhow::Result<()>
where
    F: FnOnce(TestApp) -> TestFuture,
{
    with_test_app_with_config(|_| {}, f).await
}

pub async fn with_test_app_with_config<C, F>(configure: C, f: F) -> anyhow::Result<()>
where
    C: FnOnce(&mut Config),
    F: FnOnce(TestApp) -> TestFuture,
{
    let mut config = Config::default();
    configure(&mut config);
    f(TestApp::seeded(config, fixture_seed())?).await
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "unexpected status for {}", context);
}

pub fn json(body: &Bytes) -> anyhow::Result<Value> {
    Ok(serde_json::from_slice(body)?)
}

pub fn total_count(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("x-total-count")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Codes of every entry in an `{ "errors": [...] }` body.
pub fn error_codes(body: &Bytes) -> anyhow::Result<Vec<String>> {
    let value = json(body)?;
    Ok(value["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default())
}
