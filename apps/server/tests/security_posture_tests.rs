#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::*;

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, _headers, body) = app.request(Method::GET, "/health", None).await?;
            assert_status(status, StatusCode::OK, "health");
            assert_eq!(json(&body)?, json!({ "status": "ok" }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn security_headers_are_present() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app.request(Method::GET, "/roles", None).await?;
            assert_status(status, StatusCode::OK, "roles");

            for (name, expected) in [
                ("x-content-type-options", "nosniff"),
                ("x-frame-options", "DENY"),
                ("referrer-policy", "no-referrer"),
                ("content-security-policy", "default-src 'none'"),
            ] {
                let got = headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("");
                assert_eq!(got, expected, "missing/incorrect header '{}'", name);
            }
            assert!(headers.get("strict-transport-security").is_none());

            let (_, headers, _body) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/health",
                    None,
                    &[("x-forwarded-proto", "https")],
                )
                .await?;
            assert!(headers.get("strict-transport-security").is_some());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn cors_is_not_permissive_by_default() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let (status, headers, _body) = app
                .request_with_extra_headers(
                    Method::GET,
                    "/health",
                    None,
                    &[("origin", "https://evil.example")],
                )
                .await?;
            assert_status(status, StatusCode::OK, "health");
            assert!(
                headers.get("access-control-allow-origin").is_none(),
                "expected no permissive CORS by default"
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn configured_origin_is_allowed() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.server.cors_origins = vec!["https://bms.example.org".to_string()],
        |app| {
            Box::pin(async move {
                let (_, headers, _body) = app
                    .request_with_extra_headers(
                        Method::GET,
                        "/health",
                        None,
                        &[("origin", "https://bms.example.org")],
                    )
                    .await?;
                assert_eq!(
                    headers
                        .get("access-control-allow-origin")
                        .and_then(|v| v.to_str().ok()),
                    Some("https://bms.example.org")
                );
                Ok(())
            })
        },
    )
    .await
}

#[tokio::test]
async fn oversized_bodies_are_rejected() -> anyhow::Result<()> {
    with_test_app_with_config(
        |config| config.server.max_request_body_size = 64,
        |app| {
            Box::pin(async move {
                let filler = "x".repeat(256);
                let body = json!({ "locationName": filler });

                // Without a content-length the limit trips while the body is read.
                let (status, _headers, response) = app
                    .request(Method::POST, "/crops/maize/locations/search", Some(body.clone()))
                    .await?;
                assert_status(status, StatusCode::PAYLOAD_TOO_LARGE, "streamed oversized body");
                assert_eq!(error_codes(&response)?, vec!["request.body.too.large"]);

                let length = serde_json::to_vec(&body)?.len().to_string();
                let (status, _headers, _body) = app
                    .request_with_extra_headers(
                        Method::POST,
                        "/crops/maize/locations/search",
                        Some(body),
                        &[("content-length", length.as_str())],
                    )
                    .await?;
                assert_status(status, StatusCode::PAYLOAD_TOO_LARGE, "declared oversized body");
                Ok(())
            })
        },
    )
    .await
}
