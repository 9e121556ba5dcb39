#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use breeding_api::config::Config;
use breeding_validator::{MeasurementValidator, NumericValidator, ValueValidator};
use serde_json::{json, Value};
use std::sync::Arc;
use support::*;

const VALIDATION: &str = "/crops/maize/studies/5/observations/validation";

fn measurement(id: i32, data_type: &str, value: &str) -> Value {
    json!({
        "measurementId": id,
        "observationId": 100 + id,
        "variableId": 8830,
        "variableName": "PlantHeight_cm",
        "dataType": data_type,
        "value": value
    })
}

#[tokio::test]
async fn valid_batch_is_accepted() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let batch = json!([
                measurement(1, "NUMERIC", "42"),
                measurement(2, "NUMERIC", " 3.14 "),
                measurement(3, "NUMERIC", "-7"),
                measurement(4, "NUMERIC", "+0.5"),
                measurement(5, "DATE", "20240229"),
                {
                    "measurementId": 6,
                    "observationId": 106,
                    "variableId": 8840,
                    "dataType": "CATEGORICAL",
                    "value": "3",
                    "possibleValues": ["1", "3", "5"]
                }
            ]);
            let (status, _headers, body) =
                app.request(Method::POST, VALIDATION, Some(batch)).await?;
            assert_status(status, StatusCode::OK, "valid batch");
            assert_eq!(json(&body)?, json!({ "valid": true }));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn every_rejection_is_reported() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let batch = json!([
                measurement(1, "NUMERIC", "abc"),
                measurement(2, "NUMERIC", "12"),
                measurement(3, "NUMERIC", ""),
                measurement(4, "NUMERIC", "12x"),
                measurement(5, "NUMERIC", "--1"),
                measurement(6, "DATE", "20230230")
            ]);
            let (status, _headers, body) =
                app.request(Method::POST, VALIDATION, Some(batch)).await?;
            assert_status(status, StatusCode::BAD_REQUEST, "invalid batch");

            let value = json(&body)?;
            let errors = value["errors"].as_array().unwrap();
            assert_eq!(errors.len(), 5);

            assert_eq!(errors[0]["code"], "invalid.measurement.numeric.value");
            assert_eq!(errors[0]["rejectedValue"], "abc");
            assert_eq!(errors[0]["observationId"], 101);
            assert_eq!(errors[0]["measurementId"], 1);
            assert_eq!(errors[1]["rejectedValue"], "");
            assert_eq!(errors[4]["code"], "invalid.measurement.date.value");
            assert_eq!(errors[4]["measurementId"], 6);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn untrimmed_value_is_echoed_back() -> anyhow::Result<()> {
    with_test_app(|app| {
        Box::pin(async move {
            let batch = json!([measurement(1, "NUMERIC", " 1.2.3 ")]);
            let (status, _headers, body) =
                app.request(Method::POST, VALIDATION, Some(batch)).await?;
            assert_status(status, StatusCode::BAD_REQUEST, "untrimmed rejection");
            assert_eq!(json(&body)?["errors"][0]["rejectedValue"], " 1.2.3 ");
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn missing_validator_is_an_internal_error() -> anyhow::Result<()> {
    let seeded = TestApp::seeded(Config::default(), fixture_seed())?;
    let mut state = seeded.state.clone();
    let numeric_only: Vec<Arc<dyn ValueValidator>> = vec![Arc::new(NumericValidator::new())];
    state.measurement_validator = Arc::new(MeasurementValidator::with_rules(numeric_only));
    let app = TestApp::from_state(state);

    let batch = json!([measurement(1, "DATE", "20240101")]);
    let (status, _headers, body) = app.request(Method::POST, VALIDATION, Some(batch)).await?;
    assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "unwired data type");
    assert_eq!(error_codes(&body)?, vec!["internal.validator"]);
    Ok(())
}
