// Integration tests for AQ Screen

use actix_web::{test, web, App};
use aq_screen::core::{schema, LinearClassifier, PlattCalibration};
use aq_screen::models::{EncoderVariant, ScreeningResponse};
use aq_screen::routes::{self, AppState};
use aq_screen::services::{load_classifier, ArtifactError};
use aq_screen::{Screener, ScreeningError};
use serde_json::{json, Value};
use std::sync::Arc;

/// Classifier flagging three or more encoded answers as positive
fn test_classifier(variant: EncoderVariant, calibrated: bool) -> LinearClassifier {
    let feature_names: Vec<String> = schema(variant).iter().map(|s| s.to_string()).collect();
    let coefficients = (0..feature_names.len())
        .map(|idx| if idx < 10 { 1.0 } else { 0.0 })
        .collect();
    LinearClassifier {
        feature_names,
        coefficients,
        intercept: -2.5,
        scaler: None,
        probability: calibrated.then_some(PlattCalibration { a: -1.0, b: 0.0 }),
    }
}

fn app_state(variant: EncoderVariant, calibrated: bool) -> AppState {
    let classifier = Arc::new(test_classifier(variant, calibrated));
    AppState {
        screener: Screener::new(classifier, variant).unwrap(),
    }
}

fn submission(a6: &str, rest: &str) -> Value {
    let mut answers = serde_json::Map::new();
    for q in 1..=10 {
        let value = if q == 6 { a6 } else { rest };
        answers.insert(format!("A{}", q), json!(value));
    }
    json!({
        "answers": answers,
        "age": 25,
        "gender": "Male",
        "ethnicity": "White",
    })
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_integration_end_to_end_screening() {
    let app = init_app!(app_state(EncoderVariant::OneHotFixedDefaults, true));

    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(submission("Yes", "No"))
        .to_request();
    let resp: ScreeningResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.aq_score, 1);
    assert_eq!(resp.max_score, 10);
    assert_eq!(resp.prediction, 0);
    assert!(resp.probability.unwrap() < 0.5);
    assert!(resp.summary.contains("lower likelihood"));
    assert!(resp.probability_text.unwrap().ends_with('%'));
    assert!(!resp.screening_id.is_empty());
}

#[actix_web::test]
async fn test_integration_positive_screening() {
    let app = init_app!(app_state(EncoderVariant::LabelEncoded, true));

    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(submission("No", "Yes"))
        .to_request();
    let resp: ScreeningResponse = test::call_and_read_body_json(&app, req).await;

    // A6 "No" encodes as 1, so all ten encoded answers are set
    assert_eq!(resp.aq_score, 9);
    assert_eq!(resp.prediction, 1);
    assert!(resp.summary.contains("higher likelihood"));
}

#[actix_web::test]
async fn test_integration_probability_absent_without_calibration() {
    let app = init_app!(app_state(EncoderVariant::OneHotFixedDefaults, false));

    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(submission("Yes", "Yes"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["aqScore"], 10);
    assert!(body["probability"].is_null());
    assert!(body["probabilityText"].is_null());
}

#[actix_web::test]
async fn test_integration_encode_endpoint() {
    let app = init_app!(app_state(EncoderVariant::OneHotFixedDefaults, true));

    let req = test::TestRequest::post()
        .uri("/api/v1/screenings/encode")
        .set_json(submission("Yes", "No"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["variant"], "oneHotFixedDefaults");
    assert_eq!(body["aqScore"], 1);
    assert_eq!(body["fields"][0], "A1_Score");
    assert_eq!(body["features"]["A6_Score"], 0.0);
    assert_eq!(body["features"]["gender_m"], 1.0);
    assert_eq!(body["features"]["result"], 1.0);
    assert_eq!(body["features"]["used_app_before_no"], 1.0);
    assert_eq!(body["values"].as_array().unwrap().len(), 18);
}

#[actix_web::test]
async fn test_integration_rejects_bad_answer() {
    let app = init_app!(app_state(EncoderVariant::OneHotFixedDefaults, true));

    let mut payload = submission("Yes", "No");
    payload["answers"]["A3"] = json!("Sometimes");

    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("A3"));
}

#[actix_web::test]
async fn test_integration_rejects_missing_answer_and_negative_age() {
    let app = init_app!(app_state(EncoderVariant::LabelEncoded, true));

    let mut missing = submission("No", "No");
    missing["answers"].as_object_mut().unwrap().remove("A10");
    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(missing)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let mut negative = submission("No", "No");
    negative["age"] = json!(-1);
    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(negative)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // A rejected submission leaves the next one unaffected
    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(submission("No", "No"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
async fn test_integration_rejects_unknown_gender() {
    let app = init_app!(app_state(EncoderVariant::OneHotFixedDefaults, true));

    let mut payload = submission("No", "No");
    payload["gender"] = json!("Robot");
    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .set_json(payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_integration_malformed_json() {
    let app = init_app!(app_state(EncoderVariant::OneHotFixedDefaults, true));

    let req = test::TestRequest::post()
        .uri("/api/v1/screenings")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_integration_health_and_questionnaire() {
    let app = init_app!(app_state(EncoderVariant::LabelEncoded, false));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["variant"], "labelEncoded");

    let req = test::TestRequest::get().uri("/api/v1/questionnaire").to_request();
    let form: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(form["questions"].as_array().unwrap().len(), 10);
    assert_eq!(form["questions"][5]["id"], "A6");
    assert_eq!(form["questions"][5]["polarity"], "reversed");
}

#[actix_web::test]
async fn test_integration_missing_artifact_is_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_classifier(dir.path().join("classifier.json")).await.unwrap_err();
    assert!(matches!(err, ArtifactError::NotFound { .. }));
    assert!(err.to_string().contains("classifier.json"));
}

#[actix_web::test]
async fn test_integration_shipped_artifact_matches_default_variant() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/models/classifier.json");
    let classifier = load_classifier(path).await.unwrap();

    assert!(Screener::new(Arc::new(classifier.clone()), EncoderVariant::OneHotFixedDefaults).is_ok());
    let err = Screener::new(Arc::new(classifier), EncoderVariant::LabelEncoded).unwrap_err();
    assert!(matches!(err, ScreeningError::EncodingMismatch { .. }));
}
