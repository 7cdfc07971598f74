use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;
use validator::Validate;

use crate::core::{Questionnaire, Screener, ScreeningError};
use crate::models::{
    AqScore, EncodedRowResponse, ErrorResponse, HealthResponse, ScreeningRequest,
    ScreeningResponse, ScreeningResult,
};

pub const DISCLAIMER: &str = "This tool is not a diagnosis. For a professional evaluation, \
please consult a licensed clinician. You can find more information and resources at the \
Autism Society website: https://www.autism-society.org/";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub screener: Screener,
}

/// Configure all screening routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/questionnaire", web::get().to(questionnaire))
        .route("/screenings", web::post().to(screen))
        .route("/screenings/encode", web::post().to(encode_only));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        variant: state.screener.variant().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Questionnaire definition endpoint
///
/// GET /api/v1/questionnaire
async fn questionnaire() -> impl Responder {
    HttpResponse::Ok().json(Questionnaire::standard())
}

/// Screening endpoint
///
/// POST /api/v1/screenings
///
/// Request body:
/// ```json
/// {
///   "answers": { "A1": "Yes", "A2": "No", "...": "...", "A10": "No" },
///   "age": 25,
///   "gender": "Male",
///   "ethnicity": "White"
/// }
/// ```
async fn screen(
    state: web::Data<AppState>,
    req: web::Json<ScreeningRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for screening request: field_errors={:?}", errors);
        return validation_failed(errors.to_string());
    }

    let response = match req.to_response() {
        Ok(response) => response,
        Err(e) => return error_response(e),
    };

    let result = match state.screener.screen(&response) {
        Ok(result) => result,
        Err(e) => return error_response(e),
    };

    let screening_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        "Screening {} complete: variant={}, aq_score={}, prediction={}, probability={:?}",
        screening_id,
        state.screener.variant(),
        result.aq_score.value(),
        result.prediction,
        result.probability
    );

    HttpResponse::Ok().json(render(screening_id, &result))
}

/// Encode-only endpoint, returns the classifier input row
///
/// POST /api/v1/screenings/encode
async fn encode_only(
    state: web::Data<AppState>,
    req: web::Json<ScreeningRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let response = match req.to_response() {
        Ok(response) => response,
        Err(e) => return error_response(e),
    };

    let (row, aq_score) = state.screener.encode(&response);
    let features: BTreeMap<String, f64> = row
        .iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    HttpResponse::Ok().json(EncodedRowResponse {
        variant: row.variant().to_string(),
        fields: row.names().iter().map(|n| n.to_string()).collect(),
        values: row.values().to_vec(),
        features,
        aq_score: aq_score.value(),
    })
}

/// Turn a classifier result into the user-facing response
pub fn render(screening_id: String, result: &ScreeningResult) -> ScreeningResponse {
    let summary = if result.prediction == 1 {
        "Based on your responses, the screening suggests a higher likelihood of autism spectrum traits."
    } else {
        "Based on your responses, the screening suggests a lower likelihood of autism spectrum traits."
    };

    ScreeningResponse {
        screening_id,
        prediction: result.prediction,
        probability: result.probability,
        aq_score: result.aq_score.value(),
        max_score: AqScore::MAX,
        summary: summary.to_string(),
        probability_text: result
            .probability
            .map(|p| format!("Probability of autism spectrum traits: {:.2}%", p * 100.0)),
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

fn error_response(err: ScreeningError) -> HttpResponse {
    match err {
        ScreeningError::Validation { .. } => {
            tracing::info!("Rejected screening submission: {}", err);
            validation_failed(err.to_string())
        }
        ScreeningError::EncodingMismatch { .. } => {
            tracing::error!("Encoder and classifier disagree: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Encoding mismatch".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}
