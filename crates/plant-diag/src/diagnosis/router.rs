use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{DiagnosisInput, SymptomObservation};
use super::repository::SessionSink;
use super::service::DiagnosisService;

/// Request body accepted by the diagnose endpoint. Shape errors are handled
/// by the JSON extractor; range errors by the handler, before the engine is
/// ever invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    pub plant_id: String,
    pub plant_confidence: f64,
    pub symptoms: Vec<SymptomObservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Router builder exposing the diagnosis endpoint.
pub fn diagnosis_router<S>(service: Arc<DiagnosisService<S>>) -> Router
where
    S: SessionSink + 'static,
{
    Router::new()
        .route("/api/v1/diagnose", post(diagnose_handler::<S>))
        .with_state(service)
}

pub(crate) async fn diagnose_handler<S>(
    State(service): State<Arc<DiagnosisService<S>>>,
    axum::Json(request): axum::Json<DiagnoseRequest>,
) -> Response
where
    S: SessionSink + 'static,
{
    if !(0.0..=1.0).contains(&request.plant_confidence) {
        let payload = json!({
            "error": "invalid input",
            "details": {
                "plant_confidence": format!(
                    "must be within [0, 1], got {}",
                    request.plant_confidence
                ),
            },
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let DiagnoseRequest {
        plant_id,
        plant_confidence,
        symptoms,
        image_path,
    } = request;

    let report = service.diagnose(
        DiagnosisInput {
            plant_id,
            plant_confidence,
            symptoms,
        },
        image_path,
    );

    (StatusCode::OK, axum::Json(report)).into_response()
}
