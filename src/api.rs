//! api.rs — HTTP surface: emergency intake + dashboard data.
//!
//! The telephony provider posts transcribed speech here; the dashboard UI
//! polls `/dashboard-data`. Auth, call signaling and speech-to-text all live
//! outside this service.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::language::{detect_language, response_text, ResponseKey};
use crate::pipeline::{CallerMeta, ReportPipeline};
use crate::report::{DashboardSummary, EmergencyReport};
use crate::store::ReportStore;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReportPipeline>,
    pub store: Arc<ReportStore>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/process-emergency", post(process_emergency))
        .route("/dashboard-data", get(dashboard_data))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct ProcessReq {
    text: String,
    #[serde(default)]
    caller_number: Option<String>,
    #[serde(default)]
    call_sid: Option<String>,
}

#[derive(serde::Serialize)]
struct ProcessResp {
    report: EmergencyReport,
    /// Short reference number read back to the caller (uuid prefix).
    /// Absent when the durable write failed; the report is still kept
    /// in memory and reflected in the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    /// Localized confirmation, language picked from the report text.
    message: String,
}

#[derive(serde::Serialize)]
struct ErrorResp {
    error: &'static str,
}

async fn process_emergency(
    State(state): State<AppState>,
    Json(body): Json<ProcessReq>,
) -> Result<Json<ProcessResp>, (StatusCode, Json<ErrorResp>)> {
    if body.text.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResp {
                error: "No text provided",
            }),
        ));
    }

    let meta = CallerMeta {
        caller_number: body.caller_number,
        call_sid: body.call_sid,
    };
    let report = state.pipeline.process(&body.text, meta).await;
    // `add` re-stamps the arrival time; persist the stamped copy so disk
    // matches what the dashboard shows.
    let report = state.store.add(report);

    let reference = match state.store.persist(&report) {
        Ok(id) => Some(id[..8].to_string()),
        Err(e) => {
            error!(error = %e, "failed to persist report");
            None
        }
    };

    info!(
        category = report.emergency_type.as_str(),
        severity = report.severity.as_str(),
        location = %report.location,
        "processed emergency report"
    );

    let lang = detect_language(&report.original_text);
    let message = response_text(ResponseKey::Confirmation, lang).to_string();

    Ok(Json(ProcessResp {
        report,
        reference,
        message,
    }))
}

#[derive(serde::Serialize)]
struct DashboardData {
    /// Human-readable summary block for the UI.
    summary: String,
    stats: DashboardSummary,
    recent: Vec<EmergencyReport>,
}

async fn dashboard_data(State(state): State<AppState>) -> Json<DashboardData> {
    let stats = state.store.summary();
    Json(DashboardData {
        summary: stats.render_text(),
        stats,
        recent: state.store.recent(10),
    })
}
