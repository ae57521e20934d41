//! Operator status endpoint

use crate::services::MetricsStats;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    service: &'static str,
    version: &'static str,
    models: ModelNames,
    has_credential: bool,
    uptime_seconds: u64,
    chat: MetricsStats,
}

#[derive(Debug, Serialize)]
pub struct ModelNames {
    standard: String,
    thinking: String,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        models: ModelNames {
            standard: state.invoker.model_for(false).to_string(),
            thinking: state.invoker.model_for(true).to_string(),
        },
        has_credential: state.credentials.is_configured(),
        uptime_seconds: state.metrics.uptime_seconds(),
        chat: state.metrics.get_stats(),
    })
}
