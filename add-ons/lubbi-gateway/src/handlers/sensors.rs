//! Sensor intake from the robot and the read-back used by the monitoring panel.

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use lubbi_core::SensorUpdate;

/// POST /api/sensores – stores positive values, stamps `lastUpdate`, echoes the snapshot.
pub(crate) async fn receive_reading(
    State(state): State<AppState>,
    JsonBody(update): JsonBody<SensorUpdate>,
) -> Result<Json<serde_json::Value>, ApiError> {
    tracing::info!(
        target: "lubbi::sensors",
        temperatura = ?update.temperature,
        bpm = ?update.heart_rate,
        "Reading received from robot"
    );

    let data = state.sensors.update(update)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Dados recebidos com sucesso",
        "data": data,
    })))
}

/// GET /api/sensores – current snapshot.
pub(crate) async fn current_reading(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let data = state.sensors.read()?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": data,
    })))
}
