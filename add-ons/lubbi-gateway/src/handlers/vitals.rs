use crate::error::ApiError;
use crate::extract::JsonBody;
use axum::Json;
use lubbi_core::SensorUpdate;

/// POST /api/analyze-vitals – threshold check; does not touch the sensor store.
pub(crate) async fn analyze_vitals(
    JsonBody(vitals): JsonBody<SensorUpdate>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = lubbi_core::analyze(vitals.temperature, vitals.heart_rate);
    if result.alert {
        tracing::warn!(
            target: "lubbi::vitals",
            temperatura = ?vitals.temperature,
            bpm = ?vitals.heart_rate,
            "Vitals outside normal range"
        );
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "analysis": result.analysis,
        "alert": result.alert,
        "recommendations": result.recommendations,
    })))
}
