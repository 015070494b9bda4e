// src/web/handlers/system_handlers.rs
use crate::locale::SUPPORTED_LOCALES;
use crate::web::types::*;

use rocket::serde::json::Json;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        locales: SUPPORTED_LOCALES.iter().map(|l| l.code()).collect(),
    })
}
