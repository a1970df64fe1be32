//! Health check endpoint

use actix_web::{HttpResponse, Result as ActixResult};

/// Liveness probe
pub async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "grazelog-rs",
    })))
}
