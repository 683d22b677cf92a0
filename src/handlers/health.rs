use crate::models::dtos::HomeResponse;
use crate::models::models::AppState;
use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness payload", body = HomeResponse)
    ),
    tag = "Health"
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "API Sistema Médico".to_string(),
        status: "funcionando".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.db.get() {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn) {
            Ok(_) => StatusCode::OK,
            Err(_) => StatusCode::SERVICE_UNAVAILABLE,
        },
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
