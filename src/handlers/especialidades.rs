use crate::error::ApiError;
use crate::models::dtos::{EspecialidadItem, EspecialidadesResponse, ErrorResponse};
use crate::models::models::{AppState, Especialidad};
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/especialidades",
    responses(
        (status = 200, description = "All specialties", body = EspecialidadesResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Especialidades"
)]
pub async fn get_especialidades(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EspecialidadesResponse>, ApiError> {
    use crate::schema::especialidades;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let filas: Vec<Especialidad> = especialidades::table
        .select(Especialidad::as_select())
        .load(conn)
        .map_err(ApiError::Database)?;

    Ok(Json(EspecialidadesResponse {
        success: true,
        especialidades: filas
            .into_iter()
            .map(|esp| EspecialidadItem {
                id: esp.especialidad_id,
                nombre: esp.nombre,
                descripcion: esp.descripcion,
            })
            .collect(),
    }))
}
