use crate::error::ApiError;
use crate::models::dtos::{DoctorItem, DoctoresResponse, ErrorResponse};
use crate::models::models::{AppState, Doctor};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/doctores/{especialidad_id}",
    params(
        ("especialidad_id" = i32, Path, description = "Specialty id")
    ),
    responses(
        (status = 200, description = "Doctors with that specialty; empty list when none", body = DoctoresResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Doctores"
)]
pub async fn get_doctores(
    State(state): State<Arc<AppState>>,
    Path(especialidad_id): Path<i32>,
) -> Result<Json<DoctoresResponse>, ApiError> {
    use crate::schema::doctores;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let filas: Vec<Doctor> = doctores::table
        .filter(doctores::especialidad_id.eq(especialidad_id))
        .select(Doctor::as_select())
        .load(conn)
        .map_err(ApiError::Database)?;

    Ok(Json(DoctoresResponse {
        success: true,
        doctores: filas
            .into_iter()
            .map(|doc| DoctorItem {
                id: doc.doctor_id,
                nombre: format!("Dr. {} {}", doc.nombre, doc.apellido),
                telefono: doc.telefono,
            })
            .collect(),
    }))
}
