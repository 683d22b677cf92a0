use crate::error::ApiError;
use crate::models::dtos::{CitaItem, ErrorResponse, MisCitasResponse};
use crate::models::models::AppState;
use crate::utility::format_fecha_hora;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/mis-citas/{usuario_id}",
    params(
        ("usuario_id" = i32, Path, description = "User id of the patient")
    ),
    responses(
        (status = 200, description = "Appointments for the user, newest first", body = MisCitasResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Citas"
)]
pub async fn get_mis_citas(
    State(state): State<Arc<AppState>>,
    Path(usuario_id): Path<i32>,
) -> Result<Json<MisCitasResponse>, ApiError> {
    use crate::schema::{citas, doctores, especialidades, pacientes};

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let filas: Vec<(i32, NaiveDateTime, String, Option<String>, String, String, String)> =
        citas::table
            .inner_join(pacientes::table)
            .inner_join(doctores::table.inner_join(especialidades::table))
            .filter(pacientes::usuario_id.eq(usuario_id))
            .order(citas::fecha_hora.desc())
            .select((
                citas::cita_id,
                citas::fecha_hora,
                citas::estado,
                citas::motivo,
                doctores::nombre,
                doctores::apellido,
                especialidades::nombre,
            ))
            .load(conn)
            .map_err(ApiError::Database)?;

    Ok(Json(MisCitasResponse {
        success: true,
        citas: filas
            .into_iter()
            .map(
                |(id, fecha_hora, estado, motivo, nombre, apellido, especialidad)| CitaItem {
                    id,
                    fecha_hora: format_fecha_hora(&fecha_hora),
                    estado,
                    motivo,
                    doctor: format!("Dr. {} {}", nombre, apellido),
                    especialidad,
                },
            )
            .collect(),
    }))
}
