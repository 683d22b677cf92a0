use crate::error::ApiError;
use crate::models::dtos::{CrearCitaRequest, CrearCitaResponse, ErrorResponse};
use crate::models::models::{AppState, NewCita};
use crate::utility::parse_fecha_hora;
use axum::{extract::State, Json};
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use std::sync::Arc;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/citas",
    request_body = CrearCitaRequest,
    responses(
        (status = 200, description = "Appointment created", body = CrearCitaResponse),
        (status = 404, description = "No patient record for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Citas"
)]
pub async fn crear_cita(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CrearCitaRequest>,
) -> Result<Json<CrearCitaResponse>, ApiError> {
    use crate::schema::{citas, pacientes};

    let fecha_hora = parse_fecha_hora(&payload.fecha_hora)
        .map_err(|e| ApiError::Internal(format!("fecha_hora inválida: {}", e)))?;

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    // Patient lookup and insert stay in one transaction so a failed insert
    // leaves nothing behind. The booking itself is taken as-is: no check
    // that the doctor exists, that the slot is free, or that the timestamp
    // is in the future.
    let cita_id = conn
        .transaction(|conn| {
            let paciente_id: Option<i32> = pacientes::table
                .filter(pacientes::usuario_id.eq(payload.usuario_id))
                .select(pacientes::paciente_id)
                .first(conn)
                .optional()?;

            let paciente_id = match paciente_id {
                Some(id) => id,
                None => return Err(DieselError::RollbackTransaction),
            };

            diesel::insert_into(citas::table)
                .values(NewCita {
                    paciente_id,
                    doctor_id: payload.doctor_id,
                    fecha_hora,
                    motivo: payload.motivo.as_deref().unwrap_or(""),
                    estado: "Programada",
                })
                .returning(citas::cita_id)
                .get_result::<i32>(conn)
        })
        .map_err(|e| match e {
            DieselError::RollbackTransaction => {
                ApiError::NotFound("Paciente no encontrado".to_string())
            }
            other => ApiError::Database(other),
        })?;

    info!(
        "Appointment {} created for user {}",
        cita_id, payload.usuario_id
    );

    Ok(Json(CrearCitaResponse {
        success: true,
        message: "Cita creada exitosamente".to_string(),
        cita_id,
    }))
}
