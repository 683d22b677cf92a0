use crate::error::ApiError;
use crate::models::dtos::{ErrorResponse, LoginRequest, LoginResponse, UsuarioData};
use crate::models::models::{AppState, Usuario};
use axum::{extract::State, Json};
use bcrypt::verify;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

// Burned on unknown emails so they cost as much as a wrong password.
const DUMMY_HASH: &str = "$2b$12$dummyhashdummyhashdummyhashdummyhashdummyhashdummyha";

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password, or inactive account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    use crate::schema::usuarios;

    info!("Login attempt for email: {}", payload.email);

    let conn = &mut state.db.get().map_err(|e| {
        tracing::error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let usuario: Option<Usuario> = usuarios::table
        .filter(usuarios::email.eq(&payload.email))
        .filter(usuarios::activo.eq(true))
        .select(Usuario::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Database)?;

    let usuario = match usuario {
        Some(usuario) => usuario,
        None => {
            let _ = verify(&payload.password, DUMMY_HASH);
            warn!("No active user found for email: {}", payload.email);
            return Err(ApiError::Auth("Email o contraseña incorrectos".to_string()));
        }
    };

    if !verify(&payload.password, &usuario.contrasena_hash).map_err(|e| {
        tracing::error!(
            "Password verification error for user {}: {}",
            usuario.usuario_id,
            e
        );
        ApiError::Bcrypt(e)
    })? {
        warn!("Invalid password for user: {}", usuario.usuario_id);
        return Err(ApiError::Auth("Email o contraseña incorrectos".to_string()));
    }

    // Committed on its own; the profile lookups below never undo it.
    diesel::update(usuarios::table.filter(usuarios::usuario_id.eq(usuario.usuario_id)))
        .set(usuarios::ultimo_login.eq(Utc::now().naive_utc()))
        .execute(conn)
        .map_err(ApiError::Database)?;

    let mut user_data = UsuarioData {
        usuario_id: usuario.usuario_id,
        email: usuario.email,
        tipo: usuario.tipo.clone(),
        nombre: None,
        apellido: None,
        especialidad: None,
    };

    // A user without a matching profile row keeps the base fields only.
    match usuario.tipo.as_str() {
        "paciente" => {
            use crate::schema::pacientes;

            let perfil: Option<(String, String)> = pacientes::table
                .filter(pacientes::usuario_id.eq(usuario.usuario_id))
                .select((pacientes::nombre, pacientes::apellido))
                .first(conn)
                .optional()
                .map_err(ApiError::Database)?;

            if let Some((nombre, apellido)) = perfil {
                user_data.nombre = Some(nombre);
                user_data.apellido = Some(apellido);
            }
        }
        "doctor" => {
            use crate::schema::{doctores, especialidades};

            let perfil: Option<(String, String, String)> = doctores::table
                .inner_join(especialidades::table)
                .filter(doctores::usuario_id.eq(usuario.usuario_id))
                .select((
                    doctores::nombre,
                    doctores::apellido,
                    especialidades::nombre,
                ))
                .first(conn)
                .optional()
                .map_err(ApiError::Database)?;

            if let Some((nombre, apellido, especialidad)) = perfil {
                user_data.nombre = Some(nombre);
                user_data.apellido = Some(apellido);
                user_data.especialidad = Some(especialidad);
            }
        }
        _ => {}
    }

    info!("User {} logged in successfully", user_data.usuario_id);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login exitoso".to_string(),
        user: user_data,
    }))
}
