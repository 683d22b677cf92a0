use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile fields are filled in only when the linked row exists; absent
/// fields are omitted from the JSON, not serialized as null.
#[derive(Serialize, ToSchema)]
pub struct UsuarioData {
    pub usuario_id: i32,
    pub email: String,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub especialidad: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UsuarioData,
}

#[derive(Serialize, ToSchema)]
pub struct EspecialidadItem {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EspecialidadesResponse {
    pub success: bool,
    pub especialidades: Vec<EspecialidadItem>,
}

#[derive(Serialize, ToSchema)]
pub struct DoctorItem {
    pub id: i32,
    /// Display name, "Dr. {nombre} {apellido}".
    pub nombre: String,
    pub telefono: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct DoctoresResponse {
    pub success: bool,
    pub doctores: Vec<DoctorItem>,
}

#[derive(Deserialize, ToSchema)]
pub struct CrearCitaRequest {
    /// The user id of the logged-in patient, not the paciente_id.
    pub usuario_id: i32,
    pub doctor_id: i32,
    /// "YYYY-MM-DD HH:MM:SS" as sent by the frontend.
    pub fecha_hora: String,
    pub motivo: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CrearCitaResponse {
    pub success: bool,
    pub message: String,
    pub cita_id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct CitaItem {
    pub id: i32,
    /// "YYYY-MM-DD HH:MM"
    pub fecha_hora: String,
    pub estado: String,
    pub motivo: Option<String>,
    /// "Dr. {nombre} {apellido}"
    pub doctor: String,
    pub especialidad: String,
}

#[derive(Serialize, ToSchema)]
pub struct MisCitasResponse {
    pub success: bool,
    pub citas: Vec<CitaItem>,
}

#[derive(Serialize, ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
