use crate::handlers::{
    citas::__path_crear_cita, doctores::__path_get_doctores,
    especialidades::__path_get_especialidades, health::__path_health_check, health::__path_home,
    login::__path_login, mis_citas::__path_get_mis_citas,
};
use crate::models::dtos::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        home, health_check, login, get_especialidades,
        get_doctores, crear_cita, get_mis_citas
    ),
    components(schemas(
        LoginRequest, LoginResponse, UsuarioData,
        EspecialidadesResponse, EspecialidadItem,
        DoctoresResponse, DoctorItem,
        CrearCitaRequest, CrearCitaResponse,
        MisCitasResponse, CitaItem,
        HomeResponse, ErrorResponse
    )),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Especialidades", description = "Specialty lookup"),
        (name = "Doctores", description = "Doctor lookup"),
        (name = "Citas", description = "Appointment booking and history"),
        (name = "Health", description = "Liveness and health checks")
    )
)]
pub struct ApiDoc;
