use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    citas::crear_cita, doctores::get_doctores, especialidades::get_especialidades,
    health::health_check, health::home, login::login, mis_citas::get_mis_citas,
};
use crate::models::models::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", axum::routing::get(home))
        .route("/api/health", axum::routing::get(health_check))
        .route("/api/login", axum::routing::post(login))
        .route("/api/especialidades", axum::routing::get(get_especialidades))
        .route("/api/doctores/{especialidad_id}", axum::routing::get(get_doctores))
        .route("/api/citas", axum::routing::post(crear_cita))
        .route("/api/mis-citas/{usuario_id}", axum::routing::get(get_mis_citas))
        .with_state(state)
}
