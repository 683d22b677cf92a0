use axum::response::IntoResponse;
use clinica::error::ApiError;
use http::StatusCode;

async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn auth_errors_map_to_401_with_the_login_message() {
    let (status, body) =
        response_parts(ApiError::Auth("Email o contraseña incorrectos".to_string())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email o contraseña incorrectos");
}

#[tokio::test]
async fn missing_patient_maps_to_404() {
    let (status, body) =
        response_parts(ApiError::NotFound("Paciente no encontrado".to_string())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Paciente no encontrado");
}

#[tokio::test]
async fn unexpected_errors_map_to_500_and_carry_the_cause() {
    let (status, body) =
        response_parts(ApiError::Internal("fecha_hora inválida: oops".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error: "));
    assert!(message.contains("fecha_hora inválida"));
}

#[test]
fn database_errors_are_500s() {
    let err = ApiError::Database(diesel::result::Error::NotFound);
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let err = ApiError::DatabaseConnection("pool timed out".to_string());
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
