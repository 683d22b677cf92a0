use clinica::models::dtos::{LoginResponse, UsuarioData};

#[test]
fn test_password_hashing() {
    let password = "password123";
    let hash = bcrypt::hash(password, 12).unwrap();

    // Correct password should verify
    assert!(bcrypt::verify(password, &hash).unwrap());

    // Wrong password should not verify
    assert!(!bcrypt::verify("wrongpassword", &hash).unwrap());
}

#[test]
fn profile_fields_are_omitted_when_absent() {
    let response = LoginResponse {
        success: true,
        message: "Login exitoso".to_string(),
        user: UsuarioData {
            usuario_id: 7,
            email: "admin@hospital.com".to_string(),
            tipo: "admin".to_string(),
            nombre: None,
            apellido: None,
            especialidad: None,
        },
    };

    let json = serde_json::to_value(&response).unwrap();
    let user = json["user"].as_object().unwrap();
    assert_eq!(user["usuario_id"], 7);
    assert_eq!(user["tipo"], "admin");
    assert!(!user.contains_key("nombre"));
    assert!(!user.contains_key("apellido"));
    assert!(!user.contains_key("especialidad"));
}

#[test]
fn doctor_profile_fields_are_present_when_enriched() {
    let response = LoginResponse {
        success: true,
        message: "Login exitoso".to_string(),
        user: UsuarioData {
            usuario_id: 2,
            email: "doctor@hospital.com".to_string(),
            tipo: "doctor".to_string(),
            nombre: Some("Juan".to_string()),
            apellido: Some("Pérez".to_string()),
            especialidad: Some("Medicina General".to_string()),
        },
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login exitoso");
    assert_eq!(json["user"]["nombre"], "Juan");
    assert_eq!(json["user"]["apellido"], "Pérez");
    assert_eq!(json["user"]["especialidad"], "Medicina General");
}
