use chrono::{NaiveDate, NaiveDateTime};
use clinica::models::dtos::{CitaItem, MisCitasResponse};
use clinica::utility::{format_fecha_hora, parse_fecha_hora};

fn fecha(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn parse_accepts_the_frontend_format() {
    // "YYYY-MM-DD HH:MM:SS" is what the booking form sends
    assert_eq!(
        parse_fecha_hora("2025-06-01 10:30:00").unwrap(),
        fecha(2025, 6, 1, 10, 30, 0)
    );
}

#[test]
fn parse_accepts_minute_precision_and_t_separator() {
    assert_eq!(
        parse_fecha_hora("2025-06-01 10:30").unwrap(),
        fecha(2025, 6, 1, 10, 30, 0)
    );
    assert_eq!(
        parse_fecha_hora("2025-06-01T10:30:00").unwrap(),
        fecha(2025, 6, 1, 10, 30, 0)
    );
    assert_eq!(
        parse_fecha_hora("2025-06-01T10:30").unwrap(),
        fecha(2025, 6, 1, 10, 30, 0)
    );
    // surrounding whitespace is tolerated
    assert_eq!(
        parse_fecha_hora("  2025-06-01 10:30:00  ").unwrap(),
        fecha(2025, 6, 1, 10, 30, 0)
    );
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse_fecha_hora("not-a-date").is_err());
    assert!(parse_fecha_hora("").is_err());
    assert!(parse_fecha_hora("2025-13-40 99:99:99").is_err());
    assert!(parse_fecha_hora("01/06/2025 10:30").is_err());
}

#[test]
fn format_is_minute_precision() {
    assert_eq!(
        format_fecha_hora(&fecha(2025, 6, 1, 9, 5, 33)),
        "2025-06-01 09:05"
    );
}

#[test]
fn cita_item_serializes_with_the_wire_keys() {
    let response = MisCitasResponse {
        success: true,
        citas: vec![CitaItem {
            id: 12,
            fecha_hora: format_fecha_hora(&fecha(2025, 6, 1, 10, 30, 0)),
            estado: "Programada".to_string(),
            motivo: Some("Chequeo anual".to_string()),
            doctor: "Dr. Juan Pérez".to_string(),
            especialidad: "Medicina General".to_string(),
        }],
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    let cita = &json["citas"][0];
    assert_eq!(cita["id"], 12);
    assert_eq!(cita["fecha_hora"], "2025-06-01 10:30");
    assert_eq!(cita["estado"], "Programada");
    assert_eq!(cita["motivo"], "Chequeo anual");
    assert_eq!(cita["doctor"], "Dr. Juan Pérez");
    assert_eq!(cita["especialidad"], "Medicina General");
}
