use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use std::env;

use clinica::models::models::{
    NewAdministrador, NewDoctor, NewEspecialidad, NewPaciente, NewUsuario,
};

fn establish_connection() -> PgConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgConnection::establish(&database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url))
}

fn main() {
    dotenv().ok();
    println!("🌱 Seeding database...");

    let mut conn = establish_connection();

    // 1. Clean DB
    clean_db(&mut conn);

    // 2. Seed specialties
    let especialidad_general = seed_especialidades(&mut conn);

    // 3. Seed users and their profiles
    let password_hash = bcrypt::hash("password123", 12).expect("Error hashing password");

    let admin_id = seed_usuario(&mut conn, "admin@hospital.com", &password_hash, "admin");
    let doctor_id = seed_usuario(&mut conn, "doctor@hospital.com", &password_hash, "doctor");
    let paciente_id = seed_usuario(&mut conn, "paciente@email.com", &password_hash, "paciente");

    seed_administrador(&mut conn, admin_id);
    seed_doctor(&mut conn, doctor_id, especialidad_general);
    seed_paciente(&mut conn, paciente_id);

    println!("✅ Database seeded successfully!");
    println!();
    println!("Credenciales para prueba:");
    println!("  admin@hospital.com / doctor@hospital.com / paciente@email.com");
    println!("  Contraseña: password123");
}

fn clean_db(conn: &mut PgConnection) {
    use clinica::schema::{administradores, citas, doctores, especialidades, pacientes, usuarios};

    println!("🧹 Cleaning database...");
    // Child tables first, FK order
    diesel::delete(citas::table)
        .execute(conn)
        .expect("Error deleting citas");
    diesel::delete(pacientes::table)
        .execute(conn)
        .expect("Error deleting pacientes");
    diesel::delete(doctores::table)
        .execute(conn)
        .expect("Error deleting doctores");
    diesel::delete(administradores::table)
        .execute(conn)
        .expect("Error deleting administradores");
    diesel::delete(usuarios::table)
        .execute(conn)
        .expect("Error deleting usuarios");
    diesel::delete(especialidades::table)
        .execute(conn)
        .expect("Error deleting especialidades");
}

/// Inserts the four demo specialties, returns the id of Medicina General.
fn seed_especialidades(conn: &mut PgConnection) -> i32 {
    use clinica::schema::especialidades;

    let demo = [
        ("Medicina General", "Atención médica integral"),
        ("Cardiología", "Especialidad del corazón"),
        ("Dermatología", "Especialidad de la piel"),
        ("Pediatría", "Atención médica infantil"),
    ];

    let mut general_id = None;
    for (nombre, descripcion) in demo {
        let id: i32 = diesel::insert_into(especialidades::table)
            .values(NewEspecialidad {
                nombre,
                descripcion,
            })
            .returning(especialidades::especialidad_id)
            .get_result(conn)
            .expect("Error inserting especialidad");
        println!("Created especialidad: {}", nombre);
        if nombre == "Medicina General" {
            general_id = Some(id);
        }
    }
    general_id.expect("Medicina General was not seeded")
}

fn seed_usuario(conn: &mut PgConnection, email: &str, contrasena_hash: &str, tipo: &str) -> i32 {
    use clinica::schema::usuarios;

    let id: i32 = diesel::insert_into(usuarios::table)
        .values(NewUsuario {
            email,
            contrasena_hash,
            tipo,
        })
        .returning(usuarios::usuario_id)
        .get_result(conn)
        .expect("Error inserting usuario");

    println!("Created user: {} ({})", email, tipo);
    id
}

fn seed_administrador(conn: &mut PgConnection, usuario_id: i32) {
    use clinica::schema::administradores;

    diesel::insert_into(administradores::table)
        .values(NewAdministrador {
            usuario_id,
            nombre: "Admin",
            apellido: "Sistema",
        })
        .execute(conn)
        .expect("Error inserting administrador");
}

fn seed_doctor(conn: &mut PgConnection, usuario_id: i32, especialidad_id: i32) {
    use clinica::schema::doctores;

    diesel::insert_into(doctores::table)
        .values(NewDoctor {
            usuario_id,
            nombre: "Juan",
            apellido: "Pérez",
            especialidad_id,
            telefono: "123456789",
            numero_licencia: "LIC001",
        })
        .execute(conn)
        .expect("Error inserting doctor");
}

fn seed_paciente(conn: &mut PgConnection, usuario_id: i32) {
    use clinica::schema::pacientes;

    diesel::insert_into(pacientes::table)
        .values(NewPaciente {
            usuario_id,
            nombre: "María",
            apellido: "García",
            fecha_nacimiento: chrono::NaiveDate::from_ymd_opt(1990, 5, 15)
                .expect("valid seed date"),
            genero: "Femenino",
            telefono: "987654321",
            direccion: "Av. Principal 123",
        })
        .execute(conn)
        .expect("Error inserting paciente");
}
