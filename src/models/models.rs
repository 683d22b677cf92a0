use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::schema::{administradores, citas, doctores, especialidades, pacientes, usuarios};
use crate::utility::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
}

#[derive(Queryable, Selectable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = usuarios)]
pub struct Usuario {
    pub usuario_id: i32,
    pub email: String,
    pub contrasena_hash: String,
    pub tipo: String,
    pub activo: bool,
    pub ultimo_login: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = usuarios)]
pub struct NewUsuario<'a> {
    pub email: &'a str,
    pub contrasena_hash: &'a str,
    pub tipo: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = especialidades)]
pub struct Especialidad {
    pub especialidad_id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = especialidades)]
pub struct NewEspecialidad<'a> {
    pub nombre: &'a str,
    pub descripcion: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = doctores)]
pub struct Doctor {
    pub doctor_id: i32,
    pub usuario_id: i32,
    pub nombre: String,
    pub apellido: String,
    pub especialidad_id: i32,
    pub telefono: Option<String>,
    pub numero_licencia: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = doctores)]
pub struct NewDoctor<'a> {
    pub usuario_id: i32,
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub especialidad_id: i32,
    pub telefono: &'a str,
    pub numero_licencia: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = pacientes)]
pub struct NewPaciente<'a> {
    pub usuario_id: i32,
    pub nombre: &'a str,
    pub apellido: &'a str,
    pub fecha_nacimiento: NaiveDate,
    pub genero: &'a str,
    pub telefono: &'a str,
    pub direccion: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = administradores)]
pub struct NewAdministrador<'a> {
    pub usuario_id: i32,
    pub nombre: &'a str,
    pub apellido: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = citas)]
pub struct NewCita<'a> {
    pub paciente_id: i32,
    pub doctor_id: i32,
    pub fecha_hora: NaiveDateTime,
    pub motivo: &'a str,
    pub estado: &'a str,
}
