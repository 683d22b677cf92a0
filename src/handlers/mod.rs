pub mod citas;
pub mod doctores;
pub mod especialidades;
pub mod health;
pub mod login;
pub mod mis_citas;
