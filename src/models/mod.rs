//! Entity models and request payloads

pub mod libro;
pub mod prestamo;
pub mod resenia;
pub mod usuario;
