//! Prestamo (loan) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Loan state. A loan is created `activo` and holds one copy of the book;
/// the copy is given back on the transition to `devuelto` (or on deletion
/// while still active).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EstadoPrestamo {
    Activo,
    Devuelto,
}

impl EstadoPrestamo {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPrestamo::Activo => "activo",
            EstadoPrestamo::Devuelto => "devuelto",
        }
    }
}

impl std::fmt::Display for EstadoPrestamo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EstadoPrestamo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activo" => Ok(EstadoPrestamo::Activo),
            "devuelto" => Ok(EstadoPrestamo::Devuelto),
            _ => Err(format!("Estado de préstamo inválido: {}", s)),
        }
    }
}

/// Prestamo row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Prestamo {
    pub id_prestamo: i32,
    pub id_usuario: i32,
    pub id_libro: i32,
    pub fecha_prestamo: NaiveDate,
    pub fecha_devolucion: Option<NaiveDate>,
    pub estado: EstadoPrestamo,
}

/// Create prestamo request; both ids are required, the due date is optional
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePrestamo {
    pub id_usuario: Option<i32>,
    pub id_libro: Option<i32>,
    pub fecha_devolucion: Option<NaiveDate>,
}

/// Update prestamo request. Absent `fecha_devolucion` keeps the stored
/// value; absent or empty `estado` keeps the current state.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePrestamo {
    pub fecha_devolucion: Option<NaiveDate>,
    pub estado: Option<String>,
}

/// Column values for a new loan; the state is always `activo` at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrestamoDatos {
    pub id_usuario: i32,
    pub id_libro: i32,
    pub fecha_prestamo: NaiveDate,
    pub fecha_devolucion: Option<NaiveDate>,
}
