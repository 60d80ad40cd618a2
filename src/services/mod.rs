//! Business logic: entity validators and the loan lifecycle

pub mod libros;
pub mod prestamos;
pub mod resenias;
pub mod usuarios;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub usuarios: usuarios::UsuariosService,
    pub libros: libros::LibrosService,
    pub prestamos: prestamos::PrestamosService,
    pub resenias: resenias::ReseniasService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            usuarios: usuarios::UsuariosService::new(repository.clone()),
            libros: libros::LibrosService::new(repository.clone()),
            prestamos: prestamos::PrestamosService::new(repository.clone()),
            resenias: resenias::ReseniasService::new(repository),
        }
    }
}

/// Partial-update merge: keep the stored value when the caller sent nothing
/// or an empty string
pub(crate) fn or_keep(nuevo: Option<String>, actual: String) -> String {
    match nuevo {
        Some(valor) if !valor.is_empty() => valor,
        _ => actual,
    }
}
