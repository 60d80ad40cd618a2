//! Repository layer: one store trait per entity plus the backends
//!
//! Each entity sits behind a small trait object so the Postgres stores can
//! be swapped for the in-memory ones (demo mode, unit tests) without the
//! services noticing.

pub mod libros;
pub mod memoria;
pub mod prestamos;
pub mod resenias;
pub mod usuarios;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use libros::LibroStore;
pub use prestamos::PrestamoStore;
pub use resenias::ReseniaStore;
pub use usuarios::UsuarioStore;

/// Bundle of per-entity stores handed to the services
#[derive(Clone)]
pub struct Repository {
    pub usuarios: Arc<dyn UsuarioStore>,
    pub libros: Arc<dyn LibroStore>,
    pub prestamos: Arc<dyn PrestamoStore>,
    pub resenias: Arc<dyn ReseniaStore>,
}

impl Repository {
    /// Stores backed by the Postgres pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            usuarios: Arc::new(usuarios::PgUsuarioStore::new(pool.clone())),
            libros: Arc::new(libros::PgLibroStore::new(pool.clone())),
            prestamos: Arc::new(prestamos::PgPrestamoStore::new(pool.clone())),
            resenias: Arc::new(resenias::PgReseniaStore::new(pool)),
        }
    }

    /// Stores backed by shared in-memory tables
    pub fn en_memoria() -> Self {
        let datos = Arc::new(memoria::Datos::default());
        Self {
            usuarios: Arc::new(memoria::MemUsuarioStore::new(datos.clone())),
            libros: Arc::new(memoria::MemLibroStore::new(datos.clone())),
            prestamos: Arc::new(memoria::MemPrestamoStore::new(datos.clone())),
            resenias: Arc::new(memoria::MemReseniaStore::new(datos)),
        }
    }
}
