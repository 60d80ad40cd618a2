//! Loan lifecycle: keeps book stock consistent with active loans
//!
//! A loan holds one copy of its book from creation until it is returned or
//! deleted. The stock effects are tied to single conditional statements in
//! the stores (see `LibroStore::decrement_stock` and
//! `PrestamoStore::mark_returned`), so the check and the mutation cannot be
//! interleaved by concurrent requests.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::prestamo::{CreatePrestamo, EstadoPrestamo, Prestamo, PrestamoDatos, UpdatePrestamo},
    repository::Repository,
};

#[derive(Clone)]
pub struct PrestamosService {
    repository: Repository,
}

impl PrestamosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Prestamo>> {
        self.repository.prestamos.list().await
    }

    pub async fn list_by_usuario(&self, id_usuario: i32) -> AppResult<Vec<Prestamo>> {
        self.repository.prestamos.list_by_usuario(id_usuario).await
    }

    pub async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Prestamo>> {
        self.repository.prestamos.list_by_libro(id_libro).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Prestamo> {
        self.repository
            .prestamos
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Préstamo no encontrado".to_string()))
    }

    /// Create a loan and take one copy of the book.
    ///
    /// Checks run in a fixed order (required ids, usuario exists, libro
    /// exists, stock available) and nothing is persisted past a failing
    /// check.
    pub async fn create(&self, datos: CreatePrestamo) -> AppResult<Prestamo> {
        let id_usuario = datos.id_usuario.unwrap_or(0);
        let id_libro = datos.id_libro.unwrap_or(0);
        if id_usuario == 0 || id_libro == 0 {
            return Err(AppError::Validation(
                "ID de usuario e ID de libro son requeridos".to_string(),
            ));
        }

        self.repository
            .usuarios
            .get(id_usuario)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let libro = self
            .repository
            .libros
            .get(id_libro)
            .await?
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))?;

        if libro.existencia <= 0 {
            return Err(AppError::Validation(
                "No hay existencia disponible para este libro".to_string(),
            ));
        }

        // Conditional decrement: a concurrent loan that emptied the stock
        // between the check above and this statement fails here instead of
        // driving existencia negative.
        if !self.repository.libros.decrement_stock(id_libro).await? {
            return Err(AppError::Validation(
                "No hay existencia disponible para este libro".to_string(),
            ));
        }

        match self
            .repository
            .prestamos
            .create(PrestamoDatos {
                id_usuario,
                id_libro,
                fecha_prestamo: Utc::now().date_naive(),
                fecha_devolucion: datos.fecha_devolucion,
            })
            .await
        {
            Ok(prestamo) => Ok(prestamo),
            Err(error) => {
                // Give the copy back; the loan was never recorded
                if let Err(e) = self.repository.libros.increment_stock(id_libro).await {
                    tracing::warn!("no se pudo reponer la existencia del libro {}: {}", id_libro, e);
                }
                Err(error)
            }
        }
    }

    /// Partial update. Only the activo -> devuelto transition credits the
    /// book's stock back, and at most once; any other transition (including
    /// devuelto -> activo) leaves stock alone.
    pub async fn update(&self, id: i32, datos: UpdatePrestamo) -> AppResult<Prestamo> {
        let actual = self.get(id).await?;

        // Absent or empty estado keeps the current state
        let estado = match datos.estado.as_deref() {
            None | Some("") => actual.estado,
            Some(valor) => valor
                .parse::<EstadoPrestamo>()
                .map_err(AppError::Validation)?,
        };

        if estado == EstadoPrestamo::Devuelto && actual.estado == EstadoPrestamo::Activo {
            // The conditional flip decides which caller performed the
            // return; only that one credits the stock.
            if self.repository.prestamos.mark_returned(id).await? {
                self.repository
                    .libros
                    .increment_stock(actual.id_libro)
                    .await?;
            }
        }

        let fecha_devolucion = datos.fecha_devolucion.or(actual.fecha_devolucion);

        self.repository
            .prestamos
            .update(id, fecha_devolucion, estado)
            .await?
            .ok_or_else(|| AppError::NotFound("Préstamo no encontrado".to_string()))
    }

    /// Delete the loan; a loan removed while still activo restores exactly
    /// one copy, a devuelto one restores nothing.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let eliminado = self
            .repository
            .prestamos
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Préstamo no encontrado".to_string()))?;

        // The removed row decides the credit
        if eliminado.estado == EstadoPrestamo::Activo {
            self.repository
                .libros
                .increment_stock(eliminado.id_libro)
                .await?;
        }

        Ok(())
    }
}
