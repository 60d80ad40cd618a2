//! Libros store
//!
//! The stock mutations the loan lifecycle relies on are single conditional
//! statements (`decrement_stock` only succeeds while `existencia > 0`), so
//! concurrent loans cannot drive the stock negative.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::libro::{Libro, LibroDatos},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibroStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Libro>>;
    /// Only books with at least one copy in stock
    async fn list_available(&self) -> AppResult<Vec<Libro>>;
    async fn get(&self, id: i32) -> AppResult<Option<Libro>>;
    async fn create(&self, datos: LibroDatos) -> AppResult<Libro>;
    async fn update(&self, id: i32, datos: LibroDatos) -> AppResult<Option<Libro>>;
    /// Overwrite the stock count (the `/existencia` endpoint)
    async fn set_stock(&self, id: i32, existencia: i32) -> AppResult<Option<Libro>>;
    /// Take one copy; returns false when none is left (or the book is gone)
    async fn decrement_stock(&self, id: i32) -> AppResult<bool>;
    /// Give one copy back
    async fn increment_stock(&self, id: i32) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgLibroStore {
    pool: Pool<Postgres>,
}

impl PgLibroStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LibroStore for PgLibroStore {
    async fn list(&self) -> AppResult<Vec<Libro>> {
        sqlx::query_as::<_, Libro>("SELECT * FROM libros ORDER BY id_libro")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener libros"))
    }

    async fn list_available(&self) -> AppResult<Vec<Libro>> {
        sqlx::query_as::<_, Libro>("SELECT * FROM libros WHERE existencia > 0 ORDER BY id_libro")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener libros disponibles"))
    }

    async fn get(&self, id: i32) -> AppResult<Option<Libro>> {
        sqlx::query_as::<_, Libro>("SELECT * FROM libros WHERE id_libro = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener libro"))
    }

    async fn create(&self, datos: LibroDatos) -> AppResult<Libro> {
        sqlx::query_as::<_, Libro>(
            r#"
            INSERT INTO libros (titulo, autor, isbn, existencia)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&datos.titulo)
        .bind(&datos.autor)
        .bind(&datos.isbn)
        .bind(datos.existencia)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::db("Error al crear libro"))
    }

    async fn update(&self, id: i32, datos: LibroDatos) -> AppResult<Option<Libro>> {
        sqlx::query_as::<_, Libro>(
            r#"
            UPDATE libros SET titulo = $1, autor = $2, isbn = $3, existencia = $4
            WHERE id_libro = $5
            RETURNING *
            "#,
        )
        .bind(&datos.titulo)
        .bind(&datos.autor)
        .bind(&datos.isbn)
        .bind(datos.existencia)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar libro"))
    }

    async fn set_stock(&self, id: i32, existencia: i32) -> AppResult<Option<Libro>> {
        sqlx::query_as::<_, Libro>(
            "UPDATE libros SET existencia = $1 WHERE id_libro = $2 RETURNING *",
        )
        .bind(existencia)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar existencia"))
    }

    async fn decrement_stock(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE libros SET existencia = existencia - 1 WHERE id_libro = $1 AND existencia > 0",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar existencia"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn increment_stock(&self, id: i32) -> AppResult<()> {
        sqlx::query("UPDATE libros SET existencia = existencia + 1 WHERE id_libro = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::db("Error al actualizar existencia"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM libros WHERE id_libro = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::db("Error al eliminar libro"))?;
        Ok(result.rows_affected() > 0)
    }
}
