//! Resenias store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::resenia::{Resenia, ReseniaDatos},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReseniaStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Resenia>>;
    async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Resenia>>;
    async fn get(&self, id: i32) -> AppResult<Option<Resenia>>;
    async fn create(&self, datos: ReseniaDatos) -> AppResult<Resenia>;
    async fn update(
        &self,
        id: i32,
        calificacion: i32,
        comentario: String,
    ) -> AppResult<Option<Resenia>>;
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgReseniaStore {
    pool: Pool<Postgres>,
}

impl PgReseniaStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReseniaStore for PgReseniaStore {
    async fn list(&self) -> AppResult<Vec<Resenia>> {
        sqlx::query_as::<_, Resenia>("SELECT * FROM resenias ORDER BY id_resenia")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener reseñas"))
    }

    async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Resenia>> {
        sqlx::query_as::<_, Resenia>(
            "SELECT * FROM resenias WHERE id_libro = $1 ORDER BY id_resenia",
        )
        .bind(id_libro)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::db("Error al obtener reseñas del libro"))
    }

    async fn get(&self, id: i32) -> AppResult<Option<Resenia>> {
        sqlx::query_as::<_, Resenia>("SELECT * FROM resenias WHERE id_resenia = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener reseña"))
    }

    async fn create(&self, datos: ReseniaDatos) -> AppResult<Resenia> {
        sqlx::query_as::<_, Resenia>(
            r#"
            INSERT INTO resenias (id_libro, id_usuario, calificacion, comentario, fecha)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(datos.id_libro)
        .bind(datos.id_usuario)
        .bind(datos.calificacion)
        .bind(&datos.comentario)
        .bind(datos.fecha)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::db("Error al crear reseña"))
    }

    async fn update(
        &self,
        id: i32,
        calificacion: i32,
        comentario: String,
    ) -> AppResult<Option<Resenia>> {
        sqlx::query_as::<_, Resenia>(
            r#"
            UPDATE resenias SET calificacion = $1, comentario = $2
            WHERE id_resenia = $3
            RETURNING *
            "#,
        )
        .bind(calificacion)
        .bind(&comentario)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar reseña"))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resenias WHERE id_resenia = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::db("Error al eliminar reseña"))?;
        Ok(result.rows_affected() > 0)
    }
}
