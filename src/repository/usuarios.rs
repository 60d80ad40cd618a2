//! Usuarios store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::usuario::{Usuario, UsuarioDatos},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsuarioStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Usuario>>;
    async fn get(&self, id: i32) -> AppResult<Option<Usuario>>;
    async fn create(&self, datos: UsuarioDatos) -> AppResult<Usuario>;
    async fn update(&self, id: i32, datos: UsuarioDatos) -> AppResult<Option<Usuario>>;
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgUsuarioStore {
    pool: Pool<Postgres>,
}

impl PgUsuarioStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioStore for PgUsuarioStore {
    async fn list(&self) -> AppResult<Vec<Usuario>> {
        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios ORDER BY id_usuario")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener usuarios"))
    }

    async fn get(&self, id: i32) -> AppResult<Option<Usuario>> {
        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id_usuario = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener usuario"))
    }

    async fn create(&self, datos: UsuarioDatos) -> AppResult<Usuario> {
        sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (nombre, email, telefono) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&datos.nombre)
        .bind(&datos.email)
        .bind(&datos.telefono)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::db("Error al crear usuario"))
    }

    async fn update(&self, id: i32, datos: UsuarioDatos) -> AppResult<Option<Usuario>> {
        sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuarios SET nombre = $1, email = $2, telefono = $3
            WHERE id_usuario = $4
            RETURNING *
            "#,
        )
        .bind(&datos.nombre)
        .bind(&datos.email)
        .bind(&datos.telefono)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar usuario"))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id_usuario = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::db("Error al eliminar usuario"))?;
        Ok(result.rows_affected() > 0)
    }
}
