//! Prestamos store
//!
//! `mark_returned` and `delete` are written so that exactly one caller can
//! win the state transition: the stock credit in the service layer is tied
//! to the statement that actually flipped or removed the row.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::prestamo::{EstadoPrestamo, Prestamo, PrestamoDatos},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrestamoStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Prestamo>>;
    async fn list_by_usuario(&self, id_usuario: i32) -> AppResult<Vec<Prestamo>>;
    async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Prestamo>>;
    async fn get(&self, id: i32) -> AppResult<Option<Prestamo>>;
    /// Insert a new loan with `estado = activo`
    async fn create(&self, datos: PrestamoDatos) -> AppResult<Prestamo>;
    async fn update(
        &self,
        id: i32,
        fecha_devolucion: Option<NaiveDate>,
        estado: EstadoPrestamo,
    ) -> AppResult<Option<Prestamo>>;
    /// Flip `activo` to `devuelto`; returns false when the loan was not active
    async fn mark_returned(&self, id: i32) -> AppResult<bool>;
    /// Remove the loan and hand back the removed row
    async fn delete(&self, id: i32) -> AppResult<Option<Prestamo>>;
}

/// Raw row; `estado` is stored as text
#[derive(FromRow)]
struct PrestamoRow {
    id_prestamo: i32,
    id_usuario: i32,
    id_libro: i32,
    fecha_prestamo: NaiveDate,
    fecha_devolucion: Option<NaiveDate>,
    estado: String,
}

impl TryFrom<PrestamoRow> for Prestamo {
    type Error = AppError;

    fn try_from(row: PrestamoRow) -> Result<Self, Self::Error> {
        let estado = row.estado.parse().map_err(AppError::Internal)?;
        Ok(Prestamo {
            id_prestamo: row.id_prestamo,
            id_usuario: row.id_usuario,
            id_libro: row.id_libro,
            fecha_prestamo: row.fecha_prestamo,
            fecha_devolucion: row.fecha_devolucion,
            estado,
        })
    }
}

pub struct PgPrestamoStore {
    pool: Pool<Postgres>,
}

impl PgPrestamoStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn collect(rows: Vec<PrestamoRow>) -> AppResult<Vec<Prestamo>> {
        rows.into_iter().map(Prestamo::try_from).collect()
    }
}

#[async_trait]
impl PrestamoStore for PgPrestamoStore {
    async fn list(&self) -> AppResult<Vec<Prestamo>> {
        let rows =
            sqlx::query_as::<_, PrestamoRow>("SELECT * FROM prestamos ORDER BY id_prestamo")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::db("Error al obtener préstamos"))?;
        Self::collect(rows)
    }

    async fn list_by_usuario(&self, id_usuario: i32) -> AppResult<Vec<Prestamo>> {
        let rows = sqlx::query_as::<_, PrestamoRow>(
            "SELECT * FROM prestamos WHERE id_usuario = $1 ORDER BY id_prestamo",
        )
        .bind(id_usuario)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::db("Error al obtener préstamos del usuario"))?;
        Self::collect(rows)
    }

    async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Prestamo>> {
        let rows = sqlx::query_as::<_, PrestamoRow>(
            "SELECT * FROM prestamos WHERE id_libro = $1 ORDER BY id_prestamo",
        )
        .bind(id_libro)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::db("Error al obtener préstamos del libro"))?;
        Self::collect(rows)
    }

    async fn get(&self, id: i32) -> AppResult<Option<Prestamo>> {
        sqlx::query_as::<_, PrestamoRow>("SELECT * FROM prestamos WHERE id_prestamo = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::db("Error al obtener préstamo"))?
            .map(Prestamo::try_from)
            .transpose()
    }

    async fn create(&self, datos: PrestamoDatos) -> AppResult<Prestamo> {
        let row = sqlx::query_as::<_, PrestamoRow>(
            r#"
            INSERT INTO prestamos (id_usuario, id_libro, fecha_prestamo, fecha_devolucion, estado)
            VALUES ($1, $2, $3, $4, 'activo')
            RETURNING *
            "#,
        )
        .bind(datos.id_usuario)
        .bind(datos.id_libro)
        .bind(datos.fecha_prestamo)
        .bind(datos.fecha_devolucion)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::db("Error al crear préstamo"))?;
        Prestamo::try_from(row)
    }

    async fn update(
        &self,
        id: i32,
        fecha_devolucion: Option<NaiveDate>,
        estado: EstadoPrestamo,
    ) -> AppResult<Option<Prestamo>> {
        sqlx::query_as::<_, PrestamoRow>(
            r#"
            UPDATE prestamos SET fecha_devolucion = $1, estado = $2
            WHERE id_prestamo = $3
            RETURNING *
            "#,
        )
        .bind(fecha_devolucion)
        .bind(estado.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar préstamo"))?
        .map(Prestamo::try_from)
        .transpose()
    }

    async fn mark_returned(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE prestamos SET estado = 'devuelto' WHERE id_prestamo = $1 AND estado = 'activo'",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::db("Error al actualizar préstamo"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Prestamo>> {
        sqlx::query_as::<_, PrestamoRow>(
            "DELETE FROM prestamos WHERE id_prestamo = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::db("Error al eliminar préstamo"))?
        .map(Prestamo::try_from)
        .transpose()
    }
}
