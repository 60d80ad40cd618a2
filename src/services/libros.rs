//! Libro management service

use crate::{
    error::{AppError, AppResult},
    models::libro::{CreateLibro, Libro, LibroDatos, UpdateExistencia, UpdateLibro},
    repository::Repository,
};

use super::or_keep;

#[derive(Clone)]
pub struct LibrosService {
    repository: Repository,
}

impl LibrosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Libro>> {
        self.repository.libros.list().await
    }

    pub async fn list_available(&self) -> AppResult<Vec<Libro>> {
        self.repository.libros.list_available().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Libro> {
        self.repository
            .libros
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))
    }

    pub async fn create(&self, datos: CreateLibro) -> AppResult<Libro> {
        let titulo = datos.titulo.unwrap_or_default();
        let autor = datos.autor.unwrap_or_default();
        if titulo.is_empty() || autor.is_empty() {
            return Err(AppError::Validation(
                "Título y autor son requeridos".to_string(),
            ));
        }

        self.repository
            .libros
            .create(LibroDatos {
                titulo,
                autor,
                isbn: datos.isbn.unwrap_or_default(),
                existencia: datos.existencia.unwrap_or(0),
            })
            .await
    }

    pub async fn update(&self, id: i32, datos: UpdateLibro) -> AppResult<Libro> {
        let actual = self.get(id).await?;

        let datos = LibroDatos {
            titulo: or_keep(datos.titulo, actual.titulo),
            autor: or_keep(datos.autor, actual.autor),
            isbn: or_keep(datos.isbn, actual.isbn),
            // A supplied existencia is applied even when it is zero
            existencia: datos.existencia.unwrap_or(actual.existencia),
        };

        self.repository
            .libros
            .update(id, datos)
            .await?
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))
    }

    /// Stock-only update (`PUT /libros/:id/existencia`)
    pub async fn set_stock(&self, id: i32, datos: UpdateExistencia) -> AppResult<Libro> {
        let existencia = match datos.existencia {
            Some(valor) if valor >= 0 => valor,
            _ => {
                return Err(AppError::Validation(
                    "La existencia debe ser un número mayor o igual a 0".to_string(),
                ))
            }
        };

        self.get(id).await?;

        self.repository
            .libros
            .set_stock(id, existencia)
            .await?
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.libros.delete(id).await? {
            return Err(AppError::NotFound("Libro no encontrado".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servicio() -> LibrosService {
        LibrosService::new(Repository::en_memoria())
    }

    async fn sembrar_libro(servicio: &LibrosService, existencia: i32) -> Libro {
        servicio
            .create(CreateLibro {
                titulo: Some("El Quijote".to_string()),
                autor: Some("Miguel de Cervantes".to_string()),
                isbn: Some("978-84-376-0494-7".to_string()),
                existencia: Some(existencia),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_requiere_titulo_y_autor() {
        let servicio = servicio();

        let resultado = servicio
            .create(CreateLibro {
                titulo: None,
                autor: Some("Miguel de Cervantes".to_string()),
                isbn: None,
                existencia: None,
            })
            .await;

        assert!(matches!(
            resultado,
            Err(AppError::Validation(msg)) if msg == "Título y autor son requeridos"
        ));
    }

    #[tokio::test]
    async fn list_available_filtra_sin_existencia() {
        let servicio = servicio();
        sembrar_libro(&servicio, 3).await;
        sembrar_libro(&servicio, 0).await;

        let disponibles = servicio.list_available().await.unwrap();

        assert_eq!(disponibles.len(), 1);
        assert_eq!(disponibles[0].existencia, 3);
    }

    #[tokio::test]
    async fn set_stock_rechaza_negativos() {
        let servicio = servicio();
        let libro = sembrar_libro(&servicio, 3).await;

        let resultado = servicio
            .set_stock(
                libro.id_libro,
                UpdateExistencia {
                    existencia: Some(-1),
                },
            )
            .await;

        assert!(matches!(
            resultado,
            Err(AppError::Validation(msg))
                if msg == "La existencia debe ser un número mayor o igual a 0"
        ));
        assert_eq!(servicio.get(libro.id_libro).await.unwrap().existencia, 3);
    }

    #[tokio::test]
    async fn set_stock_requiere_existencia() {
        let servicio = servicio();
        let libro = sembrar_libro(&servicio, 3).await;

        let resultado = servicio
            .set_stock(libro.id_libro, UpdateExistencia { existencia: None })
            .await;

        assert!(matches!(resultado, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn update_aplica_existencia_cero() {
        let servicio = servicio();
        let libro = sembrar_libro(&servicio, 3).await;

        let actualizado = servicio
            .update(
                libro.id_libro,
                UpdateLibro {
                    titulo: None,
                    autor: None,
                    isbn: None,
                    existencia: Some(0),
                },
            )
            .await
            .unwrap();

        assert_eq!(actualizado.titulo, "El Quijote");
        assert_eq!(actualizado.existencia, 0);
    }
}
