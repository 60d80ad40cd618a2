//! Resenia management service
//!
//! Reviews only require that the referenced libro and usuario exist; no
//! prior loan is needed.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::resenia::{CreateResenia, Resenia, ReseniaDatos, UpdateResenia},
    repository::Repository,
};

const RANGO_CALIFICACION: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Clone)]
pub struct ReseniasService {
    repository: Repository,
}

impl ReseniasService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Resenia>> {
        self.repository.resenias.list().await
    }

    pub async fn list_by_libro(&self, id_libro: i32) -> AppResult<Vec<Resenia>> {
        self.repository.resenias.list_by_libro(id_libro).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Resenia> {
        self.repository
            .resenias
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reseña no encontrada".to_string()))
    }

    /// Checks run in order: required fields, libro exists, usuario exists,
    /// calificación in range.
    pub async fn create(&self, datos: CreateResenia) -> AppResult<Resenia> {
        let id_libro = datos.id_libro.unwrap_or(0);
        let id_usuario = datos.id_usuario.unwrap_or(0);
        let calificacion = datos.calificacion.unwrap_or(0);
        if id_libro == 0 || id_usuario == 0 || calificacion == 0 {
            return Err(AppError::Validation(
                "ID de libro, ID de usuario y calificación son requeridos".to_string(),
            ));
        }

        self.repository
            .libros
            .get(id_libro)
            .await?
            .ok_or_else(|| AppError::NotFound("Libro no encontrado".to_string()))?;

        self.repository
            .usuarios
            .get(id_usuario)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        if !RANGO_CALIFICACION.contains(&calificacion) {
            return Err(AppError::Validation(
                "La calificación debe estar entre 1 y 5".to_string(),
            ));
        }

        self.repository
            .resenias
            .create(ReseniaDatos {
                id_libro,
                id_usuario,
                calificacion,
                comentario: datos.comentario.unwrap_or_default(),
                fecha: Utc::now().date_naive(),
            })
            .await
    }

    pub async fn update(&self, id: i32, datos: UpdateResenia) -> AppResult<Resenia> {
        let actual = self.get(id).await?;

        // A supplied nonzero calificación must be in range; zero keeps the
        // stored one
        if let Some(calificacion) = datos.calificacion {
            if calificacion != 0 && !RANGO_CALIFICACION.contains(&calificacion) {
                return Err(AppError::Validation(
                    "La calificación debe estar entre 1 y 5".to_string(),
                ));
            }
        }

        let calificacion = match datos.calificacion {
            Some(valor) if valor != 0 => valor,
            _ => actual.calificacion,
        };
        let comentario = datos.comentario.unwrap_or(actual.comentario);

        self.repository
            .resenias
            .update(id, calificacion, comentario)
            .await?
            .ok_or_else(|| AppError::NotFound("Reseña no encontrada".to_string()))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repository.resenias.delete(id).await? {
            return Err(AppError::NotFound("Reseña no encontrada".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::models::libro::CreateLibro;
    use crate::models::usuario::CreateUsuario;
    use crate::repository::libros::MockLibroStore;
    use crate::repository::prestamos::MockPrestamoStore;
    use crate::repository::resenias::MockReseniaStore;
    use crate::repository::usuarios::MockUsuarioStore;
    use crate::services::Services;

    async fn sembrar() -> (Services, i32, i32) {
        let servicios = Services::new(Repository::en_memoria());
        let usuario = servicios
            .usuarios
            .create(CreateUsuario {
                nombre: Some("María García".to_string()),
                email: Some("maria@email.com".to_string()),
                telefono: None,
            })
            .await
            .unwrap();
        let libro = servicios
            .libros
            .create(CreateLibro {
                titulo: Some("Cien años de soledad".to_string()),
                autor: Some("Gabriel García Márquez".to_string()),
                isbn: None,
                existencia: Some(3),
            })
            .await
            .unwrap();
        (servicios, usuario.id_usuario, libro.id_libro)
    }

    fn pedir(id_libro: i32, id_usuario: i32, calificacion: i32) -> CreateResenia {
        CreateResenia {
            id_libro: Some(id_libro),
            id_usuario: Some(id_usuario),
            calificacion: Some(calificacion),
            comentario: Some("Muy buena narrativa".to_string()),
        }
    }

    #[tokio::test]
    async fn create_persiste_la_resenia() {
        let (servicios, id_usuario, id_libro) = sembrar().await;

        let resenia = servicios
            .resenias
            .create(pedir(id_libro, id_usuario, 4))
            .await
            .unwrap();

        assert_eq!(resenia.calificacion, 4);
        assert_eq!(resenia.comentario, "Muy buena narrativa");
        assert_eq!(resenia.fecha, Utc::now().date_naive());
        assert_eq!(servicios.resenias.list_by_libro(id_libro).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_requiere_los_tres_campos() {
        let (servicios, id_usuario, id_libro) = sembrar().await;

        let resultado = servicios
            .resenias
            .create(CreateResenia {
                id_libro: Some(id_libro),
                id_usuario: Some(id_usuario),
                calificacion: None,
                comentario: None,
            })
            .await;

        assert!(matches!(
            resultado,
            Err(AppError::Validation(msg))
                if msg == "ID de libro, ID de usuario y calificación son requeridos"
        ));
    }

    #[tokio::test]
    async fn create_rechaza_calificacion_fuera_de_rango() {
        let (servicios, id_usuario, id_libro) = sembrar().await;

        for fuera in [6, -1] {
            let resultado = servicios
                .resenias
                .create(pedir(id_libro, id_usuario, fuera))
                .await;
            assert!(matches!(
                resultado,
                Err(AppError::Validation(msg))
                    if msg == "La calificación debe estar entre 1 y 5"
            ));
        }
        assert!(servicios.resenias.list().await.unwrap().is_empty());
    }

    // Libro is checked before usuario: the usuario store must not be touched
    #[tokio::test]
    async fn libro_se_verifica_antes_que_usuario() {
        let mut libros = MockLibroStore::new();
        libros.expect_get().with(eq(8)).returning(|_| Ok(None));

        let repository = Repository {
            usuarios: Arc::new(MockUsuarioStore::new()),
            libros: Arc::new(libros),
            prestamos: Arc::new(MockPrestamoStore::new()),
            resenias: Arc::new(MockReseniaStore::new()),
        };

        let resultado = ReseniasService::new(repository).create(pedir(8, 1, 4)).await;

        assert!(matches!(
            resultado,
            Err(AppError::NotFound(msg)) if msg == "Libro no encontrado"
        ));
    }

    #[tokio::test]
    async fn update_calificacion_cero_conserva_la_actual() {
        let (servicios, id_usuario, id_libro) = sembrar().await;
        let resenia = servicios
            .resenias
            .create(pedir(id_libro, id_usuario, 4))
            .await
            .unwrap();

        let actualizada = servicios
            .resenias
            .update(
                resenia.id_resenia,
                UpdateResenia {
                    calificacion: Some(0),
                    comentario: Some("Excelente libro clásico".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(actualizada.calificacion, 4);
        assert_eq!(actualizada.comentario, "Excelente libro clásico");
    }

    #[tokio::test]
    async fn update_rechaza_calificacion_fuera_de_rango() {
        let (servicios, id_usuario, id_libro) = sembrar().await;
        let resenia = servicios
            .resenias
            .create(pedir(id_libro, id_usuario, 4))
            .await
            .unwrap();

        let resultado = servicios
            .resenias
            .update(
                resenia.id_resenia,
                UpdateResenia {
                    calificacion: Some(9),
                    comentario: None,
                },
            )
            .await;

        assert!(matches!(resultado, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_elimina_la_resenia() {
        let (servicios, id_usuario, id_libro) = sembrar().await;
        let resenia = servicios
            .resenias
            .create(pedir(id_libro, id_usuario, 5))
            .await
            .unwrap();

        servicios.resenias.delete(resenia.id_resenia).await.unwrap();

        assert!(matches!(
            servicios.resenias.get(resenia.id_resenia).await,
            Err(AppError::NotFound(_))
        ));
    }
}
