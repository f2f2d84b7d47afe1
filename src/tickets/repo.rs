use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A ticket opens, and it can only ever close. Re-closing is permitted and
/// overwrites the closing comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum TicketStatus {
    #[serde(rename = "Abierto")]
    #[sqlx(rename = "Abierto")]
    Open,
    #[serde(rename = "Cerrado")]
    #[sqlx(rename = "Cerrado")]
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub estado: TicketStatus,
    // Kept as text in the unpadded `Y-M-D` form the client renders.
    pub fecha_creacion: String,
    pub comentario_cierre: Option<String>,
    pub usuario_id: i64,
}

impl Ticket {
    pub async fn create(
        db: &SqlitePool,
        titulo: &str,
        descripcion: &str,
        fecha_creacion: &str,
        usuario_id: i64,
    ) -> Result<Ticket, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (titulo, descripcion, estado, fecha_creacion, usuario_id)
            VALUES (?, ?, 'Abierto', ?, ?)
            RETURNING id, titulo, descripcion, estado, fecha_creacion, comentario_cierre, usuario_id
            "#,
        )
        .bind(titulo)
        .bind(descripcion)
        .bind(fecha_creacion)
        .bind(usuario_id)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, titulo, descripcion, estado, fecha_creacion, comentario_cierre, usuario_id
            FROM tickets
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Full scan, store order; the listing imposes no sorting.
    pub async fn list_all(db: &SqlitePool) -> Result<Vec<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, titulo, descripcion, estado, fecha_creacion, comentario_cierre, usuario_id
            FROM tickets
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Whole-record replace by id.
    pub async fn update(&self, db: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE tickets
            SET titulo = ?, descripcion = ?, estado = ?, fecha_creacion = ?,
                comentario_cierre = ?, usuario_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&self.titulo)
        .bind(&self.descripcion)
        .bind(self.estado)
        .bind(&self.fecha_creacion)
        .bind(&self.comentario_cierre)
        .bind(self.usuario_id)
        .bind(self.id)
        .execute(db)
        .await?;
        Ok(())
    }
}
