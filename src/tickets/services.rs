use std::collections::HashMap;

use sqlx::SqlitePool;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::auth::repo::User;
use crate::error::ApiError;
use crate::tickets::dto::{CreateTicketRequest, TicketView};
use crate::tickets::repo::{Ticket, TicketStatus};

/// Author assigned when a create request names none (the seeded admin).
/// Existing clients rely on this fallback.
const DEFAULT_AUTHOR_ID: i64 = 1;

/// Stored when a close request carries no comment.
const DEFAULT_CLOSING_COMMENT: &str = "Sin comentarios";

/// Rendered when a ticket references a user that no longer exists.
const UNKNOWN_AUTHOR: &str = "Autor desconocido";

pub async fn create_ticket(
    db: &SqlitePool,
    payload: CreateTicketRequest,
) -> Result<Ticket, ApiError> {
    let titulo = payload
        .titulo
        .ok_or_else(|| ApiError::Validation("El campo 'titulo' es obligatorio".into()))?;
    let descripcion = payload
        .descripcion
        .ok_or_else(|| ApiError::Validation("El campo 'descripcion' es obligatorio".into()))?;
    let usuario_id = payload.usuario_id.unwrap_or(DEFAULT_AUTHOR_ID);

    let fecha = unpadded_today();
    let ticket = Ticket::create(db, &titulo, &descripcion, &fecha, usuario_id).await?;

    info!(ticket_id = ticket.id, usuario_id, "ticket created");
    Ok(ticket)
}

/// Project every ticket into its board row, resolving each author's display
/// name through the store. Distinct authors are looked up once per call; a
/// missing author degrades to a fixed placeholder instead of failing the
/// whole listing.
pub async fn list_tickets(db: &SqlitePool) -> Result<Vec<TicketView>, ApiError> {
    let tickets = Ticket::list_all(db).await?;

    let mut authors: HashMap<i64, Option<String>> = HashMap::new();
    let mut views = Vec::with_capacity(tickets.len());
    for t in tickets {
        let autor = match authors.get(&t.usuario_id) {
            Some(cached) => cached.clone(),
            None => {
                let autor = match User::find_by_id(db, t.usuario_id).await? {
                    Some(user) => user.nombre_completo,
                    None => {
                        warn!(
                            ticket_id = t.id,
                            usuario_id = t.usuario_id,
                            "ticket references a missing author"
                        );
                        Some(UNKNOWN_AUTHOR.to_string())
                    }
                };
                authors.insert(t.usuario_id, autor.clone());
                autor
            }
        };

        views.push(TicketView {
            id: t.id,
            titulo: t.titulo,
            descripcion: t.descripcion,
            estado: t.estado,
            fecha: t.fecha_creacion,
            autor,
            comentario_cierre: t.comentario_cierre,
        });
    }

    Ok(views)
}

/// Close a ticket, recording the resolution. An unknown id mutates nothing.
/// A ticket that is already closed may be closed again; the comment is
/// overwritten (last write wins, matching the store's single-record model).
pub async fn close_ticket(
    db: &SqlitePool,
    ticket_id: i64,
    comentario: Option<String>,
) -> Result<Ticket, ApiError> {
    let mut ticket = Ticket::find_by_id(db, ticket_id)
        .await?
        .ok_or(ApiError::TicketNotFound)?;

    ticket.estado = TicketStatus::Closed;
    ticket.comentario_cierre = Some(match comentario {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_CLOSING_COMMENT.to_string(),
    });
    ticket.update(db).await?;

    info!(ticket_id, "ticket closed");
    Ok(ticket)
}

// Unpadded on purpose; the existing client renders this exact form.
fn unpadded_today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format!("{}-{}-{}", now.year(), u8::from(now.month()), now.day())
}
