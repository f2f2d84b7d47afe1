use serde::{Deserialize, Serialize};

use crate::tickets::repo::TicketStatus;

/// Request body for ticket creation. Required fields are `Option` here so a
/// missing one maps to the service's 400 instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub usuario_id: Option<i64>,
}

/// Request body for closing a ticket; the whole body may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct CloseTicketRequest {
    pub comentario: Option<String>,
}

/// One row of the ticket board, author name already resolved.
#[derive(Debug, Serialize)]
pub struct TicketView {
    pub id: i64,
    pub titulo: String,
    pub descripcion: String,
    pub estado: TicketStatus,
    pub fecha: String,
    pub autor: Option<String>,
    pub comentario_cierre: Option<String>,
}

/// Acknowledgement body used by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MensajeResponse {
    pub mensaje: String,
}
