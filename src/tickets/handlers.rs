use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::ApiError,
    state::AppState,
    tickets::{
        dto::{CloseTicketRequest, CreateTicketRequest, MensajeResponse, TicketView},
        services,
    },
};

pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(list_tickets).post(create_ticket))
        .route("/tickets/:id/cerrar", put(close_ticket))
}

#[instrument(skip(state))]
pub async fn list_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketView>>, ApiError> {
    let views = services::list_tickets(&state.db).await?;
    Ok(Json(views))
}

#[instrument(skip(state, payload))]
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(payload): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<MensajeResponse>), ApiError> {
    services::create_ticket(&state.db, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MensajeResponse {
            mensaje: "Ticket creado exitosamente".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn close_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<CloseTicketRequest>>,
) -> Result<Json<MensajeResponse>, ApiError> {
    let comentario = payload.and_then(|Json(body)| body.comentario);
    services::close_ticket(&state.db, id, comentario).await?;

    Ok(Json(MensajeResponse {
        mensaje: "Ticket cerrado".into(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{app::build_app, state::AppState};

    async fn request(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let res = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn create_list_close_round_trip() {
        let app = build_app(AppState::in_memory().await);

        let (status, body) = request(
            &app,
            Method::POST,
            "/api/tickets",
            Some(r#"{"titulo":"Impresora rota","descripcion":"No imprime"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["mensaje"], "Ticket creado exitosamente");

        let (status, body) = request(&app, Method::GET, "/api/tickets", None).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        let ticket = &list[0];
        assert_eq!(ticket["titulo"], "Impresora rota");
        assert_eq!(ticket["descripcion"], "No imprime");
        assert_eq!(ticket["estado"], "Abierto");
        assert_eq!(ticket["autor"], "Administrador");
        assert_eq!(ticket["comentario_cierre"], serde_json::Value::Null);

        let id = ticket["id"].as_i64().unwrap();
        let (status, body) = request(
            &app,
            Method::PUT,
            &format!("/api/tickets/{id}/cerrar"),
            Some(r#"{"comentario":"Resuelto"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mensaje"], "Ticket cerrado");

        let (_, body) = request(&app, Method::GET, "/api/tickets", None).await;
        let ticket = &body.as_array().unwrap()[0];
        assert_eq!(ticket["estado"], "Cerrado");
        assert_eq!(ticket["comentario_cierre"], "Resuelto");
    }

    #[tokio::test]
    async fn create_without_descripcion_is_400() {
        let app = build_app(AppState::in_memory().await);

        let (status, body) = request(
            &app,
            Method::POST,
            "/api/tickets",
            Some(r#"{"titulo":"Sin detalle"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["mensaje"], "El campo 'descripcion' es obligatorio");
    }

    #[tokio::test]
    async fn closing_an_unknown_ticket_is_404() {
        let app = build_app(AppState::in_memory().await);

        let (status, body) = request(
            &app,
            Method::PUT,
            "/api/tickets/999/cerrar",
            Some(r#"{"comentario":"x"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["mensaje"], "Ticket no encontrado");
    }

    #[tokio::test]
    async fn closing_without_a_body_uses_the_default_comment() {
        let app = build_app(AppState::in_memory().await);

        request(
            &app,
            Method::POST,
            "/api/tickets",
            Some(r#"{"titulo":"A","descripcion":"B"}"#),
        )
        .await;
        let (status, _) = request(&app, Method::PUT, "/api/tickets/1/cerrar", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = request(&app, Method::GET, "/api/tickets", None).await;
        let ticket = &body.as_array().unwrap()[0];
        assert_eq!(ticket["comentario_cierre"], "Sin comentarios");
    }

    #[tokio::test]
    async fn listing_an_empty_store_is_an_empty_array() {
        let app = build_app(AppState::in_memory().await);

        let (status, body) = request(&app, Method::GET, "/api/tickets", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }
}
