use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        services,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = services::authenticate(&state.db, &payload.username, &payload.password).await?;

    info!(user_id = user.id, username = %user.username, "login ok");
    Ok(Json(LoginResponse {
        mensaje: "Login exitoso".into(),
        usuario: user.nombre_completo,
        id: user.id,
    }))
}
