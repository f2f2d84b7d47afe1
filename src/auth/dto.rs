use serde::{Deserialize, Serialize};

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login. There is no token: clients
/// keep the returned id and send it along with later requests.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub mensaje: String,
    pub usuario: Option<String>,
    pub id: i64,
}
