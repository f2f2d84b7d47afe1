use sqlx::SqlitePool;
use tracing::warn;

use crate::auth::repo::User;
use crate::error::ApiError;

/// Validate a username/password pair against the stored users.
///
/// Passwords are stored and compared in plain text; the seeded credentials
/// are what the existing clients log in with, so no hashing happens here.
pub async fn authenticate(
    db: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<User, ApiError> {
    match User::find_by_credentials(db, username, password).await? {
        Some(user) => Ok(user),
        None => {
            warn!(%username, "login rejected");
            Err(ApiError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn seeded_credentials_authenticate() {
        let state = AppState::in_memory().await;

        let admin = authenticate(&state.db, "admin", "123").await.unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.nombre_completo.as_deref(), Some("Administrador"));

        let dylan = authenticate(&state.db, "dylan", "123").await.unwrap();
        assert_eq!(dylan.nombre_completo.as_deref(), Some("Dylan Gorosito"));

        let soporte = authenticate(&state.db, "soporte1", "password1")
            .await
            .unwrap();
        assert_eq!(soporte.nombre_completo.as_deref(), Some("Soporte Técnico"));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let state = AppState::in_memory().await;
        let err = authenticate(&state.db, "admin", "wrong").await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn unknown_user_is_unauthorized() {
        let state = AppState::in_memory().await;
        let err = authenticate(&state.db, "nobody", "123").await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn valid_username_with_another_users_password_fails() {
        let state = AppState::in_memory().await;
        let err = authenticate(&state.db, "admin", "password1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
