use sqlx::SqlitePool;
use tracing::info;

/// Demo accounts inserted on first start against an empty store.
const DEMO_USERS: [(&str, &str, &str); 3] = [
    ("admin", "123", "Administrador"),
    ("dylan", "123", "Dylan Gorosito"),
    ("soporte1", "password1", "Soporte Técnico"),
];

/// Insert the demo users if and only if the user table is empty.
///
/// Runs after migrations and before the listener binds, so the
/// check-then-insert needs no concurrency guard. Safe across restarts.
pub async fn run(db: &SqlitePool) -> anyhow::Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
        .fetch_one(db)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    info!("empty user table, creating demo users");
    for (username, password, nombre_completo) in DEMO_USERS {
        sqlx::query("INSERT INTO usuarios (username, password, nombre_completo) VALUES (?, ?, ?)")
            .bind(username)
            .bind(password)
            .bind(nombre_completo)
            .execute(db)
            .await?;
    }
    info!(users = DEMO_USERS.len(), "demo users created");

    Ok(())
}
