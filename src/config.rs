use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // The store is a process-local SQLite file; `mode=rwc` creates it on
        // first start so the server comes up without any configuration.
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:gestion_tickets.db?mode=rwc".into());
        Ok(Self { database_url })
    }
}
