use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let mut config = DatabaseConfig::new(db_url);
    if let Some(max) = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok()) {
        config = config.with_max_connections(max);
    }

    let pool = create_postgres_pool(&config).await?;
    tracing::info!(
        "Database pool ready with up to {} connections",
        config.max_connections
    );
    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_max_connections() {
        assert_eq!(parse_max_connections(Some(" 12 ".to_string())), Some(12));
        assert_eq!(parse_max_connections(Some("many".to_string())), None);
        assert_eq!(parse_max_connections(None), None);
    }
}
