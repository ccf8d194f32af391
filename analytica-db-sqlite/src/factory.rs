use async_trait::async_trait;

use analytica_core::db::{ProviderConfig, ProviderFactory};
use analytica_core::{ProviderError, StateProvider};

use crate::repository::SqliteStateRepository;

/// Turns a `connection_string` into a sqlx SQLite URL.
///
/// * `":memory:"` → `sqlite::memory:`
/// * a value already starting with `sqlite:` is used unchanged
/// * anything else is a file path, created when missing
pub fn database_url(connection_string: &str) -> String {
    if connection_string == ":memory:" {
        "sqlite::memory:".to_string()
    } else if connection_string.starts_with("sqlite:") {
        connection_string.to_string()
    } else {
        format!("sqlite:{}?mode=rwc", connection_string)
    }
}

/// [`ProviderFactory`] for SQLite.
///
/// Register this with a [`analytica_core::db::ProviderRegistry`] to make the
/// `"sqlite"` backend available:
///
/// ```rust,no_run
/// use analytica_core::db::ProviderRegistry;
/// use analytica_db_sqlite::SqliteProviderFactory;
///
/// let mut registry = ProviderRegistry::new();
/// registry.register(Box::new(SqliteProviderFactory));
/// ```
pub struct SqliteProviderFactory;

#[async_trait]
impl ProviderFactory for SqliteProviderFactory {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    /// Opens the database described by `config.connection_string` and runs
    /// the embedded migration.
    async fn create(
        &self,
        config: &ProviderConfig,
    ) -> Result<Box<dyn StateProvider>, ProviderError> {
        let url = database_url(&config.connection_string);
        tracing::debug!(%url, "opening sqlite state store");

        let repo = SqliteStateRepository::new(&url).await?;
        repo.run_migrations().await?;
        Ok(Box::new(repo))
    }
}

#[cfg(test)]
mod tests {
    use analytica_core::db::{ProviderConfig, ProviderFactory};
    use pretty_assertions::assert_eq;

    use super::{SqliteProviderFactory, database_url};

    #[test]
    fn backend_name_is_sqlite() {
        assert_eq!(SqliteProviderFactory.backend_name(), "sqlite");
    }

    #[test]
    fn database_url_maps_connection_strings() {
        assert_eq!(database_url(":memory:"), "sqlite::memory:");
        assert_eq!(database_url("states.db"), "sqlite:states.db?mode=rwc");
        assert_eq!(database_url("sqlite:other.db"), "sqlite:other.db");
    }

    #[tokio::test]
    async fn creates_in_memory_provider() {
        let config = ProviderConfig {
            backend: "sqlite".to_string(),
            connection_string: ":memory:".to_string(),
        };

        let provider = SqliteProviderFactory
            .create(&config)
            .await
            .expect("failed to create in-memory provider");

        assert!(provider.list_states().await.unwrap().is_empty());
    }
}
