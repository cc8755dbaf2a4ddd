//! Connection settings and backend selection

use std::env;

use crate::domain::DataAccessError;

/// SQL engines the mapper stack ships drivers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportedProvider {
    #[default]
    Postgres,
    Sqlite,
}

impl SupportedProvider {
    /// Parses a provider name. Any unrecognized value selects the default
    /// engine rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => SupportedProvider::Sqlite,
            "postgres" | "postgresql" | "pg" => SupportedProvider::Postgres,
            _ => SupportedProvider::default(),
        }
    }

    pub fn scheme(&self) -> &'static str {
        match self {
            SupportedProvider::Postgres => "postgres",
            SupportedProvider::Sqlite => "sqlite",
        }
    }
}

/// Connection configuration consumed by [`super::context::SqlConnector`].
#[derive(Debug, Clone)]
pub struct DbSettings {
    connection_string: String,
    provider: SupportedProvider,
    max_connections: Option<u32>,
}

impl DbSettings {
    /// Fails fast on a blank connection string; surrounding whitespace is
    /// trimmed.
    pub fn new(
        connection_string: impl Into<String>,
        provider: SupportedProvider,
    ) -> Result<Self, DataAccessError> {
        let connection_string = connection_string.into().trim().to_string();
        if connection_string.is_empty() {
            return Err(DataAccessError::Validation(
                "connection string must not be empty".to_string(),
            ));
        }
        Ok(Self {
            connection_string,
            provider,
            max_connections: None,
        })
    }

    /// Reads `DATABASE_URL` (required), `DATABASE_PROVIDER` and
    /// `DATABASE_MAX_CONNECTIONS` (optional).
    pub fn from_env() -> Result<Self, DataAccessError> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            DataAccessError::Validation("DATABASE_URL is not set".to_string())
        })?;
        let provider = env::var("DATABASE_PROVIDER")
            .map(|name| SupportedProvider::from_name(&name))
            .unwrap_or_default();

        let mut settings = Self::new(url, provider)?;
        if let Some(max) = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            settings = settings.with_max_connections(max);
        }
        Ok(settings)
    }

    /// Pool sizing passthrough to the provider's connect options.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn provider(&self) -> SupportedProvider {
        self.provider
    }

    pub fn max_connections(&self) -> Option<u32> {
        self.max_connections
    }

    /// Backend selection, applied exactly once at connect time: a connection
    /// string that already names a scheme wins; otherwise the configured
    /// provider's scheme is prepended.
    pub fn resolved_url(&self) -> String {
        if self.connection_string.contains("://") {
            self.connection_string.clone()
        } else {
            format!("{}://{}", self.provider.scheme(), self.connection_string)
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn trims_connection_string() {
        let settings =
            DbSettings::new("  localhost/app  ", SupportedProvider::Postgres).unwrap();
        assert_eq!(settings.connection_string(), "localhost/app");
    }

    #[test]
    fn rejects_blank_connection_string() {
        let result = DbSettings::new("   ", SupportedProvider::Postgres);
        assert!(matches!(result, Err(DataAccessError::Validation(_))));
    }

    #[test]
    fn unrecognized_provider_name_falls_back_to_default() {
        assert_eq!(
            SupportedProvider::from_name("oracle"),
            SupportedProvider::Postgres
        );
        assert_eq!(
            SupportedProvider::from_name("SQLite"),
            SupportedProvider::Sqlite
        );
        assert_eq!(SupportedProvider::from_name(""), SupportedProvider::Postgres);
    }

    #[test]
    fn explicit_scheme_wins_over_provider() {
        let settings =
            DbSettings::new("sqlite::memory:", SupportedProvider::Postgres).unwrap();
        assert_eq!(settings.resolved_url(), "sqlite::memory:");

        let settings = DbSettings::new("localhost/app", SupportedProvider::Sqlite).unwrap();
        assert_eq!(settings.resolved_url(), "sqlite://localhost/app");
    }

    #[test]
    #[serial]
    fn from_env_reads_url_and_provider() {
        unsafe {
            env::set_var("DATABASE_URL", "localhost/app");
            env::set_var("DATABASE_PROVIDER", "sqlite");
            env::set_var("DATABASE_MAX_CONNECTIONS", "3");
        }

        let settings = DbSettings::from_env().unwrap();
        assert_eq!(settings.connection_string(), "localhost/app");
        assert_eq!(settings.provider(), SupportedProvider::Sqlite);
        assert_eq!(settings.max_connections(), Some(3));

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DATABASE_PROVIDER");
            env::remove_var("DATABASE_MAX_CONNECTIONS");
        }
    }

    #[test]
    #[serial]
    fn from_env_requires_database_url() {
        unsafe {
            env::remove_var("DATABASE_URL");
        }
        assert!(matches!(
            DbSettings::from_env(),
            Err(DataAccessError::Validation(_))
        ));
    }
}
