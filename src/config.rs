use std::env;

/// Name of the environment variable that redirects fixtures to an external
/// SQLite database instead of a per-fixture in-memory store.
pub const DATABASE_URL_VAR: &str = "NORTHWIND_TEST_DATABASE_URL";

/// Environment-driven overrides for the harness backing store.
///
/// Everything is optional: with no environment set, each fixture provisions
/// its own uniquely named in-memory store. Pointing `NORTHWIND_TEST_DATABASE_URL`
/// at a file-backed SQLite database is useful when a failing test's data needs
/// inspection after the run.
#[derive(Debug, Clone, Default)]
pub struct HarnessConfig {
    pub database_url: Option<String>,
}

impl HarnessConfig {
    /// Reads the configuration from the environment, honoring a `.env` file
    /// when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            database_url: env::var(DATABASE_URL_VAR).ok(),
        }
    }
}
