//! Shared fixture owning the seeded store and the compiled mapping snapshot.
//!
//! One fixture stands in for one test class: it provisions and verifies the
//! backing store once, compiles the canonical override model once, and then
//! mints as many short-lived query contexts as the tests need. Every context
//! observes the same seeded data.

use std::sync::atomic::{AtomicUsize, Ordering};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

use crate::config::HarnessConfig;
use crate::context::QueryContext;
use crate::error::HarnessError;
use crate::mapping::{northwind, MappingModel};
use crate::seed::{self, SeedCounts};
use crate::sql_log::SqlLog;

#[cfg(test)]
mod test;

/// Logical name of the backing store.
pub const STORE_NAME: &str = "Northwind";

// Distinguishes the in-memory stores of fixtures living in one process, so
// parallel tests never share (or double-seed) a database.
static STORE_SEQ: AtomicUsize = AtomicUsize::new(0);

/// Class-scoped owner of one seeded store and its mapping snapshot.
pub struct SharedFixture {
    db: DatabaseConnection,
    model: MappingModel,
    sql_log: SqlLog,
    database_schema: Option<String>,
    seed_counts: SeedCounts,
}

impl SharedFixture {
    /// Builds the fixture for the given logical schema name, reading store
    /// overrides from the environment.
    ///
    /// An empty schema name keeps everything on the store's default schema;
    /// a non-empty name is attached to the store and carried by the compiled
    /// mappings, so queries reference tables through it.
    pub async fn initialize(database_schema: &str) -> Result<Self, HarnessError> {
        Self::initialize_with(database_schema, &HarnessConfig::from_env()).await
    }

    /// Like [`initialize`](Self::initialize) with an explicit configuration.
    pub async fn initialize_with(
        database_schema: &str,
        config: &HarnessConfig,
    ) -> Result<Self, HarnessError> {
        // Compiling the override model never touches the store; a broken
        // table or schema name in the overrides surfaces only when queried.
        let model = northwind::model(database_schema).compile()?;

        let url = config
            .database_url
            .clone()
            .unwrap_or_else(next_memory_url);

        let mut options = ConnectOptions::new(url.clone());
        // A single pooled connection keeps the in-memory store and any
        // attached schema alive and visible for the fixture's whole lifetime.
        options.max_connections(1);
        let db = Database::connect(options).await?;

        if !database_schema.is_empty() {
            attach_schema(&db, &url, database_schema).await?;
        }

        Migrator::up(&db, None).await?;

        let mut counts = seed::counts(&db).await?;
        if counts.is_empty() {
            seed::seed(&db).await?;
            counts = seed::counts(&db).await?;
        }
        counts.verify()?;

        tracing::info!(
            "store ready: {} customers, {} employees, {} orders",
            counts.customers,
            counts.employees,
            counts.orders,
        );

        Ok(Self {
            db,
            model,
            sql_log: SqlLog::new(),
            database_schema: if database_schema.is_empty() {
                None
            } else {
                Some(database_schema.to_string())
            },
            seed_counts: counts,
        })
    }

    /// Mints a fresh read-only context bound to the shared store and the
    /// compiled mapping snapshot.
    pub fn create_context(&self) -> QueryContext<'_> {
        QueryContext::new(&self.db, &self.model, self.sql_log.clone())
    }

    /// Direct handle to the shared store, for assertions against the seeded
    /// base tables.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// The mapping snapshot every context of this fixture queries through.
    pub fn mapping_model(&self) -> &MappingModel {
        &self.model
    }

    /// The SQL recorded by this fixture's contexts.
    pub fn sql_log(&self) -> &SqlLog {
        &self.sql_log
    }

    /// Row counts verified at initialization.
    pub fn seed_counts(&self) -> SeedCounts {
        self.seed_counts
    }

    /// The logical schema name the fixture was initialized with, if any.
    pub fn database_schema(&self) -> Option<&str> {
        self.database_schema.as_deref()
    }

    /// Explicit teardown. Dropping the fixture releases the store as well;
    /// this exists for tests that want the boundary visible.
    pub async fn close(self) -> Result<(), HarnessError> {
        self.db.close().await?;
        Ok(())
    }
}

fn next_memory_url() -> String {
    let id = STORE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!(
        "sqlite:file:{}_{}?mode=memory&cache=shared",
        STORE_NAME.to_lowercase(),
        id
    )
}

/// Attaches the store to itself under the logical schema name, so
/// schema-qualified table references resolve to the seeded tables.
async fn attach_schema(
    db: &DatabaseConnection,
    url: &str,
    schema: &str,
) -> Result<(), HarnessError> {
    let target = url.strip_prefix("sqlite:").unwrap_or(url);
    let sql = format!("ATTACH DATABASE '{target}' AS \"{schema}\"");
    tracing::debug!("attaching schema: {sql}");
    db.execute_unprepared(&sql).await?;
    Ok(())
}
