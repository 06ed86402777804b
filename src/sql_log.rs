//! Test-scoped SQL statement recorder.
//!
//! Every statement a query context executes is appended here, so a test can
//! inspect exactly what SQL its queries produced. Handles are cheap clones of
//! one shared buffer owned by the fixture.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared, append-only record of the SQL a fixture's contexts executed.
#[derive(Debug, Clone, Default)]
pub struct SqlLog {
    statements: Arc<Mutex<Vec<String>>>,
}

impl SqlLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one executed statement.
    pub(crate) fn record(&self, sql: impl Into<String>) {
        let sql = sql.into();
        tracing::debug!("executing SQL: {sql}");
        self.lock().push(sql);
    }

    /// Snapshot of every statement recorded so far, oldest first.
    pub fn statements(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Discards the recorded statements. Useful between test phases that
    /// assert on the log.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let log = SqlLog::new();
        log.record("SELECT 1");
        log.record("SELECT 2");
        assert_eq!(log.statements(), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn clones_share_the_buffer() {
        let log = SqlLog::new();
        let handle = log.clone();
        handle.record("SELECT 1");
        assert_eq!(log.statements(), vec!["SELECT 1"]);
    }

    #[test]
    fn clear_empties_the_buffer() {
        let log = SqlLog::new();
        log.record("SELECT 1");
        log.clear();
        assert!(log.statements().is_empty());
    }
}
