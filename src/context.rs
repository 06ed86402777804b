//! Per-test query contexts over a fixture's compiled mapping.
//!
//! A [`QueryContext`] borrows its fixture, so release is structural: it cannot
//! outlive the store, and any exit path (including a failing assertion
//! unwinding) gives the borrow back. Contexts are read-only: they expose
//! SELECT builders only, and the records they return are detached snapshots,
//! never tracked for update.

use std::marker::PhantomData;

use sea_orm::sea_query::{Asterisk, Expr, Func, Query, SelectStatement, SqliteQueryBuilder};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, QueryResult, TryGetable,
};

use crate::error::{HarnessError, MappingError};
use crate::mapping::{EntityMapping, MappingModel};
use crate::model::{EntityKind, MappedRecord};
use crate::sql_log::SqlLog;

#[cfg(test)]
mod test;

/// Short-lived handle for executing read queries against the shared store.
pub struct QueryContext<'f> {
    db: &'f DatabaseConnection,
    model: &'f MappingModel,
    sql_log: SqlLog,
}

impl<'f> QueryContext<'f> {
    pub(crate) fn new(
        db: &'f DatabaseConnection,
        model: &'f MappingModel,
        sql_log: SqlLog,
    ) -> Self {
        Self { db, model, sql_log }
    }

    /// Starts a lazy query over a mapped record type. Nothing touches the
    /// store until the query is realized with `all`, `count`, or a
    /// projection.
    pub fn query<T: MappedRecord>(&self) -> MappedQuery<'_, T> {
        MappedQuery {
            db: self.db,
            model: self.model,
            sql_log: &self.sql_log,
            _record: PhantomData,
        }
    }

    /// The compiled mapping snapshot this context queries through.
    pub fn mapping_model(&self) -> &MappingModel {
        self.model
    }
}

/// Lazy query over every row of one mapped entity.
pub struct MappedQuery<'a, T: MappedRecord> {
    db: &'a DatabaseConnection,
    model: &'a MappingModel,
    sql_log: &'a SqlLog,
    _record: PhantomData<T>,
}

impl<'a, T: MappedRecord> MappedQuery<'a, T> {
    /// Realizes the query, materializing every row as a detached record.
    pub async fn all(&self) -> Result<Vec<T>, HarnessError> {
        let mapping = self.model.mapping(T::KIND)?;
        let select = select_mapped(mapping);
        let rows = run_query_all(self.db, self.sql_log, mapping, &select).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(T::from_query_result(row, "")?);
        }
        Ok(records)
    }

    /// Realizes the query as a `COUNT(*)` against the mapped table.
    pub async fn count(&self) -> Result<u64, HarnessError> {
        let mapping = self.model.mapping(T::KIND)?;
        count_rows(self.db, self.sql_log, mapping).await
    }

    /// Narrows the query to a single mapped field, yielding scalars instead
    /// of records. The field is resolved against the mapping when the
    /// projection is realized.
    pub fn project<V: TryGetable>(self, field: impl Into<String>) -> ProjectedQuery<'a, V> {
        ProjectedQuery {
            db: self.db,
            model: self.model,
            sql_log: self.sql_log,
            kind: T::KIND,
            field: field.into(),
            _value: PhantomData,
        }
    }
}

/// Lazy scalar projection of one mapped field over every row.
pub struct ProjectedQuery<'a, V: TryGetable> {
    db: &'a DatabaseConnection,
    model: &'a MappingModel,
    sql_log: &'a SqlLog,
    kind: EntityKind,
    field: String,
    _value: PhantomData<V>,
}

impl<'a, V: TryGetable> ProjectedQuery<'a, V> {
    /// Realizes the projection, one value per row.
    pub async fn all(&self) -> Result<Vec<V>, HarnessError> {
        let mapping = self.model.mapping(self.kind)?;
        let column = mapping.column_for(&self.field).ok_or_else(|| {
            MappingError::UnmappedField {
                entity: self.kind,
                field: self.field.clone(),
            }
        })?;

        let mut select = Query::select();
        select
            .expr_as(Expr::col(column.column.clone()), column.field.clone())
            .from(mapping.table_ref());
        let rows = run_query_all(self.db, self.sql_log, mapping, &select).await?;

        let mut values = Vec::with_capacity(rows.len());
        for row in &rows {
            values.push(row.try_get::<V>("", &self.field).map_err(HarnessError::Db)?);
        }
        Ok(values)
    }

    /// Number of rows the projection would yield.
    pub async fn count(&self) -> Result<u64, HarnessError> {
        let mapping = self.model.mapping(self.kind)?;
        count_rows(self.db, self.sql_log, mapping).await
    }
}

fn select_mapped(mapping: &EntityMapping) -> SelectStatement {
    let mut select = Query::select();
    for column in &mapping.columns {
        select.expr_as(Expr::col(column.column.clone()), column.field.clone());
    }
    select.from(mapping.table_ref());
    select
}

async fn run_query_all(
    db: &DatabaseConnection,
    sql_log: &SqlLog,
    mapping: &EntityMapping,
    select: &SelectStatement,
) -> Result<Vec<QueryResult>, HarnessError> {
    sql_log.record(select.to_string(SqliteQueryBuilder));
    db.query_all(select)
        .await
        .map_err(|err| classify_query_error(mapping, err))
}

async fn count_rows(
    db: &DatabaseConnection,
    sql_log: &SqlLog,
    mapping: &EntityMapping,
) -> Result<u64, HarnessError> {
    let mut select = Query::select();
    select
        .expr_as(Func::count(Expr::col(Asterisk)), "num_items")
        .from(mapping.table_ref());

    sql_log.record(select.to_string(SqliteQueryBuilder));
    let row = db
        .query_one(&select)
        .await
        .map_err(|err| classify_query_error(mapping, err))?
        .ok_or_else(|| DbErr::Custom("COUNT(*) query returned no row".to_string()))?;

    let count: i64 = row.try_get("", "num_items")?;
    Ok(count as u64)
}

/// Maps driver errors about missing tables or schemas onto the harness's
/// store-object taxonomy; everything else passes through untouched.
fn classify_query_error(mapping: &EntityMapping, err: DbErr) -> HarnessError {
    let message = err.to_string();
    let missing_object = message.contains("no such table")
        || message.contains("no such database")
        || message.contains("unknown database");

    if missing_object {
        HarnessError::StoreObjectNotFound {
            object: mapping.qualified_table(),
            source: err,
        }
    } else {
        HarnessError::Db(err)
    }
}
