use thiserror::Error;

use crate::model::EntityKind;

/// Runtime failures surfaced by the fixture and its query contexts.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// A mapped table or schema does not exist in the backing store.
    ///
    /// Raised at query time only. Compiling a mapping never touches the store,
    /// so an entity mapped to a missing table stays harmless until something
    /// actually queries it.
    #[error("store object `{object}` does not exist in the backing store")]
    StoreObjectNotFound {
        /// Schema-qualified table name the failing query targeted.
        object: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// A pre-populated store disagrees with the fixed reference dataset.
    ///
    /// Fixture initialization seeds an empty store and verifies a non-empty
    /// one; any other row count means the store is not the reference dataset
    /// every assertion depends on.
    #[error("seeded table `{table}` holds {actual} rows, expected {expected}")]
    SeedMismatch {
        table: &'static str,
        expected: u64,
        actual: u64,
    },
}

/// Build-time validation failures for declarative mapping overrides.
///
/// Any of these aborts fixture initialization: a model that fails to compile
/// produces no mapping snapshot and therefore no contexts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No key field was declared for the entity.
    #[error("invalid mapping for `{entity}`: no key field declared")]
    MissingKey { entity: EntityKind },

    /// A rule names a field that is not in the entity's field catalog.
    #[error("invalid mapping for `{entity}`: field `{field}` does not exist")]
    UnknownField { entity: EntityKind, field: String },

    /// A catalog field was left without a rule. The override layer is
    /// exhaustive: every field is kept, renamed, or excluded explicitly.
    #[error("invalid mapping for `{entity}`: field `{field}` has no rule")]
    UnruledField { entity: EntityKind, field: String },

    /// A field carries two rules of the same shape.
    #[error("invalid mapping for `{entity}`: field `{field}` carries more than one rule")]
    DuplicateRule { entity: EntityKind, field: String },

    /// A field is both excluded and renamed, in either order.
    #[error("invalid mapping for `{entity}`: field `{field}` is both excluded and renamed")]
    ExcludedFieldRenamed { entity: EntityKind, field: String },

    /// The declared key field is excluded from the persisted shape.
    #[error("invalid mapping for `{entity}`: key field `{field}` is excluded")]
    ExcludedKey { entity: EntityKind, field: String },

    /// Two fields resolve to the same column name within one entity.
    #[error(
        "invalid mapping for `{entity}`: column `{column}` is mapped by both `{first}` and `{second}`"
    )]
    DuplicateColumn {
        entity: EntityKind,
        column: String,
        first: String,
        second: String,
    },

    /// A projection named a field the compiled mapping does not persist.
    #[error("invalid mapping for `{entity}`: field `{field}` is not part of the persisted shape")]
    UnmappedField { entity: EntityKind, field: String },

    /// A model declares two override sets for the same entity kind.
    #[error("mapping model already contains an entry for `{entity}`")]
    DuplicateEntity { entity: EntityKind },

    /// A query asked for an entity kind the compiled model does not map.
    #[error("mapping model has no entry for `{entity}`")]
    UnmappedEntity { entity: EntityKind },
}
