//! Declarative mapping overrides and their compiled form.
//!
//! An [`EntityOverrides`] is plain data: a table name, an optional schema, an
//! optional key, and one explicit [`FieldRule`] per catalog field. Compiling it
//! validates the rules and produces an immutable [`EntityMapping`]; a
//! [`ModelOverrides`] compiles every configured entity into a [`MappingModel`]
//! snapshot the fixture evaluates once and shares with every context.
//!
//! Compilation is pure. It never touches the backing store, so a mapping that
//! points at a table or schema that does not exist compiles cleanly and only
//! fails if something queries it.

use sea_orm::sea_query::{IntoIden, SchemaName, TableName, TableRef};

use crate::error::MappingError;
use crate::model::EntityKind;

pub mod northwind;

#[cfg(test)]
mod test;

/// What happens to one field when its entity is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// Persist under the catalog's default column name.
    Kept,
    /// Persist under the given column name instead of the default.
    Renamed(String),
    /// Drop the field from the persisted shape entirely.
    Excluded,
}

/// A rule attached to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverride {
    pub field: String,
    pub rule: FieldRule,
}

impl FieldOverride {
    pub fn kept(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: FieldRule::Kept,
        }
    }

    pub fn renamed(field: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: FieldRule::Renamed(column.into()),
        }
    }

    pub fn excluded(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: FieldRule::Excluded,
        }
    }
}

/// Declarative persistence configuration for one entity kind.
///
/// Construct it as a literal or start from [`EntityOverrides::new`] and push
/// rules through the named operations. Nothing is validated until
/// [`compile`](Self::compile) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityOverrides {
    pub kind: EntityKind,
    /// Target table. Defaults to the kind's seeded table name.
    pub table: String,
    /// Target schema; `None` means the store's default schema.
    pub schema: Option<String>,
    /// The single declared key field. Exactly one key per entity is enforced
    /// by the type: there is no second slot to fill.
    pub key: Option<String>,
    pub rules: Vec<FieldOverride>,
}

impl EntityOverrides {
    /// Starts an empty configuration targeting the kind's default table.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            table: kind.default_table().to_string(),
            schema: None,
            key: None,
            rules: Vec::new(),
        }
    }

    /// Drops a field from the persisted shape.
    pub fn exclude(&mut self, field: impl Into<String>) {
        self.rules.push(FieldOverride::excluded(field));
    }

    /// Persists a field under a column name other than its default.
    pub fn rename_column(&mut self, field: impl Into<String>, column: impl Into<String>) {
        self.rules.push(FieldOverride::renamed(field, column));
    }

    /// Persists a field under its default column name.
    pub fn keep(&mut self, field: impl Into<String>) {
        self.rules.push(FieldOverride::kept(field));
    }

    /// Points the entity at a different table.
    pub fn set_table(&mut self, table: impl Into<String>) {
        self.table = table.into();
    }

    /// Points the entity at a named schema. An empty name means the default
    /// schema and clears the override.
    pub fn set_schema(&mut self, schema: &str) {
        self.schema = if schema.is_empty() {
            None
        } else {
            Some(schema.to_string())
        };
    }

    /// Declares the key field.
    pub fn set_key(&mut self, field: impl Into<String>) {
        self.key = Some(field.into());
    }

    /// Validates the configuration and produces the immutable mapping.
    pub fn compile(&self) -> Result<EntityMapping, MappingError> {
        let entity = self.kind;

        for rule in &self.rules {
            if entity.field(&rule.field).is_none() {
                return Err(MappingError::UnknownField {
                    entity,
                    field: rule.field.clone(),
                });
            }
        }

        let mut columns = Vec::new();
        for def in entity.fields() {
            let rules: Vec<&FieldRule> = self
                .rules
                .iter()
                .filter(|r| r.field == def.name)
                .map(|r| &r.rule)
                .collect();

            let rule = match rules.as_slice() {
                [] => {
                    return Err(MappingError::UnruledField {
                        entity,
                        field: def.name.to_string(),
                    })
                }
                [rule] => *rule,
                many => {
                    let excluded = many.iter().any(|r| matches!(r, FieldRule::Excluded));
                    let renamed = many.iter().any(|r| matches!(r, FieldRule::Renamed(_)));
                    let kind = if excluded && renamed {
                        MappingError::ExcludedFieldRenamed {
                            entity,
                            field: def.name.to_string(),
                        }
                    } else {
                        MappingError::DuplicateRule {
                            entity,
                            field: def.name.to_string(),
                        }
                    };
                    return Err(kind);
                }
            };

            match rule {
                FieldRule::Excluded => {}
                FieldRule::Kept => columns.push(ColumnMapping {
                    field: def.name.to_string(),
                    column: def.column.to_string(),
                }),
                FieldRule::Renamed(column) => columns.push(ColumnMapping {
                    field: def.name.to_string(),
                    column: column.clone(),
                }),
            }
        }

        for (index, mapping) in columns.iter().enumerate() {
            if let Some(clash) = columns[..index].iter().find(|c| c.column == mapping.column) {
                return Err(MappingError::DuplicateColumn {
                    entity,
                    column: mapping.column.clone(),
                    first: clash.field.clone(),
                    second: mapping.field.clone(),
                });
            }
        }

        let key = self.key.clone().ok_or(MappingError::MissingKey { entity })?;
        if entity.field(&key).is_none() {
            return Err(MappingError::UnknownField { entity, field: key });
        }
        if !columns.iter().any(|c| c.field == key) {
            return Err(MappingError::ExcludedKey { entity, field: key });
        }

        Ok(EntityMapping {
            kind: entity,
            table: self.table.clone(),
            schema: self.schema.clone(),
            key,
            columns,
        })
    }
}

/// One persisted field and the column it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub field: String,
    pub column: String,
}

/// Compiled, immutable persistence mapping for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMapping {
    pub kind: EntityKind,
    pub table: String,
    pub schema: Option<String>,
    /// Field name of the declared key; always present in `columns`.
    pub key: String,
    /// Persisted fields in catalog order.
    pub columns: Vec<ColumnMapping>,
}

impl EntityMapping {
    /// Looks up the column a mapped field resolves to.
    pub fn column_for(&self, field: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Schema-qualified table name for diagnostics.
    pub fn qualified_table(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", schema, self.table),
            None => self.table.clone(),
        }
    }

    /// Table reference for query building, schema-qualified when the mapping
    /// carries a schema.
    pub fn table_ref(&self) -> TableRef {
        let table = self.table.clone().into_iden();
        let name = match &self.schema {
            Some(schema) => TableName(Some(SchemaName::from(schema.clone())), table),
            None => TableName(None, table),
        };
        TableRef::Table(name, None)
    }
}

/// Override sets for every entity a fixture maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOverrides {
    pub entities: Vec<EntityOverrides>,
}

impl ModelOverrides {
    /// Compiles every entity, rejecting duplicate kinds.
    pub fn compile(&self) -> Result<MappingModel, MappingError> {
        let mut mappings: Vec<EntityMapping> = Vec::with_capacity(self.entities.len());
        for overrides in &self.entities {
            if mappings.iter().any(|m| m.kind == overrides.kind) {
                return Err(MappingError::DuplicateEntity {
                    entity: overrides.kind,
                });
            }
            mappings.push(overrides.compile()?);
        }
        Ok(MappingModel { mappings })
    }
}

/// Immutable mapping snapshot shared by every context of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingModel {
    mappings: Vec<EntityMapping>,
}

impl MappingModel {
    /// Mapping for one entity kind, if the model configures it.
    pub fn get(&self, kind: EntityKind) -> Option<&EntityMapping> {
        self.mappings.iter().find(|m| m.kind == kind)
    }

    /// Mapping for one entity kind, failing for kinds the model left out.
    pub fn mapping(&self, kind: EntityKind) -> Result<&EntityMapping, MappingError> {
        self.get(kind)
            .ok_or(MappingError::UnmappedEntity { entity: kind })
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityMapping> {
        self.mappings.iter()
    }
}
