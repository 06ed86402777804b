//! The canonical override model the shared fixture compiles.
//!
//! Mirrors the reference configuration: every descriptive base field is
//! excluded, the key is kept, and each entity's single extra field is renamed
//! onto a seeded column. The customer entity is deliberately pointed at a
//! table that does not exist (and, when a schema name is in play, at a schema
//! that does not exist either); it compiles like any other entity and only a
//! query against it can fail.

use crate::mapping::{EntityOverrides, FieldOverride, ModelOverrides};
use crate::model::EntityKind;

/// Builds the canonical Northwind override model for the given logical schema
/// name. An empty name leaves every entity on the store's default schema.
pub fn model(database_schema: &str) -> ModelOverrides {
    ModelOverrides {
        entities: vec![
            customer(database_schema),
            employee(database_schema),
            order(database_schema),
        ],
    }
}

fn customer(database_schema: &str) -> EntityOverrides {
    EntityOverrides {
        kind: EntityKind::Customer,
        table: "Broken".to_string(),
        // The broken schema only comes into play when the store actually uses
        // named schemas; with the default schema the broken table name alone
        // carries the negative case.
        schema: if database_schema.is_empty() {
            None
        } else {
            Some("wrong".to_string())
        },
        key: Some("customer_id".to_string()),
        rules: vec![
            FieldOverride::kept("customer_id"),
            FieldOverride::excluded("company_name"),
            FieldOverride::excluded("contact_name"),
            FieldOverride::excluded("contact_title"),
            FieldOverride::excluded("address"),
            FieldOverride::excluded("city"),
            FieldOverride::excluded("region"),
            FieldOverride::excluded("postal_code"),
            FieldOverride::excluded("country"),
            FieldOverride::excluded("phone"),
            FieldOverride::excluded("fax"),
            FieldOverride::renamed("company_name2", "Broken"),
        ],
    }
}

fn employee(database_schema: &str) -> EntityOverrides {
    EntityOverrides {
        kind: EntityKind::Employee,
        table: "Employees".to_string(),
        schema: schema_override(database_schema),
        key: Some("employee_id".to_string()),
        rules: vec![
            FieldOverride::kept("employee_id"),
            FieldOverride::excluded("last_name"),
            FieldOverride::excluded("first_name"),
            FieldOverride::excluded("title"),
            FieldOverride::excluded("title_of_courtesy"),
            FieldOverride::excluded("birth_date"),
            FieldOverride::excluded("hire_date"),
            FieldOverride::excluded("address"),
            FieldOverride::excluded("city"),
            FieldOverride::excluded("region"),
            FieldOverride::excluded("postal_code"),
            FieldOverride::excluded("country"),
            FieldOverride::excluded("home_phone"),
            FieldOverride::excluded("extension"),
            FieldOverride::excluded("photo"),
            FieldOverride::excluded("notes"),
            FieldOverride::excluded("reports_to"),
            FieldOverride::excluded("photo_path"),
            FieldOverride::renamed("city2", "City"),
        ],
    }
}

fn order(database_schema: &str) -> EntityOverrides {
    EntityOverrides {
        kind: EntityKind::Order,
        table: "Orders".to_string(),
        schema: schema_override(database_schema),
        key: Some("order_id".to_string()),
        rules: vec![
            FieldOverride::kept("order_id"),
            FieldOverride::excluded("customer_id"),
            FieldOverride::excluded("employee_id"),
            FieldOverride::excluded("order_date"),
            FieldOverride::excluded("required_date"),
            FieldOverride::excluded("shipped_date"),
            FieldOverride::excluded("ship_via"),
            FieldOverride::excluded("freight"),
            FieldOverride::excluded("ship_name"),
            FieldOverride::excluded("ship_address"),
            FieldOverride::excluded("ship_city"),
            FieldOverride::excluded("ship_region"),
            FieldOverride::excluded("ship_postal_code"),
            FieldOverride::excluded("ship_country"),
            FieldOverride::renamed("ship_via2", "ShipVia"),
        ],
    }
}

fn schema_override(database_schema: &str) -> Option<String> {
    if database_schema.is_empty() {
        None
    } else {
        Some(database_schema.to_string())
    }
}
