use super::*;

/// Minimal valid customer configuration: key kept, everything else excluded,
/// the extra field renamed.
fn valid_customer() -> EntityOverrides {
    EntityOverrides {
        kind: EntityKind::Customer,
        table: "Customers".to_string(),
        schema: None,
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
            FieldOverride::renamed("company_name2", "CompanyName"),
        ],
    }
}

#[test]
fn compiles_a_valid_configuration() {
    let mapping = valid_customer().compile().unwrap();

    assert_eq!(mapping.kind, EntityKind::Customer);
    assert_eq!(mapping.table, "Customers");
    assert_eq!(mapping.schema, None);
    assert_eq!(mapping.key, "customer_id");
    assert_eq!(mapping.columns.len(), 2);
    assert_eq!(mapping.column_for("customer_id").unwrap().column, "CustomerID");
    assert_eq!(
        mapping.column_for("company_name2").unwrap().column,
        "CompanyName"
    );
}

#[test]
fn excluded_fields_are_absent_from_the_mapping() {
    let mapping = valid_customer().compile().unwrap();
    assert!(mapping.column_for("city").is_none());
    assert!(mapping.column_for("company_name").is_none());
}

#[test]
fn compiling_never_checks_the_store() {
    // A table and schema that exist nowhere still compile; only a query can
    // discover they are missing.
    let mut overrides = valid_customer();
    overrides.set_table("Broken");
    overrides.set_schema("wrong");

    let mapping = overrides.compile().unwrap();
    assert_eq!(mapping.qualified_table(), "wrong.Broken");
}

#[test]
fn missing_key_is_rejected() {
    let mut overrides = valid_customer();
    overrides.key = None;

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::MissingKey {
            entity: EntityKind::Customer
        }
    );
}

#[test]
fn excluded_key_is_rejected() {
    let mut overrides = valid_customer();
    overrides.set_key("city");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::ExcludedKey {
            entity: EntityKind::Customer,
            field: "city".to_string(),
        }
    );
}

#[test]
fn unknown_field_in_a_rule_is_rejected() {
    let mut overrides = valid_customer();
    overrides.exclude("ship_via2");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::UnknownField {
            entity: EntityKind::Customer,
            field: "ship_via2".to_string(),
        }
    );
}

#[test]
fn unknown_key_is_rejected() {
    let mut overrides = valid_customer();
    overrides.set_key("order_id");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::UnknownField {
            entity: EntityKind::Customer,
            field: "order_id".to_string(),
        }
    );
}

#[test]
fn unruled_field_is_rejected() {
    // The override layer is exhaustive: dropping a rule is an error, not an
    // implicit keep.
    let mut overrides = valid_customer();
    overrides.rules.retain(|r| r.field != "fax");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::UnruledField {
            entity: EntityKind::Customer,
            field: "fax".to_string(),
        }
    );
}

#[test]
fn excluding_a_renamed_field_is_rejected() {
    let mut overrides = valid_customer();
    overrides.exclude("company_name2");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::ExcludedFieldRenamed {
            entity: EntityKind::Customer,
            field: "company_name2".to_string(),
        }
    );
}

#[test]
fn renaming_an_excluded_field_is_rejected() {
    let mut overrides = valid_customer();
    overrides.rename_column("city", "Town");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::ExcludedFieldRenamed {
            entity: EntityKind::Customer,
            field: "city".to_string(),
        }
    );
}

#[test]
fn two_rules_of_the_same_shape_are_rejected() {
    let mut overrides = valid_customer();
    overrides.exclude("city");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::DuplicateRule {
            entity: EntityKind::Customer,
            field: "city".to_string(),
        }
    );
}

#[test]
fn colliding_column_names_are_rejected() {
    // Rename the extra field onto the key's default column.
    let mut overrides = valid_customer();
    overrides.rules.retain(|r| r.field != "company_name2");
    overrides.rename_column("company_name2", "CustomerID");

    assert_eq!(
        overrides.compile().unwrap_err(),
        MappingError::DuplicateColumn {
            entity: EntityKind::Customer,
            column: "CustomerID".to_string(),
            first: "customer_id".to_string(),
            second: "company_name2".to_string(),
        }
    );
}

#[test]
fn empty_schema_means_default() {
    let mut overrides = valid_customer();
    overrides.set_schema("reporting");
    assert_eq!(overrides.schema.as_deref(), Some("reporting"));

    overrides.set_schema("");
    assert_eq!(overrides.schema, None);
}

#[test]
fn model_rejects_duplicate_entity_kinds() {
    let model = ModelOverrides {
        entities: vec![valid_customer(), valid_customer()],
    };

    assert_eq!(
        model.compile().unwrap_err(),
        MappingError::DuplicateEntity {
            entity: EntityKind::Customer
        }
    );
}

#[test]
fn model_lookup_fails_for_unconfigured_kinds() {
    let model = ModelOverrides {
        entities: vec![valid_customer()],
    };
    let compiled = model.compile().unwrap();

    assert!(compiled.get(EntityKind::Order).is_none());
    assert_eq!(
        compiled.mapping(EntityKind::Order).unwrap_err(),
        MappingError::UnmappedEntity {
            entity: EntityKind::Order
        }
    );
}
