use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

use crate::model::{EntityKind, MappedEmployee};

#[tokio::test]
async fn initializes_and_verifies_the_seeded_store() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;

    let counts = fixture.seed_counts();
    assert_eq!(counts, SeedCounts::EXPECTED);

    Ok(())
}

#[tokio::test]
async fn broken_customer_mapping_does_not_abort_initialization() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;

    // The customer entity is mapped to a table that does not exist, yet the
    // fixture builds: mapping validation is lazy with respect to the store.
    let customer = fixture
        .mapping_model()
        .mapping(EntityKind::Customer)?;
    assert_eq!(customer.table, "Broken");

    Ok(())
}

#[tokio::test]
async fn fixtures_provision_independent_stores() -> Result<(), HarnessError> {
    let first = SharedFixture::initialize("").await?;
    let second = SharedFixture::initialize("").await?;

    // Both verified the full dataset; a shared store would have been
    // double-seeded and failed verification instead.
    assert_eq!(first.seed_counts(), SeedCounts::EXPECTED);
    assert_eq!(second.seed_counts(), SeedCounts::EXPECTED);

    Ok(())
}

#[tokio::test]
async fn seeding_is_skipped_for_an_already_populated_store() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;

    // Re-running the count verification against the live store agrees with
    // what initialization captured.
    let counts = seed::counts(fixture.connection()).await?;
    assert_eq!(counts, fixture.seed_counts());

    Ok(())
}

#[tokio::test]
async fn attached_schema_serves_the_seeded_tables() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("nw_schema").await?;
    assert_eq!(fixture.database_schema(), Some("nw_schema"));

    let context = fixture.create_context();
    let employees = context.query::<MappedEmployee>().count().await?;
    assert_eq!(employees, 9);

    Ok(())
}

#[tokio::test]
async fn contexts_record_their_sql_in_the_fixture_log() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    assert!(fixture.sql_log().statements().is_empty());

    let context = fixture.create_context();
    context.query::<MappedEmployee>().count().await?;

    let statements = fixture.sql_log().statements();
    assert_eq!(statements.len(), 1);
    assert!(statements[0].contains("Employees"));

    Ok(())
}

#[tokio::test]
async fn connection_exposes_the_seeded_base_tables() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;

    let customers = entity::prelude::Customer::find()
        .count(fixture.connection())
        .await?;
    assert_eq!(customers, 91);

    Ok(())
}

#[tokio::test]
async fn close_releases_the_store() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    fixture.close().await?;
    Ok(())
}
