use super::*;

use crate::fixture::SharedFixture;
use crate::model::{MappedCustomer, MappedEmployee, MappedOrder, ShipVia};

#[tokio::test]
async fn fetches_all_mapped_employees() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    let context = fixture.create_context();

    let employees = context.query::<MappedEmployee>().all().await?;

    assert_eq!(employees.len(), 9);
    for employee in &employees {
        // The renamed column is readable through the mapped field.
        assert!(employee.city2.is_some());
    }

    Ok(())
}

#[tokio::test]
async fn counts_mapped_orders() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    let context = fixture.create_context();

    let orders = context.query::<MappedOrder>().count().await?;
    assert_eq!(orders, 830);

    Ok(())
}

#[tokio::test]
async fn projects_the_nullable_shipper_over_every_row() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    let context = fixture.create_context();

    let shippers = context
        .query::<MappedOrder>()
        .project::<Option<ShipVia>>("ship_via2")
        .all()
        .await?;

    // Null values do not reduce cardinality.
    assert_eq!(shippers.len(), 830);
    assert!(shippers.iter().any(|s| s.is_none()));
    assert!(shippers.iter().any(|s| *s == Some(ShipVia::One)));

    Ok(())
}

#[tokio::test]
async fn projecting_an_unmapped_field_fails() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    let context = fixture.create_context();

    // The base ship_via field is excluded; only ship_via2 survives mapping.
    let result = context
        .query::<MappedOrder>()
        .project::<Option<ShipVia>>("ship_via")
        .all()
        .await;

    assert!(matches!(
        result.unwrap_err(),
        HarnessError::Mapping(MappingError::UnmappedField { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn querying_the_broken_entity_fails_only_at_query_time() -> Result<(), HarnessError> {
    // Initialization succeeds with the broken mapping in place...
    let fixture = SharedFixture::initialize("").await?;
    let context = fixture.create_context();

    // ...and only actually querying it surfaces the missing store object.
    let result = context.query::<MappedCustomer>().all().await;

    assert!(matches!(
        result.unwrap_err(),
        HarnessError::StoreObjectNotFound { .. }
    ));

    Ok(())
}

#[tokio::test]
async fn records_are_detached_snapshots() -> Result<(), HarnessError> {
    let fixture = SharedFixture::initialize("").await?;
    let context = fixture.create_context();

    let mut employees = context.query::<MappedEmployee>().all().await?;
    employees[0].city2 = Some("Atlantis".to_string());

    // Mutating a returned record changes nothing anyone else observes.
    let fresh = context.query::<MappedEmployee>().all().await?;
    assert_ne!(fresh[0].city2.as_deref(), Some("Atlantis"));

    Ok(())
}
