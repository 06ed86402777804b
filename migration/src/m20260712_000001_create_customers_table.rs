use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(string_len(Customers::CustomerId, 5).primary_key())
                    .col(string(Customers::CompanyName))
                    .col(string_null(Customers::ContactName))
                    .col(string_null(Customers::ContactTitle))
                    .col(string_null(Customers::Address))
                    .col(string_null(Customers::City))
                    .col(string_null(Customers::Region))
                    .col(string_null(Customers::PostalCode))
                    .col(string_null(Customers::Country))
                    .col(string_null(Customers::Phone))
                    .col(string_null(Customers::Fax))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customers {
    #[sea_orm(iden = "Customers")]
    Table,
    #[sea_orm(iden = "CustomerID")]
    CustomerId,
    #[sea_orm(iden = "CompanyName")]
    CompanyName,
    #[sea_orm(iden = "ContactName")]
    ContactName,
    #[sea_orm(iden = "ContactTitle")]
    ContactTitle,
    #[sea_orm(iden = "Address")]
    Address,
    #[sea_orm(iden = "City")]
    City,
    #[sea_orm(iden = "Region")]
    Region,
    #[sea_orm(iden = "PostalCode")]
    PostalCode,
    #[sea_orm(iden = "Country")]
    Country,
    #[sea_orm(iden = "Phone")]
    Phone,
    #[sea_orm(iden = "Fax")]
    Fax,
}
