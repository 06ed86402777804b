use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(integer(Employees::EmployeeId).primary_key())
                    .col(string(Employees::LastName))
                    .col(string(Employees::FirstName))
                    .col(string_null(Employees::Title))
                    .col(string_null(Employees::TitleOfCourtesy))
                    .col(date_null(Employees::BirthDate))
                    .col(date_null(Employees::HireDate))
                    .col(string_null(Employees::Address))
                    .col(string_null(Employees::City))
                    .col(string_null(Employees::Region))
                    .col(string_null(Employees::PostalCode))
                    .col(string_null(Employees::Country))
                    .col(string_null(Employees::HomePhone))
                    .col(string_null(Employees::Extension))
                    .col(blob_null(Employees::Photo))
                    .col(text_null(Employees::Notes))
                    .col(integer_null(Employees::ReportsTo))
                    .col(string_null(Employees::PhotoPath))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employees {
    #[sea_orm(iden = "Employees")]
    Table,
    #[sea_orm(iden = "EmployeeID")]
    EmployeeId,
    #[sea_orm(iden = "LastName")]
    LastName,
    #[sea_orm(iden = "FirstName")]
    FirstName,
    #[sea_orm(iden = "Title")]
    Title,
    #[sea_orm(iden = "TitleOfCourtesy")]
    TitleOfCourtesy,
    #[sea_orm(iden = "BirthDate")]
    BirthDate,
    #[sea_orm(iden = "HireDate")]
    HireDate,
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
    #[sea_orm(iden = "HomePhone")]
    HomePhone,
    #[sea_orm(iden = "Extension")]
    Extension,
    #[sea_orm(iden = "Photo")]
    Photo,
    #[sea_orm(iden = "Notes")]
    Notes,
    #[sea_orm(iden = "ReportsTo")]
    ReportsTo,
    #[sea_orm(iden = "PhotoPath")]
    PhotoPath,
}
