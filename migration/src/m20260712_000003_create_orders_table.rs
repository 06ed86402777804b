use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260712_000001_create_customers_table::Customers,
    m20260712_000002_create_employees_table::Employees,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(integer(Orders::OrderId).primary_key())
                    .col(string_len_null(Orders::CustomerId, 5))
                    .col(integer_null(Orders::EmployeeId))
                    .col(date_null(Orders::OrderDate))
                    .col(date_null(Orders::RequiredDate))
                    .col(date_null(Orders::ShippedDate))
                    .col(integer_null(Orders::ShipVia))
                    .col(double_null(Orders::Freight))
                    .col(string_null(Orders::ShipName))
                    .col(string_null(Orders::ShipAddress))
                    .col(string_null(Orders::ShipCity))
                    .col(string_null(Orders::ShipRegion))
                    .col(string_null(Orders::ShipPostalCode))
                    .col(string_null(Orders::ShipCountry))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer_id")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::CustomerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_employee_id")
                            .from(Orders::Table, Orders::EmployeeId)
                            .to(Employees::Table, Employees::EmployeeId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    #[sea_orm(iden = "Orders")]
    Table,
    #[sea_orm(iden = "OrderID")]
    OrderId,
    #[sea_orm(iden = "CustomerID")]
    CustomerId,
    #[sea_orm(iden = "EmployeeID")]
    EmployeeId,
    #[sea_orm(iden = "OrderDate")]
    OrderDate,
    #[sea_orm(iden = "RequiredDate")]
    RequiredDate,
    #[sea_orm(iden = "ShippedDate")]
    ShippedDate,
    #[sea_orm(iden = "ShipVia")]
    ShipVia,
    #[sea_orm(iden = "Freight")]
    Freight,
    #[sea_orm(iden = "ShipName")]
    ShipName,
    #[sea_orm(iden = "ShipAddress")]
    ShipAddress,
    #[sea_orm(iden = "ShipCity")]
    ShipCity,
    #[sea_orm(iden = "ShipRegion")]
    ShipRegion,
    #[sea_orm(iden = "ShipPostalCode")]
    ShipPostalCode,
    #[sea_orm(iden = "ShipCountry")]
    ShipCountry,
}
