use sea_orm::entity::prelude::*;

/// Shipper assigned to an order, stored as its numeric Northwind id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ShipVia {
    #[sea_orm(num_value = 1)]
    One,
    #[sea_orm(num_value = 2)]
    Two,
    #[sea_orm(num_value = 3)]
    Three,
}
