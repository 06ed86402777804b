use sea_orm::entity::prelude::*;

use super::ship_via::ShipVia;

/// A Northwind order row. `ship_via` is the nullable shipper enum the mapping
/// tests project through their renamed `ship_via2` field.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "OrderID")]
    pub order_id: i32,
    #[sea_orm(column_name = "CustomerID")]
    pub customer_id: Option<String>,
    #[sea_orm(column_name = "EmployeeID")]
    pub employee_id: Option<i32>,
    #[sea_orm(column_name = "OrderDate")]
    pub order_date: Option<Date>,
    #[sea_orm(column_name = "RequiredDate")]
    pub required_date: Option<Date>,
    #[sea_orm(column_name = "ShippedDate")]
    pub shipped_date: Option<Date>,
    #[sea_orm(column_name = "ShipVia")]
    pub ship_via: Option<ShipVia>,
    #[sea_orm(column_name = "Freight")]
    pub freight: Option<f64>,
    #[sea_orm(column_name = "ShipName")]
    pub ship_name: Option<String>,
    #[sea_orm(column_name = "ShipAddress")]
    pub ship_address: Option<String>,
    #[sea_orm(column_name = "ShipCity")]
    pub ship_city: Option<String>,
    #[sea_orm(column_name = "ShipRegion")]
    pub ship_region: Option<String>,
    #[sea_orm(column_name = "ShipPostalCode")]
    pub ship_postal_code: Option<String>,
    #[sea_orm(column_name = "ShipCountry")]
    pub ship_country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::EmployeeId"
    )]
    Employee,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
