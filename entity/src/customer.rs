use sea_orm::entity::prelude::*;

/// A Northwind customer. The key is the five-character `CustomerID` code;
/// everything else is descriptive.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "CustomerID")]
    pub customer_id: String,
    #[sea_orm(column_name = "CompanyName")]
    pub company_name: String,
    #[sea_orm(column_name = "ContactName")]
    pub contact_name: Option<String>,
    #[sea_orm(column_name = "ContactTitle")]
    pub contact_title: Option<String>,
    #[sea_orm(column_name = "Address")]
    pub address: Option<String>,
    #[sea_orm(column_name = "City")]
    pub city: Option<String>,
    #[sea_orm(column_name = "Region")]
    pub region: Option<String>,
    #[sea_orm(column_name = "PostalCode")]
    pub postal_code: Option<String>,
    #[sea_orm(column_name = "Country")]
    pub country: Option<String>,
    #[sea_orm(column_name = "Phone")]
    pub phone: Option<String>,
    #[sea_orm(column_name = "Fax")]
    pub fax: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
