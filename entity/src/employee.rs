use sea_orm::entity::prelude::*;

/// A Northwind employee. Ids are assigned by the seed data rather than the
/// store, so the key is not auto-incrementing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "EmployeeID")]
    pub employee_id: i32,
    #[sea_orm(column_name = "LastName")]
    pub last_name: String,
    #[sea_orm(column_name = "FirstName")]
    pub first_name: String,
    #[sea_orm(column_name = "Title")]
    pub title: Option<String>,
    #[sea_orm(column_name = "TitleOfCourtesy")]
    pub title_of_courtesy: Option<String>,
    #[sea_orm(column_name = "BirthDate")]
    pub birth_date: Option<Date>,
    #[sea_orm(column_name = "HireDate")]
    pub hire_date: Option<Date>,
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
    #[sea_orm(column_name = "HomePhone")]
    pub home_phone: Option<String>,
    #[sea_orm(column_name = "Extension")]
    pub extension: Option<String>,
    #[sea_orm(column_name = "Photo")]
    pub photo: Option<Vec<u8>>,
    #[sea_orm(column_name = "Notes")]
    pub notes: Option<String>,
    #[sea_orm(column_name = "ReportsTo")]
    pub reports_to: Option<i32>,
    #[sea_orm(column_name = "PhotoPath")]
    pub photo_path: Option<String>,
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
