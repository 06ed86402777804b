//! Mapped record shapes and the field catalog behind the override layer.
//!
//! The base Northwind entities live in the `entity` crate and carry every
//! column. The records here are the shapes the mapping tests query through: a
//! key field plus one test-only extra field each, joined to their base entity
//! by [`EntityKind`] rather than by inheritance. A field that the canonical
//! overrides exclude simply does not appear on the mapped record, so nothing
//! can query it.

use std::fmt;

use sea_orm::FromQueryResult;

pub use entity::ship_via::ShipVia;

/// Tag joining a mapped record to its base entity and field catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Employee,
    Order,
}

impl EntityKind {
    /// Table the seeded dataset stores this entity in. Overrides may point a
    /// mapping elsewhere; the seed and migrations always use these names.
    pub fn default_table(self) -> &'static str {
        match self {
            EntityKind::Customer => "Customers",
            EntityKind::Employee => "Employees",
            EntityKind::Order => "Orders",
        }
    }

    /// Every mappable field of this kind: the base entity's fields plus the
    /// kind's test-only extra field, each with its default column name.
    pub fn fields(self) -> &'static [FieldDef] {
        match self {
            EntityKind::Customer => CUSTOMER_FIELDS,
            EntityKind::Employee => EMPLOYEE_FIELDS,
            EntityKind::Order => ORDER_FIELDS,
        }
    }

    /// Looks up a catalog entry by field name.
    pub fn field(self, name: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|def| def.name == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Customer => "Customer",
            EntityKind::Employee => "Employee",
            EntityKind::Order => "Order",
        };
        f.write_str(name)
    }
}

/// One entry in an entity's field catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as it appears on records and in override rules.
    pub name: &'static str,
    /// Column the field persists to when kept without a rename.
    pub column: &'static str,
}

const fn def(name: &'static str, column: &'static str) -> FieldDef {
    FieldDef { name, column }
}

const CUSTOMER_FIELDS: &[FieldDef] = &[
    def("customer_id", "CustomerID"),
    def("company_name", "CompanyName"),
    def("contact_name", "ContactName"),
    def("contact_title", "ContactTitle"),
    def("address", "Address"),
    def("city", "City"),
    def("region", "Region"),
    def("postal_code", "PostalCode"),
    def("country", "Country"),
    def("phone", "Phone"),
    def("fax", "Fax"),
    def("company_name2", "CompanyName2"),
];

const EMPLOYEE_FIELDS: &[FieldDef] = &[
    def("employee_id", "EmployeeID"),
    def("last_name", "LastName"),
    def("first_name", "FirstName"),
    def("title", "Title"),
    def("title_of_courtesy", "TitleOfCourtesy"),
    def("birth_date", "BirthDate"),
    def("hire_date", "HireDate"),
    def("address", "Address"),
    def("city", "City"),
    def("region", "Region"),
    def("postal_code", "PostalCode"),
    def("country", "Country"),
    def("home_phone", "HomePhone"),
    def("extension", "Extension"),
    def("photo", "Photo"),
    def("notes", "Notes"),
    def("reports_to", "ReportsTo"),
    def("photo_path", "PhotoPath"),
    def("city2", "City2"),
];

const ORDER_FIELDS: &[FieldDef] = &[
    def("order_id", "OrderID"),
    def("customer_id", "CustomerID"),
    def("employee_id", "EmployeeID"),
    def("order_date", "OrderDate"),
    def("required_date", "RequiredDate"),
    def("shipped_date", "ShippedDate"),
    def("ship_via", "ShipVia"),
    def("freight", "Freight"),
    def("ship_name", "ShipName"),
    def("ship_address", "ShipAddress"),
    def("ship_city", "ShipCity"),
    def("ship_region", "ShipRegion"),
    def("ship_postal_code", "ShipPostalCode"),
    def("ship_country", "ShipCountry"),
    def("ship_via2", "ShipVia2"),
];

/// A record shape query contexts can materialize through a compiled mapping.
///
/// Implementors are detached snapshots: they hold plain values, are never
/// tracked, and carry only the fields their mapping persists.
pub trait MappedRecord: FromQueryResult {
    const KIND: EntityKind;
}

/// Customer as the canonical overrides map it: key plus the test-only
/// `company_name2` field. Deliberately mapped to a nonexistent table by the
/// canonical configuration and never queried by the canonical tests.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MappedCustomer {
    pub customer_id: String,
    pub company_name2: Option<String>,
}

impl MappedRecord for MappedCustomer {
    const KIND: EntityKind = EntityKind::Customer;
}

/// Employee with `city2` aliased onto the seeded `City` column.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MappedEmployee {
    pub employee_id: i32,
    pub city2: Option<String>,
}

impl MappedRecord for MappedEmployee {
    const KIND: EntityKind = EntityKind::Employee;
}

/// Order with the nullable shipper enum aliased onto the seeded `ShipVia`
/// column.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MappedOrder {
    pub order_id: i32,
    pub ship_via2: Option<ShipVia>,
}

impl MappedRecord for MappedOrder {
    const KIND: EntityKind = EntityKind::Order;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_include_the_extra_fields() {
        assert!(EntityKind::Customer.field("company_name2").is_some());
        assert!(EntityKind::Employee.field("city2").is_some());
        assert!(EntityKind::Order.field("ship_via2").is_some());
    }

    #[test]
    fn catalog_lookup_misses_unknown_fields() {
        assert!(EntityKind::Customer.field("ship_via2").is_none());
        assert!(EntityKind::Order.field("city2").is_none());
    }

    #[test]
    fn default_column_matches_the_seeded_schema() {
        let city = EntityKind::Employee.field("city").unwrap();
        assert_eq!(city.column, "City");

        let key = EntityKind::Order.field("order_id").unwrap();
        assert_eq!(key.column, "OrderID");
    }
}
