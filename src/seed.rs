//! Deterministic Northwind-style reference dataset.
//!
//! The generators are pure: the same rows come out on every run, so any two
//! fixtures (and any two contexts of one fixture) observe identical data. The
//! fixed cardinalities every assertion depends on are 91 customers, 9
//! employees, and 830 orders (ids 10248 through 11077).

use chrono::{Days, NaiveDate};
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use entity::prelude::{Customer, Employee, Order, ShipVia};

use crate::error::HarnessError;


/// Rows in the seeded `Customers` table.
pub const CUSTOMER_COUNT: u64 = 91;
/// Rows in the seeded `Employees` table.
pub const EMPLOYEE_COUNT: u64 = 9;
/// Rows in the seeded `Orders` table.
pub const ORDER_COUNT: u64 = 830;

/// First order id in the seeded range.
pub const FIRST_ORDER_ID: i32 = 10248;

// SQLite caps bind parameters per statement, so bulk inserts go in batches.
const INSERT_BATCH: usize = 100;

const CITIES: &[&str] = &[
    "Berlin", "London", "Madrid", "Nantes", "Graz", "Lisboa", "Torino", "Bern", "Seattle",
];

const COUNTRIES: &[&str] = &[
    "Germany",
    "UK",
    "Spain",
    "France",
    "Austria",
    "Portugal",
    "Italy",
    "Switzerland",
    "USA",
];

const EMPLOYEE_NAMES: &[(&str, &str)] = &[
    ("Nancy", "Davolio"),
    ("Andrew", "Fuller"),
    ("Janet", "Leverling"),
    ("Margaret", "Peacock"),
    ("Steven", "Buchanan"),
    ("Michael", "Suyama"),
    ("Robert", "King"),
    ("Laura", "Callahan"),
    ("Anne", "Dodsworth"),
];

/// Observed row counts for the three seeded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub customers: u64,
    pub employees: u64,
    pub orders: u64,
}

impl SeedCounts {
    /// The counts a correctly seeded store reports.
    pub const EXPECTED: SeedCounts = SeedCounts {
        customers: CUSTOMER_COUNT,
        employees: EMPLOYEE_COUNT,
        orders: ORDER_COUNT,
    };

    /// True when none of the three tables holds any rows yet.
    pub fn is_empty(self) -> bool {
        self.customers == 0 && self.employees == 0 && self.orders == 0
    }

    /// Checks the observed counts against the reference dataset.
    pub fn verify(self) -> Result<(), HarnessError> {
        let expected = Self::EXPECTED;
        let checks = [
            ("Customers", expected.customers, self.customers),
            ("Employees", expected.employees, self.employees),
            ("Orders", expected.orders, self.orders),
        ];
        for (table, expected, actual) in checks {
            if expected != actual {
                return Err(HarnessError::SeedMismatch {
                    table,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Counts the rows currently in the three seeded tables.
pub async fn counts(db: &DatabaseConnection) -> Result<SeedCounts, DbErr> {
    Ok(SeedCounts {
        customers: Customer::find().count(db).await?,
        employees: Employee::find().count(db).await?,
        orders: Order::find().count(db).await?,
    })
}

/// Inserts the full reference dataset into an empty store.
pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::debug!("seeding reference dataset");

    for batch in customers().chunks(INSERT_BATCH) {
        Customer::insert_many(batch.to_vec()).exec(db).await?;
    }
    Employee::insert_many(employees()).exec(db).await?;
    for batch in orders().chunks(INSERT_BATCH) {
        Order::insert_many(batch.to_vec()).exec(db).await?;
    }

    Ok(())
}

/// Five-letter customer code for a seed index: `AAAAA`, `AAAAB`, ...
pub fn customer_code(index: u64) -> String {
    let mut code = [b'A'; 5];
    let mut rest = index;
    for slot in code.iter_mut().rev() {
        *slot = b'A' + (rest % 26) as u8;
        rest /= 26;
    }
    code.iter().map(|b| *b as char).collect()
}

/// Generates the 91 customer rows.
pub fn customers() -> Vec<entity::customer::ActiveModel> {
    (0..CUSTOMER_COUNT)
        .map(|i| {
            let slot = i as usize % CITIES.len();
            entity::customer::ActiveModel {
                customer_id: ActiveValue::Set(customer_code(i)),
                company_name: ActiveValue::Set(format!("Company {}", i + 1)),
                contact_name: ActiveValue::Set(Some(format!("Contact {}", i + 1))),
                contact_title: ActiveValue::Set(Some("Owner".to_string())),
                address: ActiveValue::Set(Some(format!("{} Main St.", i + 1))),
                city: ActiveValue::Set(Some(CITIES[slot].to_string())),
                region: ActiveValue::Set(None),
                postal_code: ActiveValue::Set(Some(format!("{:05}", 10000 + i))),
                country: ActiveValue::Set(Some(COUNTRIES[slot].to_string())),
                phone: ActiveValue::Set(Some(format!("030-{:07}", i))),
                fax: ActiveValue::Set(None),
            }
        })
        .collect()
}

/// Generates the 9 employee rows. Every employee has a city, so projecting the
/// aliased `City` column always yields a value.
pub fn employees() -> Vec<entity::employee::ActiveModel> {
    EMPLOYEE_NAMES
        .iter()
        .enumerate()
        .map(|(i, (first, last))| {
            let id = i as i32 + 1;
            entity::employee::ActiveModel {
                employee_id: ActiveValue::Set(id),
                last_name: ActiveValue::Set(last.to_string()),
                first_name: ActiveValue::Set(first.to_string()),
                title: ActiveValue::Set(Some("Sales Representative".to_string())),
                title_of_courtesy: ActiveValue::Set(None),
                birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1948 + i as i32 * 2, 12, 8)),
                hire_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1992, 5, 1)),
                address: ActiveValue::Set(Some(format!("{} Moss Bay Blvd.", id))),
                city: ActiveValue::Set(Some(CITIES[i % CITIES.len()].to_string())),
                region: ActiveValue::Set(None),
                postal_code: ActiveValue::Set(Some(format!("{:05}", 98000 + i))),
                country: ActiveValue::Set(Some(COUNTRIES[i % COUNTRIES.len()].to_string())),
                home_phone: ActiveValue::Set(Some(format!("206-{:07}", i))),
                extension: ActiveValue::Set(Some(format!("{}", 400 + i))),
                photo: ActiveValue::Set(None),
                notes: ActiveValue::Set(None),
                reports_to: ActiveValue::Set(if id == 1 { None } else { Some(1) }),
                photo_path: ActiveValue::Set(None),
            }
        })
        .collect()
}

/// Generates the 830 order rows. Shipper assignment cycles through the enum
/// and leaves every tenth order unshipped, so the nullable projection covers
/// both populated and null values without changing cardinality.
pub fn orders() -> Vec<entity::order::ActiveModel> {
    let base_date = NaiveDate::from_ymd_opt(1996, 7, 4);
    (0..ORDER_COUNT)
        .map(|i| {
            let ship_via = if i % 10 == 9 {
                None
            } else {
                Some(match i % 3 {
                    0 => ShipVia::One,
                    1 => ShipVia::Two,
                    _ => ShipVia::Three,
                })
            };
            let order_date = base_date.and_then(|d| d.checked_add_days(Days::new(i / 3)));
            let slot = i as usize % CITIES.len();
            entity::order::ActiveModel {
                order_id: ActiveValue::Set(FIRST_ORDER_ID + i as i32),
                customer_id: ActiveValue::Set(Some(customer_code(i % CUSTOMER_COUNT))),
                employee_id: ActiveValue::Set(Some((i % EMPLOYEE_COUNT) as i32 + 1)),
                order_date: ActiveValue::Set(order_date),
                required_date: ActiveValue::Set(
                    order_date.and_then(|d| d.checked_add_days(Days::new(28))),
                ),
                shipped_date: ActiveValue::Set(
                    order_date.and_then(|d| d.checked_add_days(Days::new(7))),
                ),
                ship_via: ActiveValue::Set(ship_via),
                freight: ActiveValue::Set(Some((i % 400) as f64 * 0.25 + 3.5)),
                ship_name: ActiveValue::Set(Some(format!("Company {}", i % CUSTOMER_COUNT + 1))),
                ship_address: ActiveValue::Set(Some(format!("{} Main St.", i % CUSTOMER_COUNT + 1))),
                ship_city: ActiveValue::Set(Some(CITIES[slot].to_string())),
                ship_region: ActiveValue::Set(None),
                ship_postal_code: ActiveValue::Set(Some(format!("{:05}", 10000 + i % CUSTOMER_COUNT))),
                ship_country: ActiveValue::Set(Some(COUNTRIES[slot].to_string())),
            }
        })
        .collect()
}
