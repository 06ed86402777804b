pub use super::customer::Entity as Customer;
pub use super::employee::Entity as Employee;
pub use super::order::Entity as Order;
pub use super::ship_via::ShipVia;
