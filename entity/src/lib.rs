//! SeaORM entity definitions for the Northwind-style reference tables.
//!
//! These are the base records the harness seeds and maps: the full `Customers`,
//! `Employees`, and `Orders` shapes with their original PascalCase column names.
//! The mapped record shapes used by query contexts live in the harness crate;
//! this crate only knows the relational schema.

pub mod customer;
pub mod employee;
pub mod order;
pub mod ship_via;

pub mod prelude;
