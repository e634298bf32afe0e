//! lunchly-core: domain records for the Lunchly reservation app
//!
//! Customers and reservations as validated in-memory records. All storage
//! access lives in the `lunchly-db` crate; this crate has no database
//! dependency.

pub mod config;
pub mod models;

pub use config::DbConfig;
pub use models::{Customer, GuestCount, Reservation, ValidationError};
