//! Repository implementations for database access
//!
//! Both repositories follow the same patterns:
//! - borrow the pool, one parameterized statement per operation
//! - save inserts when the record has no id and updates by id otherwise
//! - single-row lookups surface misses as `DbError::NotFound`

pub mod customers;
pub mod reservations;

pub use customers::{CustomerRepo, CustomerWithCount};
pub use reservations::ReservationRepo;
