//! lunchly-db: Postgres storage for the Lunchly reservation app
//!
//! # Design
//!
//! - Repositories borrow a connection pool; they never construct one
//! - One parameterized statement per operation, no cross-record transactions
//! - Racing saves on the same id are last-writer-wins; this layer adds no
//!   locking, retries, or timeouts of its own

pub mod error;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CustomerRepo, CustomerWithCount, ReservationRepo};

#[cfg(test)]
pub(crate) mod test_support;
