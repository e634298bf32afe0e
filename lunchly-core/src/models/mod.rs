//! Domain records with validation at construction and mutation
//!
//! Field rules are enforced through setters; the record structs keep their
//! fields private so the rules cannot be bypassed by direct assignment.

pub mod customer;
pub mod reservation;
pub mod validation;

pub use customer::Customer;
pub use reservation::{parse_start_at, GuestCount, Reservation};
pub use validation::ValidationError;
