//! Customer repository

use lunchly_core::{Customer, Reservation};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use super::reservations::ReservationRepo;
use crate::error::DbError;

/// Raw customers row; normalization happens in `Customer::from_stored`, so
/// a NULL notes column re-enters through the same coercion path as user
/// input.
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    notes: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::from_stored(row.id, row.first_name, row.last_name, row.phone, row.notes)
    }
}

/// Customer joined with its reservation count, for the top-10 listing.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerWithCount {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(rename = "count")]
    pub reservation_count: i64,
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All customers, ordered by last then first name.
    pub async fn all(&self) -> Result<Vec<Customer>, DbError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Customers whose first or last name contains `term`,
    /// case-insensitively. An empty term matches everyone; no match is an
    /// empty vec, not an error.
    pub async fn by_name(&self, term: &str) -> Result<Vec<Customer>, DbError> {
        // built here so the whole pattern binds as one parameter
        let pattern = format!("%{term}%");
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE first_name ILIKE $1 OR last_name ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Up to ten customers by descending reservation count. Inner join, so
    /// customers without a single reservation never appear.
    pub async fn top10(&self) -> Result<Vec<CustomerWithCount>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.phone, c.notes,
                   COUNT(r.id) AS reservation_count
            FROM customers AS c
            JOIN reservations AS r ON r.customer_id = c.id
            GROUP BY c.id
            ORDER BY COUNT(r.id) DESC
            LIMIT 10
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CustomerWithCount {
                customer: Customer::from_stored(
                    row.get("id"),
                    row.get("first_name"),
                    row.get("last_name"),
                    row.get("phone"),
                    row.get("notes"),
                ),
                reservation_count: row.get("reservation_count"),
            })
            .collect())
    }

    /// Single customer by id.
    pub async fn get(&self, id: i64) -> Result<Customer, DbError> {
        let row: CustomerRow = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "customer",
            id,
        })?;

        Ok(row.into())
    }

    /// This customer's reservations. A customer with no bookings, or one
    /// that has never been saved, yields an empty vec.
    pub async fn reservations(&self, customer: &Customer) -> Result<Vec<Reservation>, DbError> {
        match customer.id() {
            Some(id) => ReservationRepo::new(self.pool).for_customer(id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Insert when the customer has no id yet (backfilling it from the
    /// generated row), update all mutable fields by id otherwise.
    pub async fn save(&self, customer: &mut Customer) -> Result<(), DbError> {
        match customer.id() {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO customers (first_name, last_name, phone, notes)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.notes())
                .fetch_one(self.pool)
                .await?;

                let id: i64 = row.get("id");
                customer.set_id(id);
                tracing::debug!(id, "created customer");
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE customers
                    SET first_name = $1, last_name = $2, phone = $3, notes = $4
                    WHERE id = $5
                    "#,
                )
                .bind(customer.first_name())
                .bind(customer.last_name())
                .bind(customer.phone())
                .bind(customer.notes())
                .bind(id)
                .execute(self.pool)
                .await?;
            }
        }

        Ok(())
    }
}
