//! Reservation repository

use chrono::{DateTime, Utc};
use lunchly_core::Reservation;
use sqlx::{FromRow, PgPool, Row};

use crate::error::DbError;

/// Raw reservations row; hydration goes through
/// `Reservation::from_stored` so the field rules apply to stored data too.
#[derive(Debug, FromRow)]
struct ReservationRow {
    id: i64,
    customer_id: i64,
    start_at: DateTime<Utc>,
    num_guests: i32,
    notes: Option<String>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation::from_stored(
            row.id,
            row.customer_id,
            row.start_at,
            row.num_guests,
            row.notes,
        )
    }
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All reservations for one customer, in no guaranteed order.
    pub async fn for_customer(&self, customer_id: i64) -> Result<Vec<Reservation>, DbError> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
            SELECT id, customer_id, start_at, num_guests, notes
            FROM reservations
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    /// Single reservation by id.
    pub async fn get(&self, id: i64) -> Result<Reservation, DbError> {
        let row: ReservationRow = sqlx::query_as(
            r#"
            SELECT id, customer_id, start_at, num_guests, notes
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "reservation",
            id,
        })?;

        Ok(row.into())
    }

    /// Insert when the reservation has no id yet (backfilling it from the
    /// generated row), update all mutable fields by id otherwise.
    pub async fn save(&self, reservation: &mut Reservation) -> Result<(), DbError> {
        match reservation.id() {
            None => {
                let row = sqlx::query(
                    r#"
                    INSERT INTO reservations (customer_id, start_at, num_guests, notes)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(reservation.customer_id())
                .bind(reservation.start_at())
                .bind(reservation.num_guests())
                .bind(reservation.notes())
                .fetch_one(self.pool)
                .await?;

                let id: i64 = row.get("id");
                reservation.set_id(id);
                tracing::debug!(id, "created reservation");
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE reservations
                    SET customer_id = $1, start_at = $2, num_guests = $3, notes = $4
                    WHERE id = $5
                    "#,
                )
                .bind(reservation.customer_id())
                .bind(reservation.start_at())
                .bind(reservation.num_guests())
                .bind(reservation.notes())
                .bind(id)
                .execute(self.pool)
                .await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::customers::CustomerRepo;
    use crate::test_support;
    use chrono::TimeZone;
    use lunchly_core::Customer;

    async fn saved_customer(pool: &PgPool) -> i64 {
        let mut customer = Customer::new("Dorothy", "Vaughan", None, None);
        CustomerRepo::new(pool)
            .save(&mut customer)
            .await
            .expect("insert failed");
        customer.id().unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn save_then_get_round_trip() {
        let pool = test_support::connect().await;
        let repo = ReservationRepo::new(&pool);
        let customer_id = saved_customer(&pool).await;

        let start = Utc.with_ymd_and_hms(2026, 8, 14, 19, 30, 0).unwrap();
        let mut reservation = Reservation::new(Some(customer_id), start, 0, None);
        repo.save(&mut reservation).await.expect("insert failed");
        let id = reservation.id().expect("id backfilled after insert");

        let fetched = repo.get(id).await.expect("fetch failed");
        assert_eq!(fetched.customer_id(), Some(customer_id));
        assert_eq!(fetched.start_at(), start);
        // the zero guest count was normalized before the insert
        assert_eq!(fetched.num_guests(), 1);
        assert_eq!(fetched.notes(), "");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_reservation_is_not_found() {
        let pool = test_support::connect().await;
        let repo = ReservationRepo::new(&pool);

        let err = repo.get(-1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn save_updates_existing_row() {
        let pool = test_support::connect().await;
        let repo = ReservationRepo::new(&pool);
        let customer_id = saved_customer(&pool).await;

        let start = Utc.with_ymd_and_hms(2026, 8, 14, 18, 0, 0).unwrap();
        let mut reservation = Reservation::new(Some(customer_id), start, 2, None);
        repo.save(&mut reservation).await.expect("insert failed");
        let id = reservation.id().unwrap();

        reservation.set_num_guests(6);
        reservation.set_notes(Some("moved to the patio"));
        repo.save(&mut reservation).await.expect("update failed");

        let fetched = repo.get(id).await.expect("fetch failed");
        assert_eq!(fetched.num_guests(), 6);
        assert_eq!(fetched.notes(), "moved to the patio");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn for_customer_scopes_to_one_customer() {
        let pool = test_support::connect().await;
        let repo = ReservationRepo::new(&pool);
        let diner = saved_customer(&pool).await;
        let other = saved_customer(&pool).await;

        for day in [1, 2] {
            let mut reservation = Reservation::new(
                Some(diner),
                Utc.with_ymd_and_hms(2026, 10, day, 19, 0, 0).unwrap(),
                2,
                None,
            );
            repo.save(&mut reservation).await.expect("insert failed");
        }

        let found = repo.for_customer(diner).await.expect("lookup failed");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.customer_id() == Some(diner)));

        let none = repo.for_customer(other).await.expect("lookup failed");
        assert!(none.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_without_customer_is_a_storage_error() {
        let pool = test_support::connect().await;
        let repo = ReservationRepo::new(&pool);

        let start = Utc.with_ymd_and_hms(2026, 8, 14, 19, 0, 0).unwrap();
        let mut orphan = Reservation::new(None, start, 2, None);

        // NOT NULL constraint on customer_id propagates unchanged
        let err = repo.save(&mut orphan).await.unwrap_err();
        assert!(matches!(err, DbError::Storage(_)));
        assert_eq!(orphan.id(), None);
    }
}
