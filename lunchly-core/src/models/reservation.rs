//! Reservation record

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::Serialize;

use super::ValidationError;

/// Party size, normalized to at least one guest.
///
/// Anything that is not a number, or is below one, silently becomes 1.
/// This is a policy, not a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuestCount(i32);

impl GuestCount {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(1)
    }
}

impl From<i32> for GuestCount {
    fn from(n: i32) -> Self {
        Self(n.max(1))
    }
}

impl From<&str> for GuestCount {
    fn from(raw: &str) -> Self {
        raw.trim().parse::<i32>().map(Self::from).unwrap_or_default()
    }
}

/// Parse a start time from text: RFC 3339, or a bare `YYYY-MM-DD HH:MM`
/// treated as UTC. Anything else, including impossible calendar dates,
/// fails validation.
pub fn parse_start_at(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M") {
        return Ok(naive.and_utc());
    }
    Err(ValidationError::InvalidStartAt {
        value: raw.to_string(),
    })
}

/// A reservation for a party.
///
/// Belongs to one customer once `customer_id` is set; only re-assigning
/// the same id is allowed after that, saved or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: Option<i64>,
    customer_id: Option<i64>,
    start_at: DateTime<Utc>,
    num_guests: GuestCount,
    notes: String,
}

impl Reservation {
    /// Create an unsaved reservation for a known point in time.
    pub fn new(
        customer_id: Option<i64>,
        start_at: DateTime<Utc>,
        num_guests: impl Into<GuestCount>,
        notes: Option<&str>,
    ) -> Self {
        let mut reservation = Self {
            id: None,
            customer_id,
            start_at,
            num_guests: num_guests.into(),
            notes: String::new(),
        };
        reservation.set_notes(notes);
        reservation
    }

    /// Create an unsaved reservation from raw form input. Construction
    /// aborts when the start time does not parse; the other fields only
    /// normalize.
    pub fn from_input(
        customer_id: Option<i64>,
        start_at: &str,
        num_guests: &str,
        notes: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let start_at = parse_start_at(start_at)?;
        Ok(Self::new(customer_id, start_at, num_guests, notes))
    }

    /// Rehydrate a stored row.
    pub fn from_stored(
        id: i64,
        customer_id: i64,
        start_at: DateTime<Utc>,
        num_guests: i32,
        notes: Option<String>,
    ) -> Self {
        let mut reservation = Self::new(Some(customer_id), start_at, num_guests, notes.as_deref());
        reservation.id = Some(id);
        reservation
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn customer_id(&self) -> Option<i64> {
        self.customer_id
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.start_at
    }

    pub fn num_guests(&self) -> i32 {
        self.num_guests.get()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Human-readable start time, e.g. "April 3rd 2020, 7:30 pm".
    /// Computed on demand, never cached.
    pub fn formatted_start_at(&self) -> String {
        let day = self.start_at.day();
        format!(
            "{} {}{} {}, {}",
            self.start_at.format("%B"),
            day,
            ordinal_suffix(day),
            self.start_at.format("%Y"),
            self.start_at.format("%-I:%M %P"),
        )
    }

    /// Adopt the identifier generated by storage. The save path in
    /// `lunchly-db` calls this once after INSERT .. RETURNING id.
    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Set the owning customer. Fails once a different customer id is
    /// already in place; re-assigning the same id is a no-op success.
    pub fn set_customer_id(&mut self, customer_id: i64) -> Result<(), ValidationError> {
        match self.customer_id {
            Some(current) if current != customer_id => Err(ValidationError::CustomerChange {
                current,
                attempted: customer_id,
            }),
            _ => {
                self.customer_id = Some(customer_id);
                Ok(())
            }
        }
    }

    pub fn set_num_guests(&mut self, num_guests: impl Into<GuestCount>) {
        self.num_guests = num_guests.into();
    }

    pub fn set_start_at(&mut self, start_at: DateTime<Utc>) {
        self.start_at = start_at;
    }

    /// Parse-and-assign a start time. On failure the current value stays.
    pub fn set_start_at_str(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.start_at = parse_start_at(raw)?;
        Ok(())
    }

    /// Keep notes as an empty string, not NULL.
    pub fn set_notes(&mut self, notes: Option<&str>) {
        self.notes = notes.unwrap_or_default().to_string();
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
