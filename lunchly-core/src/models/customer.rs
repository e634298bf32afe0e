//! Customer record

use serde::Serialize;

/// Customer of the restaurant.
///
/// `notes` is kept as an empty string rather than NULL; `phone` is kept as
/// an explicit `None` rather than an empty string. Both rules re-apply on
/// every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    notes: String,
}

impl Customer {
    /// Create an unsaved customer. `id` stays unset until the first save.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: Option<&str>,
        notes: Option<&str>,
    ) -> Self {
        let mut customer = Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            notes: String::new(),
        };
        customer.set_phone(phone);
        customer.set_notes(notes);
        customer
    }

    /// Rehydrate a stored row. Normalization still applies, so a NULL
    /// notes column comes back as an empty string.
    pub fn from_stored(
        id: i64,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        let mut customer = Self::new(first_name, last_name, phone.as_deref(), notes.as_deref());
        customer.id = Some(id);
        customer
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Full display name, recomputed from the name parts on every call.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Adopt the identifier generated by storage. The save path in
    /// `lunchly-db` calls this once after INSERT .. RETURNING id.
    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Keep notes as an empty string, not NULL.
    pub fn set_notes(&mut self, notes: Option<&str>) {
        self.notes = notes.unwrap_or_default().to_string();
    }

    /// Keep phone as an explicit absence, not an empty string.
    pub fn set_phone(&mut self, phone: Option<&str>) {
        self.phone = phone.filter(|p| !p.is_empty()).map(str::to_string);
    }
}
