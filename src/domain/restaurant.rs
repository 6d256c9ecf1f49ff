use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::access::StaffRole;

/// One opening window within a day.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub open_hour: u8,
    pub open_minute: u8,
    pub close_hour: u8,
    pub close_minute: u8,
}

/// Opening windows for each day of the week. An empty day means closed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WeeklyHours {
    pub monday: Vec<TimeRange>,
    pub tuesday: Vec<TimeRange>,
    pub wednesday: Vec<TimeRange>,
    pub thursday: Vec<TimeRange>,
    pub friday: Vec<TimeRange>,
    pub saturday: Vec<TimeRange>,
    pub sunday: Vec<TimeRange>,
}

impl WeeklyHours {
    /// All days paired with their names, Monday first.
    pub fn days(&self) -> [(&'static str, &[TimeRange]); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }
}

/// Domain representation of a restaurant.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Restaurant {
    /// Unique identifier of the restaurant.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Free-form cuisine or venue type.
    pub kind: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Tax rate as a fraction or percentage, as entered by the owner.
    pub tax_rate: f64,
    /// Weekly opening hours.
    pub opening_hours: WeeklyHours,
    /// Session subject of the user that created the restaurant.
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Restaurant paired with the caller's membership in it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RestaurantMembership {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub role: StaffRole,
    pub staff_id: i32,
    pub activated: bool,
}

/// Payload required to insert a new restaurant.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub kind: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_rate: f64,
    pub opening_hours: WeeklyHours,
    /// Creator, inserted as the owner in the same transaction.
    pub created_by: String,
    pub updated_at: NaiveDateTime,
}

impl NewRestaurant {
    /// Build a restaurant payload with empty optional fields.
    pub fn new(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            address: None,
            phone: None,
            email: None,
            tax_rate: 0.0,
            opening_hours: WeeklyHours::default(),
            created_by: created_by.into(),
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_opening_hours(mut self, opening_hours: WeeklyHours) -> Self {
        self.opening_hours = opening_hours;
        self
    }
}

/// Partial update of a restaurant; `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct UpdateRestaurant {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub tax_rate: Option<f64>,
    pub opening_hours: Option<WeeklyHours>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateRestaurant {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateRestaurant {
    pub fn new() -> Self {
        Self {
            name: None,
            kind: None,
            address: None,
            phone: None,
            email: None,
            tax_rate: None,
            opening_hours: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}
