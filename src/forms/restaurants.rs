use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::restaurant::{NewRestaurant, UpdateRestaurant, WeeklyHours};
use crate::forms::{invalid_hours_day, non_blank, sanitize_inline_text};

const NAME_MAX_LEN: u64 = 128;
const TEXT_MAX_LEN: u64 = 256;

/// Result type returned by the restaurant form helpers.
pub type RestaurantFormResult<T> = Result<T, RestaurantFormError>;

/// Errors that can occur while processing restaurant forms.
#[derive(Debug, Error)]
pub enum RestaurantFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("restaurant name cannot be empty")]
    EmptyName,
    #[error("opening hours for {day} are out of range")]
    InvalidHours { day: &'static str },
}

/// Payload for creating a restaurant.
#[derive(Debug, Deserialize, Validate)]
pub struct AddRestaurantForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Cuisine or venue type.
    #[validate(length(max = TEXT_MAX_LEN))]
    pub kind: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    pub address: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub tax_rate: Option<f64>,
    pub opening_hours: Option<WeeklyHours>,
}

impl AddRestaurantForm {
    /// Validates the payload into a `NewRestaurant` created by `created_by`.
    pub fn into_new_restaurant(self, created_by: &str) -> RestaurantFormResult<NewRestaurant> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(RestaurantFormError::EmptyName);
        }

        let mut restaurant = NewRestaurant::new(name, created_by);

        if let Some(kind) = non_blank(self.kind.as_deref()) {
            restaurant = restaurant.with_kind(kind);
        }
        if let Some(address) = non_blank(self.address.as_deref()) {
            restaurant = restaurant.with_address(address);
        }
        if let Some(phone) = non_blank(self.phone.as_deref()) {
            restaurant = restaurant.with_phone(phone);
        }
        if let Some(email) = non_blank(self.email.as_deref()) {
            restaurant = restaurant.with_email(email.to_lowercase());
        }
        if let Some(tax_rate) = self.tax_rate {
            restaurant = restaurant.with_tax_rate(tax_rate);
        }
        if let Some(hours) = self.opening_hours {
            check_hours(&hours)?;
            restaurant = restaurant.with_opening_hours(hours);
        }

        Ok(restaurant)
    }
}

/// Payload for editing a restaurant. Absent or blank fields stay unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditRestaurantForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    pub kind: Option<String>,
    #[validate(length(max = TEXT_MAX_LEN))]
    pub address: Option<String>,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub tax_rate: Option<f64>,
    pub opening_hours: Option<WeeklyHours>,
}

impl EditRestaurantForm {
    pub fn into_update_restaurant(self) -> RestaurantFormResult<UpdateRestaurant> {
        self.validate()?;

        let mut updates = UpdateRestaurant::new();

        if let Some(name) = self.name {
            let name = sanitize_inline_text(&name);
            if name.is_empty() {
                return Err(RestaurantFormError::EmptyName);
            }
            updates.name = Some(name);
        }

        updates.kind = non_blank(self.kind.as_deref());
        updates.address = non_blank(self.address.as_deref());
        updates.phone = non_blank(self.phone.as_deref());
        updates.email = non_blank(self.email.as_deref()).map(|email| email.to_lowercase());
        updates.tax_rate = self.tax_rate;

        if let Some(hours) = self.opening_hours {
            check_hours(&hours)?;
            updates.opening_hours = Some(hours);
        }

        Ok(updates)
    }
}

fn check_hours(hours: &WeeklyHours) -> RestaurantFormResult<()> {
    match invalid_hours_day(hours) {
        Some(day) => Err(RestaurantFormError::InvalidHours { day }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::TimeRange;

    fn add_form(name: &str) -> AddRestaurantForm {
        AddRestaurantForm {
            name: name.to_string(),
            kind: Some("  Thai ".to_string()),
            address: Some("   ".to_string()),
            phone: None,
            email: Some("Owner@Example.com".to_string()),
            tax_rate: Some(8.25),
            opening_hours: None,
        }
    }

    #[test]
    fn add_form_converts_and_sanitizes() {
        let restaurant = add_form("  Noodle   Bar ")
            .into_new_restaurant("user-1")
            .expect("expected success");

        assert_eq!(restaurant.name, "Noodle Bar");
        assert_eq!(restaurant.kind.as_deref(), Some("Thai"));
        assert_eq!(restaurant.address, None);
        assert_eq!(restaurant.email.as_deref(), Some("owner@example.com"));
        assert_eq!(restaurant.tax_rate, 8.25);
        assert_eq!(restaurant.created_by, "user-1");
        assert_eq!(restaurant.opening_hours, WeeklyHours::default());
    }

    #[test]
    fn add_form_rejects_blank_name() {
        let result = add_form("   ").into_new_restaurant("user-1");
        assert!(matches!(result, Err(RestaurantFormError::EmptyName)));
    }

    #[test]
    fn add_form_rejects_invalid_email() {
        let mut form = add_form("Noodle Bar");
        form.email = Some("not-an-email".to_string());

        let result = form.into_new_restaurant("user-1");
        assert!(matches!(result, Err(RestaurantFormError::Validation(_))));
    }

    #[test]
    fn add_form_rejects_out_of_range_hours() {
        let mut hours = WeeklyHours::default();
        hours.sunday.push(TimeRange {
            open_hour: 10,
            open_minute: 75,
            close_hour: 20,
            close_minute: 0,
        });
        let mut form = add_form("Noodle Bar");
        form.opening_hours = Some(hours);

        let result = form.into_new_restaurant("user-1");
        assert!(matches!(
            result,
            Err(RestaurantFormError::InvalidHours { day: "sunday" })
        ));
    }

    #[test]
    fn edit_form_only_sets_supplied_fields() {
        let form = EditRestaurantForm {
            address: Some(" 12  Main St ".to_string()),
            kind: Some("".to_string()),
            ..Default::default()
        };

        let updates = form.into_update_restaurant().expect("expected success");

        assert_eq!(updates.address.as_deref(), Some("12 Main St"));
        assert_eq!(updates.name, None);
        assert_eq!(updates.kind, None);
        assert_eq!(updates.tax_rate, None);
        assert!(updates.opening_hours.is_none());
    }
}
