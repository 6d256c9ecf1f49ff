use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::menu::{NewMenu, NewMenuSection, UpdateMenu, UpdateMenuSection};
use crate::domain::menu_item::{
    DietaryFlags, NewMenuItem, NewModifier, UpdateMenuItem, UpdateModifier,
};
use crate::domain::restaurant::WeeklyHours;
use crate::forms::{
    deserialize_present, invalid_hours_day, non_blank, sanitize_inline_text, sanitize_list,
    sanitize_multiline_text,
};

const NAME_MAX_LEN: u64 = 128;
const DESCRIPTION_MAX_LEN: u64 = 2048;
const LIST_MAX_LEN: u64 = 64;

/// Result type returned by the menu form helpers.
pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing menu, section, item and modifier forms.
#[derive(Debug, Error)]
pub enum MenuFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("name cannot be empty")]
    EmptyName,
    #[error("active hours for {day} are out of range")]
    InvalidHours { day: &'static str },
    #[error("preparation time cannot be negative")]
    NegativePreparationTime,
}

fn required_name(name: &str) -> MenuFormResult<String> {
    let name = sanitize_inline_text(name);
    if name.is_empty() {
        return Err(MenuFormError::EmptyName);
    }
    Ok(name)
}

fn checked_hours(hours: WeeklyHours) -> MenuFormResult<WeeklyHours> {
    match invalid_hours_day(&hours) {
        Some(day) => Err(MenuFormError::InvalidHours { day }),
        None => Ok(hours),
    }
}

/// Empty text clears the stored value.
fn clearable_description(description: &str) -> Option<String> {
    Some(sanitize_multiline_text(description)).filter(|value| !value.is_empty())
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub hours_active: Option<WeeklyHours>,
}

impl AddMenuForm {
    pub fn into_new_menu(self, restaurant_id: i32) -> MenuFormResult<NewMenu> {
        self.validate()?;

        let mut menu = NewMenu::new(restaurant_id, required_name(&self.name)?);
        if let Some(hours) = self.hours_active {
            menu = menu.with_hours_active(checked_hours(hours)?);
        }
        Ok(menu)
    }
}

/// Partial menu update; `hours_active: null` clears the active window.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditMenuForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub hours_active: Option<Option<WeeklyHours>>,
    pub is_active: Option<bool>,
}

impl EditMenuForm {
    pub fn into_update_menu(self) -> MenuFormResult<UpdateMenu> {
        self.validate()?;

        let mut updates = UpdateMenu::new();
        if let Some(name) = self.name {
            updates.name = Some(required_name(&name)?);
        }
        updates.hours_active = match self.hours_active {
            Some(Some(hours)) => Some(Some(checked_hours(hours)?)),
            other => other,
        };
        updates.is_active = self.is_active;
        Ok(updates)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddSectionForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

impl AddSectionForm {
    pub fn into_new_section(self, menu_id: i32) -> MenuFormResult<NewMenuSection> {
        self.validate()?;

        let mut section = NewMenuSection::new(menu_id, required_name(&self.name)?);
        if let Some(description) = self.description.as_deref().and_then(clearable_description) {
            section = section.with_description(description);
        }
        if let Some(display_order) = self.display_order {
            section = section.with_display_order(display_order);
        }
        Ok(section)
    }
}

/// Partial section update; an empty description clears it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditSectionForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

impl EditSectionForm {
    pub fn into_update_section(self) -> MenuFormResult<UpdateMenuSection> {
        self.validate()?;

        let mut updates = UpdateMenuSection::new();
        if let Some(name) = self.name {
            updates.name = Some(required_name(&name)?);
        }
        updates.description = self.description.as_deref().map(clearable_description);
        updates.display_order = self.display_order;
        Ok(updates)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddItemForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: i32,
    pub display_order: Option<i32>,
    /// Minutes.
    #[validate(range(min = 0))]
    pub preparation_time: Option<i32>,
    #[serde(default)]
    #[validate(length(max = LIST_MAX_LEN))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    #[validate(length(max = LIST_MAX_LEN))]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub dietary_flags: DietaryFlags,
    #[validate(length(max = 1024))]
    pub image: Option<String>,
}

impl AddItemForm {
    pub fn into_new_item(self, section_id: i32) -> MenuFormResult<NewMenuItem> {
        self.validate()?;

        let mut item = NewMenuItem::new(section_id, required_name(&self.name)?, self.price_cents)
            .with_ingredients(sanitize_list(self.ingredients))
            .with_allergens(sanitize_list(self.allergens))
            .with_dietary_flags(self.dietary_flags);

        if let Some(description) = self.description.as_deref().and_then(clearable_description) {
            item = item.with_description(description);
        }
        if let Some(display_order) = self.display_order {
            item = item.with_display_order(display_order);
        }
        if let Some(minutes) = self.preparation_time {
            item = item.with_preparation_time(minutes);
        }
        if let Some(image) = non_blank(self.image.as_deref()) {
            item = item.with_image(image);
        }
        Ok(item)
    }
}

/// Partial item update. Empty `description`/`image` and `preparation_time: null` clear them.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditItemForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i32>,
    pub display_order: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub preparation_time: Option<Option<i32>>,
    #[validate(length(max = LIST_MAX_LEN))]
    pub ingredients: Option<Vec<String>>,
    #[validate(length(max = LIST_MAX_LEN))]
    pub allergens: Option<Vec<String>>,
    pub dietary_flags: Option<DietaryFlags>,
    #[validate(length(max = 1024))]
    pub image: Option<String>,
    pub is_available: Option<bool>,
}

impl EditItemForm {
    pub fn into_update_item(self) -> MenuFormResult<UpdateMenuItem> {
        self.validate()?;

        let mut updates = UpdateMenuItem::new();
        if let Some(name) = self.name {
            updates.name = Some(required_name(&name)?);
        }
        updates.description = self.description.as_deref().map(clearable_description);
        updates.price_cents = self.price_cents;
        updates.display_order = self.display_order;
        if matches!(self.preparation_time, Some(Some(minutes)) if minutes < 0) {
            return Err(MenuFormError::NegativePreparationTime);
        }
        updates.preparation_time = self.preparation_time;
        updates.ingredients = self.ingredients.map(sanitize_list);
        updates.allergens = self.allergens.map(sanitize_list);
        updates.dietary_flags = self.dietary_flags;
        updates.image = self
            .image
            .as_deref()
            .map(|image| non_blank(Some(image)));
        updates.is_available = self.is_available;
        Ok(updates)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddModifierForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Signed; negative values discount the item.
    pub price_adjustment_cents: i32,
    pub is_default: Option<bool>,
}

impl AddModifierForm {
    pub fn into_new_modifier(self, menu_item_id: i32) -> MenuFormResult<NewModifier> {
        self.validate()?;

        Ok(NewModifier::new(
            menu_item_id,
            required_name(&self.name)?,
            self.price_adjustment_cents,
        )
        .with_default(self.is_default.unwrap_or(false)))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditModifierForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    pub price_adjustment_cents: Option<i32>,
    pub is_default: Option<bool>,
}

impl EditModifierForm {
    pub fn into_update_modifier(self) -> MenuFormResult<UpdateModifier> {
        self.validate()?;

        let mut updates = UpdateModifier::new();
        if let Some(name) = self.name {
            updates.name = Some(required_name(&name)?);
        }
        updates.price_adjustment_cents = self.price_adjustment_cents;
        updates.is_default = self.is_default;
        Ok(updates)
    }
}
