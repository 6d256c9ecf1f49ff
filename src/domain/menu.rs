use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::menu_item::MenuItem;
use crate::domain::restaurant::WeeklyHours;

/// Domain representation of a menu belonging to a restaurant.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Menu {
    /// Unique identifier of the menu.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Human-readable name of the menu.
    pub name: String,
    /// Optional window during which the menu is preferred.
    pub hours_active: Option<WeeklyHours>,
    /// Inactive menus stay visible to staff but are hidden from order taking.
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A named group of items inside a menu.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuSection {
    pub id: i32,
    /// Owning menu identifier.
    pub menu_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Lower values sort first.
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Section together with its items, in display order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SectionWithItems {
    #[serde(flatten)]
    pub section: MenuSection,
    pub items: Vec<MenuItem>,
}

/// Fully assembled menu as shown to staff and used to build a cart.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuDetails {
    #[serde(flatten)]
    pub menu: Menu,
    pub sections: Vec<SectionWithItems>,
}

impl MenuDetails {
    /// Find an item anywhere in the menu.
    pub fn find_item(&self, item_id: i32) -> Option<&MenuItem> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.id == item_id)
    }
}

/// Payload required to insert a new menu.
#[derive(Debug, Clone)]
pub struct NewMenu {
    pub restaurant_id: i32,
    pub name: String,
    pub hours_active: Option<WeeklyHours>,
    pub updated_at: NaiveDateTime,
}

impl NewMenu {
    pub fn new(restaurant_id: i32, name: impl Into<String>) -> Self {
        Self {
            restaurant_id,
            name: name.into(),
            hours_active: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_hours_active(mut self, hours: WeeklyHours) -> Self {
        self.hours_active = Some(hours);
        self
    }
}

/// Partial update of a menu.
#[derive(Debug, Clone)]
pub struct UpdateMenu {
    pub name: Option<String>,
    /// `Some(None)` clears the active window.
    pub hours_active: Option<Option<WeeklyHours>>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateMenu {
    pub fn new() -> Self {
        Self {
            name: None,
            hours_active: None,
            is_active: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Payload required to insert a new section.
#[derive(Debug, Clone)]
pub struct NewMenuSection {
    pub menu_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub updated_at: NaiveDateTime,
}

impl NewMenuSection {
    pub fn new(menu_id: i32, name: impl Into<String>) -> Self {
        Self {
            menu_id,
            name: name.into(),
            description: None,
            display_order: 0,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }
}

/// Partial update of a section.
#[derive(Debug, Clone)]
pub struct UpdateMenuSection {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateMenuSection {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateMenuSection {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            display_order: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Outcome of removing a menu, section, item or modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// Nothing was deleted; placed orders still hold this many lines and selections below the entry.
    Referenced(usize),
}
