use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Independent dietary markers shown next to an item.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
}

/// Domain representation of a dish or drink listed in a menu section.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    /// Unique identifier of the item.
    pub id: i32,
    /// Owning section identifier.
    pub section_id: i32,
    /// Human-readable name of the item.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Base price in cents.
    pub price_cents: i32,
    /// Lower values sort first within the section.
    pub display_order: i32,
    /// Expected preparation time in minutes.
    pub preparation_time: Option<i32>,
    /// Ingredients in the order entered.
    pub ingredients: Vec<String>,
    /// Allergens in the order entered.
    pub allergens: Vec<String>,
    pub dietary_flags: DietaryFlags,
    /// Optional image reference.
    pub image: Option<String>,
    /// Unavailable items cannot be ordered.
    pub is_available: bool,
    /// Modifiers that can be selected for this item.
    pub modifiers: Vec<Modifier>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Optional adjustment that can be selected when ordering an item.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Modifier {
    pub id: i32,
    /// Item the modifier belongs to.
    pub menu_item_id: i32,
    pub name: String,
    /// Signed price change in cents.
    pub price_adjustment_cents: i32,
    /// Informational only; never applied automatically.
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub section_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub display_order: i32,
    pub preparation_time: Option<i32>,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub dietary_flags: DietaryFlags,
    pub image: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewMenuItem {
    pub fn new(section_id: i32, name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            section_id,
            name: name.into(),
            description: None,
            price_cents,
            display_order: 0,
            preparation_time: None,
            ingredients: Vec::new(),
            allergens: Vec::new(),
            dietary_flags: DietaryFlags::default(),
            image: None,
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

    pub fn with_preparation_time(mut self, minutes: i32) -> Self {
        self.preparation_time = Some(minutes);
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_allergens(mut self, allergens: Vec<String>) -> Self {
        self.allergens = allergens;
        self
    }

    pub fn with_dietary_flags(mut self, flags: DietaryFlags) -> Self {
        self.dietary_flags = flags;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Partial update of a menu item.
#[derive(Debug, Clone)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price_cents: Option<i32>,
    pub display_order: Option<i32>,
    pub preparation_time: Option<Option<i32>>,
    pub ingredients: Option<Vec<String>>,
    pub allergens: Option<Vec<String>>,
    pub dietary_flags: Option<DietaryFlags>,
    pub image: Option<Option<String>>,
    pub is_available: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateMenuItem {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateMenuItem {
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            price_cents: None,
            display_order: None,
            preparation_time: None,
            ingredients: None,
            allergens: None,
            dietary_flags: None,
            image: None,
            is_available: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Payload required to insert a new modifier.
#[derive(Debug, Clone)]
pub struct NewModifier {
    pub menu_item_id: i32,
    pub name: String,
    pub price_adjustment_cents: i32,
    pub is_default: bool,
    pub updated_at: NaiveDateTime,
}

impl NewModifier {
    pub fn new(menu_item_id: i32, name: impl Into<String>, price_adjustment_cents: i32) -> Self {
        Self {
            menu_item_id,
            name: name.into(),
            price_adjustment_cents,
            is_default: false,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

/// Partial update of a modifier.
#[derive(Debug, Clone)]
pub struct UpdateModifier {
    pub name: Option<String>,
    pub price_adjustment_cents: Option<i32>,
    pub is_default: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateModifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateModifier {
    pub fn new() -> Self {
        Self {
            name: None,
            price_adjustment_cents: None,
            is_default: None,
            updated_at: Local::now().naive_utc(),
        }
    }
}
