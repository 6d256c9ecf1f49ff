use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu_item::{
    DietaryFlags, MenuItem as DomainMenuItem, Modifier as DomainModifier,
    NewMenuItem as DomainNewMenuItem, NewModifier as DomainNewModifier,
    UpdateMenuItem as DomainUpdateMenuItem, UpdateModifier as DomainUpdateModifier,
};
use crate::models::{from_json_column, to_json_column};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub section_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub display_order: i32,
    pub preparation_time: Option<i32>,
    pub ingredients: String,
    pub allergens: String,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub image: Option<String>,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem<'a> {
    pub section_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub display_order: i32,
    pub preparation_time: Option<i32>,
    pub ingredients: String,
    pub allergens: String,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub image: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct UpdateMenuItem<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub price_cents: Option<i32>,
    pub display_order: Option<i32>,
    pub preparation_time: Option<Option<i32>>,
    pub ingredients: Option<String>,
    pub allergens: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub is_dairy_free: Option<bool>,
    pub image: Option<Option<&'a str>>,
    pub is_available: Option<bool>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::item_modifiers)]
#[diesel(belongs_to(MenuItem, foreign_key = menu_item_id))]
pub struct Modifier {
    pub id: i32,
    pub menu_item_id: i32,
    pub name: String,
    pub price_adjustment_cents: i32,
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::item_modifiers)]
pub struct NewModifier<'a> {
    pub menu_item_id: i32,
    pub name: &'a str,
    pub price_adjustment_cents: i32,
    pub is_default: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::item_modifiers)]
pub struct UpdateModifier<'a> {
    pub name: Option<&'a str>,
    pub price_adjustment_cents: Option<i32>,
    pub is_default: Option<bool>,
    pub updated_at: NaiveDateTime,
}

impl MenuItem {
    pub fn into_domain(self, modifiers: Vec<Modifier>) -> DomainMenuItem {
        DomainMenuItem {
            id: self.id,
            section_id: self.section_id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            display_order: self.display_order,
            preparation_time: self.preparation_time,
            ingredients: from_json_column(&self.ingredients),
            allergens: from_json_column(&self.allergens),
            dietary_flags: DietaryFlags {
                vegetarian: self.is_vegetarian,
                vegan: self.is_vegan,
                gluten_free: self.is_gluten_free,
                dairy_free: self.is_dairy_free,
            },
            image: self.image,
            is_available: self.is_available,
            modifiers: modifiers.into_iter().map(DomainModifier::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<(MenuItem, Vec<Modifier>)> for DomainMenuItem {
    fn from(value: (MenuItem, Vec<Modifier>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            section_id: value.section_id,
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            display_order: value.display_order,
            preparation_time: value.preparation_time,
            ingredients: to_json_column(&value.ingredients),
            allergens: to_json_column(&value.allergens),
            is_vegetarian: value.dietary_flags.vegetarian,
            is_vegan: value.dietary_flags.vegan,
            is_gluten_free: value.dietary_flags.gluten_free,
            is_dairy_free: value.dietary_flags.dairy_free,
            image: value.image.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenuItem> for UpdateMenuItem<'a> {
    fn from(value: &'a DomainUpdateMenuItem) -> Self {
        let flags = value.dietary_flags;
        Self {
            name: value.name.as_deref(),
            description: value.description.as_ref().map(|text| text.as_deref()),
            price_cents: value.price_cents,
            display_order: value.display_order,
            preparation_time: value.preparation_time,
            ingredients: value.ingredients.as_ref().map(to_json_column),
            allergens: value.allergens.as_ref().map(to_json_column),
            is_vegetarian: flags.map(|flags| flags.vegetarian),
            is_vegan: flags.map(|flags| flags.vegan),
            is_gluten_free: flags.map(|flags| flags.gluten_free),
            is_dairy_free: flags.map(|flags| flags.dairy_free),
            image: value.image.as_ref().map(|image| image.as_deref()),
            is_available: value.is_available,
            updated_at: value.updated_at,
        }
    }
}

impl From<Modifier> for DomainModifier {
    fn from(value: Modifier) -> Self {
        Self {
            id: value.id,
            menu_item_id: value.menu_item_id,
            name: value.name,
            price_adjustment_cents: value.price_adjustment_cents,
            is_default: value.is_default,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewModifier> for NewModifier<'a> {
    fn from(value: &'a DomainNewModifier) -> Self {
        Self {
            menu_item_id: value.menu_item_id,
            name: value.name.as_str(),
            price_adjustment_cents: value.price_adjustment_cents,
            is_default: value.is_default,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateModifier> for UpdateModifier<'a> {
    fn from(value: &'a DomainUpdateModifier) -> Self {
        Self {
            name: value.name.as_deref(),
            price_adjustment_cents: value.price_adjustment_cents,
            is_default: value.is_default,
            updated_at: value.updated_at,
        }
    }
}
