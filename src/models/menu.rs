use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu::{
    Menu as DomainMenu, MenuSection as DomainMenuSection, NewMenu as DomainNewMenu,
    NewMenuSection as DomainNewMenuSection, UpdateMenu as DomainUpdateMenu,
    UpdateMenuSection as DomainUpdateMenuSection,
};
use crate::domain::restaurant::WeeklyHours;
use crate::models::{from_json_column, to_json_column};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menus)]
pub struct Menu {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub hours_active: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menus)]
pub struct NewMenu<'a> {
    pub restaurant_id: i32,
    pub name: &'a str,
    pub hours_active: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menus)]
pub struct UpdateMenu<'a> {
    pub name: Option<&'a str>,
    pub hours_active: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::menu_sections)]
#[diesel(belongs_to(Menu, foreign_key = menu_id))]
pub struct MenuSection {
    pub id: i32,
    pub menu_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_sections)]
pub struct NewMenuSection<'a> {
    pub menu_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub display_order: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::menu_sections)]
pub struct UpdateMenuSection<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub display_order: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Menu> for DomainMenu {
    fn from(value: Menu) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            name: value.name,
            hours_active: value
                .hours_active
                .as_deref()
                .map(from_json_column::<WeeklyHours>),
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMenu> for NewMenu<'a> {
    fn from(value: &'a DomainNewMenu) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            name: value.name.as_str(),
            hours_active: value.hours_active.as_ref().map(to_json_column),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenu> for UpdateMenu<'a> {
    fn from(value: &'a DomainUpdateMenu) -> Self {
        Self {
            name: value.name.as_deref(),
            hours_active: value
                .hours_active
                .as_ref()
                .map(|hours| hours.as_ref().map(to_json_column)),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}

impl From<MenuSection> for DomainMenuSection {
    fn from(value: MenuSection) -> Self {
        Self {
            id: value.id,
            menu_id: value.menu_id,
            name: value.name,
            description: value.description,
            display_order: value.display_order,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMenuSection> for NewMenuSection<'a> {
    fn from(value: &'a DomainNewMenuSection) -> Self {
        Self {
            menu_id: value.menu_id,
            name: value.name.as_str(),
            description: value.description.as_deref(),
            display_order: value.display_order,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateMenuSection> for UpdateMenuSection<'a> {
    fn from(value: &'a DomainUpdateMenuSection) -> Self {
        Self {
            name: value.name.as_deref(),
            description: value
                .description
                .as_ref()
                .map(|description| description.as_deref()),
            display_order: value.display_order,
            updated_at: value.updated_at,
        }
    }
}
