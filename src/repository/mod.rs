use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::access::EntityRef;
use crate::domain::menu::{
    Menu, MenuDetails, MenuSection, NewMenu, NewMenuSection, Removal, UpdateMenu,
    UpdateMenuSection,
};
use crate::domain::menu_item::{
    MenuItem, Modifier, NewMenuItem, NewModifier, UpdateMenuItem, UpdateModifier,
};
use crate::domain::order::{NewOrder, NewOrderItem, Order};
use crate::domain::restaurant::{
    NewRestaurant, Restaurant, RestaurantMembership, UpdateRestaurant,
};
use crate::domain::staff::{NewStaffMember, StaffListing, StaffMember, UpdateStaffMember};
use crate::domain::user::NewUser;

pub mod access;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod staff;
pub mod user;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Lookups used to authorize an action against the restaurant hierarchy.
pub trait AccessReader {
    /// Immediate parent of `entity`, or `None` when the row behind it does not exist.
    ///
    /// A restaurant is the root and is returned as its own parent without a lookup;
    /// callers check restaurant existence through membership.
    fn parent_of(&self, entity: EntityRef) -> RepositoryResult<Option<EntityRef>>;
    fn get_membership(
        &self,
        user_id: &str,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<StaffMember>>;
}

pub trait RestaurantReader {
    fn list_restaurants_for_user(
        &self,
        user_id: &str,
    ) -> RepositoryResult<Vec<RestaurantMembership>>;
    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
}

pub trait RestaurantWriter {
    /// Store the creator's profile, the restaurant and the owner membership atomically.
    fn create_restaurant(
        &self,
        new_restaurant: &NewRestaurant,
        creator: &NewUser,
    ) -> RepositoryResult<(Restaurant, StaffMember)>;
    fn update_restaurant(
        &self,
        restaurant_id: i32,
        updates: &UpdateRestaurant,
    ) -> RepositoryResult<Restaurant>;
}

pub trait StaffReader {
    fn list_staff(&self, restaurant_id: i32) -> RepositoryResult<Vec<StaffListing>>;
    fn get_staff_member(&self, staff_id: i32) -> RepositoryResult<Option<StaffMember>>;
}

pub trait StaffWriter {
    /// Insert the membership together with its attached profile, if any.
    fn create_staff_member(&self, new_member: &NewStaffMember) -> RepositoryResult<StaffMember>;
    fn update_staff_member(
        &self,
        staff_id: i32,
        updates: &UpdateStaffMember,
    ) -> RepositoryResult<StaffMember>;
}

pub trait MenuReader {
    fn list_menus(&self, restaurant_id: i32) -> RepositoryResult<Vec<Menu>>;
    /// Menu with sections, items and modifiers in display order.
    fn get_menu_details(&self, menu_id: i32) -> RepositoryResult<Option<MenuDetails>>;
    /// Items with their modifiers; unknown ids are skipped.
    fn get_menu_items(&self, item_ids: &[i32]) -> RepositoryResult<Vec<MenuItem>>;
}

pub trait MenuWriter {
    fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
    fn update_menu(&self, menu_id: i32, updates: &UpdateMenu) -> RepositoryResult<Menu>;
    /// Removes the menu with all of its sections, items and modifiers unless
    /// placed orders reference any of them.
    fn delete_menu(&self, menu_id: i32) -> RepositoryResult<Removal>;
}

pub trait SectionWriter {
    fn create_section(&self, new_section: &NewMenuSection) -> RepositoryResult<MenuSection>;
    fn update_section(
        &self,
        section_id: i32,
        updates: &UpdateMenuSection,
    ) -> RepositoryResult<MenuSection>;
    /// Removes the section with all of its items and modifiers.
    fn delete_section(&self, section_id: i32) -> RepositoryResult<Removal>;
}

pub trait ItemWriter {
    fn create_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    fn update_item(&self, item_id: i32, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
    /// Removes the item with all of its modifiers.
    fn delete_item(&self, item_id: i32) -> RepositoryResult<Removal>;
}

pub trait ModifierWriter {
    fn create_modifier(&self, new_modifier: &NewModifier) -> RepositoryResult<Modifier>;
    fn update_modifier(
        &self,
        modifier_id: i32,
        updates: &UpdateModifier,
    ) -> RepositoryResult<Modifier>;
    fn delete_modifier(&self, modifier_id: i32) -> RepositoryResult<Removal>;
}

pub trait OrderReader {
    /// Orders of a restaurant, newest first.
    fn list_orders(&self, restaurant_id: i32) -> RepositoryResult<Vec<Order>>;
    fn get_order_by_id(&self, order_id: i32) -> RepositoryResult<Option<Order>>;
}

pub trait OrderWriter {
    /// Store the placing user's profile, the order, its items and their modifier
    /// selections in one transaction.
    ///
    /// Fails with `NotFound` when a line no longer orders an available item of
    /// the order's restaurant or selects a modifier of another item.
    fn create_order(&self, new_order: &NewOrder, placed_by: &NewUser) -> RepositoryResult<Order>;
    /// Append one line to an existing order and return the refreshed order.
    /// The line is checked the same way as in `create_order`.
    fn add_order_item(&self, order_id: i32, new_item: &NewOrderItem) -> RepositoryResult<Order>;
}
