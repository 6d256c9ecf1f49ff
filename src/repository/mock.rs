use mockall::mock;

use super::{
    AccessReader, ItemWriter, MenuReader, MenuWriter, ModifierWriter, OrderReader, OrderWriter,
    RestaurantReader, RestaurantWriter, SectionWriter, StaffReader, StaffWriter,
};
use crate::domain::{
    access::EntityRef,
    menu::{
        Menu, MenuDetails, MenuSection, NewMenu, NewMenuSection, Removal, UpdateMenu,
        UpdateMenuSection,
    },
    menu_item::{MenuItem, Modifier, NewMenuItem, NewModifier, UpdateMenuItem, UpdateModifier},
    order::{NewOrder, NewOrderItem, Order},
    restaurant::{NewRestaurant, Restaurant, RestaurantMembership, UpdateRestaurant},
    staff::{NewStaffMember, StaffListing, StaffMember, UpdateStaffMember},
    user::NewUser,
};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub Repo {}

    impl AccessReader for Repo {
        fn parent_of(&self, entity: EntityRef) -> RepositoryResult<Option<EntityRef>>;
        fn get_membership(&self, user_id: &str, restaurant_id: i32) -> RepositoryResult<Option<StaffMember>>;
    }

    impl RestaurantReader for Repo {
        fn list_restaurants_for_user(&self, user_id: &str) -> RepositoryResult<Vec<RestaurantMembership>>;
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
    }

    impl RestaurantWriter for Repo {
        fn create_restaurant(&self, new_restaurant: &NewRestaurant, creator: &NewUser) -> RepositoryResult<(Restaurant, StaffMember)>;
        fn update_restaurant(&self, restaurant_id: i32, updates: &UpdateRestaurant) -> RepositoryResult<Restaurant>;
    }

    impl StaffReader for Repo {
        fn list_staff(&self, restaurant_id: i32) -> RepositoryResult<Vec<StaffListing>>;
        fn get_staff_member(&self, staff_id: i32) -> RepositoryResult<Option<StaffMember>>;
    }

    impl StaffWriter for Repo {
        fn create_staff_member(&self, new_member: &NewStaffMember) -> RepositoryResult<StaffMember>;
        fn update_staff_member(&self, staff_id: i32, updates: &UpdateStaffMember) -> RepositoryResult<StaffMember>;
    }

    impl MenuReader for Repo {
        fn list_menus(&self, restaurant_id: i32) -> RepositoryResult<Vec<Menu>>;
        fn get_menu_details(&self, menu_id: i32) -> RepositoryResult<Option<MenuDetails>>;
        fn get_menu_items(&self, item_ids: &[i32]) -> RepositoryResult<Vec<MenuItem>>;
    }

    impl MenuWriter for Repo {
        fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
        fn update_menu(&self, menu_id: i32, updates: &UpdateMenu) -> RepositoryResult<Menu>;
        fn delete_menu(&self, menu_id: i32) -> RepositoryResult<Removal>;
    }

    impl SectionWriter for Repo {
        fn create_section(&self, new_section: &NewMenuSection) -> RepositoryResult<MenuSection>;
        fn update_section(&self, section_id: i32, updates: &UpdateMenuSection) -> RepositoryResult<MenuSection>;
        fn delete_section(&self, section_id: i32) -> RepositoryResult<Removal>;
    }

    impl ItemWriter for Repo {
        fn create_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
        fn update_item(&self, item_id: i32, updates: &UpdateMenuItem) -> RepositoryResult<MenuItem>;
        fn delete_item(&self, item_id: i32) -> RepositoryResult<Removal>;
    }

    impl ModifierWriter for Repo {
        fn create_modifier(&self, new_modifier: &NewModifier) -> RepositoryResult<Modifier>;
        fn update_modifier(&self, modifier_id: i32, updates: &UpdateModifier) -> RepositoryResult<Modifier>;
        fn delete_modifier(&self, modifier_id: i32) -> RepositoryResult<Removal>;
    }

    impl OrderReader for Repo {
        fn list_orders(&self, restaurant_id: i32) -> RepositoryResult<Vec<Order>>;
        fn get_order_by_id(&self, order_id: i32) -> RepositoryResult<Option<Order>>;
    }

    impl OrderWriter for Repo {
        fn create_order(&self, new_order: &NewOrder, placed_by: &NewUser) -> RepositoryResult<Order>;
        fn add_order_item(&self, order_id: i32, new_item: &NewOrderItem) -> RepositoryResult<Order>;
    }
}
