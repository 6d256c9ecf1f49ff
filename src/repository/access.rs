use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::access::EntityRef;
use crate::domain::staff::StaffMember as DomainStaffMember;
use crate::models::staff::StaffMember as DbStaffMember;
use crate::repository::{AccessReader, DieselRepository};

impl AccessReader for DieselRepository {
    fn parent_of(&self, entity: EntityRef) -> RepositoryResult<Option<EntityRef>> {
        use crate::schema::{item_modifiers, menu_items, menu_sections, menus, orders};

        let mut conn = self.conn()?;

        let parent = match entity {
            EntityRef::Restaurant(_) => Some(entity),
            EntityRef::Menu(id) => menus::table
                .filter(menus::id.eq(id))
                .select(menus::restaurant_id)
                .first::<i32>(&mut conn)
                .optional()?
                .map(EntityRef::Restaurant),
            EntityRef::Section(id) => menu_sections::table
                .filter(menu_sections::id.eq(id))
                .select(menu_sections::menu_id)
                .first::<i32>(&mut conn)
                .optional()?
                .map(EntityRef::Menu),
            EntityRef::Item(id) => menu_items::table
                .filter(menu_items::id.eq(id))
                .select(menu_items::section_id)
                .first::<i32>(&mut conn)
                .optional()?
                .map(EntityRef::Section),
            EntityRef::Modifier(id) => item_modifiers::table
                .filter(item_modifiers::id.eq(id))
                .select(item_modifiers::menu_item_id)
                .first::<i32>(&mut conn)
                .optional()?
                .map(EntityRef::Item),
            EntityRef::Order(id) => orders::table
                .filter(orders::id.eq(id))
                .select(orders::restaurant_id)
                .first::<i32>(&mut conn)
                .optional()?
                .map(EntityRef::Restaurant),
        };

        Ok(parent)
    }

    fn get_membership(
        &self,
        user_id: &str,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<DomainStaffMember>> {
        use crate::schema::restaurant_staff;

        let mut conn = self.conn()?;

        let member = restaurant_staff::table
            .filter(restaurant_staff::user_id.eq(user_id))
            .filter(restaurant_staff::restaurant_id.eq(restaurant_id))
            .first::<DbStaffMember>(&mut conn)
            .optional()?;

        Ok(member.map(Into::into))
    }
}
