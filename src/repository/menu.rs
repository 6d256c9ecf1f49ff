use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::access::EntityRef;
use crate::domain::menu::{
    Menu as DomainMenu, MenuDetails, MenuSection as DomainMenuSection,
    NewMenu as DomainNewMenu, NewMenuSection as DomainNewMenuSection, Removal, SectionWithItems,
    UpdateMenu as DomainUpdateMenu, UpdateMenuSection as DomainUpdateMenuSection,
};
use crate::domain::menu_item::{
    MenuItem as DomainMenuItem, Modifier as DomainModifier, NewMenuItem as DomainNewMenuItem,
    NewModifier as DomainNewModifier, UpdateMenuItem as DomainUpdateMenuItem,
    UpdateModifier as DomainUpdateModifier,
};
use crate::models::menu::{
    Menu as DbMenu, MenuSection as DbMenuSection, NewMenu as DbNewMenu,
    NewMenuSection as DbNewMenuSection, UpdateMenu as DbUpdateMenu,
    UpdateMenuSection as DbUpdateMenuSection,
};
use crate::models::menu_item::{
    MenuItem as DbMenuItem, Modifier as DbModifier, NewMenuItem as DbNewMenuItem,
    NewModifier as DbNewModifier, UpdateMenuItem as DbUpdateMenuItem,
    UpdateModifier as DbUpdateModifier,
};
use crate::repository::{
    DieselRepository, ItemWriter, MenuReader, MenuWriter, ModifierWriter, SectionWriter,
};

impl MenuReader for DieselRepository {
    fn list_menus(&self, restaurant_id: i32) -> RepositoryResult<Vec<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let rows = menus::table
            .filter(menus::restaurant_id.eq(restaurant_id))
            .order((menus::name.asc(), menus::id.asc()))
            .load::<DbMenu>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_menu_details(&self, menu_id: i32) -> RepositoryResult<Option<MenuDetails>> {
        use crate::schema::{menu_items, menu_sections, menus};

        let mut conn = self.conn()?;

        let menu = menus::table
            .filter(menus::id.eq(menu_id))
            .first::<DbMenu>(&mut conn)
            .optional()?;

        let Some(menu) = menu else {
            return Ok(None);
        };

        let sections = menu_sections::table
            .filter(menu_sections::menu_id.eq(menu.id))
            .order((
                menu_sections::display_order.asc(),
                menu_sections::name.asc(),
                menu_sections::id.asc(),
            ))
            .load::<DbMenuSection>(&mut conn)?;

        let section_ids: Vec<i32> = sections.iter().map(|section| section.id).collect();

        let items = if section_ids.is_empty() {
            Vec::new()
        } else {
            menu_items::table
                .filter(menu_items::section_id.eq_any(&section_ids))
                .order((
                    menu_items::display_order.asc(),
                    menu_items::name.asc(),
                    menu_items::id.asc(),
                ))
                .load::<DbMenuItem>(&mut conn)?
        };

        let mut items_by_section: HashMap<i32, Vec<DomainMenuItem>> = HashMap::new();
        for item in attach_modifiers(&mut conn, items)? {
            items_by_section
                .entry(item.section_id)
                .or_default()
                .push(item);
        }

        let sections = sections
            .into_iter()
            .map(|section| {
                let items = items_by_section.remove(&section.id).unwrap_or_default();
                SectionWithItems {
                    section: section.into(),
                    items,
                }
            })
            .collect();

        Ok(Some(MenuDetails {
            menu: menu.into(),
            sections,
        }))
    }

    fn get_menu_items(&self, item_ids: &[i32]) -> RepositoryResult<Vec<DomainMenuItem>> {
        use crate::schema::menu_items;

        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;

        let items = menu_items::table
            .filter(menu_items::id.eq_any(item_ids))
            .order(menu_items::id.asc())
            .load::<DbMenuItem>(&mut conn)?;

        attach_modifiers(&mut conn, items)
    }
}

impl MenuWriter for DieselRepository {
    fn create_menu(&self, new_menu: &DomainNewMenu) -> RepositoryResult<DomainMenu> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(menus::table)
            .values(&DbNewMenu::from(new_menu))
            .get_result::<DbMenu>(&mut conn)?;

        Ok(created.into())
    }

    fn update_menu(&self, menu_id: i32, updates: &DomainUpdateMenu) -> RepositoryResult<DomainMenu> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let updated = diesel::update(menus::table.filter(menus::id.eq(menu_id)))
            .set(&DbUpdateMenu::from(updates))
            .get_result::<DbMenu>(&mut conn)
            .optional()?;

        updated.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    fn delete_menu(&self, menu_id: i32) -> RepositoryResult<Removal> {
        use crate::schema::{menu_sections, menus};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<Removal, RepositoryError, _>(|conn| {
            let references = count_order_references(conn, EntityRef::Menu(menu_id))?;
            if references > 0 {
                return Ok(Removal::Referenced(references));
            }

            let item_ids = item_ids_under(conn, EntityRef::Menu(menu_id))?;
            delete_items_cascade(conn, &item_ids)?;

            diesel::delete(menu_sections::table.filter(menu_sections::menu_id.eq(menu_id)))
                .execute(conn)?;

            let deleted = diesel::delete(menus::table.filter(menus::id.eq(menu_id))).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(Removal::Removed)
        })
    }
}

impl SectionWriter for DieselRepository {
    fn create_section(
        &self,
        new_section: &DomainNewMenuSection,
    ) -> RepositoryResult<DomainMenuSection> {
        use crate::schema::menu_sections;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(menu_sections::table)
            .values(&DbNewMenuSection::from(new_section))
            .get_result::<DbMenuSection>(&mut conn)?;

        Ok(created.into())
    }

    fn update_section(
        &self,
        section_id: i32,
        updates: &DomainUpdateMenuSection,
    ) -> RepositoryResult<DomainMenuSection> {
        use crate::schema::menu_sections;

        let mut conn = self.conn()?;

        let updated = diesel::update(menu_sections::table.filter(menu_sections::id.eq(section_id)))
            .set(&DbUpdateMenuSection::from(updates))
            .get_result::<DbMenuSection>(&mut conn)
            .optional()?;

        updated.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    fn delete_section(&self, section_id: i32) -> RepositoryResult<Removal> {
        use crate::schema::menu_sections;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<Removal, RepositoryError, _>(|conn| {
            let references = count_order_references(conn, EntityRef::Section(section_id))?;
            if references > 0 {
                return Ok(Removal::Referenced(references));
            }

            let item_ids = item_ids_under(conn, EntityRef::Section(section_id))?;
            delete_items_cascade(conn, &item_ids)?;

            let deleted =
                diesel::delete(menu_sections::table.filter(menu_sections::id.eq(section_id)))
                    .execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(Removal::Removed)
        })
    }
}

impl ItemWriter for DieselRepository {
    fn create_item(&self, new_item: &DomainNewMenuItem) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(menu_items::table)
            .values(&DbNewMenuItem::from(new_item))
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(created.into_domain(Vec::new()))
    }

    fn update_item(
        &self,
        item_id: i32,
        updates: &DomainUpdateMenuItem,
    ) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let updated = diesel::update(menu_items::table.filter(menu_items::id.eq(item_id)))
            .set(&DbUpdateMenuItem::from(updates))
            .get_result::<DbMenuItem>(&mut conn)
            .optional()?;

        let Some(updated) = updated else {
            return Err(RepositoryError::NotFound);
        };

        let mut items = attach_modifiers(&mut conn, vec![updated])?;
        items.pop().ok_or(RepositoryError::NotFound)
    }

    fn delete_item(&self, item_id: i32) -> RepositoryResult<Removal> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<Removal, RepositoryError, _>(|conn| {
            let references = count_order_references(conn, EntityRef::Item(item_id))?;
            if references > 0 {
                return Ok(Removal::Referenced(references));
            }

            let deleted = delete_items_cascade(conn, &[item_id])?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(Removal::Removed)
        })
    }
}

impl ModifierWriter for DieselRepository {
    fn create_modifier(&self, new_modifier: &DomainNewModifier) -> RepositoryResult<DomainModifier> {
        use crate::schema::item_modifiers;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(item_modifiers::table)
            .values(&DbNewModifier::from(new_modifier))
            .get_result::<DbModifier>(&mut conn)?;

        Ok(created.into())
    }

    fn update_modifier(
        &self,
        modifier_id: i32,
        updates: &DomainUpdateModifier,
    ) -> RepositoryResult<DomainModifier> {
        use crate::schema::item_modifiers;

        let mut conn = self.conn()?;

        let updated =
            diesel::update(item_modifiers::table.filter(item_modifiers::id.eq(modifier_id)))
                .set(&DbUpdateModifier::from(updates))
                .get_result::<DbModifier>(&mut conn)
                .optional()?;

        updated.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    fn delete_modifier(&self, modifier_id: i32) -> RepositoryResult<Removal> {
        use crate::schema::item_modifiers;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<Removal, RepositoryError, _>(|conn| {
            let references = count_order_references(conn, EntityRef::Modifier(modifier_id))?;
            if references > 0 {
                return Ok(Removal::Referenced(references));
            }

            let deleted =
                diesel::delete(item_modifiers::table.filter(item_modifiers::id.eq(modifier_id)))
                    .execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(Removal::Removed)
        })
    }
}

/// Load the modifiers of `items` and convert them into domain items, keeping their order.
fn attach_modifiers(
    conn: &mut SqliteConnection,
    items: Vec<DbMenuItem>,
) -> RepositoryResult<Vec<DomainMenuItem>> {
    use crate::schema::item_modifiers;

    if items.is_empty() {
        return Ok(Vec::new());
    }

    let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

    let mut modifiers_by_item: HashMap<i32, Vec<DbModifier>> = HashMap::new();
    let rows = item_modifiers::table
        .filter(item_modifiers::menu_item_id.eq_any(&item_ids))
        .order(item_modifiers::id.asc())
        .load::<DbModifier>(conn)?;

    for modifier in rows {
        modifiers_by_item
            .entry(modifier.menu_item_id)
            .or_default()
            .push(modifier);
    }

    Ok(items
        .into_iter()
        .map(|item| {
            let modifiers = modifiers_by_item.remove(&item.id).unwrap_or_default();
            item.into_domain(modifiers)
        })
        .collect())
}

/// Identifiers of every menu item that sits below `entity` in the hierarchy.
fn item_ids_under(conn: &mut SqliteConnection, entity: EntityRef) -> RepositoryResult<Vec<i32>> {
    use crate::schema::{menu_items, menu_sections, menus};

    let section_ids = match entity {
        EntityRef::Restaurant(id) => menu_sections::table
            .inner_join(menus::table)
            .filter(menus::restaurant_id.eq(id))
            .select(menu_sections::id)
            .load::<i32>(conn)?,
        EntityRef::Menu(id) => menu_sections::table
            .filter(menu_sections::menu_id.eq(id))
            .select(menu_sections::id)
            .load::<i32>(conn)?,
        EntityRef::Section(id) => vec![id],
        EntityRef::Item(id) => return Ok(vec![id]),
        EntityRef::Modifier(_) | EntityRef::Order(_) => return Ok(Vec::new()),
    };

    if section_ids.is_empty() {
        return Ok(Vec::new());
    }

    Ok(menu_items::table
        .filter(menu_items::section_id.eq_any(&section_ids))
        .select(menu_items::id)
        .load::<i32>(conn)?)
}

/// Placed order lines and modifier selections that point into `entity`.
fn count_order_references(conn: &mut SqliteConnection, entity: EntityRef) -> RepositoryResult<usize> {
    use crate::schema::{item_modifiers, order_item_modifiers, order_items};

    let item_ids = item_ids_under(conn, entity)?;
    let modifier_ids = match entity {
        EntityRef::Modifier(id) => vec![id],
        _ if item_ids.is_empty() => Vec::new(),
        _ => item_modifiers::table
            .filter(item_modifiers::menu_item_id.eq_any(&item_ids))
            .select(item_modifiers::id)
            .load::<i32>(conn)?,
    };

    let mut total = 0;

    if !item_ids.is_empty() {
        total += order_items::table
            .filter(order_items::menu_item_id.eq_any(&item_ids))
            .count()
            .get_result::<i64>(conn)? as usize;
    }

    if !modifier_ids.is_empty() {
        total += order_item_modifiers::table
            .filter(order_item_modifiers::modifier_id.eq_any(&modifier_ids))
            .count()
            .get_result::<i64>(conn)? as usize;
    }

    Ok(total)
}

/// Delete the given items together with their modifiers. Returns the number of items removed.
fn delete_items_cascade(conn: &mut SqliteConnection, item_ids: &[i32]) -> RepositoryResult<usize> {
    use crate::schema::{item_modifiers, menu_items};

    if item_ids.is_empty() {
        return Ok(0);
    }

    diesel::delete(item_modifiers::table.filter(item_modifiers::menu_item_id.eq_any(item_ids)))
        .execute(conn)?;

    let deleted = diesel::delete(menu_items::table.filter(menu_items::id.eq_any(item_ids)))
        .execute(conn)?;

    Ok(deleted)
}
