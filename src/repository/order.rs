use std::collections::{HashMap, HashSet};
use std::slice;

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
        OrderItem as DomainOrderItem, OrderStaff,
    },
    domain::user::NewUser as DomainNewUser,
    models::{
        menu_item::{MenuItem as DbMenuItem, Modifier as DbModifier},
        order::{
            NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
            OrderItem as DbOrderItem, OrderItemModifier as DbOrderItemModifier,
        },
    },
    repository::{DieselRepository, OrderReader, OrderWriter, user::upsert_user},
};

impl OrderReader for DieselRepository {
    fn list_orders(&self, restaurant_id: i32) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let db_orders = orders::table
            .filter(orders::restaurant_id.eq(restaurant_id))
            .order((orders::created_at.desc(), orders::id.desc()))
            .load::<DbOrder>(&mut conn)?;

        assemble_orders(&mut conn, db_orders)
    }

    fn get_order_by_id(&self, order_id: i32) -> RepositoryResult<Option<DomainOrder>> {
        let mut conn = self.conn()?;
        load_order(&mut conn, order_id)
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(
        &self,
        new_order: &DomainNewOrder,
        placed_by: &DomainNewUser,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            ensure_orderable(conn, new_order.restaurant_id, &new_order.items)?;
            upsert_user(conn, placed_by)?;

            let created = diesel::insert_into(orders::table)
                .values(&DbNewOrder::from(new_order))
                .get_result::<DbOrder>(conn)?;

            for item in &new_order.items {
                insert_order_item(conn, created.id, item)?;
            }

            load_order(conn, created.id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn add_order_item(
        &self,
        order_id: i32,
        new_item: &DomainNewOrderItem,
    ) -> RepositoryResult<DomainOrder> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let restaurant_id = orders::table
                .filter(orders::id.eq(order_id))
                .select(orders::restaurant_id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            ensure_orderable(conn, restaurant_id, slice::from_ref(new_item))?;
            insert_order_item(conn, order_id, new_item)?;

            load_order(conn, order_id)?.ok_or(RepositoryError::NotFound)
        })
    }
}

/// Fail with `NotFound` unless every line orders an available item of
/// `restaurant_id` and selects only modifiers of that item.
fn ensure_orderable(
    conn: &mut SqliteConnection,
    restaurant_id: i32,
    items: &[DomainNewOrderItem],
) -> RepositoryResult<()> {
    use crate::schema::{item_modifiers, menu_items, menu_sections, menus};

    let mut item_ids: Vec<i32> = items.iter().map(|item| item.menu_item_id).collect();
    item_ids.sort_unstable();
    item_ids.dedup();

    if item_ids.is_empty() {
        return Ok(());
    }

    let orderable = menu_items::table
        .inner_join(menu_sections::table.inner_join(menus::table))
        .filter(menu_items::id.eq_any(&item_ids))
        .filter(menu_items::is_available.eq(true))
        .filter(menus::restaurant_id.eq(restaurant_id))
        .count()
        .get_result::<i64>(conn)?;
    if orderable as usize != item_ids.len() {
        return Err(RepositoryError::NotFound);
    }

    let modifiers: HashSet<(i32, i32)> = item_modifiers::table
        .filter(item_modifiers::menu_item_id.eq_any(&item_ids))
        .select((item_modifiers::id, item_modifiers::menu_item_id))
        .load::<(i32, i32)>(conn)?
        .into_iter()
        .collect();

    let foreign_selection = items.iter().any(|item| {
        item.modifier_ids
            .iter()
            .any(|modifier_id| !modifiers.contains(&(*modifier_id, item.menu_item_id)))
    });
    if foreign_selection {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

fn insert_order_item(
    conn: &mut SqliteConnection,
    order_id: i32,
    item: &DomainNewOrderItem,
) -> RepositoryResult<()> {
    use crate::schema::{order_item_modifiers, order_items};

    let created = diesel::insert_into(order_items::table)
        .values(&DbNewOrderItem::from_domain(order_id, item))
        .get_result::<DbOrderItem>(conn)?;

    if !item.modifier_ids.is_empty() {
        let payload: Vec<DbOrderItemModifier> = item
            .modifier_ids
            .iter()
            .map(|modifier_id| DbOrderItemModifier {
                order_item_id: created.id,
                modifier_id: *modifier_id,
            })
            .collect();

        diesel::insert_into(order_item_modifiers::table)
            .values(&payload)
            .execute(conn)?;
    }

    Ok(())
}

fn load_order(conn: &mut SqliteConnection, order_id: i32) -> RepositoryResult<Option<DomainOrder>> {
    use crate::schema::orders;

    let order = orders::table
        .filter(orders::id.eq(order_id))
        .first::<DbOrder>(conn)
        .optional()?;

    let Some(order) = order else {
        return Ok(None);
    };

    Ok(assemble_orders(conn, vec![order])?.pop())
}

/// Attach staff details, items and selected modifiers to the given orders, keeping their order.
fn assemble_orders(
    conn: &mut SqliteConnection,
    db_orders: Vec<DbOrder>,
) -> RepositoryResult<Vec<DomainOrder>> {
    use crate::schema::{
        item_modifiers, menu_items, order_item_modifiers, order_items, restaurant_staff, users,
    };

    if db_orders.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();
    let staff_ids: Vec<i32> = db_orders.iter().map(|order| order.staff_id).collect();

    let staff: HashMap<i32, OrderStaff> = restaurant_staff::table
        .left_join(users::table)
        .filter(restaurant_staff::id.eq_any(&staff_ids))
        .select((
            restaurant_staff::id,
            users::name.nullable(),
            users::email.nullable(),
        ))
        .load::<(i32, Option<String>, Option<String>)>(conn)?
        .into_iter()
        .map(|(id, name, email)| (id, OrderStaff { id, name, email }))
        .collect();

    let rows = order_items::table
        .inner_join(menu_items::table)
        .filter(order_items::order_id.eq_any(&order_ids))
        .order(order_items::id.asc())
        .select((DbOrderItem::as_select(), DbMenuItem::as_select()))
        .load::<(DbOrderItem, DbMenuItem)>(conn)?;

    let order_item_ids: Vec<i32> = rows.iter().map(|(item, _)| item.id).collect();

    let mut modifiers_by_item: HashMap<i32, Vec<DbModifier>> = HashMap::new();
    if !order_item_ids.is_empty() {
        let selections = order_item_modifiers::table
            .inner_join(item_modifiers::table)
            .filter(order_item_modifiers::order_item_id.eq_any(&order_item_ids))
            .order(sql::<Integer>("order_item_modifiers.rowid"))
            .select((order_item_modifiers::order_item_id, DbModifier::as_select()))
            .load::<(i32, DbModifier)>(conn)?;

        for (order_item_id, modifier) in selections {
            modifiers_by_item
                .entry(order_item_id)
                .or_default()
                .push(modifier);
        }
    }

    let mut items_by_order: HashMap<i32, Vec<DomainOrderItem>> = HashMap::new();
    for (item, menu_item) in rows {
        let modifiers = modifiers_by_item.remove(&item.id).unwrap_or_default();
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(item.into_domain(&menu_item, modifiers));
    }

    Ok(db_orders
        .into_iter()
        .map(|order| {
            let items = items_by_order.remove(&order.id).unwrap_or_default();
            let staff = staff.get(&order.staff_id).cloned().unwrap_or(OrderStaff {
                id: order.staff_id,
                name: None,
                email: None,
            });
            order.into_domain(staff, items)
        })
        .collect())
}
