use std::collections::HashMap;
use std::slice;

use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::repository::errors::RepositoryError;
use serde::Serialize;

use crate::domain::access::EntityRef;
use crate::domain::menu_item::MenuItem;
use crate::domain::order::{NewOrder, NewOrderItem, Order};
use crate::domain::user::NewUser;
use crate::forms::orders::{OrderLineForm, PlaceOrderForm};
use crate::repository::{AccessReader, MenuReader, OrderReader, OrderWriter};
use crate::services::access::{ANY_ROLE, ORDER_TAKERS, authorize, check_access, resolve_restaurant_id};
use crate::services::aggregate::{
    CartLine, format_cents, order_total, placed_order_total, summarize_items,
};
use crate::services::{ServiceError, ServiceResult};

/// Placed order decorated with its total and a one-line summary.
#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub total_cents: i64,
    /// `total_cents` rendered with two decimals.
    pub total: String,
    pub summary: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let total_cents = placed_order_total(&order.items);
        Self {
            total: format_cents(total_cents),
            summary: summarize_items(&order.items),
            total_cents,
            order,
        }
    }
}

/// Place an order on behalf of the calling staff member.
///
/// Nothing is written unless the location is complete and every line orders an
/// available item of the same restaurant with modifiers of that item.
pub fn place_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: PlaceOrderForm,
) -> ServiceResult<OrderView>
where
    R: AccessReader + MenuReader + OrderWriter + ?Sized,
{
    let draft = form
        .into_draft()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let access = authorize(
        repo,
        &user.sub,
        EntityRef::Restaurant(draft.restaurant_id),
        ORDER_TAKERS,
    )?;

    let request = draft
        .into_request()
        .map_err(|err| ServiceError::Unprocessable(err.to_string()))?;

    let menu_items = load_orderable_items(repo, access.restaurant_id, &request.items)?;
    let cart_total = order_total(&cart_lines(&menu_items, &request.items));

    let new_order = NewOrder::new(access.restaurant_id, access.member.id, request.location)
        .with_items(request.items);
    let order = repo
        .create_order(&new_order, &NewUser::from(user))
        .map_err(stale_items)?;

    log::info!(
        "Order #{} placed at restaurant #{} by staff #{}: {} line(s), total {}",
        order.id,
        order.restaurant_id,
        access.member.id,
        order.items.len(),
        format_cents(cart_total)
    );

    Ok(OrderView::from(order))
}

/// Append one line to an existing order.
pub fn add_order_item<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    form: OrderLineForm,
) -> ServiceResult<OrderView>
where
    R: AccessReader + MenuReader + OrderWriter + ?Sized,
{
    let item = form
        .into_checked_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let access = authorize(repo, &user.sub, EntityRef::Order(order_id), ORDER_TAKERS)?;

    load_orderable_items(repo, access.restaurant_id, slice::from_ref(&item))?;

    let order = repo
        .add_order_item(order_id, &item)
        .map_err(stale_items)?;

    Ok(OrderView::from(order))
}

/// Orders of a restaurant, newest first.
pub fn get_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    restaurant_id: i32,
) -> ServiceResult<Vec<OrderView>>
where
    R: AccessReader + OrderReader + ?Sized,
{
    check_access(repo, &user.sub, restaurant_id, ANY_ROLE)?;

    let orders = repo.list_orders(restaurant_id).map_err(ServiceError::from)?;
    Ok(orders.into_iter().map(OrderView::from).collect())
}

pub fn get_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<OrderView>
where
    R: AccessReader + OrderReader + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Order(order_id), ANY_ROLE)?;

    repo.get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .map(OrderView::from)
        .ok_or_else(|| ServiceError::not_found("Order"))
}

/// Storage re-checks the lines inside its transaction; `NotFound` there means
/// the menu changed after the lines were validated.
fn stale_items(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::Unprocessable(
            "Ordered items changed on the menu, please review the order".to_string(),
        ),
        other => ServiceError::from(other),
    }
}

/// Load the items ordered by `lines` and check each line against them.
fn load_orderable_items<R>(
    repo: &R,
    restaurant_id: i32,
    lines: &[NewOrderItem],
) -> ServiceResult<HashMap<i32, MenuItem>>
where
    R: AccessReader + MenuReader + ?Sized,
{
    let mut item_ids: Vec<i32> = lines.iter().map(|line| line.menu_item_id).collect();
    item_ids.sort_unstable();
    item_ids.dedup();

    if item_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let items: HashMap<i32, MenuItem> = repo
        .get_menu_items(&item_ids)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

    for item_id in &item_ids {
        let item = items
            .get(item_id)
            .ok_or_else(|| ServiceError::not_found("Menu item"))?;

        if resolve_restaurant_id(repo, EntityRef::Item(item.id))? != restaurant_id {
            return Err(ServiceError::Unprocessable(format!(
                "Menu item `{}` does not belong to this restaurant",
                item.name
            )));
        }

        if !item.is_available {
            return Err(ServiceError::Unprocessable(format!(
                "Menu item `{}` is not available",
                item.name
            )));
        }
    }

    for line in lines {
        let Some(item) = items.get(&line.menu_item_id) else {
            continue;
        };
        if let Some(foreign) = line
            .modifier_ids
            .iter()
            .find(|id| !item.modifiers.iter().any(|modifier| modifier.id == **id))
        {
            return Err(ServiceError::Unprocessable(format!(
                "Modifier #{foreign} does not belong to menu item `{}`",
                item.name
            )));
        }
    }

    Ok(items)
}

fn cart_lines<'a>(
    items: &'a HashMap<i32, MenuItem>,
    lines: &'a [NewOrderItem],
) -> Vec<CartLine<'a>> {
    lines
        .iter()
        .filter_map(|line| {
            items.get(&line.menu_item_id).map(|item| CartLine {
                item,
                selected_modifier_ids: &line.modifier_ids,
            })
        })
        .collect()
}
