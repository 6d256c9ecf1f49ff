use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
    OrderItem as DomainOrderItem, OrderLocation, OrderStaff, OrderedMenuItem, SelectedModifier,
};
use crate::models::menu_item::{MenuItem, Modifier};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub restaurant_id: i32,
    pub staff_id: i32,
    pub location: String,
    pub table_number: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub special_instructions: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub restaurant_id: i32,
    pub staff_id: i32,
    pub location: &'a str,
    pub table_number: Option<i32>,
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i32,
    pub menu_item_id: i32,
    pub special_instructions: Option<&'a str>,
}

#[derive(Debug, Clone, Insertable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::order_item_modifiers)]
pub struct OrderItemModifier {
    pub order_item_id: i32,
    pub modifier_id: i32,
}

impl Order {
    /// Rebuild the typed location from its nullable columns.
    pub fn location(&self) -> OrderLocation {
        match self.location.as_str() {
            OrderLocation::TABLE => OrderLocation::Table {
                table_number: self.table_number.unwrap_or_default(),
            },
            _ => OrderLocation::ToGo {
                name: self.name.clone().unwrap_or_default(),
                phone: self.phone.clone().unwrap_or_default(),
            },
        }
    }

    pub fn into_domain(self, staff: OrderStaff, items: Vec<DomainOrderItem>) -> DomainOrder {
        DomainOrder {
            location: self.location(),
            id: self.id,
            restaurant_id: self.restaurant_id,
            staff,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl OrderItem {
    /// Attach the ordered menu item and the selected modifiers, in selection order.
    pub fn into_domain(self, menu_item: &MenuItem, modifiers: Vec<Modifier>) -> DomainOrderItem {
        DomainOrderItem {
            id: self.id,
            order_id: self.order_id,
            menu_item: OrderedMenuItem {
                id: menu_item.id,
                name: menu_item.name.clone(),
                price_cents: menu_item.price_cents,
                description: menu_item.description.clone(),
            },
            special_instructions: self.special_instructions,
            modifiers: modifiers
                .into_iter()
                .map(|modifier| SelectedModifier {
                    id: modifier.id,
                    name: modifier.name,
                    price_adjustment_cents: modifier.price_adjustment_cents,
                })
                .collect(),
            created_at: self.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        let (table_number, name, phone) = match &value.location {
            OrderLocation::Table { table_number } => (Some(*table_number), None, None),
            OrderLocation::ToGo { name, phone } => (None, Some(name.as_str()), Some(phone.as_str())),
        };

        Self {
            restaurant_id: value.restaurant_id,
            staff_id: value.staff_id,
            location: value.location.as_str(),
            table_number,
            name,
            phone,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrderItem<'a> {
    pub fn from_domain(order_id: i32, value: &'a DomainNewOrderItem) -> Self {
        Self {
            order_id,
            menu_item_id: value.menu_item_id,
            special_instructions: value.special_instructions.as_deref(),
        }
    }
}
