use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a placed order is served.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "location", rename_all = "snake_case")]
pub enum OrderLocation {
    /// Served at a numbered table.
    Table { table_number: i32 },
    /// Picked up by a named customer reachable by phone.
    ToGo { name: String, phone: String },
}

/// Reasons a location cannot be built from submitted fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidLocation {
    #[error("if location table, must have table number")]
    MissingTableNumber,
    #[error("if location to_go, must have name and phone")]
    MissingContact,
    #[error("phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("unknown order location `{0}`")]
    Unknown(String),
}

impl OrderLocation {
    pub const TABLE: &'static str = "table";
    pub const TO_GO: &'static str = "to_go";

    /// Build a location from loosely typed form fields.
    pub fn from_parts(
        location: &str,
        table_number: Option<i32>,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, InvalidLocation> {
        match location {
            Self::TABLE => match table_number {
                Some(table_number) => Ok(OrderLocation::Table { table_number }),
                None => Err(InvalidLocation::MissingTableNumber),
            },
            Self::TO_GO => {
                let name = name.filter(|value| !value.trim().is_empty());
                let phone = phone.filter(|value| !value.is_empty());
                match (name, phone) {
                    (Some(name), Some(phone)) => {
                        if !is_valid_phone(&phone) {
                            return Err(InvalidLocation::InvalidPhone);
                        }
                        Ok(OrderLocation::ToGo { name, phone })
                    }
                    _ => Err(InvalidLocation::MissingContact),
                }
            }
            other => Err(InvalidLocation::Unknown(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderLocation::Table { .. } => Self::TABLE,
            OrderLocation::ToGo { .. } => Self::TO_GO,
        }
    }
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|byte| byte.is_ascii_digit())
}

/// Staff member who placed an order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderStaff {
    /// Membership identifier.
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Menu item data captured alongside an ordered line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderedMenuItem {
    pub id: i32,
    pub name: String,
    pub price_cents: i32,
    pub description: Option<String>,
}

/// Modifier selected for one ordered line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SelectedModifier {
    pub id: i32,
    pub name: String,
    pub price_adjustment_cents: i32,
}

/// One line of a placed order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub menu_item: OrderedMenuItem,
    pub special_instructions: Option<String>,
    /// Modifiers in the order they were selected.
    pub modifiers: Vec<SelectedModifier>,
    pub created_at: NaiveDateTime,
}

/// Domain representation of a placed order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Restaurant the order was placed at.
    pub restaurant_id: i32,
    /// Staff member who placed the order.
    pub staff: OrderStaff,
    #[serde(flatten)]
    pub location: OrderLocation,
    pub items: Vec<OrderItem>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Line submitted as part of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub menu_item_id: i32,
    pub special_instructions: Option<String>,
    /// Selected modifiers, unique, in selection order.
    pub modifier_ids: Vec<i32>,
}

impl NewOrderItem {
    pub fn new(menu_item_id: i32) -> Self {
        Self {
            menu_item_id,
            special_instructions: None,
            modifier_ids: Vec::new(),
        }
    }

    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    pub fn with_modifier_ids(mut self, modifier_ids: Vec<i32>) -> Self {
        self.modifier_ids = modifier_ids;
        self
    }
}

/// Payload required to place an order with all of its lines.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub restaurant_id: i32,
    /// Membership of the staff member placing the order.
    pub staff_id: i32,
    pub location: OrderLocation,
    pub items: Vec<NewOrderItem>,
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    pub fn new(restaurant_id: i32, staff_id: i32, location: OrderLocation) -> Self {
        Self {
            restaurant_id,
            staff_id,
            location,
            items: Vec::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_items(mut self, items: Vec<NewOrderItem>) -> Self {
        self.items = items;
        self
    }
}
