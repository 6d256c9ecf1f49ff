use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{InvalidLocation, NewOrderItem, OrderLocation};
use crate::forms::{non_blank, sanitize_multiline_text};

const INSTRUCTIONS_MAX_LEN: u64 = 512;
const MAX_LINES: u64 = 200;

pub type OrderFormResult<T> = Result<T, OrderFormError>;

#[derive(Debug, Error)]
pub enum OrderFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// One line of a submitted cart.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineForm {
    pub menu_item_id: i32,
    #[validate(length(max = INSTRUCTIONS_MAX_LEN))]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub modifier_ids: Vec<i32>,
}

impl OrderLineForm {
    /// Validates a line submitted on its own, e.g. when appending to an order.
    pub fn into_checked_item(self) -> OrderFormResult<NewOrderItem> {
        self.validate()?;
        Ok(self.into_new_order_item())
    }

    /// Normalizes the line: instructions are sanitized and modifier ids deduplicated
    /// keeping their selection order.
    pub fn into_new_order_item(self) -> NewOrderItem {
        let mut seen = HashSet::new();
        let modifier_ids: Vec<i32> = self
            .modifier_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        let mut item = NewOrderItem::new(self.menu_item_id).with_modifier_ids(modifier_ids);
        if let Some(instructions) = self
            .special_instructions
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            item = item.with_special_instructions(instructions);
        }
        item
    }
}

/// Cart submitted to place an order.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderForm {
    pub restaurant_id: i32,
    /// `table` or `to_go`.
    pub location: String,
    pub table_number: Option<i32>,
    #[validate(length(max = 128))]
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = MAX_LINES), nested)]
    pub items: Vec<OrderLineForm>,
}

/// Order request with a checked location, waiting for the placing staff member.
#[derive(Debug)]
pub struct OrderRequest {
    pub restaurant_id: i32,
    pub location: OrderLocation,
    pub items: Vec<NewOrderItem>,
}

impl PlaceOrderForm {
    /// Shape checks only; location rules are applied by [`OrderDraft::into_request`].
    pub fn into_draft(self) -> OrderFormResult<OrderDraft> {
        self.validate()?;

        Ok(OrderDraft {
            restaurant_id: self.restaurant_id,
            location: self.location.trim().to_string(),
            table_number: self.table_number,
            name: non_blank(self.name.as_deref()),
            phone: self.phone.map(|phone| phone.trim().to_string()),
            items: self
                .items
                .into_iter()
                .map(OrderLineForm::into_new_order_item)
                .collect(),
        })
    }
}

/// Shape-checked cart whose location has not been validated yet.
#[derive(Debug)]
pub struct OrderDraft {
    pub restaurant_id: i32,
    pub location: String,
    pub table_number: Option<i32>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub items: Vec<NewOrderItem>,
}

impl OrderDraft {
    pub fn into_request(self) -> Result<OrderRequest, InvalidLocation> {
        let location =
            OrderLocation::from_parts(&self.location, self.table_number, self.name, self.phone)?;

        Ok(OrderRequest {
            restaurant_id: self.restaurant_id,
            location,
            items: self.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(menu_item_id: i32, modifier_ids: Vec<i32>) -> OrderLineForm {
        OrderLineForm {
            menu_item_id,
            special_instructions: None,
            modifier_ids,
        }
    }

    #[test]
    fn line_deduplicates_modifiers_in_selection_order() {
        let mut form = line(3, vec![9, 4, 9, 7, 4]);
        form.special_instructions = Some("  no   onions \n".to_string());

        let item = form.into_new_order_item();

        assert_eq!(item.menu_item_id, 3);
        assert_eq!(item.modifier_ids, vec![9, 4, 7]);
        assert_eq!(item.special_instructions.as_deref(), Some("no onions"));
    }

    #[test]
    fn blank_instructions_are_dropped() {
        let mut form = line(3, Vec::new());
        form.special_instructions = Some(" \n ".to_string());

        assert_eq!(form.into_new_order_item().special_instructions, None);
    }

    #[test]
    fn table_order_without_number_fails_location_check() {
        let form: PlaceOrderForm = serde_json::from_str(
            r#"{"restaurant_id": 1, "location": "table", "items": [{"menu_item_id": 2}]}"#,
        )
        .expect("json");

        let draft = form.into_draft().expect("shape is valid");
        assert_eq!(draft.items.len(), 1);
        assert!(matches!(
            draft.into_request(),
            Err(InvalidLocation::MissingTableNumber)
        ));
    }

    #[test]
    fn to_go_order_keeps_contact() {
        let form: PlaceOrderForm = serde_json::from_str(
            r#"{"restaurant_id": 1, "location": "to_go", "name": " Ann ", "phone": "5551234567"}"#,
        )
        .expect("json");

        let request = form
            .into_draft()
            .expect("shape is valid")
            .into_request()
            .expect("location is valid");

        assert_eq!(
            request.location,
            OrderLocation::ToGo {
                name: "Ann".to_string(),
                phone: "5551234567".to_string(),
            }
        );
        assert!(request.items.is_empty());
    }

    #[test]
    fn standalone_line_is_validated() {
        let mut form = line(3, vec![1]);
        form.special_instructions = Some("y".repeat(513));

        assert!(matches!(
            form.into_checked_item(),
            Err(OrderFormError::Validation(_))
        ));
    }

    #[test]
    fn overlong_instructions_fail_shape_validation() {
        let form = PlaceOrderForm {
            restaurant_id: 1,
            location: "table".to_string(),
            table_number: Some(2),
            name: None,
            phone: None,
            items: vec![OrderLineForm {
                menu_item_id: 1,
                special_instructions: Some("x".repeat(600)),
                modifier_ids: Vec::new(),
            }],
        };

        assert!(matches!(
            form.into_draft(),
            Err(OrderFormError::Validation(_))
        ));
    }
}
