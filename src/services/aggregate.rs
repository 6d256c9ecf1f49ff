//! Totals and summaries over carts and placed orders. Nothing here touches storage.

use std::collections::HashMap;

use crate::domain::menu_item::MenuItem;
use crate::domain::order::OrderItem;

/// Summary shown for an order without lines.
pub const NO_ITEMS: &str = "No items";

/// One line of a cart that has not been submitted yet.
#[derive(Debug, Clone, Copy)]
pub struct CartLine<'a> {
    pub item: &'a MenuItem,
    pub selected_modifier_ids: &'a [i32],
}

/// Item price plus the adjustments of its modifiers that were selected.
///
/// Selected ids that do not belong to the item contribute nothing.
pub fn line_total(item: &MenuItem, selected_modifier_ids: &[i32]) -> i64 {
    let adjustments: i64 = item
        .modifiers
        .iter()
        .filter(|modifier| selected_modifier_ids.contains(&modifier.id))
        .map(|modifier| i64::from(modifier.price_adjustment_cents))
        .sum();

    i64::from(item.price_cents) + adjustments
}

/// Sum of all cart line totals; an empty cart totals zero.
pub fn order_total(lines: &[CartLine<'_>]) -> i64 {
    lines
        .iter()
        .map(|line| line_total(line.item, line.selected_modifier_ids))
        .sum()
}

/// Total of one placed line: the item price plus every recorded modifier.
pub fn placed_item_total(item: &OrderItem) -> i64 {
    let adjustments: i64 = item
        .modifiers
        .iter()
        .map(|modifier| i64::from(modifier.price_adjustment_cents))
        .sum();

    i64::from(item.menu_item.price_cents) + adjustments
}

pub fn placed_order_total(items: &[OrderItem]) -> i64 {
    items.iter().map(placed_item_total).sum()
}

/// Render cents as a decimal amount with exactly two fraction digits.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Identity of a line for summarizing: item name, modifier names as selected, instructions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LineKey<'a> {
    name: &'a str,
    modifiers: Vec<&'a str>,
    instructions: &'a str,
}

impl LineKey<'_> {
    fn label(&self) -> String {
        let modifiers = self.modifiers.join(",");
        [self.name, modifiers.as_str(), self.instructions]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> From<&'a OrderItem> for LineKey<'a> {
    fn from(item: &'a OrderItem) -> Self {
        Self {
            name: item.menu_item.name.as_str(),
            modifiers: item
                .modifiers
                .iter()
                .map(|modifier| modifier.name.as_str())
                .collect(),
            instructions: item
                .special_instructions
                .as_deref()
                .map(str::trim)
                .unwrap_or_default(),
        }
    }
}

/// Human readable summary that folds identical lines into counts, in first-seen order.
pub fn summarize_items(items: &[OrderItem]) -> String {
    match items {
        [] => NO_ITEMS.to_string(),
        [single] => format!("1 x {}", LineKey::from(single).label()),
        _ => {
            let mut positions: HashMap<LineKey<'_>, usize> = HashMap::new();
            let mut counts: Vec<(LineKey<'_>, usize)> = Vec::new();

            for item in items {
                let key = LineKey::from(item);
                match positions.get(&key) {
                    Some(&index) => counts[index].1 += 1,
                    None => {
                        positions.insert(key.clone(), counts.len());
                        counts.push((key, 1));
                    }
                }
            }

            counts
                .iter()
                .map(|(key, count)| format!("{count} × {}", key.label()))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::domain::menu_item::{DietaryFlags, Modifier};
    use crate::domain::order::{OrderedMenuItem, SelectedModifier};

    fn modifier(id: i32, menu_item_id: i32, name: &str, adjustment: i32) -> Modifier {
        Modifier {
            id,
            menu_item_id,
            name: name.to_string(),
            price_adjustment_cents: adjustment,
            is_default: false,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn menu_item(id: i32, price_cents: i32, modifiers: Vec<Modifier>) -> MenuItem {
        MenuItem {
            id,
            section_id: 1,
            name: format!("Item {id}"),
            description: None,
            price_cents,
            display_order: 0,
            preparation_time: None,
            ingredients: Vec::new(),
            allergens: Vec::new(),
            dietary_flags: DietaryFlags::default(),
            image: None,
            is_available: true,
            modifiers,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn placed(name: &str, price_cents: i32, modifiers: &[(&str, i32)], notes: Option<&str>) -> OrderItem {
        OrderItem {
            id: 0,
            order_id: 1,
            menu_item: OrderedMenuItem {
                id: 1,
                name: name.to_string(),
                price_cents,
                description: None,
            },
            special_instructions: notes.map(str::to_string),
            modifiers: modifiers
                .iter()
                .enumerate()
                .map(|(index, (name, adjustment))| SelectedModifier {
                    id: index as i32 + 1,
                    name: (*name).to_string(),
                    price_adjustment_cents: *adjustment,
                })
                .collect(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(order_total(&[]), 0);
    }

    #[test]
    fn line_total_adds_selected_adjustments() {
        let item = menu_item(
            1,
            1200,
            vec![
                modifier(10, 1, "Extra cheese", 150),
                modifier(11, 1, "No bun", -50),
                modifier(12, 1, "Truffle", 400),
            ],
        );

        assert_eq!(line_total(&item, &[10, 11]), 1300);
        assert_eq!(line_total(&item, &[]), 1200);
    }

    #[test]
    fn line_total_ignores_foreign_modifier_ids() {
        let item = menu_item(1, 1200, vec![modifier(10, 1, "Extra cheese", 150)]);

        assert_eq!(line_total(&item, &[10, 999]), 1350);
    }

    #[test]
    fn order_total_sums_lines() {
        let burger = menu_item(1, 1200, vec![modifier(10, 1, "Extra cheese", 150)]);
        let fries = menu_item(2, 450, Vec::new());

        let lines = [
            CartLine {
                item: &burger,
                selected_modifier_ids: &[10],
            },
            CartLine {
                item: &burger,
                selected_modifier_ids: &[],
            },
            CartLine {
                item: &fries,
                selected_modifier_ids: &[10],
            },
        ];

        assert_eq!(order_total(&lines), 1350 + 1200 + 450);
    }

    #[test]
    fn placed_totals_include_every_recorded_modifier() {
        let items = vec![
            placed("Burger", 1200, &[("Cheese", 150), ("No bun", -50)], None),
            placed("Fries", 450, &[], None),
        ];

        assert_eq!(placed_item_total(&items[0]), 1300);
        assert_eq!(placed_order_total(&items), 1750);
        assert_eq!(placed_order_total(&[]), 0);
    }

    #[test]
    fn format_cents_uses_two_decimals() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(1300), "13.00");
        assert_eq!(format_cents(123456), "1234.56");
        assert_eq!(format_cents(-50), "-0.50");
    }

    #[test]
    fn summary_of_no_items() {
        assert_eq!(summarize_items(&[]), NO_ITEMS);
    }

    #[test]
    fn summary_of_single_item() {
        let items = vec![placed("Burger", 1200, &[("Cheese", 150)], Some("well done"))];

        assert_eq!(summarize_items(&items), "1 x Burger Cheese well done");
    }

    #[test]
    fn summary_counts_identical_lines_in_first_seen_order() {
        let items = vec![
            placed("Burger", 1200, &[("Cheese", 150), ("Bacon", 200)], Some("no onions")),
            placed("Fries", 450, &[], None),
            placed("Burger", 1200, &[("Cheese", 150), ("Bacon", 200)], Some("no onions")),
        ];

        assert_eq!(
            summarize_items(&items),
            "2 × Burger Cheese,Bacon no onions, 1 × Fries"
        );
    }

    #[test]
    fn summary_distinguishes_modifier_selection_order_and_instructions() {
        let items = vec![
            placed("Burger", 1200, &[("Cheese", 150), ("Bacon", 200)], None),
            placed("Burger", 1200, &[("Bacon", 200), ("Cheese", 150)], None),
            placed("Burger", 1200, &[("Cheese", 150), ("Bacon", 200)], Some("rare")),
        ];

        assert_eq!(
            summarize_items(&items),
            "1 × Burger Cheese,Bacon, 1 × Burger Bacon,Cheese, 1 × Burger Cheese,Bacon rare"
        );
    }
}
