use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryError;
use restaurant_pos::domain::access::{EntityRef, StaffRole};
use restaurant_pos::domain::menu::{NewMenuSection, Removal, UpdateMenu};
use restaurant_pos::domain::menu_item::{NewMenuItem, UpdateMenuItem};
use restaurant_pos::domain::order::{NewOrder, NewOrderItem, OrderLocation};
use restaurant_pos::domain::restaurant::{NewRestaurant, UpdateRestaurant};
use restaurant_pos::domain::staff::{NewStaffMember, UpdateStaffMember};
use restaurant_pos::domain::user::NewUser;
use restaurant_pos::repository::{
    AccessReader, DieselRepository, ItemWriter, MenuReader, MenuWriter, OrderReader, OrderWriter,
    ModifierWriter, RestaurantReader, RestaurantWriter, SectionWriter, StaffReader, StaffWriter,
};
use restaurant_pos::schema::{item_modifiers, menu_items, menu_sections, menus, orders, users};

mod common;

#[test]
fn test_restaurant_creation_adds_owner_membership() {
    let test_db = common::TestDb::new("test_restaurant_creation_adds_owner_membership.db");
    let repo = DieselRepository::new(test_db.pool());

    let (restaurant, owner) = repo
        .create_restaurant(
            &NewRestaurant::new("Noodle Bar", "alice").with_tax_rate(8.5),
            &common::profile("alice"),
        )
        .unwrap();

    assert_eq!(owner.restaurant_id, restaurant.id);
    assert_eq!(owner.user_id, "alice");
    assert_eq!(owner.role, StaffRole::Owner);
    assert!(owner.activated);

    let membership = repo.get_membership("alice", restaurant.id).unwrap();
    assert_eq!(membership, Some(owner.clone()));
    assert!(repo.get_membership("bob", restaurant.id).unwrap().is_none());

    let listed = repo.list_restaurants_for_user("alice").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].staff_id, owner.id);
    assert_eq!(listed[0].restaurant.tax_rate, 8.5);
    assert!(repo.list_restaurants_for_user("bob").unwrap().is_empty());

    let mut updates = UpdateRestaurant::new();
    updates.address = Some("1 Main St".to_string());
    let updated = repo.update_restaurant(restaurant.id, &updates).unwrap();
    assert_eq!(updated.address.as_deref(), Some("1 Main St"));
    assert_eq!(updated.name, "Noodle Bar");

    let err = repo
        .update_restaurant(restaurant.id + 100, &UpdateRestaurant::new())
        .expect_err("expected missing restaurant");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_membership_is_unique_per_restaurant() {
    let test_db = common::TestDb::new("test_membership_is_unique_per_restaurant.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");

    let member_id = common::add_member(&repo, seeded.restaurant_id, "bob", StaffRole::Server, true);

    let duplicate = repo.create_staff_member(
        &NewStaffMember::new(seeded.restaurant_id, "bob", StaffRole::Kitchen)
            .with_profile(NewUser::new("bob", "Robert", "robert@example.com")),
    );
    assert!(duplicate.is_err());

    let updated = repo
        .update_staff_member(member_id, &UpdateStaffMember::new().activated(false))
        .unwrap();
    assert!(!updated.activated);
    assert_eq!(updated.role, StaffRole::Server);

    let staff = repo.list_staff(seeded.restaurant_id).unwrap();
    assert_eq!(staff.len(), 2);
    assert_eq!(staff[1].member.user_id, "bob");
    // The profile of the failed insert was rolled back with it.
    assert_eq!(staff[1].name.as_deref(), Some("BOB"));
    assert_eq!(staff[1].email.as_deref(), Some("bob@example.com"));
}

#[test]
fn test_creator_profile_is_refreshed() {
    let test_db = common::TestDb::new("test_creator_profile_is_refreshed.db");
    let repo = DieselRepository::new(test_db.pool());

    let (first, _) = repo
        .create_restaurant(
            &NewRestaurant::new("Noodle Bar", "alice"),
            &NewUser::new("alice", "Alice", "Alice@Example.com"),
        )
        .unwrap();
    repo.create_restaurant(
        &NewRestaurant::new("Taco Stand", "alice"),
        &NewUser::new("alice", "Alice Smith", "alice@example.com"),
    )
    .unwrap();

    let staff = repo.list_staff(first.id).unwrap();
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].name.as_deref(), Some("Alice Smith"));
    assert_eq!(staff[0].email.as_deref(), Some("alice@example.com"));
}

#[test]
fn test_parent_links_lead_to_restaurant() {
    let test_db = common::TestDb::new("test_parent_links_lead_to_restaurant.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");

    assert_eq!(
        repo.parent_of(EntityRef::Modifier(seeded.cheese_id)).unwrap(),
        Some(EntityRef::Item(seeded.item_id))
    );
    assert_eq!(
        repo.parent_of(EntityRef::Item(seeded.item_id)).unwrap(),
        Some(EntityRef::Section(seeded.section_id))
    );
    assert_eq!(
        repo.parent_of(EntityRef::Section(seeded.section_id)).unwrap(),
        Some(EntityRef::Menu(seeded.menu_id))
    );
    assert_eq!(
        repo.parent_of(EntityRef::Menu(seeded.menu_id)).unwrap(),
        Some(EntityRef::Restaurant(seeded.restaurant_id))
    );
    assert_eq!(repo.parent_of(EntityRef::Menu(9999)).unwrap(), None);
    // Restaurants are the root; their existence is settled by membership lookups.
    assert_eq!(
        repo.parent_of(EntityRef::Restaurant(9999)).unwrap(),
        Some(EntityRef::Restaurant(9999))
    );
}

#[test]
fn test_menu_details_follow_display_order() {
    let test_db = common::TestDb::new("test_menu_details_follow_display_order.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");

    let drinks = repo
        .create_section(&NewMenuSection::new(seeded.menu_id, "Drinks").with_display_order(-1))
        .unwrap();
    repo.create_item(&NewMenuItem::new(drinks.id, "Tea", 300).with_display_order(2))
        .unwrap();
    repo.create_item(&NewMenuItem::new(drinks.id, "Lemonade", 350).with_display_order(1))
        .unwrap();
    repo.create_item(&NewMenuItem::new(drinks.id, "Coffee", 350).with_display_order(1))
        .unwrap();

    let details = common::menu_details(&repo, seeded.menu_id);

    let section_names: Vec<&str> = details
        .sections
        .iter()
        .map(|section| section.section.name.as_str())
        .collect();
    assert_eq!(section_names, vec!["Drinks", "Mains"]);

    let drink_names: Vec<&str> = details.sections[0]
        .items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(drink_names, vec!["Coffee", "Lemonade", "Tea"]);

    let burger = details
        .find_item(seeded.item_id)
        .expect("burger is listed");
    let modifier_names: Vec<&str> = burger.modifiers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(modifier_names, vec!["Cheese", "No bun"]);

    let mut updates = UpdateMenu::new();
    updates.is_active = Some(false);
    let menu = repo.update_menu(seeded.menu_id, &updates).unwrap();
    assert!(!menu.is_active);
    assert_eq!(menu.name, "Dinner");
}

#[test]
fn test_deleting_menu_cascades_to_everything_below() {
    let test_db = common::TestDb::new("test_deleting_menu_cascades_to_everything_below.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");
    let other = common::seed_restaurant(&repo, "carol", "Taco Stand");

    let sides = repo
        .create_section(&NewMenuSection::new(seeded.menu_id, "Sides"))
        .unwrap();
    repo.create_item(&NewMenuItem::new(sides.id, "Fries", 450))
        .unwrap();

    assert_eq!(repo.delete_menu(seeded.menu_id).unwrap(), Removal::Removed);

    let mut conn = test_db.pool().get().unwrap();
    let menus_left: i64 = menus::table
        .filter(menus::id.eq(seeded.menu_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    let sections_left: i64 = menu_sections::table
        .filter(menu_sections::menu_id.eq(seeded.menu_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    let items_left: i64 = menu_items::table
        .filter(menu_items::section_id.eq_any(vec![seeded.section_id, sides.id]))
        .count()
        .get_result(&mut conn)
        .unwrap();
    let modifiers_left: i64 = item_modifiers::table
        .filter(item_modifiers::menu_item_id.eq(seeded.item_id))
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(menus_left, 0);
    assert_eq!(sections_left, 0);
    assert_eq!(items_left, 0);
    assert_eq!(modifiers_left, 0);

    // The other restaurant's menu is untouched.
    let untouched = common::menu_details(&repo, other.menu_id);
    assert_eq!(untouched.sections.len(), 1);
    assert_eq!(untouched.sections[0].items[0].modifiers.len(), 2);

    let err = repo.delete_menu(seeded.menu_id).expect_err("already deleted");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_order_round_trip_keeps_modifier_selection_order() {
    let test_db = common::TestDb::new("test_order_round_trip_keeps_modifier_selection_order.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");

    let new_order = NewOrder::new(
        seeded.restaurant_id,
        seeded.owner_staff_id,
        OrderLocation::Table { table_number: 7 },
    )
    .with_items(vec![
        NewOrderItem::new(seeded.item_id)
            .with_modifier_ids(vec![seeded.no_bun_id, seeded.cheese_id])
            .with_special_instructions("well done"),
        NewOrderItem::new(seeded.item_id),
    ]);

    let order = repo
        .create_order(&new_order, &common::profile("alice"))
        .unwrap();

    assert_eq!(order.restaurant_id, seeded.restaurant_id);
    assert_eq!(order.staff.id, seeded.owner_staff_id);
    assert_eq!(order.staff.name.as_deref(), Some("ALICE"));
    assert_eq!(order.location, OrderLocation::Table { table_number: 7 });
    assert_eq!(order.items.len(), 2);

    let selected: Vec<&str> = order.items[0]
        .modifiers
        .iter()
        .map(|modifier| modifier.name.as_str())
        .collect();
    assert_eq!(selected, vec!["No bun", "Cheese"]);
    assert_eq!(order.items[0].special_instructions.as_deref(), Some("well done"));
    assert!(order.items[1].modifiers.is_empty());

    let order = repo
        .add_order_item(order.id, &NewOrderItem::new(seeded.item_id).with_modifier_ids(vec![seeded.cheese_id]))
        .unwrap();
    assert_eq!(order.items.len(), 3);

    let err = repo
        .add_order_item(order.id + 100, &NewOrderItem::new(seeded.item_id))
        .expect_err("order does not exist");
    assert!(matches!(err, RepositoryError::NotFound));

    // Three lines plus three modifier selections hang below the menu.
    assert_eq!(
        repo.delete_menu(seeded.menu_id).unwrap(),
        Removal::Referenced(3 + 3)
    );
    assert_eq!(
        repo.delete_modifier(seeded.no_bun_id).unwrap(),
        Removal::Referenced(1)
    );

    let fetched = repo.get_order_by_id(order.id).unwrap().expect("order exists");
    assert_eq!(fetched.items.len(), 3);
    assert_eq!(repo.list_orders(seeded.restaurant_id).unwrap().len(), 1);
}

#[test]
fn test_unavailable_flag_is_updated_in_place() {
    let test_db = common::TestDb::new("test_unavailable_flag_is_updated_in_place.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");

    let mut updates = UpdateMenuItem::new();
    updates.is_available = Some(false);
    let item = repo.update_item(seeded.item_id, &updates).unwrap();

    assert!(!item.is_available);
    assert_eq!(item.price_cents, 1200);
    assert_eq!(item.modifiers.len(), 2);

    let loaded = repo.get_menu_items(&[seeded.item_id, 9999]).unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(!loaded[0].is_available);
}

#[test]
fn test_ordered_entries_survive_direct_deletes() {
    let test_db = common::TestDb::new("test_ordered_entries_survive_direct_deletes.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");

    let new_order = NewOrder::new(
        seeded.restaurant_id,
        seeded.owner_staff_id,
        OrderLocation::Table { table_number: 3 },
    )
    .with_items(vec![
        NewOrderItem::new(seeded.item_id).with_modifier_ids(vec![seeded.cheese_id]),
    ]);
    let order = repo
        .create_order(&new_order, &common::profile("alice"))
        .unwrap();

    assert_eq!(repo.delete_item(seeded.item_id).unwrap(), Removal::Referenced(2));
    assert_eq!(
        repo.delete_section(seeded.section_id).unwrap(),
        Removal::Referenced(2)
    );
    assert_eq!(
        repo.delete_modifier(seeded.cheese_id).unwrap(),
        Removal::Referenced(1)
    );
    assert_eq!(repo.delete_modifier(seeded.no_bun_id).unwrap(), Removal::Removed);

    let mut conn = test_db.pool().get().unwrap();
    let items_left: i64 = menu_items::table
        .filter(menu_items::id.eq(seeded.item_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(items_left, 1);

    let fetched = repo.get_order_by_id(order.id).unwrap().expect("order exists");
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].menu_item.price_cents, 1200);
    assert_eq!(fetched.items[0].modifiers.len(), 1);
    assert_eq!(fetched.items[0].modifiers[0].name, "Cheese");
}

#[test]
fn test_orders_recheck_items_inside_the_transaction() {
    let test_db = common::TestDb::new("test_orders_recheck_items_inside_the_transaction.db");
    let repo = DieselRepository::new(test_db.pool());
    let seeded = common::seed_restaurant(&repo, "alice", "Noodle Bar");
    let other = common::seed_restaurant(&repo, "carol", "Taco Stand");

    let fries = repo
        .create_item(&NewMenuItem::new(seeded.section_id, "Fries", 450))
        .unwrap();
    assert_eq!(repo.delete_item(fries.id).unwrap(), Removal::Removed);

    let table = OrderLocation::Table { table_number: 1 };
    let attempts = vec![
        NewOrderItem::new(fries.id),
        NewOrderItem::new(other.item_id),
        NewOrderItem::new(seeded.item_id).with_modifier_ids(vec![other.cheese_id]),
    ];
    for line in attempts {
        let new_order = NewOrder::new(seeded.restaurant_id, seeded.owner_staff_id, table.clone())
            .with_items(vec![NewOrderItem::new(seeded.item_id), line]);
        let err = repo
            .create_order(&new_order, &common::profile("zoe"))
            .expect_err("line is not orderable");
        assert!(matches!(err, RepositoryError::NotFound));
    }

    let mut updates = UpdateMenuItem::new();
    updates.is_available = Some(false);
    repo.update_item(seeded.item_id, &updates).unwrap();

    let new_order = NewOrder::new(seeded.restaurant_id, seeded.owner_staff_id, table.clone())
        .with_items(vec![NewOrderItem::new(seeded.item_id)]);
    assert!(matches!(
        repo.create_order(&new_order, &common::profile("zoe")),
        Err(RepositoryError::NotFound)
    ));

    let mut conn = test_db.pool().get().unwrap();
    let orders_written: i64 = orders::table.count().get_result(&mut conn).unwrap();
    let zoe_stored: i64 = users::table
        .filter(users::id.eq("zoe"))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(orders_written, 0);
    assert_eq!(zoe_stored, 0);

    let new_order = NewOrder::new(other.restaurant_id, other.owner_staff_id, table)
        .with_items(vec![NewOrderItem::new(other.item_id)]);
    let order = repo
        .create_order(&new_order, &common::profile("carol"))
        .unwrap();

    let err = repo
        .add_order_item(order.id, &NewOrderItem::new(seeded.item_id))
        .expect_err("item of another restaurant");
    assert!(matches!(err, RepositoryError::NotFound));
    assert_eq!(
        repo.get_order_by_id(order.id).unwrap().expect("order exists").items.len(),
        1
    );
}
