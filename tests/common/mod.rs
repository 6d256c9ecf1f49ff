//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_common::db::{DbPool, establish_connection_pool};
use pushkind_common::domain::auth::AuthenticatedUser;
use tempfile::TempDir;

use restaurant_pos::domain::access::StaffRole;
use restaurant_pos::domain::menu::{MenuDetails, NewMenu, NewMenuSection};
use restaurant_pos::domain::menu_item::{NewMenuItem, NewModifier};
use restaurant_pos::domain::restaurant::NewRestaurant;
use restaurant_pos::domain::staff::NewStaffMember;
use restaurant_pos::domain::user::NewUser;
use restaurant_pos::repository::{
    DieselRepository, ItemWriter, MenuReader, MenuWriter, ModifierWriter, RestaurantWriter,
    SectionWriter, StaffWriter,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests; removed with its directory on drop.
pub struct TestDb {
    // Fields drop in order: connections close before the directory goes away.
    pool: DbPool,
    path: PathBuf,
    dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { dir, path, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

pub fn user(sub: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: sub.into(),
        email: format!("{sub}@example.com"),
        hub_id: 1,
        name: sub.to_uppercase(),
        roles: Vec::new(),
        exp: 0,
    }
}

/// Stored profile matching `user(sub)`.
pub fn profile(sub: &str) -> NewUser {
    NewUser::new(sub, sub.to_uppercase(), format!("{sub}@example.com"))
}

/// Ids of a restaurant seeded with one menu, section, item and two modifiers.
pub struct Seeded {
    pub restaurant_id: i32,
    pub owner_staff_id: i32,
    pub menu_id: i32,
    pub section_id: i32,
    pub item_id: i32,
    pub cheese_id: i32,
    pub no_bun_id: i32,
}

/// Restaurant owned by `owner` with a burger (1200) and its modifiers (+150, -50).
pub fn seed_restaurant(repo: &DieselRepository, owner: &str, name: &str) -> Seeded {
    let (restaurant, member) = repo
        .create_restaurant(&NewRestaurant::new(name, owner), &profile(owner))
        .expect("create restaurant");

    let menu = repo
        .create_menu(&NewMenu::new(restaurant.id, "Dinner"))
        .expect("create menu");
    let section = repo
        .create_section(&NewMenuSection::new(menu.id, "Mains"))
        .expect("create section");
    let item = repo
        .create_item(&NewMenuItem::new(section.id, "Burger", 1200))
        .expect("create item");
    let cheese = repo
        .create_modifier(&NewModifier::new(item.id, "Cheese", 150))
        .expect("create modifier");
    let no_bun = repo
        .create_modifier(&NewModifier::new(item.id, "No bun", -50))
        .expect("create modifier");

    Seeded {
        restaurant_id: restaurant.id,
        owner_staff_id: member.id,
        menu_id: menu.id,
        section_id: section.id,
        item_id: item.id,
        cheese_id: cheese.id,
        no_bun_id: no_bun.id,
    }
}

/// Add `user_id` to the restaurant with `role` and return the membership id.
pub fn add_member(
    repo: &DieselRepository,
    restaurant_id: i32,
    user_id: &str,
    role: StaffRole,
    activated: bool,
) -> i32 {
    repo.create_staff_member(
        &NewStaffMember::new(restaurant_id, user_id, role)
            .with_activated(activated)
            .with_profile(profile(user_id)),
    )
    .expect("create member")
    .id
}

pub fn menu_details(repo: &DieselRepository, menu_id: i32) -> MenuDetails {
    repo.get_menu_details(menu_id)
        .expect("load menu")
        .expect("menu exists")
}
