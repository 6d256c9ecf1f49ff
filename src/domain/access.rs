use std::fmt;

use serde::{Deserialize, Serialize};

/// Role held by a staff member inside a single restaurant.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Created the restaurant and manages its staff.
    Owner,
    /// Maintains menus and restaurant details.
    Manager,
    /// Takes orders on the floor.
    Server,
    /// Reads menus and orders, never writes.
    Kitchen,
}

impl StaffRole {
    /// Every role a membership can carry.
    pub const ALL: [StaffRole; 4] = [
        StaffRole::Owner,
        StaffRole::Manager,
        StaffRole::Server,
        StaffRole::Kitchen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StaffRole::Owner => "owner",
            StaffRole::Manager => "manager",
            StaffRole::Server => "server",
            StaffRole::Kitchen => "kitchen",
        }
    }
}

impl Default for StaffRole {
    fn default() -> Self {
        Self::Server
    }
}

impl From<StaffRole> for &'static str {
    fn from(value: StaffRole) -> Self {
        value.as_str()
    }
}

/// Unrecognised values degrade to the least privileged role.
impl From<&str> for StaffRole {
    fn from(value: &str) -> Self {
        match value {
            "owner" => StaffRole::Owner,
            "manager" => StaffRole::Manager,
            "server" => StaffRole::Server,
            _ => StaffRole::Kitchen,
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a row somewhere in the restaurant ownership hierarchy.
///
/// Menus, sections, items and modifiers form a chain that ends at a
/// restaurant; orders hang directly off a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Restaurant(i32),
    Menu(i32),
    Section(i32),
    Item(i32),
    Modifier(i32),
    Order(i32),
}

impl EntityRef {
    /// Human readable name of the referenced entity kind.
    pub fn kind(&self) -> &'static str {
        match self {
            EntityRef::Restaurant(_) => "Restaurant",
            EntityRef::Menu(_) => "Menu",
            EntityRef::Section(_) => "Menu section",
            EntityRef::Item(_) => "Menu item",
            EntityRef::Modifier(_) => "Modifier",
            EntityRef::Order(_) => "Order",
        }
    }

    pub fn id(&self) -> i32 {
        match *self {
            EntityRef::Restaurant(id)
            | EntityRef::Menu(id)
            | EntityRef::Section(id)
            | EntityRef::Item(id)
            | EntityRef::Modifier(id)
            | EntityRef::Order(id) => id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind(), self.id())
    }
}
