pub mod access;
pub mod menu;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod staff;
pub mod user;
