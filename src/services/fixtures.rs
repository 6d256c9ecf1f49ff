use chrono::NaiveDateTime;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::repository::errors::RepositoryError;

use crate::domain::access::StaffRole;
use crate::domain::restaurant::{Restaurant, WeeklyHours};
use crate::domain::staff::StaffMember;
use crate::repository::mock::MockRepo;

pub const USER_ID: &str = "user-1";
pub const STAFF_ID: i32 = 11;

pub fn user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: USER_ID.to_string(),
        email: "user@example.com".to_string(),
        hub_id: 1,
        name: "Tester".to_string(),
        roles: Vec::new(),
        exp: 0,
    }
}

pub fn membership(id: i32, restaurant_id: i32, role: StaffRole, activated: bool) -> StaffMember {
    StaffMember {
        id,
        restaurant_id,
        user_id: USER_ID.to_string(),
        role,
        activated,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

/// Let the test user act with `role` in whatever restaurant is asked for.
pub fn grant(repo: &mut MockRepo, role: StaffRole) {
    repo.expect_get_membership()
        .returning(move |_, restaurant_id| Ok(Some(membership(STAFF_ID, restaurant_id, role, true))));
}

pub fn restaurant(id: i32) -> Restaurant {
    Restaurant {
        id,
        name: format!("Restaurant {id}"),
        kind: None,
        address: None,
        phone: None,
        email: None,
        tax_rate: 0.0,
        opening_hours: WeeklyHours::default(),
        created_by: USER_ID.to_string(),
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

pub fn storage_error() -> RepositoryError {
    RepositoryError::from(diesel::result::Error::BrokenTransactionManager)
}
