//! Authorization against the restaurant ownership hierarchy.
//!
//! Every mutation first resolves the restaurant that owns its target and then
//! checks the caller's membership in that restaurant.

use crate::domain::access::{EntityRef, StaffRole};
use crate::domain::staff::StaffMember;
use crate::repository::AccessReader;
use crate::services::{ServiceError, ServiceResult};

/// Any activated member.
pub const ANY_ROLE: &[StaffRole] = &StaffRole::ALL;
/// Roles allowed to change menus and restaurant details.
pub const MENU_EDITORS: &[StaffRole] = &[StaffRole::Owner, StaffRole::Manager];
/// Roles allowed to place orders.
pub const ORDER_TAKERS: &[StaffRole] = &[StaffRole::Owner, StaffRole::Manager, StaffRole::Server];
/// Roles allowed to manage memberships.
pub const STAFF_ADMINS: &[StaffRole] = &[StaffRole::Owner];

const NO_ACCESS: &str = "You don't have access to this restaurant";
const NO_PERMISSION: &str = "You don't have permission to perform this action";

/// Outcome of a successful authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct Access {
    /// Restaurant that owns the authorized entity.
    pub restaurant_id: i32,
    /// Caller's membership in that restaurant.
    pub member: StaffMember,
}

impl Access {
    pub fn role(&self) -> StaffRole {
        self.member.role
    }
}

/// Walk parent references from `entity` up to its restaurant.
pub fn resolve_restaurant_id<R>(repo: &R, entity: EntityRef) -> ServiceResult<i32>
where
    R: AccessReader + ?Sized,
{
    let mut current = entity;
    loop {
        if let EntityRef::Restaurant(id) = current {
            return Ok(id);
        }

        current = repo
            .parent_of(current)
            .map_err(ServiceError::from)?
            .ok_or_else(|| ServiceError::not_found(current.kind()))?;
    }
}

/// Load the caller's membership and make sure it grants one of `required_roles`.
pub fn check_membership<R>(
    repo: &R,
    user_id: &str,
    restaurant_id: i32,
    required_roles: &[StaffRole],
) -> ServiceResult<StaffMember>
where
    R: AccessReader + ?Sized,
{
    let member = repo
        .get_membership(user_id, restaurant_id)
        .map_err(ServiceError::from)?;

    // An unactivated membership is reported exactly like a missing one.
    let member = match member {
        Some(member) if member.activated => member,
        _ => return Err(ServiceError::Forbidden(NO_ACCESS.to_string())),
    };

    if !required_roles.contains(&member.role) {
        return Err(ServiceError::Forbidden(NO_PERMISSION.to_string()));
    }

    Ok(member)
}

/// Check that `user_id` holds one of `required_roles` in `restaurant_id` and return the role.
pub fn check_access<R>(
    repo: &R,
    user_id: &str,
    restaurant_id: i32,
    required_roles: &[StaffRole],
) -> ServiceResult<StaffRole>
where
    R: AccessReader + ?Sized,
{
    check_membership(repo, user_id, restaurant_id, required_roles).map(|member| member.role)
}

/// Resolve the restaurant owning `entity` and check the caller's access to it.
pub fn authorize<R>(
    repo: &R,
    user_id: &str,
    entity: EntityRef,
    required_roles: &[StaffRole],
) -> ServiceResult<Access>
where
    R: AccessReader + ?Sized,
{
    let restaurant_id = resolve_restaurant_id(repo, entity)?;
    let member = check_membership(repo, user_id, restaurant_id, required_roles)?;

    Ok(Access {
        restaurant_id,
        member,
    })
}
