//! Membership management. Only owners add or change members.

use pushkind_common::domain::auth::AuthenticatedUser;

use crate::domain::staff::{StaffListing, StaffMember};
use crate::forms::staff::{AddStaffForm, EditStaffForm};
use crate::repository::{AccessReader, StaffReader, StaffWriter};
use crate::services::access::{MENU_EDITORS, STAFF_ADMINS, check_access, check_membership};
use crate::services::{ServiceError, ServiceResult};

pub fn list_staff<R>(
    repo: &R,
    user: &AuthenticatedUser,
    restaurant_id: i32,
) -> ServiceResult<Vec<StaffListing>>
where
    R: AccessReader + StaffReader + ?Sized,
{
    check_access(repo, &user.sub, restaurant_id, MENU_EDITORS)?;

    repo.list_staff(restaurant_id).map_err(ServiceError::from)
}

/// Add a user to the restaurant. A user holds at most one membership per restaurant.
pub fn add_staff_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    restaurant_id: i32,
    form: AddStaffForm,
) -> ServiceResult<StaffMember>
where
    R: AccessReader + StaffWriter + ?Sized,
{
    check_access(repo, &user.sub, restaurant_id, STAFF_ADMINS)?;

    let new_member = form
        .into_new_staff(restaurant_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let existing = repo
        .get_membership(&new_member.user_id, restaurant_id)
        .map_err(ServiceError::from)?;
    if existing.is_some() {
        return Err(ServiceError::Unprocessable(
            "User is already a member of this restaurant".to_string(),
        ));
    }

    let member = repo
        .create_staff_member(&new_member)
        .map_err(ServiceError::from)?;

    log::info!(
        "User {} joined restaurant #{} as {}",
        member.user_id,
        restaurant_id,
        member.role
    );

    Ok(member)
}

/// Change another member's role or activation.
pub fn modify_staff_member<R>(
    repo: &R,
    user: &AuthenticatedUser,
    staff_id: i32,
    form: EditStaffForm,
) -> ServiceResult<StaffMember>
where
    R: AccessReader + StaffReader + StaffWriter + ?Sized,
{
    let member = repo
        .get_staff_member(staff_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::not_found("Staff member"))?;

    let caller = check_membership(repo, &user.sub, member.restaurant_id, STAFF_ADMINS)?;
    if caller.id == member.id {
        return Err(ServiceError::Unprocessable(
            "You cannot change your own membership".to_string(),
        ));
    }

    let updates = form.into_update_staff();
    if updates.is_empty() {
        return Ok(member);
    }

    repo.update_staff_member(staff_id, &updates)
        .map_err(ServiceError::from)
}
