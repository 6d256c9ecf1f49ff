use pushkind_common::domain::auth::AuthenticatedUser;
use serde::Serialize;

use crate::domain::access::{EntityRef, StaffRole};
use crate::domain::restaurant::{Restaurant, RestaurantMembership};
use crate::domain::user::NewUser;
use crate::forms::restaurants::{AddRestaurantForm, EditRestaurantForm};
use crate::repository::{AccessReader, RestaurantReader, RestaurantWriter};
use crate::services::access::{ANY_ROLE, MENU_EDITORS, authorize};
use crate::services::{ServiceError, ServiceResult};

/// Restaurant as seen by one of its members.
#[derive(Debug, Serialize)]
pub struct RestaurantView {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub role: StaffRole,
    pub staff_id: i32,
}

/// Every restaurant the caller holds a membership in, activated or not.
pub fn list_restaurants<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<Vec<RestaurantMembership>>
where
    R: RestaurantReader + ?Sized,
{
    repo.list_restaurants_for_user(&user.sub)
        .map_err(ServiceError::from)
}

pub fn get_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
    restaurant_id: i32,
) -> ServiceResult<RestaurantView>
where
    R: AccessReader + RestaurantReader + ?Sized,
{
    let access = authorize(repo, &user.sub, EntityRef::Restaurant(restaurant_id), ANY_ROLE)?;

    let restaurant = repo
        .get_restaurant_by_id(restaurant_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::not_found("Restaurant"))?;

    Ok(RestaurantView {
        restaurant,
        role: access.role(),
        staff_id: access.member.id,
    })
}

/// Create a restaurant owned by the caller, storing the caller's profile with it.
pub fn create_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddRestaurantForm,
) -> ServiceResult<RestaurantMembership>
where
    R: RestaurantWriter + ?Sized,
{
    let new_restaurant = form
        .into_new_restaurant(&user.sub)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let (restaurant, owner) = repo
        .create_restaurant(&new_restaurant, &NewUser::from(user))
        .map_err(ServiceError::from)?;

    log::info!(
        "Restaurant #{} `{}` created by {}",
        restaurant.id,
        restaurant.name,
        user.sub
    );

    Ok(RestaurantMembership {
        restaurant,
        role: owner.role,
        staff_id: owner.id,
        activated: owner.activated,
    })
}

pub fn modify_restaurant<R>(
    repo: &R,
    user: &AuthenticatedUser,
    restaurant_id: i32,
    form: EditRestaurantForm,
) -> ServiceResult<Restaurant>
where
    R: AccessReader + RestaurantWriter + ?Sized,
{
    authorize(repo, &user.sub, EntityRef::Restaurant(restaurant_id), MENU_EDITORS)?;

    let updates = form
        .into_update_restaurant()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_restaurant(restaurant_id, &updates)
        .map_err(ServiceError::from)
}
