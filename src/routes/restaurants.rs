use actix_web::{Responder, get, patch, post, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::forms::restaurants::{AddRestaurantForm, EditRestaurantForm};
use crate::repository::DieselRepository;
use crate::routes::{respond, respond_created};
use crate::services::restaurants;

#[get("/v1/restaurants")]
/// Restaurants the caller is a member of.
pub async fn api_v1_restaurants(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(restaurants::list_restaurants(repo.get_ref(), &user))
}

#[post("/v1/restaurants")]
pub async fn api_v1_create_restaurant(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddRestaurantForm>,
) -> impl Responder {
    respond_created(restaurants::create_restaurant(
        repo.get_ref(),
        &user,
        form.into_inner(),
    ))
}

#[get("/v1/restaurants/{restaurant_id}")]
pub async fn api_v1_restaurant(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(restaurants::get_restaurant(
        repo.get_ref(),
        &user,
        restaurant_id.into_inner(),
    ))
}

#[patch("/v1/restaurants/{restaurant_id}")]
pub async fn api_v1_modify_restaurant(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditRestaurantForm>,
) -> impl Responder {
    respond(restaurants::modify_restaurant(
        repo.get_ref(),
        &user,
        restaurant_id.into_inner(),
        form.into_inner(),
    ))
}
