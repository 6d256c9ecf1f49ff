use actix_web::{Responder, get, patch, post, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::forms::staff::{AddStaffForm, EditStaffForm};
use crate::repository::DieselRepository;
use crate::routes::{respond, respond_created};
use crate::services::staff;

#[get("/v1/restaurants/{restaurant_id}/staff")]
pub async fn api_v1_staff(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(staff::list_staff(repo.get_ref(), &user, restaurant_id.into_inner()))
}

#[post("/v1/restaurants/{restaurant_id}/staff")]
pub async fn api_v1_add_staff_member(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddStaffForm>,
) -> impl Responder {
    respond_created(staff::add_staff_member(
        repo.get_ref(),
        &user,
        restaurant_id.into_inner(),
        form.into_inner(),
    ))
}

#[patch("/v1/staff/{staff_id}")]
pub async fn api_v1_modify_staff_member(
    staff_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditStaffForm>,
) -> impl Responder {
    respond(staff::modify_staff_member(
        repo.get_ref(),
        &user,
        staff_id.into_inner(),
        form.into_inner(),
    ))
}
