use actix_web::{Responder, get, post, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::forms::orders::{OrderLineForm, PlaceOrderForm};
use crate::repository::DieselRepository;
use crate::routes::{respond, respond_created};
use crate::services::orders;

#[get("/v1/restaurants/{restaurant_id}/orders")]
/// Orders of a restaurant, newest first, with totals and summaries.
pub async fn api_v1_orders(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(orders::get_orders(
        repo.get_ref(),
        &user,
        restaurant_id.into_inner(),
    ))
}

#[post("/v1/orders")]
pub async fn api_v1_place_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<PlaceOrderForm>,
) -> impl Responder {
    respond_created(orders::place_order(repo.get_ref(), &user, form.into_inner()))
}

#[get("/v1/orders/{order_id}")]
pub async fn api_v1_order(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(orders::get_order(repo.get_ref(), &user, order_id.into_inner()))
}

#[post("/v1/orders/{order_id}/items")]
pub async fn api_v1_add_order_item(
    order_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<OrderLineForm>,
) -> impl Responder {
    respond_created(orders::add_order_item(
        repo.get_ref(),
        &user,
        order_id.into_inner(),
        form.into_inner(),
    ))
}
