use actix_web::{Responder, delete, get, patch, post, web};
use pushkind_common::domain::auth::AuthenticatedUser;

use crate::forms::menus::{
    AddItemForm, AddMenuForm, AddModifierForm, AddSectionForm, EditItemForm, EditMenuForm,
    EditModifierForm, EditSectionForm,
};
use crate::repository::DieselRepository;
use crate::routes::{respond, respond_created, respond_no_content};
use crate::services::menus;

#[get("/v1/restaurants/{restaurant_id}/menus")]
pub async fn api_v1_menus(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(menus::get_menus(repo.get_ref(), &user, restaurant_id.into_inner()))
}

#[post("/v1/restaurants/{restaurant_id}/menus")]
pub async fn api_v1_add_menu(
    restaurant_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddMenuForm>,
) -> impl Responder {
    respond_created(menus::add_menu(
        repo.get_ref(),
        &user,
        restaurant_id.into_inner(),
        form.into_inner(),
    ))
}

#[get("/v1/menus/{menu_id}")]
/// Menu with its sections, items and modifiers.
pub async fn api_v1_menu(
    menu_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond(menus::get_menu(repo.get_ref(), &user, menu_id.into_inner()))
}

#[patch("/v1/menus/{menu_id}")]
pub async fn api_v1_modify_menu(
    menu_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditMenuForm>,
) -> impl Responder {
    respond(menus::modify_menu(
        repo.get_ref(),
        &user,
        menu_id.into_inner(),
        form.into_inner(),
    ))
}

#[delete("/v1/menus/{menu_id}")]
pub async fn api_v1_remove_menu(
    menu_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond_no_content(menus::remove_menu(repo.get_ref(), &user, menu_id.into_inner()))
}

#[post("/v1/menus/{menu_id}/sections")]
pub async fn api_v1_add_section(
    menu_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddSectionForm>,
) -> impl Responder {
    respond_created(menus::add_section(
        repo.get_ref(),
        &user,
        menu_id.into_inner(),
        form.into_inner(),
    ))
}

#[patch("/v1/sections/{section_id}")]
pub async fn api_v1_modify_section(
    section_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditSectionForm>,
) -> impl Responder {
    respond(menus::modify_section(
        repo.get_ref(),
        &user,
        section_id.into_inner(),
        form.into_inner(),
    ))
}

#[delete("/v1/sections/{section_id}")]
pub async fn api_v1_remove_section(
    section_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond_no_content(menus::remove_section(
        repo.get_ref(),
        &user,
        section_id.into_inner(),
    ))
}

#[post("/v1/sections/{section_id}/items")]
pub async fn api_v1_add_item(
    section_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddItemForm>,
) -> impl Responder {
    respond_created(menus::add_item(
        repo.get_ref(),
        &user,
        section_id.into_inner(),
        form.into_inner(),
    ))
}

#[patch("/v1/items/{item_id}")]
pub async fn api_v1_modify_item(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditItemForm>,
) -> impl Responder {
    respond(menus::modify_item(
        repo.get_ref(),
        &user,
        item_id.into_inner(),
        form.into_inner(),
    ))
}

#[delete("/v1/items/{item_id}")]
pub async fn api_v1_remove_item(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond_no_content(menus::remove_item(repo.get_ref(), &user, item_id.into_inner()))
}

#[post("/v1/items/{item_id}/modifiers")]
pub async fn api_v1_add_modifier(
    item_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddModifierForm>,
) -> impl Responder {
    respond_created(menus::add_modifier(
        repo.get_ref(),
        &user,
        item_id.into_inner(),
        form.into_inner(),
    ))
}

#[patch("/v1/modifiers/{modifier_id}")]
pub async fn api_v1_modify_modifier(
    modifier_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditModifierForm>,
) -> impl Responder {
    respond(menus::modify_modifier(
        repo.get_ref(),
        &user,
        modifier_id.into_inner(),
        form.into_inner(),
    ))
}

#[delete("/v1/modifiers/{modifier_id}")]
pub async fn api_v1_remove_modifier(
    modifier_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    respond_no_content(menus::remove_modifier(
        repo.get_ref(),
        &user,
        modifier_id.into_inner(),
    ))
}
