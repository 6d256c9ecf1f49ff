//! JSON handlers mounted under `/api`.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::services::{ServiceError, ServiceResult};

pub mod menus;
pub mod orders;
pub mod restaurants;
pub mod staff;

/// Register every `/v1` endpoint.
pub fn api_v1(cfg: &mut web::ServiceConfig) {
    cfg.service(restaurants::api_v1_restaurants)
        .service(restaurants::api_v1_create_restaurant)
        .service(restaurants::api_v1_restaurant)
        .service(restaurants::api_v1_modify_restaurant)
        .service(staff::api_v1_staff)
        .service(staff::api_v1_add_staff_member)
        .service(staff::api_v1_modify_staff_member)
        .service(menus::api_v1_menus)
        .service(menus::api_v1_add_menu)
        .service(menus::api_v1_menu)
        .service(menus::api_v1_modify_menu)
        .service(menus::api_v1_remove_menu)
        .service(menus::api_v1_add_section)
        .service(menus::api_v1_modify_section)
        .service(menus::api_v1_remove_section)
        .service(menus::api_v1_add_item)
        .service(menus::api_v1_modify_item)
        .service(menus::api_v1_remove_item)
        .service(menus::api_v1_add_modifier)
        .service(menus::api_v1_modify_modifier)
        .service(menus::api_v1_remove_modifier)
        .service(orders::api_v1_orders)
        .service(orders::api_v1_place_order)
        .service(orders::api_v1_order)
        .service(orders::api_v1_add_order_item);
}

/// Report malformed JSON bodies in the same shape as service errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let response = error_body(StatusCode::BAD_REQUEST, &err.to_string());
        InternalError::from_response(err, response).into()
    })
}

fn error_body(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "error": message }))
}

/// Translate a service error into its HTTP status and JSON body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Form(_) => StatusCode::BAD_REQUEST,
        ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_body(status, &err.to_string())
}

pub(crate) fn respond<T: Serialize>(result: ServiceResult<T>) -> HttpResponse {
    respond_with(StatusCode::OK, result)
}

pub(crate) fn respond_created<T: Serialize>(result: ServiceResult<T>) -> HttpResponse {
    respond_with(StatusCode::CREATED, result)
}

pub(crate) fn respond_no_content(result: ServiceResult<()>) -> HttpResponse {
    match result {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}

fn respond_with<T: Serialize>(status: StatusCode, result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::build(status).json(value),
        Err(err) => error_response(&err),
    }
}
