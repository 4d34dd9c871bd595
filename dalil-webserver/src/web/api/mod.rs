use std::{fmt::Display, result};

use dalil_boundary::Error as JsonErrorResponse;
use rocket::{
    self, delete, get,
    http::{ContentType, Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{jwt, sqlite, Cfg},
};
use dalil_application::prelude as flows;
use dalil_core::{
    entities::*,
    repositories::*,
    usecases::{self, Error as ParameterError},
};

mod admin;
mod employees;
mod error;
mod geocode;
mod marketing;
mod messages;
mod packages;
mod places;
mod products;
mod uploads;
mod users;
mod util;
mod video;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_sign_in,
        users::post_logout,
        users::post_user,
        users::get_current_user,
        users::put_current_user,
        // ---   places   --- //
        places::post_place,
        places::get_place,
        places::put_place,
        places::put_place_active,
        places::post_place_toggle_active,
        places::post_place_view,
        places::get_places,
        places::get_my_places,
        // ---   products   --- //
        products::post_product,
        products::get_product,
        products::put_product,
        products::delete_product,
        products::get_products_of_place,
        products::get_products,
        products::post_product_image,
        products::post_product_video,
        products::delete_product_image,
        products::delete_product_video,
        products::post_product_variant,
        products::delete_product_variant,
        // ---   messages   --- //
        messages::post_message,
        messages::post_message_as_place,
        messages::get_conversations,
        messages::get_place_conversations,
        messages::get_conversation_messages,
        messages::post_conversation_read,
        // ---   employees   --- //
        employees::post_employee_request,
        employees::get_employee_requests_of_place,
        employees::get_my_employee_requests,
        employees::post_accept_employee_request,
        employees::post_reject_employee_request,
        employees::get_employees_of_place,
        employees::put_employee_permission,
        employees::delete_employee,
        employees::get_my_employments,
        // ---   packages & subscriptions   --- //
        packages::get_packages,
        packages::post_subscription,
        packages::get_current_subscription,
        packages::get_my_subscriptions,
        // ---   uploads   --- //
        uploads::post_image,
        uploads::post_audio,
        uploads::post_video,
        uploads::post_product_image_upload,
        uploads::post_product_video_upload,
        // ---   video hosting   --- //
        video::get_authorize,
        video::get_callback,
        // ---   geocoding   --- //
        geocode::get_reverse,
        // ---   admin   --- //
        admin::get_users,
        admin::put_user_flags,
        admin::get_stats,
        admin::put_place_active,
        admin::get_places_csv,
        admin::get_packages,
        admin::post_package,
        admin::put_package,
        admin::put_package_active,
        marketing::get_affiliates,
        marketing::post_affiliate,
        marketing::put_affiliate,
        marketing::put_affiliate_active,
        marketing::get_discount_codes,
        marketing::post_discount_code,
        marketing::put_discount_code,
        marketing::put_discount_code_active,
        marketing::post_discount_code_toggle_active,
        // ---   util   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    message_ar: &str,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message: err.to_string(),
        message_ar: message_ar.to_owned(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
