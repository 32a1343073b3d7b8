use std::{fmt::Display, result};

use bw_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, jfs};
use crate::adapters::json;
use bw_core::usecases;

mod error;
mod locations;
mod users;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<(Status, Json<T>), ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   locations   --- //
        locations::get_locations,
        locations::get_location,
        locations::post_location,
        locations::put_location,
        locations::delete_location,
        // ---   users   --- //
        users::post_login,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let error = err.to_string();
    let boundary_error = JsonErrorResponse { error };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
