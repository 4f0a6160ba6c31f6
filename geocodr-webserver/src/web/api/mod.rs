use std::{fmt::Display, result};

use rocket::{
    self, catch, catchers, get,
    http::Status,
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    tokio::task,
    Catcher, Request, Route, State,
};

use super::{guards::Geocoding, Cfg};
use crate::{
    adapters::{
        self,
        json::{self, from_json, to_json},
    },
    core::usecases,
};

mod error;
mod export;
mod geocode;
mod services;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   geocoding   --- //
        geocode::post_geocode,
        geocode::post_geocode_csv,
        // ---   export   --- //
        export::post_export,
        // ---   services   --- //
        services::get_services,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _: &Request) -> (Status, Json<json::Error>) {
    let error = status.reason().unwrap_or("Unknown error").to_string();
    (status, Json(json::Error { error }))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = json::Error {
        error: err.to_string(),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
