use maud::Markup;
use rocket::{
    get,
    response::content::{RawCss, RawJavaScript},
    routes, Route, State,
};

use super::guards::Geocoding;

mod view;


const MAIN_CSS: &str = include_str!("main.css");
const MAIN_JS: &str = include_str!("main.js");

#[get("/")]
pub fn get_index(geocoding: &State<Geocoding>) -> Markup {
    view::index(geocoding.default_service(), &geocoding.list_available())
}

#[get("/index.html")]
pub fn get_index_html(geocoding: &State<Geocoding>) -> Markup {
    get_index(geocoding)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/main.js")]
pub fn get_main_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAIN_JS)
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_index_html, get_main_css, get_main_js]
}
