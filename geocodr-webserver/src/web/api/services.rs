use super::*;

#[get("/services")]
pub fn get_services(geocoding: &State<Geocoding>) -> Json<json::Services> {
    Json(json::Services {
        default_service: geocoding.default_service().to_string(),
        services: geocoding
            .list_available()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    })
}
