pub mod google;
pub mod nominatim;

mod rate_limit;

pub use self::{google::GoogleMaps, nominatim::Nominatim};
