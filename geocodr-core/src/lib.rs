pub mod gateways;
pub mod registry;
pub mod usecases;

pub mod entities {
    pub use geocodr_entities::{address::*, geo::*, geocode::*, provider::*};
}
