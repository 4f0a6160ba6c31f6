use crate::{
    entities::{AddressRow, GeocodeResult},
    registry::ProviderRegistry,
};

mod error;
mod geocode_address;
mod process_batch;

pub use self::{error::Error, geocode_address::*, process_batch::*};

pub type Result<T> = std::result::Result<T, Error>;
