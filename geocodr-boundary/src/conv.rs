use super::*;
use geocodr_entities as e;

impl From<(e::address::AddressRow, e::geocode::GeocodeResult)> for ResultRecord {
    fn from((row, res): (e::address::AddressRow, e::geocode::GeocodeResult)) -> Self {
        let e::address::AddressRow { name, address } = row;
        let latitude = res.latitude();
        let longitude = res.longitude();
        let e::geocode::GeocodeResult { status, provider } = res;
        Self {
            name: name.unwrap_or_default(),
            address,
            latitude,
            longitude,
            status: status.to_string(),
            provider,
        }
    }
}
