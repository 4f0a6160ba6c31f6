pub use geocodr_boundary::*;

use crate::core::entities as e;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    pub fn address_row(req: GeocodeRequest) -> (e::AddressRow, Option<String>) {
        let GeocodeRequest {
            address,
            service,
            name,
        } = req;
        let row = e::AddressRow {
            name: name.filter(|n| !n.is_empty()),
            address: address.unwrap_or_default(),
        };
        (row, service)
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn result_records(results: Vec<(e::AddressRow, e::GeocodeResult)>) -> Vec<ResultRecord> {
        results.into_iter().map(ResultRecord::from).collect()
    }
}
