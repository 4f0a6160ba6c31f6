use super::*;

pub fn geocode_address(
    registry: &ProviderRegistry,
    row: &AddressRow,
    service_name: Option<&str>,
) -> Result<GeocodeResult> {
    if !row.is_valid() {
        return Err(Error::MissingAddress);
    }
    Ok(registry.geocode(&row.address, service_name))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn reject_blank_address() {
        let (registry, gw) = registry_with_hit();
        for address in ["", "   "] {
            let row = AddressRow::build().address(address).finish();
            assert_eq!(
                geocode_address(&registry, &row, None),
                Err(Error::MissingAddress)
            );
        }
        assert_eq!(gw.call_count(), 0);
    }

    #[test]
    fn resolve_with_default_provider() {
        let (registry, gw) = registry_with_hit();
        let row = AddressRow::build()
            .name("HQ")
            .address("Hauptstraße 1, Berlin")
            .finish();
        let res = geocode_address(&registry, &row, None).unwrap();
        assert_eq!(res.provider, "nominatim");
        assert!(res.status.is_success());
        assert_eq!(gw.call_count(), 1);
    }
}
