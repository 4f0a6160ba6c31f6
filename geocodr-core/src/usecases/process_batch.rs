use super::*;

/// Resolves all valid rows one after another, keeping their order.
///
/// Rows without an address are skipped. Provider failures end up in the
/// status of the corresponding result and never abort the batch.
pub fn process_batch(
    registry: &ProviderRegistry,
    rows: Vec<AddressRow>,
    service_name: Option<&str>,
    max_batch_size: usize,
) -> Result<Vec<(AddressRow, GeocodeResult)>> {
    if rows.len() > max_batch_size {
        return Err(Error::BatchTooLarge {
            max: max_batch_size,
            actual: rows.len(),
        });
    }
    let total = rows.len();
    let results: Vec<_> = rows
        .into_iter()
        .filter(AddressRow::is_valid)
        .map(|row| {
            let res = registry.geocode(&row.address, service_name);
            (row, res)
        })
        .collect();
    log::info!(
        "Processed batch: {} of {total} rows geocoded",
        results.len()
    );
    Ok(results)
}
