use rocket::{form::Form, fs::TempFile, tokio::io::AsyncReadExt, FromForm};

use super::*;

#[post("/geocode", data = "<body>")]
pub async fn post_geocode(
    geocoding: &State<Geocoding>,
    body: JsonResult<'_, json::GeocodeRequest>,
) -> Result<json::ResultRecord> {
    let (row, service) = from_json::address_row(body?.into_inner());
    let registry = geocoding.registry();
    let (row, res) = task::spawn_blocking(move || {
        usecases::geocode_address(&registry, &row, service.as_deref()).map(|res| (row, res))
    })
    .await??;
    Ok(Json(json::ResultRecord::from((row, res))))
}

#[derive(FromForm)]
pub struct CsvUpload<'r> {
    file: Option<TempFile<'r>>,
    service: Option<String>,
}

async fn read_upload(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(file.len() as usize);
    let mut reader = Box::pin(file.open().await?);
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}

#[post("/geocode-csv", data = "<upload>")]
pub async fn post_geocode_csv(
    geocoding: &State<Geocoding>,
    cfg: &State<Cfg>,
    upload: Form<CsvUpload<'_>>,
) -> Result<Vec<json::ResultRecord>> {
    let CsvUpload { file, service } = upload.into_inner();
    let file = file.ok_or(ApiError::Parameter("No file uploaded"))?;
    if file.len() == 0 {
        return Err(ApiError::Parameter("No file selected"));
    }
    let data = read_upload(&file).await?;
    let rows = adapters::csv::parse_address_rows(&data)?;
    debug!("Received batch of {} rows", rows.len());

    let registry = geocoding.registry();
    let max_batch_size = cfg.max_batch_size;
    let results = task::spawn_blocking(move || {
        usecases::process_batch(&registry, rows, service.as_deref(), max_batch_size)
    })
    .await??;
    Ok(Json(to_json::result_records(results)))
}
