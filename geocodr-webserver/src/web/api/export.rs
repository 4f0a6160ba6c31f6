use rocket::{http::Header, Responder};

use super::*;

const EXPORT_FILE_NAME: &str = "geocoding_results.csv";

#[derive(Responder)]
#[response(content_type = "text/csv")]
pub struct CsvAttachment {
    data: String,
    disposition: Header<'static>,
}

impl CsvAttachment {
    fn new(data: String, file_name: &str) -> Self {
        let disposition = Header::new(
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        );
        Self { data, disposition }
    }
}

#[post("/export", data = "<records>")]
pub fn post_export(
    records: JsonResult<'_, Vec<adapters::csv::Record>>,
) -> result::Result<CsvAttachment, ApiError> {
    let records = records?.into_inner();
    if records.is_empty() {
        return Err(ApiError::Parameter("No data provided"));
    }
    let data = adapters::csv::serialize_records(&records, &json::RESULT_RECORD_FIELDS)?;
    Ok(CsvAttachment::new(data, EXPORT_FILE_NAME))
}
