use super::json_error_response;
use crate::{adapters::csv, core::usecases};
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
    tokio::task::JoinError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] usecases::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Parameter(&'static str),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!("Invalid JSON: {err}"), Status::BadRequest)
            }
        }
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => json_error_response(req, &err, Status::BadRequest),
            Error::Csv(err) => json_error_response(req, &err, Status::BadRequest),
            Error::Parameter(msg) => json_error_response(req, &msg, Status::BadRequest),
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Unexpected error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
