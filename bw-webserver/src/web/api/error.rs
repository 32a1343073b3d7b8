use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use super::json_error_response;
use bw_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

/// Body message of every `404` response.
const LOCATION_NOT_FOUND: &str = "Location not found";

#[derive(Debug, Error)]
pub enum Error {
    /// A usecase rejection, paired with the endpoint's generic body
    /// for unexpected storage errors.
    ///
    /// Contractual rejections answer with the usecase error's display
    /// string. A failing storage layer answers `500` with the generic
    /// message, the cause only goes to the log.
    #[error("{0}")]
    Usecase(ParameterError, &'static str),
    /// An undecodable request body.
    #[error(transparent)]
    InvalidBody(anyhow::Error),
}

impl Error {
    pub fn new(err: ParameterError, storage_failure: &'static str) -> Self {
        Self::Usecase(err, storage_failure)
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::InvalidBody(anyhow!(err)),
            JsonError::Parse(_str, err) => Self::InvalidBody(anyhow!(err)),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Usecase(err, storage_failure) => match &err {
                ParameterError::IncompleteCredentials
                | ParameterError::MissingFields
                | ParameterError::UserExists => json_error_response(req, &err, Status::BadRequest),
                ParameterError::Credentials => {
                    json_error_response(req, &err, Status::Unauthorized)
                }
                ParameterError::AdminOnly
                | ParameterError::MissingUsername
                | ParameterError::NotCreatorUpdate
                | ParameterError::NotCreatorDelete => {
                    json_error_response(req, &err, Status::Forbidden)
                }
                ParameterError::Repo(RepoError::NotFound) => {
                    json_error_response(req, &LOCATION_NOT_FOUND, Status::NotFound)
                }
                ParameterError::Repo(source) => {
                    error!("Storage error: {source}");
                    json_error_response(req, &storage_failure, Status::InternalServerError)
                }
            },
            Error::InvalidBody(err) => {
                json_error_response(req, &err, Status::UnprocessableEntity)
            }
        }
    }
}
