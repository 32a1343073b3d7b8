//! Client-side building blocks for Berlin Wandel frontends: a typed
//! gateway to the REST API, session and review basket handling, and
//! the create/edit form workflow.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod form;
mod public;
mod reactions;
mod session;
mod user;

pub use self::{form::*, public::*, reactions::*, session::*, user::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The request never made it, or the response was unusable.
    #[error("{0}")]
    Fetch(String),

    /// `401`, the credentials were rejected.
    #[error("{0}")]
    Unauthorized(String),

    /// `403`, the identity may not perform the operation.
    #[error("{0}")]
    Forbidden(String),

    /// `404`, no such record.
    #[error("{0}")]
    NotFound(String),

    /// A create that failed for another reason than authorization.
    #[error("{0}")]
    CreateFailed(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub fn into_json<T>(response: reqwest::blocking::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }
    // Error bodies are `{"error": "<message>"}`. Anything else is
    // passed through verbatim.
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<bw_boundary::Error>(&body)
        .map(|err| err.error)
        .unwrap_or(body);
    Err(match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
        StatusCode::FORBIDDEN => Error::Forbidden(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        _ => Error::Fetch(message),
    })
}
