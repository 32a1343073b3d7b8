use thiserror::Error;

use crate::repositories;

/// Usecase failures.
///
/// The display strings double as the response bodies of the REST
/// service and are part of the public contract.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Username and password are required")]
    IncompleteCredentials,
    #[error("Invalid username or password")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Access denied. Only admins can create locations.")]
    AdminOnly,
    #[error("Access denied. Username required.")]
    MissingUsername,
    #[error("Access denied. Only the creator of this location can update it.")]
    NotCreatorUpdate,
    #[error("Access denied. Only the creator of this location can delete it.")]
    NotCreatorDelete,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
