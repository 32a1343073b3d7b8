//! Low-level persistence traits returning model entities.
//!
//! Repositories are keyed by the opaque record id and make no
//! assumptions about the backing store beyond that.

use std::{io, result};

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,

    #[error("The object already exists")]
    AlreadyExists,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<()>;
    fn update_location(&self, location: &Location) -> Result<()>;
    fn delete_location(&self, id: &str) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    /// All stored locations, ordered by id.
    fn all_locations(&self) -> Result<Vec<Location>>;
    fn count_locations(&self) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}
