mod authorize;
mod create_new_location;
mod create_new_user;
mod delete_location;
mod error;
mod login;
mod update_location;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, create_new_location::*, create_new_user::*, delete_location::*, error::Error,
    login::*, update_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_location<R: LocationRepo>(repo: &R, id: &str) -> Result<Location> {
    Ok(repo.get_location(id)?)
}

pub fn all_locations<R: LocationRepo>(repo: &R) -> Result<Vec<Location>> {
    Ok(repo.all_locations()?)
}
