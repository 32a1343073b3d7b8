use super::*;
use crate::adapters::json::from_json;

const LOGIN_FAILED: &str = "Login failed";

#[post("/auth/login", format = "application/json", data = "<login>")]
pub fn post_login(db: jfs::Storage, login: JsonResult<json::Credentials>) -> Result<json::User> {
    let login = login?.into_inner();
    let identity = usecases::login(&*db, &from_json::credentials(&login)).map_err(|err| {
        log::debug!("Login of '{}' failed: {}", login.username, err);
        ApiError::new(err, LOGIN_FAILED)
    })?;
    Ok(Json(identity.into()))
}
