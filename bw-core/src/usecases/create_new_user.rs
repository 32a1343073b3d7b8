use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<()> {
    if u.username.is_empty() || u.password.is_empty() {
        return Err(Error::IncompleteCredentials);
    }
    if repo.try_get_user_by_username(&u.username)?.is_some() {
        return Err(Error::UserExists);
    }
    let new_user = User {
        username: u.username,
        password: u.password,
        role: u.role,
        name: u.name,
    };
    log::debug!("Creating new user: username = {}", new_user.username);
    repo.create_user(&new_user)?;
    Ok(())
}
