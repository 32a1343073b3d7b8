use super::{authorize_delete, prelude::*};

pub fn delete_location<R: LocationRepo>(
    repo: &R,
    id: &str,
    username: Option<&str>,
) -> Result<()> {
    let Some(username) = username else {
        return Err(Error::MissingUsername);
    };
    let existing = repo.get_location(id)?;
    authorize_delete(&existing, username)?;
    repo.delete_location(id)?;
    Ok(())
}
