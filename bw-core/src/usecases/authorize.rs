use super::prelude::*;

/// Only admins may create locations. A missing role counts as
/// non-admin.
pub fn authorize_admin(role: Option<Role>) -> Result<()> {
    match role {
        Some(Role::Admin) => Ok(()),
        _ => Err(Error::AdminOnly),
    }
}

/// Only the creator of a location may change it.
pub fn authorize_update(location: &Location, username: &str) -> Result<()> {
    if location.is_created_by(username) {
        Ok(())
    } else {
        Err(Error::NotCreatorUpdate)
    }
}

/// Only the creator of a location may remove it.
pub fn authorize_delete(location: &Location, username: &str) -> Result<()> {
    if location.is_created_by(username) {
        Ok(())
    } else {
        Err(Error::NotCreatorDelete)
    }
}

#[cfg(test)]
mod tests {
    use bw_entities::builders::Builder;

    use super::*;

    #[test]
    fn only_admins_pass() {
        assert!(authorize_admin(Some(Role::Admin)).is_ok());
        assert!(matches!(
            authorize_admin(Some(Role::NonAdmin)),
            Err(Error::AdminOnly)
        ));
        assert!(matches!(authorize_admin(None), Err(Error::AdminOnly)));
    }

    #[test]
    fn admins_have_no_creator_bypass() {
        let location = Location::build().id("a").created_by("bob").finish();
        assert!(matches!(
            authorize_update(&location, "admin"),
            Err(Error::NotCreatorUpdate)
        ));
        assert!(matches!(
            authorize_delete(&location, "admin"),
            Err(Error::NotCreatorDelete)
        ));
        assert!(authorize_update(&location, "bob").is_ok());
        assert!(authorize_delete(&location, "bob").is_ok());
    }
}
