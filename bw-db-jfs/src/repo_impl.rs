use std::io;

use bw_core::{
    entities::{Location, User},
    repositories::{Error, LocationRepo, Result, UserRepo},
};

use crate::{
    models::{LocationDoc, UserDoc},
    Storage,
};

fn not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

impl LocationRepo for Storage {
    fn create_location(&self, location: &Location) -> Result<()> {
        let _guard = self.lock.write();
        let id = location.id.as_str();
        match self.locations.get::<LocationDoc>(id) {
            Ok(_) => return Err(Error::AlreadyExists),
            Err(err) if not_found(&err) => (),
            Err(err) => return Err(err.into()),
        }
        self.locations.save_with_id(&LocationDoc::from(location), id)?;
        Ok(())
    }

    fn update_location(&self, location: &Location) -> Result<()> {
        let _guard = self.lock.write();
        let id = location.id.as_str();
        match self.locations.get::<LocationDoc>(id) {
            Ok(_) => (),
            Err(err) if not_found(&err) => return Err(Error::NotFound),
            Err(err) => return Err(err.into()),
        }
        self.locations.save_with_id(&LocationDoc::from(location), id)?;
        Ok(())
    }

    fn delete_location(&self, id: &str) -> Result<()> {
        let _guard = self.lock.write();
        match self.locations.delete(id) {
            Ok(()) => Ok(()),
            Err(err) if not_found(&err) => Err(Error::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    fn get_location(&self, id: &str) -> Result<Location> {
        let _guard = self.lock.read();
        match self.locations.get::<LocationDoc>(id) {
            Ok(doc) => doc.into_location(id.into()),
            Err(err) if not_found(&err) => Err(Error::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    fn all_locations(&self) -> Result<Vec<Location>> {
        let _guard = self.lock.read();
        // The map is keyed by id, so the result is ordered by id.
        self.locations
            .all::<LocationDoc>()?
            .into_iter()
            .map(|(id, doc)| doc.into_location(id.into()))
            .collect()
    }

    fn count_locations(&self) -> Result<usize> {
        let _guard = self.lock.read();
        Ok(self.locations.all::<LocationDoc>()?.len())
    }
}

impl UserRepo for Storage {
    fn create_user(&self, user: &User) -> Result<()> {
        let _guard = self.lock.write();
        match self.users.get::<UserDoc>(&user.username) {
            Ok(_) => return Err(Error::AlreadyExists),
            Err(err) if not_found(&err) => (),
            Err(err) => return Err(err.into()),
        }
        self.users.save_with_id(&UserDoc::from(user), &user.username)?;
        Ok(())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        let _guard = self.lock.read();
        self.users
            .all::<UserDoc>()?
            .into_iter()
            .map(|(username, doc)| doc.into_user(username))
            .collect()
    }

    fn count_users(&self) -> Result<usize> {
        let _guard = self.lock.read();
        Ok(self.users.all::<UserDoc>()?.len())
    }

    fn get_user_by_username(&self, username: &str) -> Result<User> {
        let _guard = self.lock.read();
        match self.users.get::<UserDoc>(username) {
            Ok(doc) => doc.into_user(username.to_owned()),
            Err(err) if not_found(&err) => Err(Error::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        match self.get_user_by_username(username) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
