use std::ops::Deref;

use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Storage(bw_db_jfs::Storage);

impl From<bw_db_jfs::Storage> for Storage {
    fn from(storage: bw_db_jfs::Storage) -> Self {
        Self(storage)
    }
}

impl Deref for Storage {
    type Target = bw_db_jfs::Storage;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Storage {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let storage = try_outcome!(request.guard::<&State<Storage>>().await);
        Outcome::Success(storage.inner().clone())
    }
}
