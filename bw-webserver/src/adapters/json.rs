pub use bw_boundary::*;

pub mod from_json {
    //! JSON -> Entity

    use bw_core::usecases;

    // NOTE:
    // We cannot impl From<T> here, because the credentials borrow
    // from the decoded request body.

    pub fn credentials(from: &super::Credentials) -> usecases::Credentials<'_> {
        usecases::Credentials {
            username: &from.username,
            password: &from.password,
        }
    }
}
