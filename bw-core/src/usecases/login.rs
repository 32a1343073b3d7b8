use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn login<R>(repo: &R, login: &Credentials) -> Result<Identity>
where
    R: UserRepo,
{
    if login.username.is_empty() || login.password.is_empty() {
        return Err(Error::IncompleteCredentials);
    }
    repo.try_get_user_by_username(login.username)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                // Passwords are opaque strings and compared verbatim.
                if u.password == login.password {
                    Ok(u.into())
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn db_with_user(username: &str, password: &str, role: Role) -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(User {
            username: username.into(),
            password: password.into(),
            role,
            name: "Test User".into(),
        });
        db
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = db_with_user("admin", "secret", Role::Admin);
        let identity = login(
            &db,
            &Credentials {
                username: "admin",
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(identity.username, "admin");
        assert!(identity.is_admin());
    }

    #[test]
    fn login_with_wrong_password() {
        let db = db_with_user("admin", "secret", Role::Admin);
        match login(
            &db,
            &Credentials {
                username: "admin",
                password: "wrong",
            },
        )
        .err()
        .unwrap()
        {
            Error::Credentials => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn login_with_unknown_username() {
        let db = db_with_user("admin", "secret", Role::Admin);
        assert!(matches!(
            login(
                &db,
                &Credentials {
                    username: "nobody",
                    password: "secret",
                },
            ),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_missing_fields() {
        let db = db_with_user("admin", "secret", Role::Admin);
        assert!(matches!(
            login(
                &db,
                &Credentials {
                    username: "",
                    password: "secret",
                },
            ),
            Err(Error::IncompleteCredentials)
        ));
        assert!(matches!(
            login(
                &db,
                &Credentials {
                    username: "admin",
                    password: "",
                },
            ),
            Err(Error::IncompleteCredentials)
        ));
    }

    #[test]
    fn login_never_leaks_the_password() {
        let db = db_with_user("bob", "secret", Role::NonAdmin);
        let identity = login(
            &db,
            &Credentials {
                username: "bob",
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(identity.role, Role::NonAdmin);
        assert_eq!(identity.name, "Test User");
    }
}
