use std::fmt;

use strum::{EnumCount, EnumIter, EnumString};

/// A provisioned account as stored in the user collection.
///
/// Passwords are opaque strings that are compared verbatim on login.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username : String,
    pub password : String,
    pub role     : Role,
    pub name     : String,
}

/// The public part of a logged in account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username : String,
    pub role     : Role,
    pub name     : String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<User> for Identity {
    fn from(from: User) -> Self {
        let User {
            username,
            password: _,
            role,
            name,
        } = from;
        Self {
            username,
            role,
            name,
        }
    }
}

// Parsing is case-sensitive: role strings arrive in untrusted headers
// and only the exact wire spelling may authorize anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumCount, EnumIter, EnumString)]
pub enum Role {
    #[strum(serialize = "non-admin")]
    NonAdmin,
    #[strum(serialize = "admin")]
    Admin,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonAdmin => "non-admin",
            Self::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Role {
        Role::NonAdmin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roles() {
        assert_eq!("admin".parse(), Ok(Role::Admin));
        assert_eq!("non-admin".parse(), Ok(Role::NonAdmin));
        assert!("root".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn identity_drops_the_password() {
        let user = User {
            username: "wandel_admin".into(),
            password: "secret".into(),
            role: Role::Admin,
            name: "Admin".into(),
        };
        let identity = Identity::from(user);
        assert!(identity.is_admin());
        assert_eq!(identity.username, "wandel_admin");
    }
}
