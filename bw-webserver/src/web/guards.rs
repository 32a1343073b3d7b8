use core::ops::Deref;
use std::sync::Arc;

use rocket::request::{FromRequest, Outcome, Request};

use bw_core::{entities::Role, gateways::image_host::ImageHostGateway};

pub const ROLE_HEADER: &str = "x-role";
pub const USERNAME_HEADER: &str = "x-username";

/// Identity claims taken from the `x-role` and `x-username` headers.
///
/// The headers are client-asserted and untrusted. The guard never
/// rejects a request, the usecases decide what the claims allow.
#[derive(Debug)]
pub struct ClientIdentity {
    role: Option<Role>,
    username: Option<String>,
}

impl ClientIdentity {
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn role_from_headers(request: &Request) -> Option<Role> {
        // Anything but the exact wire spelling counts as no role.
        request
            .headers()
            .get_one(ROLE_HEADER)
            .and_then(|role| role.parse().ok())
    }

    fn username_from_headers(request: &Request) -> Option<String> {
        request
            .headers()
            .get_one(USERNAME_HEADER)
            .filter(|username| !username.is_empty())
            .map(ToOwned::to_owned)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientIdentity {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let role = Self::role_from_headers(request);
        let username = Self::username_from_headers(request);
        Outcome::Success(ClientIdentity { role, username })
    }
}

/// Shared handle on the image hosting gateway.
///
/// Uploads run on blocking threads, which clone the handle.
#[derive(Clone)]
pub struct ImageHost(pub Arc<dyn ImageHostGateway + Send + Sync>);

impl Deref for ImageHost {
    type Target = dyn ImageHostGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
