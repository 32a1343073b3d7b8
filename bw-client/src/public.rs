use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use bw_boundary::{Credentials, Location, User};

use crate::{into_json, Result, UserApi};

/// Anonymous Berlin Wandel API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
    client: reqwest::blocking::Client,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::blocking::Client::new(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn locations(&self) -> Result<Vec<Location>> {
        let url = format!("{}/locations", self.url);
        let response = self.client.get(&url).send()?;
        into_json(response)
    }

    pub fn location(&self, id: &str) -> Result<Location> {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        let url = format!("{}/locations/{encoded_id}", self.url);
        let response = self.client.get(&url).send()?;
        into_json(response)
    }

    /// Logs in and answers with the authorized API bound to the
    /// confirmed identity.
    pub fn login(&self, credentials: &Credentials) -> Result<UserApi> {
        let url = format!("{}/auth/login", self.url);
        let response = self.client.post(&url).json(credentials).send()?;
        let user: User = into_json(response)?;
        Ok(UserApi::new(self.url.clone(), user))
    }
}
