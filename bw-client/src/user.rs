use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::blocking::multipart;

use bw_boundary::{Location, Success, User, UserRole};
use bw_core::entities::{DangerLevel, Role, TimeCategory};

use crate::{into_json, Error, Result};

pub const ROLE_HEADER: &str = "x-role";
pub const USERNAME_HEADER: &str = "x-username";

/// Payload of the create and update endpoints, as assembled by the
/// form workflow.
///
/// Address parts travel as plain strings; blanks are sent as empty
/// parts, the server stores them as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDraft {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Epoch milliseconds. `None` lets the server stamp "now".
    pub date: Option<i64>,
    pub category: String,
    pub description: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub danger: DangerLevel,
    pub time_category: TimeCategory,
    pub tags: Vec<String>,
}

/// An image file attached to a create or update request.
///
/// The bytes are forwarded unmodified; the backend owns all image
/// processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    fn into_part(self) -> multipart::Part {
        multipart::Part::bytes(self.bytes).file_name(self.file_name)
    }
}

/// Authorized Berlin Wandel API, bound to a logged in identity.
///
/// The identity travels with every mutating request in the `x-role`
/// and `x-username` headers; the server decides what it allows.
#[derive(Debug, Clone)]
pub struct UserApi {
    url: String,
    user: User,
    client: reqwest::blocking::Client,
}

impl UserApi {
    #[must_use]
    pub fn new(url: String, user: User) -> Self {
        Self {
            url,
            user,
            client: reqwest::blocking::Client::new(),
        }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    fn role_header_value(&self) -> &'static str {
        Role::from(self.user.role).as_str()
    }

    fn location_form(&self, draft: &LocationDraft, image: Option<ImageUpload>) -> multipart::Form {
        let LocationDraft {
            title,
            latitude,
            longitude,
            date,
            category,
            description,
            street,
            zip,
            city,
            country,
            danger,
            time_category,
            tags,
        } = draft;
        let mut form = multipart::Form::new()
            .text("title", title.clone())
            .text("latitude", latitude.to_string())
            .text("longitude", longitude.to_string())
            .text("category", category.clone())
            .text("description", description.clone())
            .text("street", street.clone())
            .text("zip", zip.clone())
            .text("city", city.clone())
            .text("country", country.clone())
            .text("user", self.user.username.clone())
            .text("danger", danger.to_string())
            .text("time_category", time_category.to_string())
            .text("tags", tags.join(","));
        if let Some(date) = date {
            form = form.text("date", date.to_string());
        }
        if let Some(image) = image {
            form = form.part("image", image.into_part());
        }
        form
    }

    pub fn create_location(
        &self,
        draft: &LocationDraft,
        image: Option<ImageUpload>,
    ) -> Result<Location> {
        let url = format!("{}/locations", self.url);
        let response = self
            .client
            .post(&url)
            .header(ROLE_HEADER, self.role_header_value())
            .multipart(self.location_form(draft, image))
            .send()?;
        into_json(response).map_err(|err| match err {
            Error::Fetch(message) => Error::CreateFailed(message),
            err => err,
        })
    }

    pub fn update_location(
        &self,
        id: &str,
        draft: &LocationDraft,
        image: Option<ImageUpload>,
    ) -> Result<Location> {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        let url = format!("{}/locations/{encoded_id}", self.url);
        let response = self
            .client
            .put(&url)
            .header(USERNAME_HEADER, self.user.username.clone())
            .multipart(self.location_form(draft, image))
            .send()?;
        into_json(response)
    }

    pub fn delete_location(&self, id: &str) -> Result<Success> {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        let url = format!("{}/locations/{encoded_id}", self.url);
        let response = self
            .client
            .delete(&url)
            .header(USERNAME_HEADER, self.user.username.clone())
            .send()?;
        into_json(response)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }
}
