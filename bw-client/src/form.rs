use itertools::Itertools;
use thiserror::Error;

use bw_boundary::Location;
use bw_core::{
    entities::{split_tags, Address, DangerLevel, TimeCategory},
    gateways::geocode::{GeoCodingGateway, GeocodeError},
    util::validate::{self, Field, FieldInvalidation},
};

use crate::{ImageUpload, LocationDraft, UserApi};

const DEFAULT_COUNTRY: &str = "Deutschland";

/// Why a submit attempt did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// One or more fields failed validation.
    #[error("Bitte korrigieren Sie die Validierungsfehler")]
    Validation(Vec<FieldInvalidation>),

    /// The implicit address lookup failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// The server rejected the record, or the request never made it.
    #[error("{0}")]
    Api(#[from] crate::Error),
}

/// Create/edit form for a location.
///
/// Fields hold the raw user input. [`validate_field`] checks a single
/// field while it is being edited, [`submit`] runs the whole workflow:
/// implicit geocoding, full validation, draft assembly and the gateway
/// call.
///
/// [`validate_field`]: Self::validate_field
/// [`submit`]: Self::submit
#[derive(Debug, Clone, PartialEq)]
pub struct LocationForm {
    pub title: String,
    pub latitude: String,
    pub longitude: String,
    pub category: String,
    pub description: String,
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub danger: Option<DangerLevel>,
    pub time_category: Option<TimeCategory>,
    /// Comma-separated, split on submit.
    pub tags: String,
    edited: Option<EditedLocation>,
}

#[derive(Debug, Clone, PartialEq)]
struct EditedLocation {
    id: String,
    date: i64,
}

impl LocationForm {
    /// An empty create form, with the country prefilled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            category: String::new(),
            description: String::new(),
            street: String::new(),
            zip: String::new(),
            city: String::new(),
            country: DEFAULT_COUNTRY.to_owned(),
            danger: None,
            time_category: None,
            tags: String::new(),
            edited: None,
        }
    }

    /// A form prefilled from an existing record for editing.
    ///
    /// Submitting it updates the record in place and keeps its date.
    #[must_use]
    pub fn edit(location: &Location) -> Self {
        let tags = location.tags.iter().map(|t| t.tag.as_str()).join(", ");
        Self {
            title: location.title.clone(),
            latitude: location.latitude.to_string(),
            longitude: location.longitude.to_string(),
            category: location.category.clone(),
            description: location.description.clone(),
            street: location.street.clone().unwrap_or_default(),
            zip: location.zip.clone().unwrap_or_default(),
            city: location.city.clone().unwrap_or_default(),
            country: location.country.clone().unwrap_or_default(),
            danger: Some(location.danger.into()),
            time_category: Some(location.time_category.into()),
            tags,
            edited: Some(EditedLocation {
                id: location.id.clone(),
                date: location.date,
            }),
        }
    }

    /// Checks a single field, for incremental validation while the
    /// user is typing.
    pub fn validate_field(&self, field: Field) -> Result<(), FieldInvalidation> {
        match field {
            Field::Title => validate::validate_text_field(field, &self.title),
            Field::Street => validate::validate_text_field(field, &self.street),
            Field::City => validate::validate_text_field(field, &self.city),
            Field::Category => validate::validate_text_field(field, &self.category),
            Field::Description => validate::validate_text_field(field, &self.description),
            Field::Zip => validate::validate_zip(&self.zip),
            Field::Danger => match self.danger {
                Some(_) => Ok(()),
                None => Err(FieldInvalidation::Required(Field::Danger)),
            },
            Field::TimeCategory => match self.time_category {
                Some(_) => Ok(()),
                None => Err(FieldInvalidation::Required(Field::TimeCategory)),
            },
        }
    }

    /// Checks every field, collecting all failures instead of
    /// stopping at the first one.
    pub fn validate_all(&self) -> Vec<FieldInvalidation> {
        let fields = [
            Field::Title,
            Field::Street,
            Field::Zip,
            Field::City,
            Field::Category,
            Field::Description,
            Field::Danger,
            Field::TimeCategory,
        ];
        let mut invalidations: Vec<_> = fields
            .into_iter()
            .filter_map(|field| self.validate_field(field).err())
            .collect();
        if let Err(invalidation) = validate::parse_coordinates(&self.latitude, &self.longitude) {
            invalidations.push(invalidation);
        }
        invalidations
    }

    /// Fills the coordinate inputs from the address inputs.
    pub fn resolve_coordinates<G: GeoCodingGateway>(&mut self, geo: &G) -> Result<(), GeocodeError> {
        let pos = geo.resolve_coordinates(&self.address())?;
        self.latitude = pos.lat().to_string();
        self.longitude = pos.lng().to_string();
        Ok(())
    }

    /// Fills the address inputs from the coordinate inputs. Parts the
    /// lookup cannot resolve keep their current values.
    pub fn resolve_address<G: GeoCodingGateway>(&mut self, geo: &G) -> Result<(), GeocodeError> {
        let pos = validate::parse_coordinates(&self.latitude, &self.longitude)
            .map_err(|_| GeocodeError::MissingCoordinates)?;
        let resolved = geo.resolve_address(pos)?.filled_with(&self.address());
        let Address {
            street,
            zip,
            city,
            country,
        } = resolved;
        self.street = street.unwrap_or_default();
        self.zip = zip.unwrap_or_default();
        self.city = city.unwrap_or_default();
        self.country = country.unwrap_or_default();
        Ok(())
    }

    /// Runs the submit-time pipeline up to the gateway call: implicit
    /// geocoding, full validation and draft assembly.
    ///
    /// Coordinates are only resolved implicitly when both inputs are
    /// blank and some address part is present; values the user typed
    /// are never overwritten.
    pub fn prepare_submit<G: GeoCodingGateway>(
        &mut self,
        geo: &G,
    ) -> Result<LocationDraft, SubmitError> {
        if self.latitude.trim().is_empty()
            && self.longitude.trim().is_empty()
            && !self.address().is_empty()
        {
            self.resolve_coordinates(geo)?;
        }

        let invalidations = self.validate_all();
        if !invalidations.is_empty() {
            return Err(SubmitError::Validation(invalidations));
        }
        let pos = validate::parse_coordinates(&self.latitude, &self.longitude)
            .map_err(|invalidation| SubmitError::Validation(vec![invalidation]))?;
        let (Some(danger), Some(time_category)) = (self.danger, self.time_category) else {
            return Err(SubmitError::Validation(vec![
                FieldInvalidation::Required(Field::Danger),
                FieldInvalidation::Required(Field::TimeCategory),
            ]));
        };

        Ok(LocationDraft {
            title: self.title.clone(),
            latitude: pos.lat(),
            longitude: pos.lng(),
            date: self.edited.as_ref().map(|edited| edited.date),
            category: self.category.clone(),
            description: self.description.clone(),
            street: self.street.clone(),
            zip: self.zip.clone(),
            city: self.city.clone(),
            country: self.country_or_default(),
            danger,
            time_category,
            tags: split_tags(&self.tags),
        })
    }

    /// Submits the form: create for a fresh form, update for one built
    /// with [`edit`](Self::edit).
    pub fn submit<G: GeoCodingGateway>(
        &mut self,
        api: &UserApi,
        geo: &G,
        image: Option<ImageUpload>,
    ) -> Result<Location, SubmitError> {
        let draft = self.prepare_submit(geo)?;
        let submitted = match &self.edited {
            Some(edited) => api.update_location(&edited.id, &draft, image),
            None => api.create_location(&draft, image),
        };
        submitted.map_err(Into::into)
    }

    fn address(&self) -> Address {
        Address {
            street: non_blank(&self.street),
            zip: non_blank(&self.zip),
            city: non_blank(&self.city),
            country: non_blank(&self.country),
        }
    }

    fn country_or_default(&self) -> String {
        if self.country.trim().is_empty() {
            DEFAULT_COUNTRY.to_owned()
        } else {
            self.country.clone()
        }
    }
}

impl Default for LocationForm {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
