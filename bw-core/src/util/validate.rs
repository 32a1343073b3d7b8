use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::entities::MapPoint;

lazy_static! {
    // Postcodes of the Berlin city area (10115-14199).
    static ref BERLIN_ZIP_CODE: Regex =
        Regex::new(r"^(10[1-9]\d{2}|1[1-3]\d{3}|14[0-1]\d{2})$").unwrap();
    // Latin letters, including German umlauts and sharp s.
    static ref CONTAINS_LETTER: Regex = Regex::new("[a-zA-ZäöüÄÖÜß]").unwrap();
}

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Street,
    Zip,
    City,
    Category,
    Description,
    Danger,
    TimeCategory,
}

impl Field {
    /// The label under which the field is reported to users.
    pub const fn label(self) -> &'static str {
        use Field::*;
        match self {
            Title => "Titel",
            Street => "Straße",
            Zip => "PLZ",
            City => "Stadt",
            Category => "Kategorie",
            Description => "Beschreibung",
            Danger => "Gefahr",
            TimeCategory => "Zeitkategorie",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single failed check on a form field.
///
/// The display strings are user-facing and shown verbatim next to the
/// offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldInvalidation {
    #[error("{0} ist erforderlich")]
    Required(Field),
    #[error("{0} muss mindestens einen Buchstaben enthalten")]
    NoLetter(Field),
    #[error("Bitte geben Sie eine gültige Berliner PLZ ein (10115-14199)")]
    ZipOutOfRange,
    #[error("Ungültige Koordinaten")]
    InvalidCoordinates,
}

impl FieldInvalidation {
    /// The field the failed check belongs to. Coordinate failures span
    /// the latitude and longitude inputs and carry no single field.
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::Required(field) | Self::NoLetter(field) => Some(*field),
            Self::ZipOutOfRange => Some(Field::Zip),
            Self::InvalidCoordinates => None,
        }
    }
}

/// Checks a free-text field: non-blank and at least one letter.
pub fn validate_text_field(field: Field, value: &str) -> Result<(), FieldInvalidation> {
    if value.trim().is_empty() {
        return Err(FieldInvalidation::Required(field));
    }
    if !CONTAINS_LETTER.is_match(value) {
        return Err(FieldInvalidation::NoLetter(field));
    }
    Ok(())
}

/// Checks a zip code against the Berlin city area.
pub fn validate_zip(value: &str) -> Result<(), FieldInvalidation> {
    if value.trim().is_empty() {
        return Err(FieldInvalidation::Required(Field::Zip));
    }
    if !BERLIN_ZIP_CODE.is_match(value) {
        return Err(FieldInvalidation::ZipOutOfRange);
    }
    Ok(())
}

/// Parses a latitude/longitude input pair into a map point.
pub fn parse_coordinates(lat: &str, lng: &str) -> Result<MapPoint, FieldInvalidation> {
    let lat = lat
        .trim()
        .parse()
        .map_err(|_| FieldInvalidation::InvalidCoordinates)?;
    let lng = lng
        .trim()
        .parse()
        .map_err(|_| FieldInvalidation::InvalidCoordinates)?;
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(FieldInvalidation::InvalidCoordinates)
}
