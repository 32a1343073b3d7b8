//! # bw-boundary
//!
//! Serializable, anemic data structures for accessing the Berlin Wandel API
//! in a type-safe manner.
//!
//! The field names and string representations match the wire format of the
//! REST API, including the `_id` spelling inherited from the original
//! document database.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use conv::LocationConvError;

/// A location record as served by the REST API.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    #[serde(rename = "_id")]
    pub id            : String,
    pub title         : String,
    pub latitude      : f64,
    pub longitude     : f64,
    pub date          : i64,
    #[serde(default)]
    pub category      : String,
    #[serde(default)]
    pub description   : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip           : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city          : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country       : Option<String>,
    pub user          : String,
    pub danger        : DangerLevel,
    pub time_category : TimeCategory,
    #[serde(default)]
    pub tags          : Vec<TagItem>,
    #[serde(default)]
    pub images        : Vec<ImageItem>,
}

/// Wrapper for a single tag, the wire format is `{"tag": "..."}`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct TagItem {
    pub tag: String,
}

/// Wrapper for a single image URL, the wire format is `{"image": "..."}`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ImageItem {
    pub image: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum DangerLevel {
    #[serde(rename = "All good!")]
    AllGood,
    Warning,
    High,
    Unknown,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "kebab-case")]
pub enum TimeCategory {
    Permanent,
    SemiPermanent,
    Temporary,
}

/// Login request body.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The public account data returned on login.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub username: String,
    pub role: UserRole,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
pub enum UserRole {
    #[serde(rename = "non-admin")]
    NonAdmin,
    #[serde(rename = "admin")]
    Admin,
}

/// Response body of a successful delete request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Success {
    pub success: bool,
}

/// Error response body of the REST API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[cfg_attr(
    feature = "extra-derive",
    derive(thiserror::Error),
    error("{error}")
)]
pub struct Error {
    pub error: String,
}
