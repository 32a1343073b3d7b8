use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use bw_core::{entities as e, repositories::Error};

/// On-disk JSON document of a location record.
///
/// The document key is the record id and is not repeated inside the
/// document. Enum fields are stored as their wire strings so that the
/// files stay readable and greppable.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationDoc {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub date: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub user: String,
    pub danger: String,
    pub time_category: String,
    #[serde(default)]
    pub tags: Vec<TagDoc>,
    #[serde(default)]
    pub images: Vec<ImageDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagDoc {
    pub tag: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageDoc {
    pub image: String,
}

impl From<&e::Location> for LocationDoc {
    fn from(from: &e::Location) -> Self {
        Self {
            title: from.title.clone(),
            latitude: from.pos.lat(),
            longitude: from.pos.lng(),
            date: from.date.as_millis(),
            category: from.category.clone(),
            description: from.description.clone(),
            street: from.address.street.clone(),
            zip: from.address.zip.clone(),
            city: from.address.city.clone(),
            country: from.address.country.clone(),
            user: from.created_by.clone(),
            danger: from.danger.as_str().to_owned(),
            time_category: from.time_category.as_str().to_owned(),
            tags: from
                .tags
                .iter()
                .map(|tag| TagDoc { tag: tag.clone() })
                .collect(),
            images: from
                .images
                .iter()
                .map(|image| ImageDoc {
                    image: image.clone(),
                })
                .collect(),
        }
    }
}

impl LocationDoc {
    pub fn into_location(self, id: e::Id) -> Result<e::Location, Error> {
        let Self {
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
            user,
            danger,
            time_category,
            tags,
            images,
        } = self;
        let pos = e::MapPoint::try_from_lat_lng_deg(latitude, longitude).ok_or_else(|| {
            Error::Other(anyhow!("Non-finite coordinates in stored location {id}"))
        })?;
        let danger = danger
            .parse()
            .map_err(|_| Error::Other(anyhow!("Unknown danger level {danger:?} in {id}")))?;
        let time_category = time_category.parse().map_err(|_| {
            Error::Other(anyhow!("Unknown time category {time_category:?} in {id}"))
        })?;
        Ok(e::Location {
            id,
            title,
            pos,
            date: e::Timestamp::from_millis(date),
            category,
            description,
            address: e::Address {
                street,
                zip,
                city,
                country,
            },
            created_by: user,
            danger,
            time_category,
            tags: tags.into_iter().map(|t| t.tag).collect(),
            images: images.into_iter().map(|i| i.image).collect(),
        })
    }
}

/// On-disk JSON document of a user record, keyed by username.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDoc {
    pub password: String,
    pub role: String,
    pub name: String,
}

impl From<&e::User> for UserDoc {
    fn from(from: &e::User) -> Self {
        Self {
            password: from.password.clone(),
            role: from.role.as_str().to_owned(),
            name: from.name.clone(),
        }
    }
}

impl UserDoc {
    pub fn into_user(self, username: String) -> Result<e::User, Error> {
        let Self {
            password,
            role,
            name,
        } = self;
        let role = role
            .parse()
            .map_err(|_| Error::Other(anyhow!("Unknown role {role:?} of user {username}")))?;
        Ok(e::User {
            username,
            password,
            role,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use bw_entities::builders::Builder;

    use super::*;

    #[test]
    fn location_documents_use_wire_strings() {
        let location = e::Location::build()
            .id("loc-1")
            .title("Mauerpark")
            .pos(52.5414, 13.4023)
            .danger(e::DangerLevel::AllGood)
            .time_category(e::TimeCategory::SemiPermanent)
            .tags(vec!["park"])
            .finish();
        let doc = LocationDoc::from(&location);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["danger"], "All good!");
        assert_eq!(json["time_category"], "semi-permanent");
        assert_eq!(json["tags"][0]["tag"], "park");
        assert!(json.get("street").is_none());

        let restored = doc.into_location("loc-1".into()).unwrap();
        assert_eq!(restored, location);
    }

    #[test]
    fn unknown_enum_strings_are_reported() {
        let doc = LocationDoc {
            danger: "harmless".into(),
            ..LocationDoc::from(&e::Location::build().finish())
        };
        assert!(doc.into_location("loc-1".into()).is_err());
    }
}
