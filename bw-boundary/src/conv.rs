use bw_entities as e;

use super::*;

/// Conversion failure of a wire record into a domain entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationConvError {
    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            NonAdmin => UserRole::NonAdmin,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::NonAdmin => NonAdmin,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::danger::DangerLevel> for DangerLevel {
    fn from(from: e::danger::DangerLevel) -> Self {
        use e::danger::DangerLevel::*;
        match from {
            AllGood => DangerLevel::AllGood,
            Warning => DangerLevel::Warning,
            High => DangerLevel::High,
            Unknown => DangerLevel::Unknown,
        }
    }
}

impl From<DangerLevel> for e::danger::DangerLevel {
    fn from(from: DangerLevel) -> Self {
        use e::danger::DangerLevel::*;
        match from {
            DangerLevel::AllGood => AllGood,
            DangerLevel::Warning => Warning,
            DangerLevel::High => High,
            DangerLevel::Unknown => Unknown,
        }
    }
}

impl From<e::time_category::TimeCategory> for TimeCategory {
    fn from(from: e::time_category::TimeCategory) -> Self {
        use e::time_category::TimeCategory::*;
        match from {
            Permanent => TimeCategory::Permanent,
            SemiPermanent => TimeCategory::SemiPermanent,
            Temporary => TimeCategory::Temporary,
        }
    }
}

impl From<TimeCategory> for e::time_category::TimeCategory {
    fn from(from: TimeCategory) -> Self {
        use e::time_category::TimeCategory::*;
        match from {
            TimeCategory::Permanent => Permanent,
            TimeCategory::SemiPermanent => SemiPermanent,
            TimeCategory::Temporary => Temporary,
        }
    }
}

impl From<e::user::Identity> for User {
    fn from(from: e::user::Identity) -> Self {
        let e::user::Identity {
            username,
            role,
            name,
        } = from;
        Self {
            username,
            role: role.into(),
            name,
        }
    }
}

impl From<User> for e::user::Identity {
    fn from(from: User) -> Self {
        let User {
            username,
            role,
            name,
        } = from;
        Self {
            username,
            role: role.into(),
            name,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        e::user::Identity::from(from).into()
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            title,
            pos,
            date,
            category,
            description,
            address,
            created_by,
            danger,
            time_category,
            tags,
            images,
        } = from;
        let e::address::Address {
            street,
            zip,
            city,
            country,
        } = address;
        Self {
            id: id.into(),
            title,
            latitude: pos.lat(),
            longitude: pos.lng(),
            date: date.as_millis(),
            category,
            description,
            street,
            zip,
            city,
            country,
            user: created_by,
            danger: danger.into(),
            time_category: time_category.into(),
            tags: tags.into_iter().map(|tag| TagItem { tag }).collect(),
            images: images.into_iter().map(|image| ImageItem { image }).collect(),
        }
    }
}

impl TryFrom<Location> for e::location::Location {
    type Error = LocationConvError;

    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            id,
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
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(latitude, longitude)
            .ok_or(LocationConvError::InvalidCoordinates)?;
        Ok(Self {
            id: id.into(),
            title,
            pos,
            date: e::time::Timestamp::from_millis(date),
            category,
            description,
            address: e::address::Address {
                street,
                zip,
                city,
                country,
            },
            created_by: user,
            danger: danger.into(),
            time_category: time_category.into(),
            tags: tags.into_iter().map(|t| t.tag).collect(),
            images: images.into_iter().map(|i| i.image).collect(),
        })
    }
}
