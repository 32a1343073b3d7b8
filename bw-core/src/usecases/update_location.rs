use super::{authorize_update, prelude::*};

/// Raw update request after transport decoding, same field rules as
/// [`NewLocation`](super::NewLocation).
///
/// `created_by` is required on the wire but never changes the stored
/// creator.
#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub title: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub date: Option<i64>,
    pub category: String,
    pub description: String,
    pub street: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub created_by: String,
    pub danger: Option<DangerLevel>,
    pub time_category: Option<TimeCategory>,
    pub tags: Vec<String>,
}

pub fn update_location<R: LocationRepo>(
    repo: &R,
    id: &str,
    username: Option<&str>,
    params: UpdateLocation,
    image_url: Option<String>,
) -> Result<Location> {
    let Some(username) = username else {
        return Err(Error::MissingUsername);
    };
    let existing = repo.get_location(id)?;
    authorize_update(&existing, username)?;
    let updated = prepare_updated_location(existing, params, image_url)?;
    repo.update_location(&updated)?;
    Ok(updated)
}

fn prepare_updated_location(
    existing: Location,
    params: UpdateLocation,
    image_url: Option<String>,
) -> Result<Location> {
    let UpdateLocation {
        title,
        lat,
        lng,
        date,
        category,
        description,
        street,
        zip,
        city,
        country,
        created_by,
        danger,
        time_category,
        tags,
    } = params;
    if title.is_empty() || created_by.is_empty() {
        return Err(Error::MissingFields);
    }
    let (Some(danger), Some(time_category)) = (danger, time_category) else {
        return Err(Error::MissingFields);
    };
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(Error::MissingFields);
    };
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::MissingFields)?;
    // The date is not inherited. A request without one means "now",
    // exactly as on create.
    let date = date.map(Timestamp::from_millis).unwrap_or_else(Timestamp::now);
    let images = match image_url {
        Some(url) => vec![url],
        None if existing.images.is_empty() => vec![DEFAULT_IMAGE_URL.to_string()],
        None => existing.images,
    };
    Ok(Location {
        id: existing.id,
        title,
        pos,
        date,
        category,
        description,
        address: Address {
            street,
            zip,
            city,
            country,
        },
        // The creator is set once and never changes.
        created_by: existing.created_by,
        danger,
        time_category,
        tags,
        images,
    })
}

#[cfg(test)]
mod tests {
    use bw_entities::builders::Builder;

    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use crate::repositories::Error as RepoError;

    fn db_with_location() -> MockDb {
        let db = MockDb::default();
        let location = Location::build()
            .id("loc-1")
            .title("Mauerpark")
            .pos(52.5414, 13.4023)
            .created_by("bob")
            .images(vec!["https://img.example/old.png"])
            .finish();
        db.locations.borrow_mut().push(location);
        db
    }

    fn valid_params() -> UpdateLocation {
        UpdateLocation {
            title: "Mauerpark (Nord)".into(),
            lat: Some(52.5450),
            lng: Some(13.4010),
            category: "Park".into(),
            created_by: "bob".into(),
            danger: Some(DangerLevel::Warning),
            time_category: Some(TimeCategory::Temporary),
            tags: vec!["park".into()],
            ..Default::default()
        }
    }

    #[test]
    fn update_by_the_creator() {
        let db = db_with_location();
        let updated =
            update_location(&db, "loc-1", Some("bob"), valid_params(), None).unwrap();
        assert_eq!(updated.title, "Mauerpark (Nord)");
        assert_eq!(updated.danger, DangerLevel::Warning);
        assert_eq!(db.get_location("loc-1").unwrap(), updated);
    }

    #[test]
    fn update_requires_a_username() {
        let db = db_with_location();
        match update_location(&db, "loc-1", None, valid_params(), None)
            .err()
            .unwrap()
        {
            Error::MissingUsername => {
                // ok
            }
            _ => panic!("invalid error"),
        }
    }

    #[test]
    fn update_by_somebody_else_is_rejected() {
        let db = db_with_location();
        assert!(matches!(
            update_location(&db, "loc-1", Some("eve"), valid_params(), None),
            Err(Error::NotCreatorUpdate)
        ));
        assert_eq!(db.get_location("loc-1").unwrap().title, "Mauerpark");
    }

    #[test]
    fn update_of_a_missing_location() {
        let db = db_with_location();
        assert!(matches!(
            update_location(&db, "loc-2", Some("bob"), valid_params(), None),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn update_never_changes_the_creator() {
        let db = db_with_location();
        let params = UpdateLocation {
            created_by: "eve".into(),
            ..valid_params()
        };
        let updated = update_location(&db, "loc-1", Some("bob"), params, None).unwrap();
        assert_eq!(updated.created_by, "bob");
    }

    #[test]
    fn update_keeps_the_images_without_a_new_upload() {
        let db = db_with_location();
        let updated =
            update_location(&db, "loc-1", Some("bob"), valid_params(), None).unwrap();
        assert_eq!(updated.images, vec!["https://img.example/old.png".to_string()]);
    }

    #[test]
    fn update_replaces_the_images_with_a_new_upload() {
        let db = db_with_location();
        let updated = update_location(
            &db,
            "loc-1",
            Some("bob"),
            valid_params(),
            Some("https://img.example/new.png".into()),
        )
        .unwrap();
        assert_eq!(updated.images, vec!["https://img.example/new.png".to_string()]);
    }

    #[test]
    fn update_falls_back_to_the_placeholder_image() {
        let db = MockDb::default();
        let location = Location::build()
            .id("loc-1")
            .created_by("bob")
            .images(Vec::<String>::new())
            .finish();
        db.locations.borrow_mut().push(location);
        let updated =
            update_location(&db, "loc-1", Some("bob"), valid_params(), None).unwrap();
        assert_eq!(updated.images, vec![DEFAULT_IMAGE_URL.to_string()]);
    }

    #[test]
    fn update_with_missing_required_fields() {
        let db = db_with_location();
        let params = UpdateLocation {
            danger: None,
            ..valid_params()
        };
        assert!(matches!(
            update_location(&db, "loc-1", Some("bob"), params, None),
            Err(Error::MissingFields)
        ));
    }
}
