use super::{authorize_admin, prelude::*};

/// Raw create request after transport decoding.
///
/// Numeric fields arrive pre-parsed. `None` means missing or
/// unparsable, which counts as a missing required field.
#[derive(Debug, Clone, Default)]
pub struct NewLocation {
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

pub fn create_new_location<R: LocationRepo>(
    repo: &R,
    role: Option<Role>,
    params: NewLocation,
    image_url: Option<String>,
) -> Result<Location> {
    authorize_admin(role)?;
    let location = prepare_new_location(params, image_url)?;
    repo.create_location(&location)?;
    Ok(location)
}

fn prepare_new_location(params: NewLocation, image_url: Option<String>) -> Result<Location> {
    let NewLocation {
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
    let date = date.map(Timestamp::from_millis).unwrap_or_else(Timestamp::now);
    // Without an uploaded image the record points at the placeholder.
    let images = vec![image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string())];
    Ok(Location {
        id: Id::new(),
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
        created_by,
        danger,
        time_category,
        tags,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn valid_params() -> NewLocation {
        NewLocation {
            title: "Mauerpark".into(),
            lat: Some(52.5414),
            lng: Some(13.4023),
            category: "Park".into(),
            created_by: "admin".into(),
            danger: Some(DangerLevel::AllGood),
            time_category: Some(TimeCategory::Permanent),
            ..Default::default()
        }
    }

    #[test]
    fn create_a_new_location() {
        let db = MockDb::default();
        let location =
            create_new_location(&db, Some(Role::Admin), valid_params(), None).unwrap();
        assert!(location.id.is_valid());
        assert_eq!(location.title, "Mauerpark");
        assert_eq!(location.images, vec![DEFAULT_IMAGE_URL.to_string()]);
        assert_eq!(db.count_locations().unwrap(), 1);
        assert_eq!(db.get_location(location.id.as_str()).unwrap(), location);
    }

    #[test]
    fn create_requires_an_admin() {
        let db = MockDb::default();
        for role in [None, Some(Role::NonAdmin)] {
            match create_new_location(&db, role, valid_params(), None)
                .err()
                .unwrap()
            {
                Error::AdminOnly => {
                    // ok
                }
                _ => panic!("invalid error"),
            }
        }
        assert_eq!(db.count_locations().unwrap(), 0);
    }

    #[test]
    fn create_with_missing_required_fields() {
        let db = MockDb::default();
        let missing_title = NewLocation {
            title: "".into(),
            ..valid_params()
        };
        let missing_creator = NewLocation {
            created_by: "".into(),
            ..valid_params()
        };
        let missing_danger = NewLocation {
            danger: None,
            ..valid_params()
        };
        let missing_time_category = NewLocation {
            time_category: None,
            ..valid_params()
        };
        let missing_lat = NewLocation {
            lat: None,
            ..valid_params()
        };
        let non_finite_lng = NewLocation {
            lng: Some(f64::NAN),
            ..valid_params()
        };
        for params in [
            missing_title,
            missing_creator,
            missing_danger,
            missing_time_category,
            missing_lat,
            non_finite_lng,
        ] {
            assert!(matches!(
                create_new_location(&db, Some(Role::Admin), params, None),
                Err(Error::MissingFields)
            ));
        }
        assert_eq!(db.count_locations().unwrap(), 0);
    }

    #[test]
    fn create_uses_the_uploaded_image() {
        let db = MockDb::default();
        let url = "https://img.example/abc.png".to_string();
        let location =
            create_new_location(&db, Some(Role::Admin), valid_params(), Some(url.clone()))
                .unwrap();
        assert_eq!(location.images, vec![url]);
    }

    #[test]
    fn create_defaults_the_date_to_now() {
        let db = MockDb::default();
        let before = Timestamp::now();
        let location =
            create_new_location(&db, Some(Role::Admin), valid_params(), None).unwrap();
        assert!(location.date >= before);
        assert!(location.date <= Timestamp::now());

        let dated = NewLocation {
            date: Some(1_700_000_000_000),
            ..valid_params()
        };
        let location = create_new_location(&db, Some(Role::Admin), dated, None).unwrap();
        assert_eq!(location.date.as_millis(), 1_700_000_000_000);
    }
}
