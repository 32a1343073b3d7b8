use std::str::FromStr;

use bw_core::entities::split_tags;
use rocket::{form::Form, fs::TempFile, FromForm};

use super::*;

// 500 bodies. The cause never leaves the server.
const FETCH_ALL_FAILED: &str = "Failed to fetch locations";
const FETCH_ONE_FAILED: &str = "Failed to fetch location";
const CREATE_FAILED: &str = "Failed to create location";
const UPDATE_FAILED: &str = "Failed to update location";
const DELETE_FAILED: &str = "Failed to delete location";

/// Multipart payload of the create and update endpoints.
///
/// Every scalar arrives as text. Values that do not parse are treated
/// as missing, so the usecase rejects the request where one of them
/// is required.
#[derive(FromForm)]
pub struct LocationForm<'r> {
    title: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    date: Option<String>,
    category: Option<String>,
    description: Option<String>,
    street: Option<String>,
    zip: Option<String>,
    city: Option<String>,
    country: Option<String>,
    user: Option<String>,
    danger: Option<String>,
    time_category: Option<String>,
    tags: Option<String>,
    image: Option<TempFile<'r>>,
}

impl LocationForm<'_> {
    fn into_new_location(self) -> usecases::NewLocation {
        let LocationForm {
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
            image: _,
        } = self;
        usecases::NewLocation {
            title: title.unwrap_or_default(),
            lat: parse_trimmed(latitude.as_deref()),
            lng: parse_trimmed(longitude.as_deref()),
            date: parse_trimmed(date.as_deref()),
            category: category.unwrap_or_default(),
            description: description.unwrap_or_default(),
            street,
            zip,
            city,
            country,
            created_by: user.unwrap_or_default(),
            danger: parse_enum(danger.as_deref()),
            time_category: parse_enum(time_category.as_deref()),
            tags: tags.as_deref().map(split_tags).unwrap_or_default(),
        }
    }

    fn into_update_location(self) -> usecases::UpdateLocation {
        let LocationForm {
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
            image: _,
        } = self;
        usecases::UpdateLocation {
            title: title.unwrap_or_default(),
            lat: parse_trimmed(latitude.as_deref()),
            lng: parse_trimmed(longitude.as_deref()),
            date: parse_trimmed(date.as_deref()),
            category: category.unwrap_or_default(),
            description: description.unwrap_or_default(),
            street,
            zip,
            city,
            country,
            created_by: user.unwrap_or_default(),
            danger: parse_enum(danger.as_deref()),
            time_category: parse_enum(time_category.as_deref()),
            tags: tags.as_deref().map(split_tags).unwrap_or_default(),
        }
    }
}

fn parse_trimmed<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn parse_enum<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

/// Pushes an uploaded image to the hosting service.
///
/// Answers `None` without an upload, for an empty upload and on any
/// hosting failure. The stored record then falls back to its default
/// or keeps what it has.
async fn uploaded_image_url(image_host: &ImageHost, file: Option<&TempFile<'_>>) -> Option<String> {
    let file = file?;
    if file.len() == 0 {
        return None;
    }
    let file_name = file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_owned())
        .unwrap_or_else(|| "upload".to_string());
    let bytes = match file.path() {
        Some(path) => match rocket::tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Failed to read uploaded image: {err}");
                return None;
            }
        },
        // In-memory buffering only happens for plain value fields.
        None => return None,
    };
    let host = image_host.clone();
    let upload = rocket::tokio::task::spawn_blocking(move || host.upload_image(&file_name, &bytes));
    match upload.await {
        Ok(Ok(url)) => Some(url),
        Ok(Err(err)) => {
            warn!("Image upload failed: {err}");
            None
        }
        Err(err) => {
            warn!("Image upload panicked: {err}");
            None
        }
    }
}

#[get("/locations")]
pub fn get_locations(db: jfs::Storage) -> Result<Vec<json::Location>> {
    let locations =
        usecases::all_locations(&*db).map_err(|err| ApiError::new(err, FETCH_ALL_FAILED))?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[get("/locations/<id>")]
pub fn get_location(db: jfs::Storage, id: String) -> Result<json::Location> {
    let location =
        usecases::get_location(&*db, &id).map_err(|err| ApiError::new(err, FETCH_ONE_FAILED))?;
    Ok(Json(location.into()))
}

#[post("/locations", format = "multipart/form-data", data = "<location>")]
pub async fn post_location(
    db: jfs::Storage,
    identity: ClientIdentity,
    image_host: &State<ImageHost>,
    location: Form<LocationForm<'_>>,
) -> CreatedResult<json::Location> {
    // Checked before the image touches the hosting service. The
    // usecase checks again when it stores the record.
    usecases::authorize_admin(identity.role()).map_err(|err| ApiError::new(err, CREATE_FAILED))?;

    let form = location.into_inner();
    let image_url = uploaded_image_url(image_host, form.image.as_ref()).await;
    let params = form.into_new_location();
    let created = usecases::create_new_location(&*db, identity.role(), params, image_url)
        .map_err(|err| ApiError::new(err, CREATE_FAILED))?;
    Ok((Status::Created, Json(created.into())))
}

#[put("/locations/<id>", format = "multipart/form-data", data = "<location>")]
pub async fn put_location(
    db: jfs::Storage,
    identity: ClientIdentity,
    image_host: &State<ImageHost>,
    id: String,
    location: Form<LocationForm<'_>>,
) -> Result<json::Location> {
    // Checked before the image touches the hosting service. The
    // usecase checks again when it stores the record.
    let username = identity
        .username()
        .ok_or_else(|| ApiError::new(usecases::Error::MissingUsername, UPDATE_FAILED))?;
    let existing =
        usecases::get_location(&*db, &id).map_err(|err| ApiError::new(err, UPDATE_FAILED))?;
    usecases::authorize_update(&existing, username)
        .map_err(|err| ApiError::new(err, UPDATE_FAILED))?;

    let form = location.into_inner();
    let image_url = uploaded_image_url(image_host, form.image.as_ref()).await;
    let params = form.into_update_location();
    let updated = usecases::update_location(&*db, &id, identity.username(), params, image_url)
        .map_err(|err| ApiError::new(err, UPDATE_FAILED))?;
    Ok(Json(updated.into()))
}

#[delete("/locations/<id>")]
pub fn delete_location(db: jfs::Storage, identity: ClientIdentity, id: String) -> Result<json::Success> {
    usecases::delete_location(&*db, &id, identity.username())
        .map_err(|err| ApiError::new(err, DELETE_FAILED))?;
    Ok(Json(json::Success { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::entities::{DangerLevel, TimeCategory};

    #[test]
    fn numbers_parse_trimmed_and_strict() {
        assert_eq!(parse_trimmed::<f64>(Some(" 52.5 ")), Some(52.5));
        assert_eq!(parse_trimmed::<f64>(Some("52.5abc")), None);
        assert_eq!(parse_trimmed::<i64>(Some("1700000000000")), Some(1_700_000_000_000));
        assert_eq!(parse_trimmed::<i64>(None), None);
    }

    #[test]
    fn enums_parse_their_wire_strings() {
        assert_eq!(
            parse_enum::<DangerLevel>(Some("All good!")),
            Some(DangerLevel::AllGood)
        );
        assert_eq!(
            parse_enum::<TimeCategory>(Some("semi-permanent")),
            Some(TimeCategory::SemiPermanent)
        );
        assert_eq!(parse_enum::<DangerLevel>(Some("catastrophic")), None);
    }
}
